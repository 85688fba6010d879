use devpath_engine::{Page, Route};

use super::track::present_not_found;
use crate::presentation::view_models::{CommandResultViewModel, PageViewModel, RouteViewModel};

pub fn present_page(page: &Page<'_>) -> PageViewModel {
    match page {
        Page::Home => PageViewModel::Home,
        Page::Catalog { selected } => PageViewModel::Catalog {
            selected: selected.map(|track| track.id.to_string()),
        },
        Page::Detail(track) => PageViewModel::Detail {
            track_id: track.id.to_string(),
        },
        Page::NotFound(missing) => PageViewModel::NotFound(present_not_found(missing)),
    }
}

pub fn present_route(
    requested: &str,
    route: &Route,
    page: &Page<'_>,
) -> CommandResultViewModel<RouteViewModel> {
    CommandResultViewModel::new(RouteViewModel {
        requested: requested.to_string(),
        canonical: route.to_string(),
        page: present_page(page),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::MissingKind;
    use devpath_engine::Catalog;

    fn resolve(path: &str) -> RouteViewModel {
        let catalog = Catalog::builtin();
        let route = Route::parse(path);
        let page = route.resolve(&catalog);
        present_route(path, &route, &page).content
    }

    #[test]
    fn test_known_track_resolves_to_detail() {
        let vm = resolve("/roadmap/devops");
        assert_eq!(
            vm.page,
            PageViewModel::Detail {
                track_id: "devops".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_preselection_is_dropped() {
        let vm = resolve("/roadmap?selected=nope");
        assert_eq!(vm.page, PageViewModel::Catalog { selected: None });
    }

    #[test]
    fn test_sections_fall_back_to_not_found() {
        let vm = resolve("/blog");
        let PageViewModel::NotFound(missing) = vm.page else {
            panic!("sections have no page of their own");
        };
        assert_eq!(missing.kind, MissingKind::Page);
        assert_eq!(missing.requested, "/blog");
    }
}
