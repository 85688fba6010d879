use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, TrackPageViewModel};
use crate::presentation::renderers::tui::App;
use crate::presentation::TuiRenderer;
use anyhow::Result;
use devpath_engine::{Page, Route};
use is_terminal::IsTerminal;
use std::time::Instant;

pub fn handle(ctx: HandlerContext, path: &str) -> Result<()> {
    let route = Route::parse(path);

    // Auto-select TUI mode if stdout is a TTY
    let use_tui = std::io::stdout().is_terminal() && ctx.format.is_plain();
    if !use_tui {
        tracing::debug!(path = %route, "stdout is not a terminal; printing the page");
        return print_page(&ctx, &route);
    }

    let app = App::new(ctx.catalog, ctx.timing, route, Instant::now());
    TuiRenderer::new().run(app)
}

/// Non-interactive rendering of the page a route resolves to
fn print_page(ctx: &HandlerContext, route: &Route) -> Result<()> {
    match route.resolve(&ctx.catalog) {
        Page::Home | Page::Catalog { .. } => {
            ctx.render(presenters::present_catalog_list(&ctx.catalog, None))
        }
        Page::Detail(track) => ctx.render(CommandResultViewModel::new(TrackPageViewModel::Found(
            presenters::present_track_detail(track),
        ))),
        Page::NotFound(missing) => ctx.render(CommandResultViewModel::new(
            TrackPageViewModel::NotFound(presenters::present_not_found(&missing)),
        )),
    }
}
