use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use devpath_engine::Route;

pub fn handle(ctx: &HandlerContext, path: &str) -> Result<()> {
    let route = Route::parse(path);
    let page = route.resolve(&ctx.catalog);
    ctx.render(presenters::present_route(path, &route, &page))
}
