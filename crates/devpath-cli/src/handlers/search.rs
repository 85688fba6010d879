use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &HandlerContext, query: &str) -> Result<()> {
    let hits = devpath_engine::search(&ctx.catalog, query);
    tracing::debug!(query, hits = hits.len(), "Search");
    ctx.render(presenters::present_search_results(query, &hits))
}
