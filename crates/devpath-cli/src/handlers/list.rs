use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use devpath_types::Difficulty;

pub fn handle(ctx: &HandlerContext, difficulty: Option<Difficulty>) -> Result<()> {
    let result = presenters::present_catalog_list(&ctx.catalog, difficulty);
    tracing::debug!(
        shown = result.content.tracks.len(),
        total = result.content.total_count,
        "Listing catalog"
    );
    ctx.render(result)
}
