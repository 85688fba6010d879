use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

/// An unknown id prints the fallback page; it is not an error
pub fn handle(ctx: &HandlerContext, track_id: &str) -> Result<()> {
    if !ctx.catalog.contains(track_id) {
        tracing::info!(track = track_id, "Unknown track requested");
    }
    ctx.render(presenters::present_track_page(&ctx.catalog, track_id))
}
