use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_incidents;

/// Handle `pravo list`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let incidents = ctx.db.list_incidents().await?;
    output_incidents(&incidents, flags.format)
}
