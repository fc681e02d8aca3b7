use pravo_core::responses::SeedResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pravo seed`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let inserted = ctx.db.seed_examples().await?;
    let response = SeedResponse {
        inserted,
        already_seeded: inserted == 0,
    };
    output(&response, flags.format)
}
