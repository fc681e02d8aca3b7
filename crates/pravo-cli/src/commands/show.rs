use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output_incidents;

/// Handle `pravo show`.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let incident = ctx
        .db
        .get_incident(args.id)
        .await
        .with_context(|| format!("incident {} not found", args.id))?;
    output_incidents(std::slice::from_ref(&incident), flags.format)
}
