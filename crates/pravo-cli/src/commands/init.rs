use std::path::PathBuf;

use anyhow::Context;
use pravo_config::PROJECT_DIR;
use pravo_core::responses::InitResponse;

use crate::cli::GlobalFlags;
use crate::context::{AppContext, strip_project_dir};
use crate::output::output;

/// Create `.pravo/` under `--project` (or the current directory) and return the root.
///
/// Runs before configuration is loaded so the project-local config layer and
/// the default store path resolve against the new directory.
pub fn prepare_project_root(project: Option<&str>) -> anyhow::Result<PathBuf> {
    let root = match project {
        Some(path) => strip_project_dir(PathBuf::from(path)),
        None => std::env::current_dir().context("failed to read current directory")?,
    };

    let project_dir = root.join(PROJECT_DIR);
    std::fs::create_dir_all(&project_dir)
        .with_context(|| format!("failed to create {}", project_dir.display()))?;
    tracing::debug!(root = %root.display(), "project directory ready");
    Ok(root)
}

/// Handle `pravo init`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let incidents = ctx.db.count_incidents().await?;
    tracing::debug!(root = %ctx.project_root.display(), incidents, "project initialized");
    let response = InitResponse {
        database: ctx.db_path.display().to_string(),
        incidents,
        upload_configured: ctx.relay.is_some(),
    };
    output(&response, flags.format)
}
