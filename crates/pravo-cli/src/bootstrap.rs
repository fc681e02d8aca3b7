use std::path::Path;

use anyhow::Context;

/// Load `<project_root>/.env` if present, else fall back to the usual dotenv lookup.
///
/// Must run before configuration is extracted so `PRAVO_*` values from the
/// file take part in the env layer.
pub fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
