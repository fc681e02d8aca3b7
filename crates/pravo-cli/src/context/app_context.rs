use std::path::PathBuf;

use anyhow::Context;
use pravo_config::PravoConfig;
use pravo_db::PravoDb;
use pravo_relay::ImageRelay;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub db: PravoDb,
    pub relay: Option<ImageRelay>,
    pub config: PravoConfig,
    pub project_root: PathBuf,
    pub db_path: PathBuf,
}

impl AppContext {
    /// Open the incident store and build the image relay for the given project root.
    pub async fn init(project_root: PathBuf, config: PravoConfig) -> anyhow::Result<Self> {
        let db_path = config.store.resolve(&project_root);
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let db = PravoDb::open_local(&db_path.to_string_lossy())
            .await
            .with_context(|| format!("failed to open incident store at {}", db_path.display()))?;

        let relay = build_relay(&config);

        if config.general.seed_examples {
            let inserted = db
                .seed_examples()
                .await
                .context("failed to seed example incidents")?;
            if inserted > 0 {
                tracing::info!(inserted, "seeded example incidents");
            }
        }

        Ok(Self {
            db,
            relay,
            config,
            project_root,
            db_path,
        })
    }
}

fn build_relay(config: &PravoConfig) -> Option<ImageRelay> {
    if !config.upload.is_configured() {
        tracing::debug!("upload section not configured; photo uploads unavailable");
        return None;
    }

    match ImageRelay::new(&config.upload) {
        Ok(relay) => Some(relay),
        Err(error) => {
            tracing::warn!(%error, "failed to initialize image relay; photo uploads unavailable");
            None
        }
    }
}
