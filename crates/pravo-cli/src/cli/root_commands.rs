use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize pravo for a directory (creates `.pravo/` and the store).
    Init,
    /// Report an incident, then print the full list.
    Report(ReportArgs),
    /// List all incidents.
    List,
    /// Show one incident.
    Show(ShowArgs),
    /// Insert the example incidents (once per store).
    Seed,
    /// Upload a photo to the image host and print its URL.
    Upload(UploadArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Short title, e.g. "Крадіжка".
    #[arg(long)]
    pub title: String,

    /// What happened.
    #[arg(long)]
    pub description: String,

    /// Photo to attach.
    #[arg(long)]
    pub photo: Option<PathBuf>,

    /// Latitude of the incident (decimal degrees).
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of the incident (decimal degrees).
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Store the photo's local file reference instead of uploading it.
    #[arg(long, requires = "photo")]
    pub keep_local: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct UploadArgs {
    pub path: PathBuf,
}
