use anyhow::Context;
use pravo_core::responses::UploadResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UploadArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `pravo upload`.
pub async fn handle(
    args: &UploadArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let relay = ctx.relay.as_ref().context(
        "image upload is not configured (set PRAVO_UPLOAD__CLOUD_NAME or [upload] cloud_name)",
    )?;

    let progress = Progress::spinner("Uploading photo");
    let secure_url = match relay.try_upload(&args.path).await {
        Ok(url) => {
            progress.finish_clear();
            url
        }
        Err(error) => {
            progress.finish_err("Upload failed");
            return Err(error)
                .with_context(|| format!("failed to upload {}", args.path.display()));
        }
    };

    let response = UploadResponse {
        source: args.path.display().to_string(),
        secure_url,
    };
    output(&response, flags.format)
}
