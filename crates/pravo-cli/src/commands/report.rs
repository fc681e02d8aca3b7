//! `pravo report`: validate, locate, attach, insert, then re-read the list.

use anyhow::Context;
use pravo_core::entities::NewIncident;
use pravo_core::responses::ReportResponse;
use pravo_db::PravoDb;
use pravo_relay::ImageRelay;

use crate::cli::root_commands::ReportArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::device::{DeviceCapabilities, TerminalDevice, local_file_uri};
use crate::output::{output, output_incidents};
use crate::progress::Progress;

/// Handle `pravo report`.
pub async fn handle(
    args: &ReportArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let device = TerminalDevice::new(args.lat.zip(args.lon), ctx.config.device.fix());
    let response = submit(args, &device, &ctx.db, ctx.relay.as_ref()).await?;

    match flags.format {
        OutputFormat::Table => output_incidents(&response.incidents, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format),
    }
}

/// Run the whole submission. Nothing is inserted unless every blocking step succeeds.
pub async fn submit<D: DeviceCapabilities>(
    args: &ReportArgs,
    device: &D,
    db: &PravoDb,
    relay: Option<&ImageRelay>,
) -> anyhow::Result<ReportResponse> {
    let mut draft = NewIncident::new(args.title.trim(), args.description.trim());
    draft.validate()?;

    match device.current_location() {
        Ok(coordinates) => draft = draft.with_coordinates(coordinates),
        Err(error) if error.is_permission_denied() => {
            tracing::warn!(%error, "location unavailable; saving incident without coordinates");
        }
        Err(error) => return Err(error.into()),
    }

    if let Some(path) = &args.photo {
        let picked = device.pick_photo(path)?;
        let image_uri = if args.keep_local {
            local_file_uri(&picked)?
        } else {
            let relay = relay.context(
                "image upload is not configured; set [upload] cloud_name or pass --keep-local",
            )?;
            let progress = Progress::spinner("Uploading photo");
            let uploaded = relay.upload(&picked).await;
            if uploaded.is_some() {
                progress.finish_clear();
            } else {
                progress.finish_err("Upload failed");
            }
            uploaded.context("image upload failed; incident not saved")?
        };
        draft = draft.with_image_uri(image_uri);
    }

    let id = db.insert_incident(&draft).await?;
    let incidents = db.list_incidents().await?;
    Ok(ReportResponse {
        incident: draft.into_incident(id),
        incidents,
    })
}
