use std::path::Path;

use crate::{
    app::upload_service::{BatchOutcome, UploadOrchestrator},
    domain::{
        auth::credential::Credential,
        command::summon::build_summon_command,
        skin::{raster::Raster, remapper::remap},
    },
    infrastructure::{filesystem::export::export_heads, http::mineskin::TextureUploader},
    shared::result::AppResult,
};

#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub outcome: BatchOutcome,
    pub command: Option<String>,
    pub status: String,
}

pub async fn convert_skin<U: TextureUploader>(
    png_bytes: &[u8],
    credential: &Credential,
    orchestrator: &UploadOrchestrator<U>,
    export_dir: Option<&Path>,
) -> AppResult<ConversionReport> {
    let source = Raster::from_png_bytes(png_bytes)?;
    let outputs = remap(&source);
    log::info!("built {} head textures", outputs.len());

    if let Some(dir) = export_dir {
        export_heads(dir, &outputs)?;
    }

    let outcome = orchestrator.submit_batch(&outputs, credential).await;
    let command = outcome.texture_values().map(|values| build_summon_command(&values));
    let status = outcome.status_message();
    if command.is_none() {
        log::error!("{status}");
    }

    Ok(ConversionReport {
        outcome,
        command,
        status,
    })
}
