use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use futures_util::{stream, StreamExt};
use tokio::time::sleep;

use crate::{
    domain::{
        auth::credential::Credential,
        skin::{raster::Raster, regions::VARIANT_COUNT, remapper::OutputSet},
    },
    infrastructure::{
        codec::png::encode_png,
        http::mineskin::{TextureUploader, UploadError},
    },
};

pub const MAX_ATTEMPTS: u8 = 5;
pub const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    Success(String),
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    Succeeded,
    ExhaustedRetries,
    AuthRejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ImageReport {
    result: UploadResult,
    state: ImageState,
    attempts: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub results: [UploadResult; VARIANT_COUNT],
    pub states: [ImageState; VARIANT_COUNT],
    pub attempts: [u8; VARIANT_COUNT],
    pub failed_count: usize,
    pub credential_valid: bool,
}

impl BatchOutcome {
    fn from_reports(reports: Vec<ImageReport>, credential_valid: bool) -> Self {
        let failed_count = reports
            .iter()
            .filter(|report| report.state != ImageState::Succeeded)
            .count();

        Self {
            results: std::array::from_fn(|index| reports[index].result.clone()),
            states: std::array::from_fn(|index| reports[index].state),
            attempts: std::array::from_fn(|index| reports[index].attempts),
            failed_count,
            credential_valid,
        }
    }

    pub fn texture_values(&self) -> Option<[&str; VARIANT_COUNT]> {
        if self.failed_count > 0 {
            return None;
        }

        let mut values = [""; VARIANT_COUNT];
        for (slot, result) in values.iter_mut().zip(&self.results) {
            match result {
                UploadResult::Success(value) => *slot = value.as_str(),
                UploadResult::Failure => return None,
            }
        }
        Some(values)
    }

    pub fn status_message(&self) -> String {
        match (self.failed_count, self.credential_valid) {
            (0, _) => format!("Se subieron las {VARIANT_COUNT} cabezas a MineSkin."),
            (failed, true) => format!(
                "Fallaron {failed} de {VARIANT_COUNT} subidas a MineSkin. Inténtalo de nuevo."
            ),
            (failed, false) => format!(
                "Fallaron {failed} de {VARIANT_COUNT} subidas a MineSkin y la API key parece inválida. Revísala e inténtalo de nuevo."
            ),
        }
    }
}

pub struct UploadOrchestrator<U> {
    uploader: U,
    max_concurrent: usize,
}

impl<U: TextureUploader> UploadOrchestrator<U> {
    pub fn new(uploader: U) -> Self {
        Self {
            uploader,
            max_concurrent: 1,
        }
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.clamp(1, VARIANT_COUNT);
        self
    }

    #[cfg(test)]
    pub(crate) fn uploader(&self) -> &U {
        &self.uploader
    }

    pub async fn submit_batch(&self, outputs: &OutputSet, credential: &Credential) -> BatchOutcome {
        let credential_valid = AtomicBool::new(true);
        let uploader = &self.uploader;
        let credential_flag = &credential_valid;

        let reports = stream::iter(outputs.iter().enumerate())
            .map(|(index, raster)| run_image(uploader, index, raster, credential, credential_flag))
            .buffered(self.max_concurrent)
            .collect::<Vec<ImageReport>>()
            .await;

        let outcome = BatchOutcome::from_reports(reports, credential_valid.load(Ordering::SeqCst));
        log::info!(
            "upload batch finished: {} failed, credential valid: {}",
            outcome.failed_count,
            outcome.credential_valid
        );
        outcome
    }
}

async fn attempt_upload<U: TextureUploader>(
    uploader: &U,
    raster: &Raster,
    credential: &Credential,
) -> Result<String, UploadError> {
    let png = encode_png(raster).map_err(UploadError::Transient)?;
    uploader.upload(png, credential).await
}

async fn run_image<U: TextureUploader>(
    uploader: &U,
    index: usize,
    raster: &Raster,
    credential: &Credential,
    credential_valid: &AtomicBool,
) -> ImageReport {
    let mut last_error = String::new();

    for attempt in 1..=MAX_ATTEMPTS {
        match attempt_upload(uploader, raster, credential).await {
            Ok(texture_value) => {
                log::info!("head {index}: upload attempt {attempt}/{MAX_ATTEMPTS} succeeded");
                return ImageReport {
                    result: UploadResult::Success(texture_value),
                    state: ImageState::Succeeded,
                    attempts: attempt,
                };
            }
            Err(err @ UploadError::AuthRejected(_)) => {
                log::error!("head {index}: upload attempt {attempt}/{MAX_ATTEMPTS} failed: {err}");
                // Only this head gives up. The remaining heads still run their own
                // cycles against the same key, matching the web converter.
                credential_valid.store(false, Ordering::SeqCst);
                return ImageReport {
                    result: UploadResult::Failure,
                    state: ImageState::AuthRejected,
                    attempts: attempt,
                };
            }
            Err(err @ UploadError::RateLimited(_)) => {
                log::warn!("head {index}: upload attempt {attempt}/{MAX_ATTEMPTS} failed: {err}");
                last_error = err.to_string();
                if attempt < MAX_ATTEMPTS {
                    log::info!(
                        "head {index}: waiting {}s before retrying",
                        RATE_LIMIT_BACKOFF.as_secs()
                    );
                    sleep(RATE_LIMIT_BACKOFF).await;
                }
            }
            Err(err) => {
                log::warn!("head {index}: upload attempt {attempt}/{MAX_ATTEMPTS} failed: {err}");
                last_error = err.to_string();
            }
        }
    }

    log::error!(
        "head {index}: {}",
        UploadError::RetriesExhausted(last_error)
    );
    ImageReport {
        result: UploadResult::Failure,
        state: ImageState::ExhaustedRetries,
        attempts: MAX_ATTEMPTS,
    }
}
