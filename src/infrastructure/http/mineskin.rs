use std::time::Duration;

use reqwest::{header, multipart, Client, StatusCode};
use serde_json::Value;

use crate::{domain::auth::credential::Credential, shared::result::AppResult};

pub const MINESKIN_UPLOAD_URL: &str = "https://api.mineskin.org/generate/upload";
const UPLOAD_FILE_NAME: &str = "head.png";
const TEXTURE_VALUE_POINTER: &str = "/data/texture/value";

const AUTH_MARKERS: [&str; 2] = ["invalid api key", "unauthorized"];
const RATE_LIMIT_MARKER: &str = "too many requests";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    AuthRejected(String),
    RateLimited(String),
    Transient(String),
    RetriesExhausted(String),
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthRejected(msg) => write!(f, "API key rejected: {msg}"),
            Self::RateLimited(msg) => write!(f, "Rate limited: {msg}"),
            Self::Transient(msg) => write!(f, "Upload failed: {msg}"),
            Self::RetriesExhausted(msg) => write!(f, "Max retries exceeded: {msg}"),
        }
    }
}

impl std::error::Error for UploadError {}

#[allow(async_fn_in_trait)]
pub trait TextureUploader {
    async fn upload(&self, png: Vec<u8>, credential: &Credential) -> Result<String, UploadError>;
}

pub struct MineSkinClient {
    client: Client,
    endpoint: String,
}

impl MineSkinClient {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        Self::with_endpoint(timeout, MINESKIN_UPLOAD_URL)
    }

    pub(crate) fn with_endpoint(timeout: Duration, endpoint: impl Into<String>) -> AppResult<Self> {
        Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(concat!("SkinHeads/", env!("CARGO_PKG_VERSION")))
            .build()
            .map(|client| Self {
                client,
                endpoint: endpoint.into(),
            })
            .map_err(|err| format!("No se pudo crear cliente HTTP: {err}"))
    }
}

impl TextureUploader for MineSkinClient {
    async fn upload(&self, png: Vec<u8>, credential: &Credential) -> Result<String, UploadError> {
        let file = multipart::Part::bytes(png)
            .file_name(UPLOAD_FILE_NAME)
            .mime_str("image/png")
            .map_err(|err| UploadError::Transient(format!("invalid multipart file part: {err}")))?;
        let form = multipart::Form::new()
            .part("file", file)
            .text("name", "")
            .text("variant", "")
            .text("visibility", "1");

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, credential.expose())
            .multipart(form)
            .send()
            .await
            .map_err(|err| UploadError::Transient(format!("request to {} failed: {err}", self.endpoint)))?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            UploadError::Transient(format!("failed reading MineSkin response (HTTP {status}): {err}"))
        })?;

        if !status.is_success() {
            return Err(classify_failure(status, &body));
        }

        extract_texture_value(&body)
    }
}

pub fn classify_failure(status: StatusCode, body: &str) -> UploadError {
    let detail = format!("HTTP {status}: {}", body.trim());
    let lowered = body.to_ascii_lowercase();

    if status == StatusCode::UNAUTHORIZED || AUTH_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return UploadError::AuthRejected(detail);
    }
    if status == StatusCode::TOO_MANY_REQUESTS || lowered.contains(RATE_LIMIT_MARKER) {
        return UploadError::RateLimited(detail);
    }
    UploadError::Transient(detail)
}

pub fn extract_texture_value(body: &str) -> Result<String, UploadError> {
    let json = serde_json::from_str::<Value>(body)
        .map_err(|err| UploadError::Transient(format!("invalid JSON from MineSkin: {err}")))?;

    json.pointer(TEXTURE_VALUE_POINTER)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| UploadError::Transient("MineSkin response has no data.texture.value".to_string()))
}
