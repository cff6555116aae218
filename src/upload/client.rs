// src/upload/client.rs
use std::io;
use std::time::Duration;
use reqwest::blocking::multipart;
use reqwest::StatusCode;
use thiserror::Error;

use crate::analysis::AnalysisResult;
use crate::config::AppConfig;
use crate::upload::{SelectedFile, INVALID_TYPE_MESSAGE};

/// Shown when the service gives no usable detail.
pub const GENERIC_ANALYZE_ERROR: &str = "An error occurred while analyzing the code.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("invalid file type: {name}")]
    InvalidFileType { name: String },

    #[error("failed to read {name}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("analysis request failed")]
    Transport(#[from] reqwest::Error),

    #[error("analysis service returned {status}")]
    Server {
        status: StatusCode,
        detail: Option<String>,
    },
}

impl UploadError {
    /// Message surfaced in the error banner. Server `detail` text is passed
    /// through; transport internals are not.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::InvalidFileType { .. } => INVALID_TYPE_MESSAGE.to_string(),
            UploadError::Read { name, .. } => format!("Could not read {}.", name),
            UploadError::Server { detail: Some(detail), .. } => detail.clone(),
            UploadError::Server { detail: None, .. } | UploadError::Transport(_) => {
                GENERIC_ANALYZE_ERROR.to_string()
            }
        }
    }
}

// Blocking client for the analysis service. Cloned into the upload worker
// thread; reqwest clients share their connection pool across clones.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(config: &AppConfig) -> Result<Self, UploadError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.endpoint_base().trim_end_matches('/').to_string(),
        })
    }

    /// POST the file to /analyze-code as a multipart form with a single
    /// `file` field and deserialize the score response.
    pub fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult, UploadError> {
        let part = multipart::Part::bytes(file.contents.clone()).file_name(file.name.clone());
        let form = multipart::Form::new().part("file", part);

        let url = format!("{}/analyze-code", self.base_url);
        tracing::debug!("uploading {} ({} bytes) to {}", file.name, file.contents.len(), url);

        let response = self.http.post(&url).multipart(form).send()?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json::<AnalysisResult>()?)
        } else {
            let detail = response
                .text()
                .ok()
                .as_deref()
                .and_then(detail_from_body);
            Err(UploadError::Server { status, detail })
        }
    }
}

/// Pull the `detail` string out of an error body, if the body is JSON and
/// carries one.
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_extracted_from_json_error_bodies() {
        assert_eq!(
            detail_from_body(r#"{"detail": "file too large"}"#),
            Some("file too large".to_string())
        );
    }

    #[test]
    fn bodies_without_a_detail_string_yield_none() {
        assert_eq!(detail_from_body(""), None);
        assert_eq!(detail_from_body("Internal Server Error"), None);
        assert_eq!(detail_from_body(r#"{"error": "nope"}"#), None);
        assert_eq!(detail_from_body(r#"{"detail": 413}"#), None);
    }

    #[test]
    fn server_detail_is_shown_verbatim() {
        let err = UploadError::Server {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            detail: Some("file too large".to_string()),
        };
        assert_eq!(err.user_message(), "file too large");
    }

    #[test]
    fn bodyless_server_errors_fall_back_to_the_generic_message() {
        let err = UploadError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: None,
        };
        assert_eq!(err.user_message(), GENERIC_ANALYZE_ERROR);
    }
}
