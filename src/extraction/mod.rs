// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the GPS extraction service.
//!
//! The service takes one JPEG image as a multipart upload and answers with
//! JSON: latitude and longitude on success, an optional `detail` string
//! explaining the failure otherwise.

use crate::geo::Coordinates;
use crate::media::CandidateFile;
use serde::Deserialize;
use std::sync::Arc;

/// Multipart field name the service expects for the uploaded file.
const UPLOAD_FIELD_NAME: &str = "file";

/// User agent sent with upload requests.
const USER_AGENT: &str = concat!("GeoLocator/", env!("CARGO_PKG_VERSION"));

/// Result type for extraction operations.
pub type ExtractResult = Result<Coordinates, ExtractError>;

/// Errors that can occur while submitting a file for extraction.
///
/// Variants carry plain strings so the error can ride inside UI messages,
/// which must be `Clone`.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// The service answered with a failure status.
    Service {
        /// HTTP status code of the response.
        status: u16,
        /// The service's own explanation, when it sent one.
        detail: Option<String>,
    },
    /// The request never completed (connection refused, DNS failure, reset).
    Transport(String),
    /// The service answered with a success status but an undecodable body.
    Payload(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::Service {
                status,
                detail: Some(detail),
            } => write!(f, "Service error {status}: {detail}"),
            ExtractError::Service {
                status,
                detail: None,
            } => write!(f, "Service error {status}"),
            ExtractError::Transport(msg) => write!(f, "Transport error: {msg}"),
            ExtractError::Payload(msg) => write!(f, "Invalid response payload: {msg}"),
        }
    }
}

impl std::error::Error for ExtractError {}

impl ExtractError {
    /// Returns the message shown to the user for this failure.
    ///
    /// Service failures surface the service's own explanation when one was
    /// sent. Everything else collapses into a fixed message so transport
    /// internals never leak into the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ExtractError::Service {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ExtractError::Service { detail: None, .. } => "Upload failed.".to_string(),
            ExtractError::Transport(_) | ExtractError::Payload(_) => {
                "An unknown error occurred. Please try again.".to_string()
            }
        }
    }
}

/// Success payload returned by the service.
///
/// The service also sends a ready-made map link; it is ignored here and the
/// map view is derived from the coordinates alone.
#[derive(Debug, Clone, Deserialize)]
struct LocationPayload {
    latitude: f64,
    longitude: f64,
}

/// Failure payload. `detail` explains the cause when the service knows it.
#[derive(Debug, Clone, Deserialize)]
struct ErrorPayload {
    detail: Option<String>,
}

/// One file packaged for upload, detached from UI state so the request can
/// run on the executor while the workflow keeps ownership of the candidate.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    file_name: String,
    media_type: &'static str,
    bytes: Arc<Vec<u8>>,
}

impl UploadRequest {
    /// Packages a selected candidate for upload. The byte buffer is shared,
    /// not copied.
    #[must_use]
    pub fn from_candidate(candidate: &CandidateFile) -> Self {
        Self {
            file_name: candidate.name().to_string(),
            media_type: candidate.media_type(),
            bytes: candidate.bytes().clone(),
        }
    }

    /// Returns the file name sent with the multipart part.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the size of the packaged file in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Client for one extraction-service endpoint.
///
/// The endpoint is treated as an opaque string; an unusable value simply
/// surfaces as a transport failure on the first submission.
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    endpoint: String,
}

impl ExtractionClient {
    /// Creates a client for the given endpoint URL.
    #[must_use]
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    /// Returns the endpoint this client submits to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits one file to the extraction service.
    ///
    /// Every failure mode folds into [`ExtractError`], so callers always
    /// get a completion they can feed back into the workflow.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Transport`] when the request cannot be built
    /// or sent, [`ExtractError::Service`] for failure statuses, and
    /// [`ExtractError::Payload`] for undecodable success bodies.
    pub async fn extract(&self, request: UploadRequest) -> ExtractResult {
        // Build client with explicit redirect policy and user agent
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ExtractError::Transport(e.to_string()))?;

        let part = reqwest::multipart::Part::bytes(request.bytes.to_vec())
            .file_name(request.file_name.clone())
            .mime_str(request.media_type)
            .map_err(|e| ExtractError::Transport(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = client
            .post(self.endpoint.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ExtractError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ExtractError::Transport(e.to_string()))?;

        if status.is_success() {
            parse_success_body(&body)
        } else {
            Err(ExtractError::Service {
                status: status.as_u16(),
                detail: parse_error_detail(&body),
            })
        }
    }
}

/// Parses a success body into coordinates.
fn parse_success_body(body: &str) -> ExtractResult {
    let payload: LocationPayload =
        serde_json::from_str(body).map_err(|e| ExtractError::Payload(e.to_string()))?;
    Ok(Coordinates::new(payload.latitude, payload.longitude))
}

/// Pulls the `detail` string out of a failure body, when there is one.
///
/// Failure bodies that are not JSON (proxy pages, HTML error pages) yield
/// `None` and the fixed fallback message takes over.
fn parse_error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.detail)
}
