//! HTTP error responses.
//!
//! Every failure is answered with a status code and a JSON body of the form
//! `{"detail": "<message>"}`.
//!
//! | Variant      | Status | Detail                                   |
//! |--------------|--------|------------------------------------------|
//! | `Validation` | 422    | what was wrong with the body             |
//! | `Rejected`   | varies | the extractor's own message (e.g. 415)   |
//! | `Load`       | 500    | `Failed to load chat configuration`      |
//! | `Save`       | 500    | `Failed to save chat configuration`      |
//!
//! Storage causes (paths, OS errors, parse positions) are logged, never sent
//! to the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::application::StorageError;

pub const LOAD_FAILED_DETAIL: &str = "Failed to load chat configuration";
pub const SAVE_FAILED_DETAIL: &str = "Failed to save chat configuration";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is not a valid document.  Storage is never touched.
    #[error("invalid chat config: {0}")]
    Validation(String),

    /// The body was refused before parsing (wrong content type, too large).
    #[error("request body rejected: {0}")]
    Rejected(JsonRejection),

    #[error("failed to load chat configuration: {0}")]
    Load(#[source] StorageError),

    #[error("failed to save chat configuration: {0}")]
    Save(#[source] StorageError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Schema violations and malformed JSON are both client data errors.
            JsonRejection::JsonDataError(e) => ApiError::Validation(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::Validation(e.body_text()),
            other => ApiError::Rejected(other),
        }
    }
}

impl ApiError {
    /// Status code sent to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected(r) => r.status(),
            ApiError::Load(_) | ApiError::Save(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Rejected(r) => r.body_text(),
            ApiError::Load(_) => LOAD_FAILED_DETAIL.to_string(),
            ApiError::Save(_) => SAVE_FAILED_DETAIL.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(_) | ApiError::Rejected(_) => {
                warn!("rejected chat config request: {self}");
            }
            ApiError::Load(_) | ApiError::Save(_) => {
                error!("{self}");
            }
        }

        let body = ErrorBody {
            detail: self.detail(),
        };
        (self.status(), Json(body)).into_response()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
