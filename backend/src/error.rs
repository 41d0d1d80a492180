//! Error handling for the DataViz Platform
//!
//! Every failure leaves the server as `{ "error": "<message>" }`. Missing
//! parameters are the caller's fault (400); anything that goes wrong
//! upstream is reported as 500 with a message the dashboard can show as is.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{ParameterError, UpstreamResource};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Client input errors
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    // Upstream errors
    #[error("{message}")]
    Upstream {
        resource: UpstreamResource,
        status: u16,
        message: String,
    },

    #[error("{}", .resource.fetch_failure_message())]
    Transport {
        resource: UpstreamResource,
        #[source]
        source: reqwest::Error,
    },

    // Startup errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Classify a non-success upstream status
    pub fn upstream(resource: UpstreamResource, status: u16) -> Self {
        AppError::Upstream {
            resource,
            status,
            message: resource.status_message(status),
        }
    }

    /// Wrap a transport or decode failure; the URL is dropped from the
    /// source since it carries the weather API key
    pub fn transport(resource: UpstreamResource, source: reqwest::Error) -> Self {
        AppError::Transport {
            resource,
            source: source.without_url(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Parameter(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. }
            | AppError::Transport { .. }
            | AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error envelope returned by every endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Parameter(err) => {
                tracing::warn!(error = %err, "Rejected request");
            }
            AppError::Upstream {
                resource, status, ..
            } => {
                tracing::warn!(%resource, status, "Upstream returned an error status");
            }
            AppError::Transport { resource, source } => {
                tracing::error!(%resource, error = %source, "Upstream request failed");
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
            }
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
