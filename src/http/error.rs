//! Mapping of handler errors onto error envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::http::response::{Envelope, CODE_ERROR};
use crate::llm::ChatError;

/// Envelope code for a failed or unusable backend answer.
pub const CODE_UPSTREAM: i64 = 2;

/// Envelope code for a backend that did not answer in time.
pub const CODE_TIMEOUT: i64 = 3;

impl ChatError {
    /// HTTP status sent with the error envelope.
    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::EmptyMessage => StatusCode::UNPROCESSABLE_ENTITY,
            ChatError::Upstream(_) | ChatError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            ChatError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Envelope `code` for this failure.
    pub fn code(&self) -> i64 {
        match self {
            ChatError::EmptyMessage => CODE_ERROR,
            ChatError::Upstream(_) | ChatError::InvalidResponse(_) => CODE_UPSTREAM,
            ChatError::Timeout(_) => CODE_TIMEOUT,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Chat request failed");
        }
        Envelope::error(self.to_string(), self.code()).with_status(status)
    }
}
