use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Error surfaced to the HTTP caller. Per-account failures never reach
/// this type; they are folded into their account's result instead.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn no_accounts() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "no accounts configured".to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Failure talking to the check-in service. Always recovered into an
/// `error` result for the affected account.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP {0}")]
    Status(StatusCode),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Short form for the per-account diagnostic log, mirroring what the
    /// transport actually reported.
    pub fn detail(&self) -> String {
        match self {
            ClientError::Status(status) => format!("HTTP {}", status.as_u16()),
            ClientError::Transport(err) if err.is_timeout() => "request timed out".to_string(),
            ClientError::Transport(err) => err.to_string(),
        }
    }
}
