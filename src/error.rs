use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =========================================================
// Error kinds
// =========================================================

/// Failure taxonomy of a backend call, derived from the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    /// Transport failure, no HTTP response
    Network,
    /// 401: missing, invalid or expired token
    Unauthorized,
    /// 403: authenticated but not allowed
    Forbidden,
    /// 400 / 422: the server rejected the input
    Validation,
    /// 404
    NotFound,
    /// 409
    Conflict,
    /// 5xx and anything unexpected
    Server,
    /// 2xx whose body does not match the expected shape
    Decode,
}

impl ApiErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => ApiErrorKind::Validation,
            401 => ApiErrorKind::Unauthorized,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            409 => ApiErrorKind::Conflict,
            _ => ApiErrorKind::Server,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiErrorKind::Network => "NETWORK_ERROR",
            ApiErrorKind::Unauthorized => "UNAUTHORIZED",
            ApiErrorKind::Forbidden => "FORBIDDEN",
            ApiErrorKind::Validation => "INVALID_INPUT",
            ApiErrorKind::NotFound => "RESOURCE_NOT_FOUND",
            ApiErrorKind::Conflict => "RESOURCE_CONFLICT",
            ApiErrorKind::Server => "SERVER_ERROR",
            ApiErrorKind::Decode => "JSON_PARSE_ERROR",
        }
    }
}

// =========================================================
// ApiError
// =========================================================

/// Typed failure of a backend call.
///
/// `message` holds the server-provided text when there was one; callers show it
/// through [`ApiError::user_message`] with their own localized fallback.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[{}] {}", .kind.error_code(), .message.as_deref().unwrap_or("no detail"))]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            status: None,
            message: Some(message.into()),
        }
    }

    pub fn decode(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            status: Some(status),
            message: Some(message.into()),
        }
    }

    /// Builds the error of a non-2xx response, extracting the server message from its body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self {
            kind: ApiErrorKind::from_status(status),
            status: Some(status),
            message: server_message(body),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    /// Text for a toast: the server detail when the server sent one, otherwise `fallback`.
    ///
    /// Transport and decoding messages are technical and never shown.
    pub fn user_message(&self, fallback: &str) -> String {
        match (self.kind, &self.message) {
            (ApiErrorKind::Network | ApiErrorKind::Decode, _) | (_, None) => fallback.to_string(),
            (_, Some(msg)) => msg.clone(),
        }
    }
}

/// Extracts `detail` (string or list of `{msg}`), `error` or `message` from a JSON error body.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let text = match value.get("detail") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Array(items)) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    };
    text.or_else(|| {
        ["error", "message"]
            .iter()
            .find_map(|k| value.get(*k).and_then(Value::as_str).map(str::to_string))
    })
    .filter(|s| !s.trim().is_empty())
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

// =========================================================
// Storage errors
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    WriteFailed(String),
    #[error("session serialization failed: {0}")]
    Serialization(String),
}
