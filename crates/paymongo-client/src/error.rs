//! Client error types.

use serde::Deserialize;
use serde_json::Value;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, PayMongoError>;

/// Errors that can occur when using the PayMongo client.
#[derive(Debug, thiserror::Error)]
pub enum PayMongoError {
    /// Missing or invalid credentials or settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never completed (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A request body could not be encoded or a response did not match its type.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PayMongoError {
    /// The API error, if this is one.
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status of an API error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.as_api().map(|e| e.status)
    }
}

/// Where in the request an error detail points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorSource {
    /// JSON pointer into the request body.
    #[serde(default)]
    pub pointer: Option<String>,
    /// Offending attribute name.
    #[serde(default)]
    pub attribute: Option<String>,
}

/// One entry of the API's `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable code.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable detail.
    #[serde(default)]
    pub detail: Option<String>,
    /// Offending field, if any.
    #[serde(default)]
    pub source: Option<ErrorSource>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

/// Non-success response from the API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("API error {status}: {code} - {message}")]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Code of the first error detail, or `unknown_error`.
    pub code: String,
    /// Detail of the first error detail, or a generic message.
    pub message: String,
    /// Every error detail the API returned.
    pub errors: Vec<ErrorDetail>,
    /// Response body as received.
    pub raw: Option<Value>,
}

impl ApiError {
    /// Code used when the body carries none.
    pub const UNKNOWN_CODE: &'static str = "unknown_error";

    /// Build an error from a response status and its (possibly absent) body.
    #[must_use]
    pub fn from_response(status: u16, body: Option<Value>) -> Self {
        let errors = body
            .as_ref()
            .and_then(|b| ErrorBody::deserialize(b).ok())
            .map(|b| b.errors)
            .unwrap_or_default();

        let first = errors.first();
        let message = first
            .and_then(|e| e.detail.clone())
            .unwrap_or_else(|| format!("API error (status {status})"));
        let code = first
            .and_then(|e| e.code.clone())
            .unwrap_or_else(|| Self::UNKNOWN_CODE.to_string());

        Self {
            status,
            code,
            message,
            errors,
            raw: body,
        }
    }

    /// 404: the resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// 401/403: the key is wrong or lacks access.
    #[must_use]
    pub fn is_authentication_error(&self) -> bool {
        matches!(self.status, 401 | 403)
    }

    /// Any 4xx: the caller can fix the request.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Attributes the API flagged, in order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter_map(|e| e.source.as_ref()?.attribute.as_deref())
    }
}
