use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum PlaidError {
    /// The facade was configured with an unknown environment or API version,
    /// or a required setting was missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The server answered with a status outside `200..300`.
    #[error("Unexpected response status: {status} at {url}")]
    Request {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The raw response body, byte for byte.
        body: Vec<u8>,
    },

    /// An error occurred in the default HTTP transport.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A custom transport reported a network-level failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// A successful response did not contain valid JSON.
    #[error("malformed JSON in response from {url}: {source}")]
    Decode {
        /// The URL that returned the body.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// A successful response contained JSON that was not an object.
    #[error("expected a JSON object in response from {url}")]
    UnexpectedBody {
        /// The URL that returned the body.
        url: String,
    },

    /// Request parameters could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// The error object Plaid returns in the body of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Broad category, e.g. `INVALID_REQUEST` or `ITEM_ERROR`.
    pub error_type: Option<String>,
    /// Specific code, e.g. `ITEM_LOGIN_REQUIRED`.
    pub error_code: Option<String>,
    /// Developer-facing message.
    pub error_message: Option<String>,
    /// End-user-facing message, when Plaid provides one.
    pub display_message: Option<String>,
    /// Identifier to quote when contacting Plaid support.
    pub request_id: Option<String>,
}

impl PlaidError {
    /// The HTTP status of a failed request, if this is a [`PlaidError::Request`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The raw body of a failed request.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::Request { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The body of a failed request as text. Invalid UTF-8 is replaced.
    #[must_use]
    pub fn body_text(&self) -> Option<Cow<'_, str>> {
        self.body().map(String::from_utf8_lossy)
    }

    /// The body of a failed request decoded as JSON, if it is JSON.
    #[must_use]
    pub fn payload(&self) -> Option<Value> {
        self.body().and_then(|b| serde_json::from_slice(b).ok())
    }

    /// The structured Plaid error carried by a failed request, if any.
    #[must_use]
    pub fn api_error(&self) -> Option<ApiErrorBody> {
        self.body().and_then(|b| serde_json::from_slice(b).ok())
    }

    /// `true` for a 4xx response.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// `true` for a 5xx response.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }
}
