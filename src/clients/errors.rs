//! Error taxonomy for API requests.
//!
//! Every failure a request can produce is a [`KapiError`]. Each kind carries
//! an [`ErrorContext`] with the HTTP status, message, raw body, parsed JSON
//! body, response headers and request id.
//!
//! The executor maps status codes as follows:
//!
//! - **500**: [`KapiError::Server`], message is the raw response text
//! - **404**: [`KapiError::NotFound`], message from the `detail` field
//! - **403**: [`KapiError::InvalidRequest`], message from `detail`, `param`
//!   holds the full raw response text
//! - **Other non-200**: [`KapiError::Api`], message from `detail`
//!
//! `Authentication`, `Permission`, `RateLimit`, `Idempotency` and
//! `InvalidRequestNotFound` are never produced by the executor; they exist for
//! callers and future resource types.
//!
//! # Example
//!
//! ```rust
//! use kapi::clients::{ErrorContext, KapiError};
//!
//! let error = KapiError::NotFound(
//!     ErrorContext::new("no such resume").with_status(404),
//! );
//! assert_eq!(error.to_string(), "[404] no such resume");
//! ```

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Placeholder stored when a response body is not valid UTF-8.
pub const UNDECODABLE_BODY: &str = "<Could not decode body as utf-8>";

/// Decodes a raw body as UTF-8, substituting [`UNDECODABLE_BODY`] on failure.
#[must_use]
pub fn decode_body(body: &[u8]) -> String {
    std::str::from_utf8(body).map_or_else(|_| UNDECODABLE_BODY.to_string(), ToString::to_string)
}

/// Context shared by every [`KapiError`] kind.
///
/// Built with the `with_*` methods. Header names are stored lowercase; the
/// request id is taken from `request-id`, falling back to `x-request-id`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorContext {
    message: Option<String>,
    http_body: Option<String>,
    http_status: Option<u16>,
    json_body: Option<serde_json::Value>,
    headers: HashMap<String, String>,
    code: Option<String>,
    request_id: Option<String>,
}

impl ErrorContext {
    /// Creates a context with the given human-readable message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Sets the HTTP status code.
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Sets the raw HTTP body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.http_body = Some(body.into());
        self
    }

    /// Sets the raw HTTP body from bytes.
    ///
    /// Bodies that are not valid UTF-8 are replaced by [`UNDECODABLE_BODY`]
    /// instead of failing.
    #[must_use]
    pub fn with_body_bytes(mut self, body: &[u8]) -> Self {
        self.http_body = Some(decode_body(body));
        self
    }

    /// Sets the parsed JSON body.
    #[must_use]
    pub fn with_json_body(mut self, body: serde_json::Value) -> Self {
        self.json_body = Some(body);
        self
    }

    /// Sets the response headers and extracts the request id from them.
    #[must_use]
    pub fn with_headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        self.headers = headers
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
            .collect();
        self.request_id = self
            .headers
            .get("request-id")
            .or_else(|| self.headers.get("x-request-id"))
            .cloned();
        self
    }

    /// Sets the API error code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns the bare message, without status or request id.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the raw HTTP body, if any.
    #[must_use]
    pub fn http_body(&self) -> Option<&str> {
        self.http_body.as_deref()
    }

    /// Returns the HTTP status code, if any.
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    /// Returns the parsed JSON body, if any.
    #[must_use]
    pub const fn json_body(&self) -> Option<&serde_json::Value> {
        self.json_body.as_ref()
    }

    /// Returns the response headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the API error code, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the request id, if the response carried one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message.as_deref().unwrap_or("<empty message>");
        if let Some(request_id) = &self.request_id {
            write!(f, "Request {request_id}: ")?;
        }
        match self.http_status {
            Some(status) => write!(f, "[{status}] {message}"),
            None => f.write_str(message),
        }
    }
}

/// Unified error type for every API call.
#[derive(Debug, Error)]
pub enum KapiError {
    /// Any non-200 status without a more specific kind.
    #[error("{0}")]
    Api(ErrorContext),

    /// The server failed (HTTP 500).
    #[error("{0}")]
    Server(ErrorContext),

    /// The requested resource does not exist (HTTP 404).
    #[error("{0}")]
    NotFound(ErrorContext),

    /// The request was rejected (HTTP 403).
    #[error("{context}")]
    InvalidRequest {
        /// Error details.
        context: ErrorContext,
        /// The offending parameter; for 403 responses this is the raw body.
        param: Option<String>,
    },

    /// An invalid request whose target does not exist.
    ///
    /// A specialization of [`KapiError::InvalidRequest`], distinct from the
    /// plain 404 [`KapiError::NotFound`].
    #[error("{context}")]
    InvalidRequestNotFound {
        /// Error details.
        context: ErrorContext,
        /// The offending parameter.
        param: Option<String>,
    },

    /// The request never produced a response.
    #[error("{context}")]
    Connection {
        /// Error details.
        context: ErrorContext,
        /// Whether repeating the request could succeed.
        should_retry: bool,
        /// The underlying transport failure.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The API key was rejected.
    #[error("{0}")]
    Authentication(ErrorContext),

    /// The API key lacks permission for the operation.
    #[error("{0}")]
    Permission(ErrorContext),

    /// Too many requests.
    #[error("{0}")]
    RateLimit(ErrorContext),

    /// An idempotency key was reused with different parameters.
    #[error("{0}")]
    Idempotency(ErrorContext),

    /// A successful response carried a body that is not valid JSON.
    #[error("{context}")]
    Decode {
        /// Error details.
        context: ErrorContext,
        /// The underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
}

impl KapiError {
    /// Returns the context shared by every error kind.
    #[must_use]
    pub const fn context(&self) -> &ErrorContext {
        match self {
            Self::Api(context)
            | Self::Server(context)
            | Self::NotFound(context)
            | Self::Authentication(context)
            | Self::Permission(context)
            | Self::RateLimit(context)
            | Self::Idempotency(context)
            | Self::InvalidRequest { context, .. }
            | Self::InvalidRequestNotFound { context, .. }
            | Self::Connection { context, .. }
            | Self::Decode { context, .. } => context,
        }
    }

    /// Returns the HTTP status code, if known.
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        self.context().http_status()
    }

    /// Returns the bare message, without status or request id.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        self.context().user_message()
    }

    /// Returns the request id, if known.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.context().request_id()
    }

    /// Returns the `param` of an invalid-request error.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::InvalidRequest { param, .. } | Self::InvalidRequestNotFound { param, .. } => {
                param.as_deref()
            }
            _ => None,
        }
    }

    /// Returns `true` for [`KapiError::InvalidRequest`] and its
    /// [`KapiError::InvalidRequestNotFound`] specialization.
    #[must_use]
    pub const fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. } | Self::InvalidRequestNotFound { .. })
    }

    /// Returns `true` if a connection failure may succeed on a second attempt.
    #[must_use]
    pub const fn should_retry(&self) -> bool {
        matches!(
            self,
            Self::Connection {
                should_retry: true,
                ..
            }
        )
    }
}

impl From<reqwest::Error> for KapiError {
    fn from(error: reqwest::Error) -> Self {
        let should_retry = error.is_connect() || error.is_timeout();
        Self::Connection {
            context: ErrorContext::new(format!("Network error: {error}")),
            should_retry,
            source: Some(error),
        }
    }
}

// Verify KapiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KapiError>();
};
