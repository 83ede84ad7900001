//! Raw HTTP responses as returned by the executor.

use std::collections::HashMap;

use crate::clients::errors::{ErrorContext, KapiError};

/// A raw HTTP response.
///
/// The body is kept as text; call [`HttpResponse::json`] to parse it.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The response body as text.
    pub text: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, text: String) -> Self {
        Self {
            code,
            headers,
            text,
        }
    }

    /// Returns `true` for HTTP 200.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Returns the first value of the named header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the request id from `request-id`, falling back to `x-request-id`.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("request-id")
            .or_else(|| self.header("x-request-id"))
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`KapiError::Decode`] if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, KapiError> {
        serde_json::from_str(&self.text).map_err(|source| KapiError::Decode {
            context: self.error_context(format!("Invalid JSON in response body: {source}")),
            source,
        })
    }

    /// Returns the `detail` string of a JSON error body, if present.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(&self.text)
            .ok()?
            .get("detail")?
            .as_str()
            .map(ToString::to_string)
    }

    /// Builds an [`ErrorContext`] describing this response.
    ///
    /// Repeated headers are combined into one comma-separated value.
    #[must_use]
    pub fn error_context(&self, message: impl Into<String>) -> ErrorContext {
        let headers = self
            .headers
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(name, values)| (name.as_str(), values.join(", ")));

        let mut context = ErrorContext::new(message)
            .with_status(self.code)
            .with_body(self.text.clone())
            .with_headers(headers);

        if let Ok(json) = serde_json::from_str(&self.text) {
            context = context.with_json_body(json);
        }
        context
    }
}
