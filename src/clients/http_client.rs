//! Request executor for the kapi API.
//!
//! This module provides the [`HttpClient`] type, which issues authenticated
//! GET and POST requests and maps every response through a single status
//! check.

use std::collections::HashMap;

use crate::clients::errors::KapiError;
use crate::clients::http_request::{DataType, HttpMethod};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiKey, KapiConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Authenticated request executor.
///
/// Each client owns its own connection state and applies HTTP Basic auth
/// (API key as username, empty password) to every request. The most recent
/// raw response is retained and available through
/// [`HttpClient::last_response`].
///
/// Requests are never retried: any status other than 200 is returned as a
/// [`KapiError`].
///
/// # Example
///
/// ```rust,ignore
/// use kapi::clients::HttpClient;
///
/// let mut client = HttpClient::new(&config)?;
/// let response = client.get("https://example.com/api/resume").await?;
/// println!("{}", response.text);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    api_key: ApiKey,
    default_headers: HashMap<String, String>,
    current: Option<HttpResponse>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new executor using the credentials and timeouts in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`KapiError::Connection`] if the underlying HTTP client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &KapiConfig) -> Result<Self, KapiError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("{user_agent_prefix}kapi v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(config.connect_timeout())
            .read_timeout(config.read_timeout())
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key().clone(),
            default_headers,
            current: None,
        })
    }

    /// Returns the API key used for authentication.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the most recent raw response, whatever its status.
    #[must_use]
    pub const fn last_response(&self) -> Option<&HttpResponse> {
        self.current.as_ref()
    }

    /// Sends a GET request to `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`KapiError`] for network failures and for any status other
    /// than 200 (see [`HttpClient::check_status`]).
    pub async fn get(&mut self, url: &str) -> Result<&HttpResponse, KapiError> {
        self.send(HttpMethod::Get, url, None).await
    }

    /// Sends a POST request to `url`.
    ///
    /// `data` is sent verbatim as the body. When `data` is `None`, `json` is
    /// serialized instead. The request declares a JSON content type and
    /// accepts plain text.
    ///
    /// # Errors
    ///
    /// Returns a [`KapiError`] for network failures and for any status other
    /// than 200 (see [`HttpClient::check_status`]).
    pub async fn post(
        &mut self,
        url: &str,
        data: Option<String>,
        json: Option<&serde_json::Value>,
    ) -> Result<&HttpResponse, KapiError> {
        let body = data.or_else(|| json.map(ToString::to_string));
        self.send(HttpMethod::Post, url, body).await
    }

    async fn send(
        &mut self,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
    ) -> Result<&HttpResponse, KapiError> {
        tracing::debug!("{} {}", method, url);

        let mut req_builder = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self
                .client
                .post(url)
                .header("Content-Type", DataType::Json.as_content_type())
                .header("Accept", DataType::PlainText.as_content_type()),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        req_builder = req_builder.basic_auth(self.api_key.as_ref(), Some(""));

        if let Some(body) = body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let bytes = res.bytes().await?;
        let text = crate::clients::errors::decode_body(&bytes);

        tracing::debug!("{} {} -> {}", method, url, code);

        let response = self.current.insert(HttpResponse::new(code, headers, text));
        Self::check_status(response)?;
        Ok(&*response)
    }

    /// Maps a response status to success or the matching [`KapiError`].
    ///
    /// - 200: success
    /// - 500: [`KapiError::Server`] with the raw body as message
    /// - 404: [`KapiError::NotFound`] with the `detail` message
    /// - 403: [`KapiError::InvalidRequest`] with the `detail` message and the
    ///   raw body as `param`
    /// - anything else: [`KapiError::Api`] with the `detail` message
    ///
    /// Error bodies that are not JSON, or lack a string `detail`, fall back
    /// to the raw body as message.
    ///
    /// # Errors
    ///
    /// Returns the mapped [`KapiError`] for every status other than 200.
    pub fn check_status(response: &HttpResponse) -> Result<(), KapiError> {
        match response.code {
            200 => Ok(()),
            500 => Err(KapiError::Server(
                response.error_context(response.text.clone()),
            )),
            code => {
                let message = response.detail().unwrap_or_else(|| {
                    tracing::warn!(
                        "HTTP {} response has no JSON 'detail' field, using raw body",
                        code
                    );
                    response.text.clone()
                });
                let context = response.error_context(message);

                Err(match code {
                    404 => KapiError::NotFound(context),
                    403 => KapiError::InvalidRequest {
                        context,
                        param: Some(response.text.clone()),
                    },
                    _ => KapiError::Api(context),
                })
            }
        }
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiBase;

    fn config() -> KapiConfig {
        KapiConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .api_base(ApiBase::new("https://example.com/api").unwrap())
            .build()
            .unwrap()
    }

    fn response(code: u16, text: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), text.to_string())
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new(&config()).unwrap();
        assert_eq!(client.api_key().as_ref(), "test-key");
        assert!(client.last_response().is_none());
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&config()).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("kapi v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = KapiConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .api_base(ApiBase::new("https://example.com/api").unwrap())
            .user_agent_prefix("kapi-cli/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("kapi-cli/1.0 | "));
    }

    #[test]
    fn test_check_status_200_is_ok() {
        assert!(HttpClient::check_status(&response(200, "{}")).is_ok());
    }

    #[test]
    fn test_check_status_500_uses_raw_text() {
        let err = HttpClient::check_status(&response(500, "Internal Server Error")).unwrap_err();
        assert!(matches!(err, KapiError::Server(_)));
        assert_eq!(err.user_message(), Some("Internal Server Error"));
        assert_eq!(err.to_string(), "[500] Internal Server Error");
    }

    #[test]
    fn test_check_status_500_does_not_parse_json() {
        let body = r#"{"detail": "boom"}"#;
        let err = HttpClient::check_status(&response(500, body)).unwrap_err();
        assert_eq!(err.user_message(), Some(body));
    }

    #[test]
    fn test_check_status_404_uses_detail() {
        let err =
            HttpClient::check_status(&response(404, r#"{"detail": "no such resume"}"#)).unwrap_err();
        assert!(matches!(err, KapiError::NotFound(_)));
        assert_eq!(err.user_message(), Some("no such resume"));
    }

    #[test]
    fn test_check_status_403_param_is_raw_body() {
        let body = r#"{"detail": "forbidden", "extra": true}"#;
        let err = HttpClient::check_status(&response(403, body)).unwrap_err();
        assert!(err.is_invalid_request());
        assert_eq!(err.user_message(), Some("forbidden"));
        assert_eq!(err.param(), Some(body));
    }

    #[test]
    fn test_check_status_other_codes_are_generic() {
        for code in [201, 204, 400, 401, 422, 429, 502, 503] {
            let err = HttpClient::check_status(&response(code, r#"{"detail": "nope"}"#))
                .unwrap_err();
            assert!(matches!(err, KapiError::Api(_)), "code {code}");
            assert_eq!(err.http_status(), Some(code));
        }
    }

    #[test]
    fn test_check_status_non_json_error_falls_back_to_raw_body() {
        let err = HttpClient::check_status(&response(404, "<html>gone</html>")).unwrap_err();
        assert!(matches!(err, KapiError::NotFound(_)));
        assert_eq!(err.user_message(), Some("<html>gone</html>"));
    }
}
