//! Configuration types for the kapi SDK.
//!
//! The main types in this module are:
//!
//! - [`KapiConfig`]: credentials and transport settings shared by every call
//! - [`KapiConfigBuilder`]: a builder for constructing [`KapiConfig`] instances
//! - [`ApiKey`]: a validated API key with masked debug output
//! - [`ApiBase`]: a validated API base URL
//!
//! Configuration is instance-based. Build a [`KapiConfig`] once at startup
//! and pass it to every resource call.
//!
//! # Example
//!
//! ```rust
//! use kapi::{ApiBase, ApiKey, KapiConfig};
//!
//! let config = KapiConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_base(ApiBase::new("https://example.com/api").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base().as_ref(), "https://example.com/api");
//! ```

mod newtypes;

pub use newtypes::{ApiBase, ApiKey};

use std::time::Duration;

use crate::error::ConfigError;

/// Default connect timeout applied to every request.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default read timeout applied to every request.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Credentials and transport settings for the kapi SDK.
///
/// `KapiConfig` is read-only once built. Use [`KapiConfig::with_api_key`]
/// to issue a call with a different key without mutating the original.
#[derive(Clone, Debug)]
pub struct KapiConfig {
    api_key: ApiKey,
    api_base: ApiBase,
    connect_timeout: Duration,
    read_timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl KapiConfig {
    /// Creates a new builder for constructing a `KapiConfig`.
    #[must_use]
    pub fn builder() -> KapiConfigBuilder {
        KapiConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// Returns the connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the read timeout.
    #[must_use]
    pub const fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns a copy of this configuration that authenticates with `key`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kapi::{ApiBase, ApiKey, KapiConfig};
    ///
    /// let config = KapiConfig::builder()
    ///     .api_key(ApiKey::new("default-key").unwrap())
    ///     .api_base(ApiBase::new("https://example.com/api").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let other = config.with_api_key(ApiKey::new("other-key").unwrap());
    /// assert_eq!(other.api_key().as_ref(), "other-key");
    /// assert_eq!(config.api_key().as_ref(), "default-key");
    /// ```
    #[must_use]
    pub fn with_api_key(&self, key: ApiKey) -> Self {
        Self {
            api_key: key,
            ..self.clone()
        }
    }
}

// Verify KapiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KapiConfig>();
};

/// Builder for constructing [`KapiConfig`] instances.
///
/// `api_key` and `api_base` are required.
///
/// # Defaults
///
/// - `connect_timeout`: 5 seconds
/// - `read_timeout`: 5 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct KapiConfigBuilder {
    api_key: Option<ApiKey>,
    api_base: Option<ApiBase>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl KapiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn api_base(mut self, base: ApiBase) -> Self {
        self.api_base = Some(base);
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the read timeout.
    #[must_use]
    pub const fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`KapiConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `api_base` are not set.
    pub fn build(self) -> Result<KapiConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_base = self
            .api_base
            .ok_or(ConfigError::MissingRequiredField { field: "api_base" })?;

        Ok(KapiConfig {
            api_key,
            api_base,
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            read_timeout: self.read_timeout.unwrap_or(DEFAULT_READ_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
