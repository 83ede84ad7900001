//! # kapi
//!
//! A Rust SDK for the "This is Not LinkedIn" personal-data API: resumes,
//! availability and other documents owned by a personality.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`KapiConfig`] and [`KapiConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - An authenticated request executor ([`HttpClient`]) that maps every
//!   non-200 status to a typed [`KapiError`]
//! - Declarative resources built from capability traits, with URLs
//!   generated from ordered [`PathSpec`]s
//! - Schema-less [`ApiObject`] documents with dotted-path access
//!
//! ## Quick Start
//!
//! ```rust
//! use kapi::{ApiBase, ApiKey, KapiConfig};
//!
//! let config = KapiConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_base(ApiBase::new("https://example.com/api").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base().as_ref(), "https://example.com/api");
//! ```
//!
//! ## Fetching Resources
//!
//! ```rust,ignore
//! use kapi::{KapiError, Resume};
//!
//! match Resume::fetch(&config, "me", Some("cv")).await {
//!     Ok(parsed) => {
//!         for resume in &parsed {
//!             println!("{}", resume.json_pretty());
//!         }
//!     }
//!     Err(KapiError::NotFound(context)) => eprintln!("{context}"),
//!     Err(e) => return Err(e.into()),
//! }
//!
//! // Use a different key for one call
//! let other = config.with_api_key(ApiKey::new("other-key")?);
//! let resumes = Resume::list(&other).await?;
//! ```
//!
//! ## Thread Safety
//!
//! All configuration, error and resource types are `Send + Sync`. Each call
//! builds its own [`HttpClient`], so a single [`KapiConfig`] can be shared
//! freely.

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiBase, ApiKey, KapiConfig, KapiConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{DataType, ErrorContext, HttpClient, HttpMethod, HttpResponse, KapiError};

// Re-export REST types
pub use rest::resources::{Availability, Resume};
pub use rest::{
    build_url, ApiObject, ApiResource, Createable, Deleteable, Fetchable, Listable, Parsed,
    PathSpec, Updateable,
};
