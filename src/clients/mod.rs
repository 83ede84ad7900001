//! HTTP client layer for the kapi API.
//!
//! # Overview
//!
//! - [`HttpClient`]: the request executor (Basic auth, timeouts, status check)
//! - [`HttpResponse`]: a raw response retained by the executor
//! - [`HttpMethod`] and [`DataType`]: request method and content types
//! - [`KapiError`] and [`ErrorContext`]: the error taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use kapi::clients::{HttpClient, KapiError};
//!
//! let mut client = HttpClient::new(&config)?;
//! match client.get("https://example.com/api/resume/me").await {
//!     Ok(response) => println!("{}", response.text),
//!     Err(KapiError::NotFound(context)) => println!("missing: {context}"),
//!     Err(e) => println!("failed: {e}"),
//! }
//! ```
//!
//! # Retry Behavior
//!
//! None. Every call issues exactly one request and returns the first
//! failure to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{decode_body, ErrorContext, KapiError, UNDECODABLE_BODY};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod};
pub use http_response::HttpResponse;
