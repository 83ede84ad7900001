//! Capability traits for REST resources.
//!
//! A resource type implements [`ApiResource`] to declare where it lives, and
//! then opts into verbs by implementing the capability traits. Each verb has
//! a default implementation, so opting in is an empty `impl` block:
//!
//! - [`Listable`]: GET a collection
//! - [`Fetchable`]: GET a path under the resource
//! - [`Updateable`]: POST a raw body to a path under the resource
//! - [`Deleteable`], [`Createable`]: declared with no behavior yet
//!
//! Every call builds its own [`HttpClient`] from the given [`KapiConfig`],
//! issues exactly one request and returns any error unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use kapi::rest::{ApiObject, ApiResource, Fetchable, Listable, PathSpec};
//!
//! #[derive(Debug)]
//! struct Contact(ApiObject);
//!
//! impl From<ApiObject> for Contact {
//!     fn from(object: ApiObject) -> Self {
//!         Self(object)
//!     }
//! }
//!
//! impl ApiResource for Contact {
//!     const OBJECT_NAME: &'static str = "contact";
//! }
//!
//! impl Listable for Contact {}
//! impl Fetchable for Contact {}
//!
//! let contacts = Contact::list_at(&config, &PathSpec::new()).await?;
//! ```

use crate::clients::{HttpClient, KapiError};
use crate::config::KapiConfig;
use crate::rest::{build_url, ApiObject, Parsed, PathSpec};

/// A REST-addressable resource type.
///
/// `OBJECT_NAME` is the first path segment after the API base, e.g.
/// `"resume"` in `https://example.com/api/resume/me/cv`.
pub trait ApiResource: From<ApiObject> + Sized {
    /// The resource's path prefix.
    const OBJECT_NAME: &'static str;

    /// Builds the URL for `path` under this resource.
    #[must_use]
    fn gen_url(config: &KapiConfig, path: &PathSpec, trailing: &[&str]) -> String {
        build_url(
            config.api_base().as_ref(),
            Self::OBJECT_NAME,
            path,
            trailing,
        )
    }
}

/// Resources that can be listed.
#[allow(async_fn_in_trait)]
pub trait Listable: ApiResource {
    /// Lists the resources under `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`KapiError`] if the request fails, the status is not 200,
    /// or the body is not JSON.
    async fn list_at(config: &KapiConfig, path: &PathSpec) -> Result<Parsed<Self>, KapiError> {
        let url = Self::gen_url(config, path, &[]);
        let mut client = HttpClient::new(config)?;
        let response = client.get(&url).await?;
        Ok(Parsed::from_value(response.json()?))
    }
}

/// Resources that can be fetched.
#[allow(async_fn_in_trait)]
pub trait Fetchable: ApiResource {
    /// Fetches the resource(s) at `path`.
    ///
    /// An array payload yields one instance per element.
    ///
    /// # Errors
    ///
    /// Returns a [`KapiError`] if the request fails, the status is not 200,
    /// or the body is not JSON.
    async fn fetch_at(config: &KapiConfig, path: &PathSpec) -> Result<Parsed<Self>, KapiError> {
        let url = Self::gen_url(config, path, &[]);
        let mut client = HttpClient::new(config)?;
        let response = client.get(&url).await?;
        Ok(Parsed::from_value(response.json()?))
    }
}

/// Resources that accept uploads.
#[allow(async_fn_in_trait)]
pub trait Updateable: ApiResource {
    /// POSTs `body` verbatim to `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`KapiError`] if the request fails, the status is not 200,
    /// or the body is not JSON.
    async fn upload_to(
        config: &KapiConfig,
        path: &PathSpec,
        body: impl Into<String>,
    ) -> Result<Parsed<Self>, KapiError> {
        let url = Self::gen_url(config, path, &[]);
        let mut client = HttpClient::new(config)?;
        let response = client.post(&url, Some(body.into()), None).await?;
        Ok(Parsed::from_value(response.json()?))
    }
}

/// Resources that can be deleted. No operations yet.
pub trait Deleteable: ApiResource {}

/// Resources that can be created. No operations yet.
pub trait Createable: ApiResource {}
