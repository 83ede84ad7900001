//! Resume resource implementation.
//!
//! Resumes live under a personality: `resume/<personality>/<name>`.
//! Fetching with no name returns every resume under the personality.
//!
//! # Example
//!
//! ```rust,ignore
//! use kapi::Resume;
//!
//! for resume in &Resume::list(&config).await? {
//!     println!("{}/{}", resume.personality().unwrap_or("?"), resume.name().unwrap_or("?"));
//! }
//!
//! let cv = Resume::fetch(&config, "me", Some("cv")).await?;
//! Resume::upload(&config, "me", "cv", r#"{"resume": {}}"#).await?;
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::clients::KapiError;
use crate::config::KapiConfig;
use crate::rest::{ApiObject, ApiResource, Fetchable, Listable, Parsed, PathSpec, Updateable};

/// A resume document.
///
/// Derefs to the underlying [`ApiObject`] for dotted access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resume(ApiObject);

impl Resume {
    /// Lists every resume visible to the configured key.
    ///
    /// # Errors
    ///
    /// Returns a [`KapiError`] if the request fails.
    pub async fn list(config: &KapiConfig) -> Result<Parsed<Self>, KapiError> {
        Self::list_at(config, &PathSpec::new()).await
    }

    /// Fetches `resume` under `personality`, or all of the personality's
    /// resumes when `resume` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`KapiError::NotFound`] for an unknown personality or name.
    pub async fn fetch(
        config: &KapiConfig,
        personality: &str,
        resume: Option<&str>,
    ) -> Result<Parsed<Self>, KapiError> {
        Self::fetch_at(config, &PathSpec::new().with(personality, resume)).await
    }

    /// Uploads `src` as `resume` under `personality`.
    ///
    /// `src` is sent unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`KapiError::InvalidRequest`] when the upload is refused.
    pub async fn upload(
        config: &KapiConfig,
        personality: &str,
        resume: &str,
        src: impl Into<String>,
    ) -> Result<Parsed<Self>, KapiError> {
        Self::upload_to(config, &PathSpec::new().with(personality, Some(resume)), src).await
    }

    /// The owning personality, from `meta.personality`.
    #[must_use]
    pub fn personality(&self) -> Option<&str> {
        self.0.get_str("meta.personality")
    }

    /// The resume name, from `meta.name`.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("meta.name")
    }

    /// The resume body, from the `resume` field.
    #[must_use]
    pub fn document(&self) -> Option<ApiObject> {
        self.0.get_object(Self::OBJECT_NAME)
    }

    /// Unwraps the underlying object.
    #[must_use]
    pub fn into_inner(self) -> ApiObject {
        self.0
    }
}

impl ApiResource for Resume {
    const OBJECT_NAME: &'static str = "resume";
}

impl Listable for Resume {}
impl Fetchable for Resume {}
impl Updateable for Resume {}

impl From<ApiObject> for Resume {
    fn from(object: ApiObject) -> Self {
        Self(object)
    }
}

impl Deref for Resume {
    type Target = ApiObject;

    fn deref(&self) -> &ApiObject {
        &self.0
    }
}
