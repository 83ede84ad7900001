//! Availability resource implementation.
//!
//! Availability documents are addressed by a single name:
//! `avail/<name>`.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::clients::KapiError;
use crate::config::KapiConfig;
use crate::rest::{ApiObject, ApiResource, Fetchable, Listable, Parsed, PathSpec, Updateable};

/// An availability document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability(ApiObject);

impl Availability {
    /// Lists every availability document.
    ///
    /// # Errors
    ///
    /// Returns a [`KapiError`] if the request fails.
    pub async fn list(config: &KapiConfig) -> Result<Parsed<Self>, KapiError> {
        Self::list_at(config, &PathSpec::new()).await
    }

    /// Fetches the availability document named `avail`.
    ///
    /// # Errors
    ///
    /// Returns [`KapiError::NotFound`] for an unknown name.
    pub async fn fetch(config: &KapiConfig, avail: &str) -> Result<Parsed<Self>, KapiError> {
        Self::fetch_at(config, &PathSpec::new().segment(avail)).await
    }

    /// Uploads `src` as the availability document named `avail`.
    ///
    /// # Errors
    ///
    /// Returns [`KapiError::InvalidRequest`] when the upload is refused.
    pub async fn upload(
        config: &KapiConfig,
        avail: &str,
        src: impl Into<String>,
    ) -> Result<Parsed<Self>, KapiError> {
        Self::upload_to(config, &PathSpec::new().segment(avail), src).await
    }

    /// The owning personality, from `meta.personality`.
    #[must_use]
    pub fn personality(&self) -> Option<&str> {
        self.0.get_str("meta.personality")
    }

    /// The document name, from `meta.name`.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("meta.name")
    }

    /// The availability body, from the `avail` field.
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

impl ApiResource for Availability {
    const OBJECT_NAME: &'static str = "avail";
}

impl Listable for Availability {}
impl Fetchable for Availability {}
impl Updateable for Availability {}

impl From<ApiObject> for Availability {
    fn from(object: ApiObject) -> Self {
        Self(object)
    }
}

impl Deref for Availability {
    type Target = ApiObject;

    fn deref(&self) -> &ApiObject {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiBase, ApiKey};
    use serde_json::json;

    #[test]
    fn test_fetch_url_is_segment_only() {
        let config = KapiConfig::builder()
            .api_key(ApiKey::new("k").unwrap())
            .api_base(ApiBase::new("https://example.com/api").unwrap())
            .build()
            .unwrap();
        let path = PathSpec::new().segment("weekdays");
        assert_eq!(
            Availability::gen_url(&config, &path, &[]),
            "https://example.com/api/avail/weekdays"
        );
    }

    #[test]
    fn test_accessors() {
        let avail = Availability::from(ApiObject::from(json!({
            "meta": {"personality": "me", "name": "weekdays"},
            "avail": {"mon": ["09:00-17:00"]}
        })));
        assert_eq!(Availability::OBJECT_NAME, "avail");
        assert_eq!(avail.name(), Some("weekdays"));
        assert_eq!(avail.personality(), Some("me"));
        assert_eq!(avail.document().unwrap().get_str("mon.0"), Some("09:00-17:00"));
        assert_eq!(avail.into_inner()["meta"]["name"], "weekdays");
    }
}
