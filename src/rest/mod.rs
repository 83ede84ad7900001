//! REST resource infrastructure for the kapi API.
//!
//! - [`ApiObject`]: a schema-less JSON document with dotted-path access
//! - [`PathSpec`] and [`build_url`]: hierarchical URL building
//! - [`Parsed`]: a one-or-many response payload
//! - [`ApiResource`] and the capability traits ([`Listable`], [`Fetchable`],
//!   [`Updateable`], [`Deleteable`], [`Createable`])
//! - [`resources`]: the concrete resource types
//!
//! # Example
//!
//! ```rust,ignore
//! use kapi::rest::resources::Resume;
//!
//! let resumes = Resume::fetch(&config, "me", None).await?;
//! for resume in &resumes {
//!     println!("{}", resume.json_pretty());
//! }
//! ```

mod object;
mod path;
mod resource;
mod response;

pub mod resources;

pub use object::ApiObject;
pub use path::{build_url, PathSpec};
pub use resource::{ApiResource, Createable, Deleteable, Fetchable, Listable, Updateable};
pub use response::Parsed;
