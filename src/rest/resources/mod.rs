//! Resource types exposed by the API.
//!
//! - [`Resume`]: resumes grouped by personality (`resume/<personality>/<name>`)
//! - [`Availability`]: named availability documents (`avail/<name>`)
//!
//! Both support list, fetch and upload.

mod availability;
mod resume;

pub use availability::Availability;
pub use resume::Resume;
