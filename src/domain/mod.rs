//! src/domain/mod.rs

pub mod contact_email;
pub mod contact_submission;

pub use contact_email::ContactEmail;
pub use contact_submission::ContactSubmission;
