//! src/domain/contact_submission.rs

use crate::domain::contact_email::ContactEmail;

#[derive(Debug)]
pub struct ContactSubmission {
    pub email: ContactEmail,
    pub first_name: String,
    pub last_name: String,
    pub job_title: Option<String>,
    pub phone_number: Option<String>,
    pub company: Option<String>,
}
