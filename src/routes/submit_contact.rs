//! src/routes/submit_contact.rs

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use serde_json::json;
use crate::domain::{ContactEmail, ContactSubmission};
use crate::storage_client::StorageClient;

#[derive(serde::Deserialize)]
pub struct FormData {
    // Required fields default to empty so an absent field and an empty one
    // fail validation through the same path, with the field named.
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
    job_title: Option<String>,
    phone_number: Option<String>,
    company: Option<String>,
    message: Option<String>,
}

impl TryFrom<FormData> for ContactSubmission {
    type Error = String;

    fn try_from(form: FormData) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        if form.first_name.trim().is_empty() {
            missing.push("first_name");
        }
        if form.last_name.trim().is_empty() {
            missing.push("last_name");
        }
        if form.email.trim().is_empty() {
            missing.push("email");
        }
        if !missing.is_empty() {
            return Err(format!("Required field(s) missing: {}.", missing.join(", ")));
        }
        let email = ContactEmail::parse(form.email.trim().to_owned())?;
        Ok(ContactSubmission {
            email,
            first_name: form.first_name.trim().to_owned(),
            last_name: form.last_name.trim().to_owned(),
            job_title: normalize_optional(form.job_title),
            phone_number: normalize_optional(form.phone_number),
            company: normalize_optional(form.company),
        })
    }
}

fn normalize_optional(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, storage_client),
    fields(
        contact_email = %form.email,
        contact_first_name = %form.first_name,
        contact_last_name = %form.last_name
    )
)]
pub async fn submit_contact(
    form: web::Form<FormData>,
    storage_client: web::Data<StorageClient>,
) -> Result<HttpResponse, SubmitError> {
    if let Some(message) = form.message.as_deref() {
        tracing::info!(contact_message = %message, "Contact form carried a message");
    }
    let submission: ContactSubmission = form
        .0
        .try_into()
        .map_err(SubmitError::ValidationError)?;
    storage_client
        .put(&submission)
        .await
        .context("Failed to write the submission to the storage service")
        .map_err(SubmitError::StorageError)?;
    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Form submitted successfully!"
    })))
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    ValidationError(String),
    // Fixed message: storage failures must not leak submission content or
    // collaborator details to the caller.
    #[error("Failed to store the contact submission.")]
    StorageError(#[source] anyhow::Error),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmitError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SubmitError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
