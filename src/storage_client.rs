//! src/storage_client.rs

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use crate::domain::ContactSubmission;

/// Client for the external key-value storage service holding contact
/// submissions. One table, one write operation, no retries.
pub struct StorageClient {
    http_client: Client,
    base_url: String,
    table: String,
    api_token: Secret<String>,
}

impl StorageClient {
    pub fn new(
        base_url: String,
        table: String,
        api_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the storage HTTP client");
        Self {
            http_client,
            base_url,
            table,
            api_token,
        }
    }

    #[tracing::instrument(
        name = "Writing contact submission to the storage table",
        skip(self, submission)
    )]
    pub async fn put(&self, submission: &ContactSubmission) -> Result<(), reqwest::Error> {
        let url = format!("{}/tables/{}/items", self.base_url, self.table);
        let request_body = PutItemRequest {
            item: StorageItem::from(submission),
        };
        self.http_client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_token.expose_secret()),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct PutItemRequest<'a> {
    item: StorageItem<'a>,
}

// Item shape mirrors the storage table's attribute names; absent optional
// attributes are omitted rather than written as nulls.
#[derive(serde::Serialize)]
struct StorageItem<'a> {
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<&'a str>,
}

impl<'a> From<&'a ContactSubmission> for StorageItem<'a> {
    fn from(submission: &'a ContactSubmission) -> Self {
        Self {
            email: submission.email.as_ref(),
            first_name: &submission.first_name,
            last_name: &submission.last_name,
            job_title: submission.job_title.as_deref(),
            phone_number: submission.phone_number.as_deref(),
            company: submission.company.as_deref(),
        }
    }
}
