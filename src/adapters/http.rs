use crate::core::contact::{ContactSubmission, RelayResponse, DEFAULT_FORM_ENDPOINT};
use crate::core::FormRelay;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Posts the contact form to a hosted form relay the way a browser would:
/// one url-encoded POST, no extra headers, no retry.
#[derive(Debug, Clone)]
pub struct HttpFormRelay {
    client: Client,
    endpoint: String,
}

impl HttpFormRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpFormRelay {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_ENDPOINT)
    }
}

#[async_trait]
impl FormRelay for HttpFormRelay {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn submit(&self, submission: &ContactSubmission) -> Result<RelayResponse> {
        submission.validate()?;

        tracing::debug!("Posting contact form to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .form(&submission.fields()[..])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Form relay response status: {}", status);
        if !status.is_success() {
            tracing::warn!("Form relay answered {}, leaving it to the relay", status);
        }

        Ok(RelayResponse {
            status: status.as_u16(),
            final_url: response.url().to_string(),
        })
    }
}
