use async_trait::async_trait;
use serde::Deserialize;

use super::{FormSubmitter, SubmissionError};
use crate::models::{ContactForm, FormKind};

pub struct FormspreeSubmitter {
    contact_url: String,
    estimate_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Deserialize)]
struct ErrorItem {
    message: String,
}

impl FormspreeSubmitter {
    pub fn new(contact_url: String, estimate_url: String) -> Self {
        Self {
            contact_url,
            estimate_url,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, kind: FormKind) -> &str {
        match kind {
            FormKind::Contact => &self.contact_url,
            FormKind::Estimate => &self.estimate_url,
        }
    }
}

#[async_trait]
impl FormSubmitter for FormspreeSubmitter {
    async fn submit(&self, kind: FormKind, form: &ContactForm) -> Result<(), SubmissionError> {
        let url = self.endpoint(kind);
        if url.is_empty() {
            return Err(SubmissionError::NotConfigured(kind.as_str()));
        }

        let resp = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, form = kind.as_str(), "form submission failed");
                SubmissionError::Network
            })?;

        if resp.status().is_success() {
            return Ok(());
        }

        let status = resp.status();
        let messages = resp
            .json::<ErrorBody>()
            .await
            .map(|body| body.errors.into_iter().map(|e| e.message).collect::<Vec<_>>())
            .unwrap_or_default();

        tracing::warn!(%status, form = kind.as_str(), "form endpoint rejected submission");

        if messages.is_empty() {
            Err(SubmissionError::Failed)
        } else {
            Err(SubmissionError::Rejected(messages))
        }
    }
}
