pub mod formspree;
pub mod validation;

use async_trait::async_trait;

use crate::models::{ContactForm, FormKind};

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully. We'll get back to you within 24 hours.";

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("no endpoint configured for the {0} form")]
    NotConfigured(&'static str),

    #[error("{}", .0.join(", "))]
    Rejected(Vec<String>),

    #[error("Oops! There was a problem submitting your form.")]
    Failed,

    #[error("Network error. Please check your connection and try again.")]
    Network,
}

/// Delivers a validated form to the third-party collection endpoint.
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(&self, kind: FormKind, form: &ContactForm) -> Result<(), SubmissionError>;
}
