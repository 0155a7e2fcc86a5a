//! Mailing-list collaborators.

mod brevo;

pub use brevo::BrevoClient;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// How a subscription request ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrollment {
    Subscribed,
    /// The contact already existed; treated as success.
    AlreadySubscribed,
}

impl Enrollment {
    pub fn message(&self) -> &'static str {
        match self {
            Enrollment::Subscribed => "Subscribed successfully!",
            Enrollment::AlreadySubscribed => "You are already subscribed!",
        }
    }
}

#[derive(Error, Debug)]
pub enum MailingListError {
    /// Upstream answered with a non-success status other than a duplicate.
    #[error("upstream rejected the subscription with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid upstream endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Adds an email address to the newsletter list.
///
/// One request per call, no retries.
#[async_trait]
pub trait MailingList: fmt::Debug + Send + Sync {
    async fn subscribe(
        &self,
        email: &str,
    ) -> Result<Enrollment, MailingListError>;
}
