use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use url::Url;

use super::{Enrollment, MailingList, MailingListError};
use crate::infra::config::BrevoConfig;

const CONTACTS_PATH: &str = "v3/contacts";
const DUPLICATE_CODE: &str = "duplicate_parameter";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateContact<'a> {
    email: &'a str,
    list_ids: [u64; 1],
    update_enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the Brevo contacts API.
#[derive(Clone)]
pub struct BrevoClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
    list_id: u64,
}

impl fmt::Debug for BrevoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrevoClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("list_id", &self.list_id)
            .finish_non_exhaustive()
    }
}

impl BrevoClient {
    pub fn new(config: &BrevoConfig) -> Result<Self, MailingListError> {
        let endpoint = contacts_endpoint(&config.api_url)?;
        let http =
            reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
            list_id: config.list_id,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// `v3/contacts` under `api_url`, keeping any path prefix it carries.
fn contacts_endpoint(api_url: &Url) -> Result<Url, url::ParseError> {
    let mut base = api_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(CONTACTS_PATH)
}

#[async_trait]
impl MailingList for BrevoClient {
    async fn subscribe(
        &self,
        email: &str,
    ) -> Result<Enrollment, MailingListError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header("api-key", &self.api_key)
            .json(&CreateContact {
                email,
                list_ids: [self.list_id],
                update_enabled: true,
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Contact created");
            return Ok(Enrollment::Subscribed);
        }

        // A body that is not JSON is a transport-level failure.
        let body: ErrorBody = response.json().await?;
        if body.code.as_deref() == Some(DUPLICATE_CODE) {
            debug!("Contact already on the list");
            return Ok(Enrollment::AlreadySubscribed);
        }

        warn!(
            status = status.as_u16(),
            code = body.code.as_deref().unwrap_or("-"),
            "Brevo rejected the contact"
        );
        Err(MailingListError::Rejected {
            status: status.as_u16(),
            message: body.message.filter(|message| !message.is_empty()),
        })
    }
}
