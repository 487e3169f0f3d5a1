use std::sync::Arc;

use elics_notification::Dispatcher;
use elics_shared::{DispatchResult, InquiryDraft};
use url::Url;

/// Transport between the form and the server action.
///
/// `Err` stands for a transport failure; a rejected or undelivered inquiry is
/// still an `Ok` carrying `delivered: false`.
#[async_trait::async_trait]
pub trait DispatchClient: Send + Sync {
    async fn dispatch(&self, draft: &InquiryDraft) -> anyhow::Result<DispatchResult>;
}

#[async_trait::async_trait]
impl<T: DispatchClient + ?Sized> DispatchClient for Arc<T> {
    async fn dispatch(&self, draft: &InquiryDraft) -> anyhow::Result<DispatchResult> {
        (**self).dispatch(draft).await
    }
}

#[async_trait::async_trait]
impl DispatchClient for Dispatcher {
    async fn dispatch(&self, draft: &InquiryDraft) -> anyhow::Result<DispatchResult> {
        Ok(Dispatcher::dispatch(self, draft).await)
    }
}

/// Posts the draft form-encoded to `POST {base_url}/contact`.
#[derive(Clone)]
pub struct HttpDispatchClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpDispatchClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let endpoint = Url::parse(base_url)?.join("contact")?;

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl DispatchClient for HttpDispatchClient {
    async fn dispatch(&self, draft: &InquiryDraft) -> anyhow::Result<DispatchResult> {
        let result = self
            .http
            .post(self.endpoint.clone())
            .form(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_targets_the_contact_action() {
        let client = HttpDispatchClient::new("http://127.0.0.1:3000").unwrap();
        assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:3000/contact");

        let client = HttpDispatchClient::new("https://elics.example/site/").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://elics.example/site/contact"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(HttpDispatchClient::new("not a url").is_err());
    }
}
