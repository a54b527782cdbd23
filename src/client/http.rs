use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

/// The one call the client makes against the relay. Behind a trait so the
/// session state machine can be driven by a recording stub in tests.
#[async_trait]
pub trait RelayApi: Send + Sync {
    /// Submits an analysis request and returns the extracted result text.
    async fn analyze(&self, image: &str, prompt: &str) -> Result<String>;
}

pub struct HttpRelayClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RelayApi for HttpRelayClient {
    async fn analyze(&self, image: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/api/analyze", self.base_url.trim_end_matches('/'));

        debug!("Submitting analysis request to {}", url);

        let body: Value = self
            .http
            .post(url)
            .json(&json!({ "image": image, "prompt": prompt }))
            .send()
            .await?
            .json()
            .await?;

        // Error envelopes win over status codes: the relay always answers with
        // either a result body or `{ "error": ... }`.
        if let Some(error) = body.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("API Error");
            return Err(Error::relay(message.to_string()));
        }

        body.pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| Error::relay("Malformed response: no message content"))
    }
}
