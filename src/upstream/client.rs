use super::types::ChatCompletionRequest;
use crate::{Error, Result, config::UpstreamConfig};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

/// Seam between the request handlers and the inference API. The relay makes
/// exactly one best-effort call per request: no retry, no backoff.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Forwards one analysis request and returns the upstream response body
    /// verbatim.
    async fn create_completion(&self, image: &str, prompt: &str) -> Result<Value>;
}

pub struct HttpUpstreamClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpUpstreamClient {
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn create_completion(&self, image: &str, prompt: &str) -> Result<Value> {
        let request = ChatCompletionRequest::vision(
            &self.config.model,
            prompt,
            image,
            self.config.max_tokens,
            self.config.temperature,
        );

        debug!(
            "Forwarding completion request to {} with model {}",
            self.completions_url(),
            self.config.model
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Keep whatever error body the API produced so the relay can pass
            // it through to the caller.
            let body = match response.json::<Value>().await {
                Ok(body) => body,
                Err(_) => json!({ "message": format!("Upstream returned status {}", status) }),
            };
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.json::<Value>().await?;

        debug!("Received upstream completion response");
        Ok(body)
    }
}
