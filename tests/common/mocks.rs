#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use vision_relay::{Error, Result, client::RelayApi, upstream::UpstreamClient};

pub enum UpstreamBehavior {
    Succeed(Value),
    FailStatus { status: u16, body: Value },
    FailTransport(String),
}

/// Recording stub for the relay's upstream seam.
pub struct MockUpstreamClient {
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    behavior: UpstreamBehavior,
}

impl MockUpstreamClient {
    pub fn succeeding(body: Value) -> Self {
        Self::with_behavior(UpstreamBehavior::Succeed(body))
    }

    pub fn failing_with_status(status: u16, body: Value) -> Self {
        Self::with_behavior(UpstreamBehavior::FailStatus { status, body })
    }

    pub fn failing_with_transport(message: impl Into<String>) -> Self {
        Self::with_behavior(UpstreamBehavior::FailTransport(message.into()))
    }

    fn with_behavior(behavior: UpstreamBehavior) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            behavior,
        }
    }
}

#[async_trait]
impl UpstreamClient for MockUpstreamClient {
    async fn create_completion(&self, image: &str, prompt: &str) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((image.to_string(), prompt.to_string()));

        match &self.behavior {
            UpstreamBehavior::Succeed(body) => Ok(body.clone()),
            UpstreamBehavior::FailStatus { status, body } => Err(Error::Upstream {
                status: *status,
                body: body.clone(),
            }),
            UpstreamBehavior::FailTransport(message) => Err(Error::internal(message.clone())),
        }
    }
}

pub enum RelayBehavior {
    Succeed(String),
    Fail(String),
}

/// Recording stub for the client's relay seam.
pub struct MockRelayClient {
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    behavior: RelayBehavior,
}

impl MockRelayClient {
    pub fn succeeding(text: impl Into<String>) -> Self {
        Self::with_behavior(RelayBehavior::Succeed(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behavior(RelayBehavior::Fail(message.into()))
    }

    fn with_behavior(behavior: RelayBehavior) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            behavior,
        }
    }
}

#[async_trait]
impl RelayApi for MockRelayClient {
    async fn analyze(&self, image: &str, prompt: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((image.to_string(), prompt.to_string()));

        match &self.behavior {
            RelayBehavior::Succeed(text) => Ok(text.clone()),
            RelayBehavior::Fail(message) => Err(Error::relay(message.clone())),
        }
    }
}
