//! Validation Commands
//!
//! Wire types and transport for the validate/invalidate endpoint.

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};

use crate::mutation::MutationError;

// ========================
// Wire Types
// ========================

/// Form body of a validation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationArgs {
    pub voter_id: String,
    pub campaign_id: u32,
    /// Desired validated state
    pub val: bool,
}

/// Response body. `result` is "success" or anything else on failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationResponse {
    pub result: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl ValidationResponse {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }
}

// ========================
// Transport
// ========================

/// Sends validation requests. Futures are not `Send`: the browser is single-threaded.
#[async_trait(?Send)]
pub trait MutationTransport: Send + Sync {
    async fn post_validation(&self, args: &ValidationArgs) -> Result<ValidationResponse, MutationError>;
}

/// reqwest-backed transport (fetch on wasm)
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    timeout_ms: u32,
}

impl HttpTransport {
    /// `url` must be absolute; the wasm client does not resolve relative URLs.
    pub fn new(url: String, timeout_ms: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            timeout_ms,
        }
    }

    async fn send(&self, args: &ValidationArgs) -> Result<ValidationResponse, MutationError> {
        let response = self
            .client
            .post(&self.url)
            .form(args)
            .send()
            .await
            .map_err(|e| MutationError::Transport(e.to_string()))?;

        response
            .json::<ValidationResponse>()
            .await
            .map_err(|e| MutationError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl MutationTransport for HttpTransport {
    async fn post_validation(&self, args: &ValidationArgs) -> Result<ValidationResponse, MutationError> {
        let request = Box::pin(self.send(args));
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));

        match future::select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(MutationError::Timeout(self.timeout_ms)),
        }
    }
}
