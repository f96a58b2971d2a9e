use async_trait::async_trait;
use reqwest::redirect::Policy;

use crate::config::Config;
use crate::core::constants::http_status;
use crate::core::error::{FetchError, Result};

use std::time::Duration;

/// Retrieves the raw body of a script.
#[async_trait]
pub trait FetchContent: Send + Sync {
    async fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError>;
}

/// Fetches over HTTP with a bounded timeout and a browser identity.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.timeout_duration(), config.user_agent())
    }
}

#[async_trait]
impl FetchContent for HttpFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status().as_u16();
        if status != http_status::OK {
            return Err(FetchError::Status(status));
        }

        // Whole body is buffered; scripts are expected to be small.
        let body = response.bytes().await.map_err(FetchError::Transport)?;
        Ok(body.to_vec())
    }
}
