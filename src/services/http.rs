use crate::{config, consts, utils};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;

/// [`ApiRequester`](crate::services::ApiRequester) backed by `reqwest`.
#[derive(Clone)]
pub struct HttpRequester {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl HttpRequester {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Builds a requester for the configured backend
    pub fn from_config() -> anyhow::Result<Self> {
        let app_config = config::APP_CONFIG
            .get()
            .context("failed to get app config")?;

        Ok(Self::new(app_config.api_base_url.clone()))
    }
}

#[async_trait]
impl crate::services::ApiRequester for HttpRequester {
    async fn request_json(&self, path: &str) -> anyhow::Result<serde_json::Value> {
        let endpoint = utils::url(&self.base_url, path);
        debug!("GET {endpoint}");

        let response = self
            .client
            .get(&endpoint)
            .header(reqwest::header::ACCEPT, consts::ACCEPT_JSON)
            .send()
            .await
            .with_context(|| format!("failed to send request to {endpoint}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            anyhow::bail!("GET {endpoint} returned error status {status}: {body}");
        }

        response
            .json::<serde_json::Value>()
            .await
            .with_context(|| format!("failed to parse json body from {endpoint}"))
    }
}
