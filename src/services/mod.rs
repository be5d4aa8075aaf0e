pub mod http;

use async_trait::async_trait;

/// Issues GET requests against the pet clinic backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiRequester: Send + Sync {
    /// Fetches `path`, relative to the backend base url, and returns the
    /// parsed json body.
    async fn request_json(&self, path: &str) -> anyhow::Result<serde_json::Value>;
}

pub type ImplApiRequester = Box<dyn ApiRequester>;
