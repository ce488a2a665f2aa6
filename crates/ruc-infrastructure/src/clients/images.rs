//! Image loader
//!
//! Fetches portrait bytes by URL through the shared HTTP client, with an
//! in-process cache so repeated loads of the same URL are served without
//! touching the network.

use std::sync::Arc;

use moka::sync::Cache;
use ruc_domain::error::{Error, Result};
use tracing::debug;
use url::Url;

use crate::di::context::AppContext;

/// Shared image-loading client
pub struct ImageLoader {
    context: Arc<AppContext>,
    http: reqwest::Client,
    cache: Cache<String, Arc<Vec<u8>>>,
}

impl ImageLoader {
    /// Create a loader bound to the application context
    pub fn new(context: Arc<AppContext>, http: reqwest::Client, cache_capacity: u64) -> Self {
        Self {
            context,
            http,
            cache: Cache::new(cache_capacity),
        }
    }

    /// The application context this loader was built against
    pub fn context(&self) -> &Arc<AppContext> {
        &self.context
    }

    /// Whether the given URL is already cached
    pub fn is_cached(&self, url: &str) -> bool {
        self.cache.get(url).is_some()
    }

    /// Load image bytes, from cache when possible
    pub async fn load(&self, url: &str) -> Result<Arc<Vec<u8>>> {
        if let Some(bytes) = self.cache.get(url) {
            debug!(url, "image cache hit");
            return Ok(bytes);
        }

        let parsed = Url::parse(url)
            .map_err(|e| Error::network_with_source(format!("invalid image url `{url}`"), e))?;

        debug!(%parsed, "fetching image");
        let bytes = self
            .http
            .get(parsed)
            .send()
            .await
            .map_err(|e| Error::network_with_source("image request failed".to_string(), e))?
            .error_for_status()
            .map_err(|e| Error::network_with_source("image request rejected".to_string(), e))?
            .bytes()
            .await
            .map_err(|e| Error::network_with_source("image body unreadable".to_string(), e))?;

        let bytes = Arc::new(bytes.to_vec());
        self.cache.insert(url.to_string(), Arc::clone(&bytes));
        Ok(bytes)
    }
}

impl std::fmt::Debug for ImageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageLoader")
            .field("package", &self.context.package())
            .field("cached", &self.cache.entry_count())
            .finish()
    }
}
