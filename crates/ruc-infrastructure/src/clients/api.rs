//! Random-user API client
//!
//! Thin typed wrapper over a shared HTTP client. The base address is
//! validated at construction; a malformed address is a fatal
//! resource-construction error that aborts the owning component's build.

use ruc_domain::error::{Error, Result};
use ruc_domain::value_objects::RandomUsersResponse;
use tracing::debug;
use url::Url;

/// Client for the random-user HTTP API
#[derive(Debug, Clone)]
pub struct RandomUsersApi {
    http: reqwest::Client,
    base_url: Url,
}

impl RandomUsersApi {
    /// Create a client against `base_url`
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            Error::resource_with_source(
                "RandomUsersApi".to_string(),
                format!("invalid base url `{base_url}`"),
                e,
            )
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::resource(
                "RandomUsersApi".to_string(),
                format!("base url `{base_url}` cannot carry query parameters"),
            ));
        }
        Ok(Self { http, base_url })
    }

    /// The validated base address
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch a batch of random users
    pub async fn get_random_users(&self, count: u32) -> Result<RandomUsersResponse> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("results", &count.to_string());

        debug!(%url, "fetching random users");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::network_with_source("random user request failed".to_string(), e))?
            .error_for_status()
            .map_err(|e| {
                Error::network_with_source("random user request rejected".to_string(), e)
            })?;

        response
            .json::<RandomUsersResponse>()
            .await
            .map_err(|e| Error::network_with_source("malformed random user payload".to_string(), e))
    }
}
