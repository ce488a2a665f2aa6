//! API client module
//!
//! Binds the shared HTTP client and the random-user API client, both
//! application scoped: exactly one instance each per process, reused by
//! every consumer.

use std::sync::Arc;
use std::time::Duration;

use ruc_domain::error::Error;

use crate::clients::RandomUsersApi;
use crate::config::ApiConfig;
use crate::di::key::Qualifier;
use crate::di::module::Module;
use crate::di::scope::Scope;

/// Module providing the HTTP client and the random-user API client
pub fn api_module(config: &ApiConfig) -> Module {
    let timeout = Duration::from_secs(config.timeout_secs);
    let base_url = config.base_url.clone();

    Module::new("api")
        .provide::<reqwest::Client, _>(Qualifier::None, Scope::Application, move |_| {
            reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map(Arc::new)
                .map_err(|e| {
                    Error::resource_with_source(
                        "reqwest::Client".to_string(),
                        "failed to build http client".to_string(),
                        e,
                    )
                })
        })
        .provide::<RandomUsersApi, _>(Qualifier::None, Scope::Application, move |resolver| {
            let http = resolver.get::<reqwest::Client>(Qualifier::None)?;
            Ok(Arc::new(RandomUsersApi::new((*http).clone(), &base_url)?))
        })
}
