//! Application component
//!
//! The process-lifetime injector graph: context, HTTP client, API client
//! and image loader. Built once at startup and shared read-only across
//! every consumer thread; activity components take it as their parent.

use std::sync::Arc;

use ruc_domain::error::Result;
use tracing::info;

use crate::clients::{ImageLoader, RandomUsersApi};
use crate::config::AppConfig;
use crate::di::component::Component;
use crate::di::context::{APPLICATION_CONTEXT, AppContext, ContextSource, context_module};
use crate::di::key::Qualifier;
use crate::di::modules::{api_module, image_module};
use crate::di::scope::Scope;

/// Application-scoped component
#[derive(Debug, Clone)]
pub struct AppComponent {
    inner: Arc<Component>,
}

impl AppComponent {
    /// Build the application graph from configuration and a context source
    ///
    /// Fails with a graph-construction or resource-construction error;
    /// on failure no component exists.
    pub fn build(config: &AppConfig, context: &impl ContextSource) -> Result<Self> {
        let component = Component::builder("app", Scope::Application)
            .module(context_module(context))
            .module(api_module(&config.api))
            .module(image_module(&config.images))
            .build()?;

        info!("application component ready");
        Ok(Self {
            inner: Arc::new(component),
        })
    }

    /// The bound random-user API client
    pub fn random_users_api(&self) -> Result<Arc<RandomUsersApi>> {
        self.inner.get(Qualifier::None)
    }

    /// The bound image loader
    pub fn image_loader(&self) -> Result<Arc<ImageLoader>> {
        self.inner.get(Qualifier::None)
    }

    /// The qualified application context
    pub fn application_context(&self) -> Result<Arc<AppContext>> {
        self.inner.get(APPLICATION_CONTEXT)
    }

    /// The underlying component, for use as a parent
    pub fn component(&self) -> &Arc<Component> {
        &self.inner
    }
}
