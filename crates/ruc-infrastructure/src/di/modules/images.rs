//! Image loader module
//!
//! Binds the image-loading client, application scoped. The loader
//! consumes the qualified application context and the shared HTTP client
//! from the same graph.

use std::sync::Arc;

use crate::clients::ImageLoader;
use crate::config::ImageConfig;
use crate::di::context::{APPLICATION_CONTEXT, AppContext};
use crate::di::key::Qualifier;
use crate::di::module::Module;
use crate::di::scope::Scope;

/// Module providing the shared image loader
pub fn image_module(config: &ImageConfig) -> Module {
    let cache_capacity = config.cache_capacity;

    Module::new("images").provide::<ImageLoader, _>(
        Qualifier::None,
        Scope::Application,
        move |resolver| {
            let context = resolver.get::<AppContext>(APPLICATION_CONTEXT)?;
            let http = resolver.get::<reqwest::Client>(Qualifier::None)?;
            Ok(Arc::new(ImageLoader::new(
                context,
                (*http).clone(),
                cache_capacity,
            )))
        },
    )
}
