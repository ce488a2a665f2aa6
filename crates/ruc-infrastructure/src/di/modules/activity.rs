//! Main activity module
//!
//! Binds the activity-scoped list adapter. The adapter consumes the
//! activity's own context plus the application-scoped image loader
//! resolved through the parent component.

use std::sync::Arc;

use crate::adapters::UserListAdapter;
use crate::clients::ImageLoader;
use crate::di::context::{ACTIVITY_CONTEXT, ActivityContext};
use crate::di::key::Qualifier;
use crate::di::module::Module;
use crate::di::scope::Scope;

/// Module providing the main activity's list adapter
pub fn main_activity_module() -> Module {
    Module::new("main_activity").provide::<UserListAdapter, _>(
        Qualifier::None,
        Scope::Activity,
        |resolver| {
            let context = resolver.get::<ActivityContext>(ACTIVITY_CONTEXT)?;
            let images = resolver.get::<ImageLoader>(Qualifier::None)?;
            Ok(Arc::new(UserListAdapter::new(context, images)))
        },
    )
}
