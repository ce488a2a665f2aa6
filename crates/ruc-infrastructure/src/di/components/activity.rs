//! Main activity component
//!
//! Child graph built per activity instance, depending on the application
//! component. Owns the activity context and the list adapter; everything
//! application scoped resolves through the parent. Dropping the component
//! drops the activity-scoped values with it.

use std::sync::Arc;

use ruc_domain::error::Result;
use tracing::info;

use crate::adapters::UserListAdapter;
use crate::di::component::Component;
use crate::di::context::{ACTIVITY_CONTEXT, ActivityContext, activity_context_module};
use crate::di::inject::Injectable;
use crate::di::key::Qualifier;
use crate::di::modules::main_activity_module;
use crate::di::scope::Scope;

/// Activity-scoped component for the main activity
#[derive(Debug)]
pub struct MainActivityComponent {
    inner: Component,
}

impl MainActivityComponent {
    /// Build the activity graph on top of the application component
    pub fn build(
        parent: &crate::di::components::AppComponent,
        context: Arc<ActivityContext>,
    ) -> Result<Self> {
        let activity = context.activity().to_string();
        let component = Component::builder("main_activity", Scope::Activity)
            .parent(Arc::clone(parent.component()))
            .module(activity_context_module(context))
            .module(main_activity_module())
            .build()?;

        info!(activity, "activity component ready");
        Ok(Self { inner: component })
    }

    /// The bound activity context
    pub fn activity_context(&self) -> Result<Arc<ActivityContext>> {
        self.inner.get(ACTIVITY_CONTEXT)
    }

    /// The bound list adapter
    pub fn adapter(&self) -> Result<Arc<UserListAdapter>> {
        self.inner.get(Qualifier::None)
    }

    /// Populate an injection target from this graph
    pub fn inject(&self, target: &mut dyn Injectable) -> Result<()> {
        self.inner.inject(target)
    }
}
