//! Context values and context modules
//!
//! The two qualified context bindings. The application context is
//! process-wide; the activity context is valid only for one activity
//! instance. The application-context module deliberately re-derives the
//! application from whatever context it is handed, so the exposed value
//! never borrows an activity lifetime.

use std::sync::Arc;

use super::key::Qualifier;
use super::module::Module;
use super::scope::Scope;

/// Qualifier for the process-wide application context binding
pub const APPLICATION_CONTEXT: Qualifier = Qualifier::Named("application_context");

/// Qualifier for the per-activity context binding
pub const ACTIVITY_CONTEXT: Qualifier = Qualifier::Named("activity_context");

/// Process-level context, the analog of an application context
#[derive(Debug)]
pub struct AppContext {
    package: String,
}

impl AppContext {
    /// Create the application context for the named package
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    /// The owning package name
    pub fn package(&self) -> &str {
        &self.package
    }
}

/// Per-activity context, valid for one activity lifetime
#[derive(Debug)]
pub struct ActivityContext {
    activity: String,
    application: Arc<AppContext>,
}

impl ActivityContext {
    /// Create a context for the named activity
    pub fn new(activity: impl Into<String>, application: Arc<AppContext>) -> Self {
        Self {
            activity: activity.into(),
            application,
        }
    }

    /// The activity's name
    pub fn activity(&self) -> &str {
        &self.activity
    }

    /// The process-wide application context this activity runs in
    pub fn application(&self) -> Arc<AppContext> {
        Arc::clone(&self.application)
    }
}

/// Anything that can hand out the process-wide application context
pub trait ContextSource {
    /// The application context reachable from this value
    fn application(&self) -> Arc<AppContext>;
}

impl ContextSource for Arc<AppContext> {
    fn application(&self) -> Arc<AppContext> {
        Arc::clone(self)
    }
}

impl ContextSource for ActivityContext {
    fn application(&self) -> Arc<AppContext> {
        ActivityContext::application(self)
    }
}

/// Module binding the application context under [`APPLICATION_CONTEXT`]
///
/// Calls through to the source's application accessor rather than holding
/// the source itself, so the bound value outlives whichever object built
/// the module.
pub fn context_module(source: &impl ContextSource) -> Module {
    let application = source.application();
    Module::new("context").provide::<AppContext, _>(
        APPLICATION_CONTEXT,
        Scope::Application,
        move |_| Ok(Arc::clone(&application)),
    )
}

/// Module binding the activity context under [`ACTIVITY_CONTEXT`]
///
/// Activity scoped: the cached context can never outlive the activity
/// component that hosts it.
pub fn activity_context_module(context: Arc<ActivityContext>) -> Module {
    Module::new("activity_context").provide::<ActivityContext, _>(
        ACTIVITY_CONTEXT,
        Scope::Activity,
        move |_| Ok(Arc::clone(&context)),
    )
}
