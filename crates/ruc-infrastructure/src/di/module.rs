//! Provider modules
//!
//! A module is a named collection of provider bindings. Each binding pairs
//! a typed key with a scope tag and a factory closure; factories receive a
//! [`Resolver`] so they can consume other bindings in scope.

use std::any::Any;
use std::sync::Arc;

use ruc_domain::error::Result;

use super::component::Resolver;
use super::key::{BindingKey, Qualifier};
use super::scope::Scope;

pub(crate) type BoxedFactory =
    Box<dyn Fn(&Resolver<'_>) -> Result<Arc<dyn Any + Send + Sync>> + Send + Sync>;

pub(crate) struct Binding {
    pub(crate) key: BindingKey,
    pub(crate) scope: Scope,
    pub(crate) factory: BoxedFactory,
}

/// Named collection of provider bindings
pub struct Module {
    name: &'static str,
    bindings: Vec<Binding>,
}

impl Module {
    /// Create an empty module
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            bindings: Vec::new(),
        }
    }

    /// The module's name, used in diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Register a provider binding
    ///
    /// The factory runs once, during the owning component's build; its
    /// value is cached for the component lifetime. Duplicate
    /// `(type, qualifier)` registrations are rejected when the graph is
    /// constructed, not here, so registration stays chainable.
    pub fn provide<T, F>(mut self, qualifier: Qualifier, scope: Scope, factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&Resolver<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        let key = BindingKey::of::<T>(qualifier);
        let boxed: BoxedFactory = Box::new(move |resolver| {
            let value: Arc<dyn Any + Send + Sync> = factory(resolver)?;
            Ok(value)
        });
        self.bindings.push(Binding {
            key,
            scope,
            factory: boxed,
        });
        self
    }

    /// Number of registered bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the module has no bindings
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub(crate) fn into_bindings(self) -> Vec<Binding> {
        self.bindings
    }
}

impl std::fmt::Debug for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.name)
            .field("bindings", &self.bindings.len())
            .finish()
    }
}
