//! Component graphs
//!
//! A component aggregates modules and parent components into an immutable
//! registry of scoped values. Construction is eager and atomic: every
//! binding is validated and instantiated inside [`ComponentBuilder::build`],
//! so a component is either fully built or was never observable at all.
//! After the build no mutation happens, which is what makes a component
//! freely shareable across threads without locking.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use ruc_domain::error::{Error, Result};
use tracing::{debug, info};

use super::key::{BindingKey, Qualifier};
use super::module::{BoxedFactory, Module};
use super::scope::Scope;

/// A built injector graph
///
/// Lifecycle is Unbuilt → Built → Torn-down: `build()` performs the one
/// atomic Unbuilt→Built transition, and dropping the component is the
/// teardown, releasing every scoped value only this component held.
pub struct Component {
    name: &'static str,
    scope: Scope,
    parents: Vec<Arc<Component>>,
    values: HashMap<BindingKey, Arc<dyn Any + Send + Sync>>,
}

impl Component {
    /// Start building a component with the given name and scope tag
    pub fn builder(name: &'static str, scope: Scope) -> ComponentBuilder {
        ComponentBuilder {
            name,
            scope,
            modules: Vec::new(),
            parents: Vec::new(),
        }
    }

    /// The component's name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The component's scope tag
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Typed accessor for a bound value
    ///
    /// Resolves from this component first, then from parents in
    /// declaration order. Returns the same cached instance on every call.
    pub fn get<T: Send + Sync + 'static>(&self, qualifier: Qualifier) -> Result<Arc<T>> {
        let key = BindingKey::of::<T>(qualifier);
        let value = self
            .lookup(&key)
            .ok_or_else(|| Error::missing_binding(key.to_string()))?;
        downcast(value, &key)
    }

    pub(crate) fn lookup(&self, key: &BindingKey) -> Option<Arc<dyn Any + Send + Sync>> {
        self.values
            .get(key)
            .cloned()
            .or_else(|| self.parents.iter().find_map(|parent| parent.lookup(key)))
    }
}

impl std::fmt::Debug for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("bindings", &self.values.len())
            .field(
                "parents",
                &self.parents.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder collecting modules and parent components
pub struct ComponentBuilder {
    name: &'static str,
    scope: Scope,
    modules: Vec<Module>,
    parents: Vec<Arc<Component>>,
}

impl ComponentBuilder {
    /// Add a module's bindings to the graph
    pub fn module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    /// Declare a dependency on an already-built parent component
    pub fn parent(mut self, parent: Arc<Component>) -> Self {
        self.parents.push(parent);
        self
    }

    /// Validate and instantiate the graph
    ///
    /// Fails with a graph-construction error if a binding is duplicated,
    /// a binding's scope does not match this component, a parent does not
    /// outlive this component, or a factory's requirement resolves to
    /// nothing. A factory failure (resource-construction error) also
    /// aborts the build. On any failure nothing is observable.
    pub fn build(self) -> Result<Component> {
        let Self {
            name,
            scope,
            modules,
            parents,
        } = self;

        for parent in &parents {
            if !parent.scope().outlives(scope) {
                return Err(Error::scope_mismatch(format!(
                    "component `{name}` ({scope}) cannot depend on component `{}` ({})",
                    parent.name(),
                    parent.scope()
                )));
            }
        }

        let mut registry: HashMap<BindingKey, RegisteredBinding> = HashMap::new();
        let mut order: Vec<BindingKey> = Vec::new();

        for module in modules {
            let module_name = module.name();
            for binding in module.into_bindings() {
                if binding.scope != scope {
                    return Err(Error::scope_mismatch(format!(
                        "binding {} is {} scoped but its host component `{name}` is {scope} scoped",
                        binding.key, binding.scope
                    )));
                }
                if let Some(existing) = registry.get(&binding.key) {
                    return Err(Error::ambiguous_binding(
                        binding.key.to_string(),
                        existing.module.to_string(),
                        module_name.to_string(),
                    ));
                }
                order.push(binding.key);
                registry.insert(
                    binding.key,
                    RegisteredBinding {
                        module: module_name,
                        factory: binding.factory,
                    },
                );
            }
        }

        // Eager instantiation: every scoped value exists before the
        // component does, so accessors never construct anything.
        let resolver = Resolver {
            registry: &registry,
            parents: &parents,
            values: RefCell::new(HashMap::new()),
            stack: RefCell::new(Vec::new()),
        };
        for key in &order {
            resolver.resolve(key)?;
        }
        let values = resolver.values.into_inner();

        info!(
            component = name,
            scope = %scope,
            bindings = values.len(),
            "component built"
        );

        Ok(Component {
            name,
            scope,
            parents,
            values,
        })
    }
}

struct RegisteredBinding {
    module: &'static str,
    factory: BoxedFactory,
}

/// Resolution view handed to factories while a component is being built
///
/// Lets a factory consume bindings registered in the same build or in any
/// parent component. Resolution within the build is lazy and memoized;
/// cycles are detected and reported as graph-construction errors.
pub struct Resolver<'a> {
    registry: &'a HashMap<BindingKey, RegisteredBinding>,
    parents: &'a [Arc<Component>],
    values: RefCell<HashMap<BindingKey, Arc<dyn Any + Send + Sync>>>,
    stack: RefCell<Vec<BindingKey>>,
}

impl Resolver<'_> {
    /// Typed accessor for a binding visible to the build in progress
    pub fn get<T: Send + Sync + 'static>(&self, qualifier: Qualifier) -> Result<Arc<T>> {
        let key = BindingKey::of::<T>(qualifier);
        let value = self.resolve(&key)?;
        downcast(value, &key)
    }

    fn resolve(&self, key: &BindingKey) -> Result<Arc<dyn Any + Send + Sync>> {
        if let Some(value) = self.values.borrow().get(key) {
            return Ok(value.clone());
        }

        if let Some(registered) = self.registry.get(key) {
            if self.stack.borrow().contains(key) {
                return Err(Error::cyclic_binding(key.to_string()));
            }
            self.stack.borrow_mut().push(*key);
            let constructed = (registered.factory)(self);
            self.stack.borrow_mut().pop();

            let value = constructed?;
            debug!(binding = %key, module = registered.module, "constructed scoped binding");
            self.values.borrow_mut().insert(*key, value.clone());
            return Ok(value);
        }

        for parent in self.parents {
            if let Some(value) = parent.lookup(key) {
                return Ok(value);
            }
        }

        Err(Error::missing_binding(key.to_string()))
    }
}

fn downcast<T: Send + Sync + 'static>(
    value: Arc<dyn Any + Send + Sync>,
    key: &BindingKey,
) -> Result<Arc<T>> {
    value
        .downcast::<T>()
        .map_err(|_| Error::internal(format!("binding {key} stored under the wrong type")))
}
