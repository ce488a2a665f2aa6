//! Dependency Injection System - Typed-Key Component Graphs
//!
//! An explicit, reflection-free object graph: provider bindings are
//! `(type, qualifier)` keys in a registry that is built and validated in
//! one atomic step, and components are ordinary values constructed through
//! builders whose parent components are explicit arguments.
//!
//! ## Architecture Overview
//!
//! The graph is organized hierarchically by lifetime:
//!
//! ```text
//! AppComponent (application scope, process lifetime)
//! └── MainActivityComponent (activity scope, one per activity)
//! ```
//!
//! ## Key Principles
//!
//! 1. **Typed keys**: every binding is addressed by `(TypeId, Qualifier)`
//! 2. **Eager, atomic builds**: all scoped values are constructed during
//!    `build()`; a component is never observable half-built
//! 3. **Explicit parents**: a child component holds `Arc` references to
//!    its parents and delegates lookups to them
//! 4. **Two-phase injection**: every injection point resolves before any
//!    assignment happens
//!
//! Teardown is `Drop`: releasing a component releases every scoped value
//! only it held, while parents live on through their own owners.

pub mod component;
pub mod components;
pub mod context;
pub mod inject;
pub mod key;
pub mod module;
pub mod modules;
pub mod scope;

pub use component::{Component, ComponentBuilder, Resolver};
pub use components::{AppComponent, MainActivityComponent};
pub use context::{
    ACTIVITY_CONTEXT, APPLICATION_CONTEXT, ActivityContext, AppContext, ContextSource,
    activity_context_module, context_module,
};
pub use inject::{Injectable, Injected};
pub use key::{BindingKey, Qualifier};
pub use module::Module;
pub use scope::Scope;
