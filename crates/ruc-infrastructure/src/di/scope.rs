//! Lifetime scopes
//!
//! A scope bounds how long a constructed value is cached: application
//! scope lives for the process, activity scope for one activity instance.

use std::fmt;

/// Lifetime scope of a binding or component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Process lifetime; one instance shared by everything
    Application,
    /// Activity lifetime; one instance per activity component
    Activity,
}

impl Scope {
    /// Whether values of this scope strictly outlive values of `other`
    ///
    /// Used to validate component dependencies: a parent component must
    /// outlive every child that holds a reference to it.
    pub fn outlives(self, other: Scope) -> bool {
        matches!((self, other), (Scope::Application, Scope::Activity))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Application => write!(f, "application"),
            Scope::Activity => write!(f, "activity"),
        }
    }
}
