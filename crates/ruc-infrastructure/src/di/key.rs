//! Typed binding keys
//!
//! A binding is addressed by the concrete Rust type it produces plus an
//! optional qualifier distinguishing multiple bindings of the same type.

use std::any::{TypeId, type_name};
use std::fmt;

/// Disambiguating tag for bindings sharing a produced type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier {
    /// The unqualified binding for a type
    None,
    /// A named qualifier, e.g. `application_context`
    Named(&'static str),
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::None => Ok(()),
            Qualifier::Named(name) => write!(f, "@{name}"),
        }
    }
}

/// Registry key for a provider binding
///
/// Identity is the `(TypeId, Qualifier)` pair; the type name rides along
/// for error messages only.
#[derive(Debug, Clone, Copy)]
pub struct BindingKey {
    type_id: TypeId,
    type_name: &'static str,
    qualifier: Qualifier,
}

impl BindingKey {
    /// Key for the binding producing `T` under `qualifier`
    pub fn of<T: 'static>(qualifier: Qualifier) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            qualifier,
        }
    }

    /// The qualifier component of the key
    pub fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    /// The produced type's name, for diagnostics
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for BindingKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.qualifier == other.qualifier
    }
}

impl Eq for BindingKey {}

impl std::hash::Hash for BindingKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.qualifier.hash(state);
    }
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.qualifier {
            Qualifier::None => write!(f, "{}", self.type_name),
            Qualifier::Named(name) => write!(f, "{} @{name}", self.type_name),
        }
    }
}
