//! Error handling types
//!
//! Every failure in this system is a precondition violation surfaced
//! synchronously to whoever is constructing a graph, constructing a
//! resource, or injecting a target. There are no retries at this layer.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Random User Client
#[derive(Error, Debug)]
pub enum Error {
    /// A required binding is absent from every module and parent in scope
    #[error("missing binding: {key}")]
    MissingBinding {
        /// The binding key that could not be resolved
        key: String,
    },

    /// Two bindings match the same type and qualifier
    #[error("ambiguous binding: {key} is provided by both `{first}` and `{second}`")]
    AmbiguousBinding {
        /// The binding key that is provided more than once
        key: String,
        /// Module that registered the binding first
        first: String,
        /// Module that registered the conflicting binding
        second: String,
    },

    /// A binding's scope does not match the component hosting it
    #[error("scope mismatch: {message}")]
    ScopeMismatch {
        /// Description of the scope violation
        message: String,
    },

    /// A binding's factory transitively depends on itself
    #[error("binding cycle detected at {key}")]
    CyclicBinding {
        /// The binding key at which the cycle was closed
        key: String,
    },

    /// A module's construction logic failed
    #[error("failed to construct {binding}: {message}")]
    ResourceConstruction {
        /// The binding whose construction failed
        binding: String,
        /// Description of the construction failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An injection target declared a point that cannot be satisfied
    #[error("injection into {target} failed: {message}")]
    InjectionTarget {
        /// Name of the injection target
        target: String,
        /// Description of the unsatisfied injection point
        message: String,
    },

    /// Network-related error
    #[error("network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal invariant violation
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Graph-construction error creation methods
impl Error {
    /// Create a missing binding error
    pub fn missing_binding<S: Into<String>>(key: S) -> Self {
        Self::MissingBinding { key: key.into() }
    }

    /// Create an ambiguous binding error
    pub fn ambiguous_binding<S: Into<String>>(key: S, first: S, second: S) -> Self {
        Self::AmbiguousBinding {
            key: key.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a scope mismatch error
    pub fn scope_mismatch<S: Into<String>>(message: S) -> Self {
        Self::ScopeMismatch {
            message: message.into(),
        }
    }

    /// Create a binding cycle error
    pub fn cyclic_binding<S: Into<String>>(key: S) -> Self {
        Self::CyclicBinding { key: key.into() }
    }

    /// Whether this error was detected during graph construction
    pub fn is_graph_construction(&self) -> bool {
        matches!(
            self,
            Self::MissingBinding { .. }
                | Self::AmbiguousBinding { .. }
                | Self::ScopeMismatch { .. }
                | Self::CyclicBinding { .. }
        )
    }
}

// Resource-construction error creation methods
impl Error {
    /// Create a resource construction error
    pub fn resource<S: Into<String>>(binding: S, message: S) -> Self {
        Self::ResourceConstruction {
            binding: binding.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a resource construction error with source
    pub fn resource_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        binding: S,
        message: S,
        source: E,
    ) -> Self {
        Self::ResourceConstruction {
            binding: binding.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Injection error creation methods
impl Error {
    /// Create an injection target error
    pub fn injection_target<S: Into<String>>(target: S, message: S) -> Self {
        Self::InjectionTarget {
            target: target.into(),
            message: message.into(),
        }
    }
}

// Network error creation methods
impl Error {
    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Internal error creation methods
impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
