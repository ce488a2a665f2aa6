//! Domain layer for the Random User Client
//!
//! Holds the error taxonomy and the value objects shared by every other
//! layer. This crate performs no I/O and knows nothing about how object
//! graphs are wired together; it only defines what flows through them.

pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
