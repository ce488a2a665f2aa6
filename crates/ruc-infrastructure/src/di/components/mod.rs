//! Typed component facades
//!
//! Thin wrappers over the generic [`Component`](super::Component) engine
//! that fix each graph's modules, parents and accessors at compile time.

pub mod activity;
pub mod app;

pub use activity::MainActivityComponent;
pub use app::AppComponent;
