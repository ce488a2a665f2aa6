//! Concrete provider modules
//!
//! One file per concern. Each function returns a [`Module`](super::Module)
//! whose bindings are installed into a component by the typed facades in
//! `di::components`.

pub mod activity;
pub mod api;
pub mod images;

pub use activity::main_activity_module;
pub use api::api_module;
pub use images::image_module;
