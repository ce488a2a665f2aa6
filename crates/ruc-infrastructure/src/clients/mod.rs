//! Shared client instances constructed by the object graph
//!
//! Both clients are built once per application component and reused by
//! every consumer. Construction is synchronous and validates its inputs;
//! the network I/O the clients perform afterwards is lazy and on-demand.

pub mod api;
pub mod images;

pub use api::RandomUsersApi;
pub use images::ImageLoader;
