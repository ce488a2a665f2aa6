//! Value objects shared across the application
//!
//! Plain serializable records mirroring the upstream random-user payload.
//! Field names follow the wire format exactly; nothing here is transformed
//! on the way in or out.

pub mod street;
pub mod user;

pub use street::Street;
pub use user::{Location, Name, Picture, RandomUsersResponse, User};
