//! Random user value objects
//!
//! Records for the `/api` payload of the random-user service. Only the
//! fields the client actually renders are modeled; unknown fields are
//! ignored on deserialization.

use serde::{Deserialize, Serialize};

use super::Street;

/// A person's name as delivered by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// Honorific (e.g. "Mr", "Ms")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Given name
    pub first: String,

    /// Family name
    pub last: String,
}

impl Name {
    /// Full name without the honorific
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// A user's location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Street address fragment
    #[serde(default)]
    pub street: Street,

    /// City, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State or region, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Portrait URLs in the three sizes the API serves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    /// Full-size portrait URL
    pub large: String,

    /// Medium portrait URL
    pub medium: String,

    /// Thumbnail portrait URL
    pub thumbnail: String,
}

/// A single random user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's name
    pub name: Name,

    /// The user's location
    #[serde(default)]
    pub location: Location,

    /// Contact email, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Portrait URLs
    #[serde(default)]
    pub picture: Picture,
}

/// Envelope returned by the random-user API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomUsersResponse {
    /// The requested batch of users
    #[serde(default)]
    pub results: Vec<User>,
}
