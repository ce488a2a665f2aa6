//! Street value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A street address fragment
///
/// Both fields are independently optional: the upstream payload omits
/// either freely, and an entirely absent street is a legal value. Values
/// round-trip through serialization verbatim under the field names
/// `number` and `name`.
///
/// # Example
///
/// ```
/// use ruc_domain::value_objects::Street;
///
/// let street = Street::new().with_number("221B").with_name("Baker St");
///
/// assert_eq!(street.number.as_deref(), Some("221B"));
/// assert_eq!(street.to_string(), "221B Baker St");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    /// House or building number, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Street name, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Street {
    /// Create an empty street with both fields absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the street number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Set the street name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.number, &self.name) {
            (Some(number), Some(name)) => write!(f, "{number} {name}"),
            (Some(number), None) => write!(f, "{number}"),
            (None, Some(name)) => write!(f, "{name}"),
            (None, None) => Ok(()),
        }
    }
}
