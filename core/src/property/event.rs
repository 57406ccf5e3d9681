use std::fmt;

use super::key::{PropertyKey, PropertyTarget};
use super::value::PropertyValue;

/// Published once per committed edit of a bound field.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyChangedEvent {
    pub key: PropertyKey,
    /// Value before the edit.
    pub initial_value: PropertyValue,
    /// Value written by the edit.
    pub value: PropertyValue,
}

impl PropertyChangedEvent {
    pub fn target(&self) -> PropertyTarget {
        self.key.target()
    }

    /// Field name on the target.
    pub fn property(&self) -> &'static str {
        self.key.name()
    }
}

impl fmt::Display for PropertyChangedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.key, self.initial_value, self.value)
    }
}
