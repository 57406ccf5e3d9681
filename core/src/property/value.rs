//! Dynamically-typed property values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::key::ValueKind;
use crate::math::{Color3, Vector2};

/// Value read from or written to a bound field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Bool(bool),
    Float(f32),
    Int(i32),
    Color3(Color3),
    Vector2(Vector2),
    Text(String),
}

impl PropertyValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Float(_) => ValueKind::Float,
            Self::Int(_) => ValueKind::Int,
            Self::Color3(_) => ValueKind::Color3,
            Self::Vector2(_) => ValueKind::Vector2,
            Self::Text(_) => ValueKind::Text,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:.3}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Color3(c) => f.write_str(&c.to_hex_string()),
            Self::Vector2(v) => write!(f, "({:.3}, {:.3})", v.x, v.y),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<Color3> for PropertyValue {
    fn from(v: Color3) -> Self {
        Self::Color3(v)
    }
}

impl From<Vector2> for PropertyValue {
    fn from(v: Vector2) -> Self {
        Self::Vector2(v)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(PropertyValue::from(true).kind(), ValueKind::Bool);
        assert_eq!(PropertyValue::from(0.5f32).kind(), ValueKind::Float);
        assert_eq!(PropertyValue::from(62).kind(), ValueKind::Int);
        assert_eq!(PropertyValue::from(Color3::WHITE).kind(), ValueKind::Color3);
        assert_eq!(PropertyValue::from(Vector2::ZERO).kind(), ValueKind::Vector2);
        assert_eq!(PropertyValue::from("mat").kind(), ValueKind::Text);
    }

    #[test]
    fn accessors_reject_other_kinds() {
        assert_eq!(PropertyValue::Float(0.3).as_float(), Some(0.3));
        assert_eq!(PropertyValue::Float(0.3).as_bool(), None);
        assert_eq!(PropertyValue::Int(21).as_int(), Some(21));
        assert_eq!(PropertyValue::Bool(true).as_int(), None);
    }

    #[test]
    fn display() {
        assert_eq!(PropertyValue::Float(0.5).to_string(), "0.500");
        assert_eq!(PropertyValue::Color3(Color3::WHITE).to_string(), "#FFFFFF");
        assert_eq!(PropertyValue::Text("a".into()).to_string(), "\"a\"");
    }
}
