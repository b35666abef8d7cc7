//! Property values exchanged through name-based member access

use crate::{FileLibError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Integer,
    Bool,
    Text,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Bool => "bool",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamically typed property value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyValue {
    Integer(i64),
    Bool(bool),
    Text(String),
}

impl PropertyValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Bool(_) => ValueKind::Bool,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Integer payload, or a type mismatch naming `member`
    pub fn as_integer(&self, member: &str) -> Result<i64> {
        match self {
            Self::Integer(v) => Ok(*v),
            other => Err(mismatch(member, ValueKind::Integer, other.kind())),
        }
    }

    /// Integer payload narrowed to 32 bits
    pub fn as_i32(&self, member: &str) -> Result<i32> {
        let value = self.as_integer(member)?;
        i32::try_from(value).map_err(|_| FileLibError::OutOfRange {
            member: member.to_string(),
            value,
        })
    }

    pub fn as_bool(&self, member: &str) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(*v),
            other => Err(mismatch(member, ValueKind::Bool, other.kind())),
        }
    }

    pub fn into_text(self, member: &str) -> Result<String> {
        match self {
            Self::Text(v) => Ok(v),
            other => Err(mismatch(member, ValueKind::Text, other.kind())),
        }
    }

    /// Parse command-line text into a value of the given kind
    ///
    /// Integers accept an optional sign; booleans accept `true`/`false`
    /// and `1`/`0`. Anything else is reported as text so the caller sees
    /// a type mismatch rather than a silent coercion.
    pub fn parse_as(kind: ValueKind, text: &str, member: &str) -> Result<Self> {
        let text = text.trim();
        match kind {
            ValueKind::Integer => text
                .parse::<i64>()
                .map(Self::Integer)
                .map_err(|_| mismatch(member, ValueKind::Integer, ValueKind::Text)),
            ValueKind::Bool => match text.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(Self::Bool(true)),
                "false" | "0" => Ok(Self::Bool(false)),
                _ => Err(mismatch(member, ValueKind::Bool, ValueKind::Text)),
            },
            ValueKind::Text => Ok(Self::Text(text.to_string())),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

fn mismatch(member: &str, expected: ValueKind, found: ValueKind) -> FileLibError {
    FileLibError::TypeMismatch {
        member: member.to_string(),
        expected,
        found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_reject_other_kinds() {
        let value = PropertyValue::from("32");
        let err = value.as_integer("Width").unwrap_err();
        assert!(matches!(
            err,
            FileLibError::TypeMismatch {
                expected: ValueKind::Integer,
                found: ValueKind::Text,
                ..
            }
        ));
        assert_eq!(PropertyValue::from(5).as_integer("Width").unwrap(), 5);
        assert!(PropertyValue::from(true).into_text("LayerName").is_err());
    }

    #[test]
    fn test_parse_as() {
        assert_eq!(
            PropertyValue::parse_as(ValueKind::Integer, " -64 ", "X").unwrap(),
            PropertyValue::Integer(-64)
        );
        assert_eq!(
            PropertyValue::parse_as(ValueKind::Bool, "1", "Slippery").unwrap(),
            PropertyValue::Bool(true)
        );
        assert_eq!(
            PropertyValue::parse_as(ValueKind::Text, "Destroyed Blocks", "LayerName").unwrap(),
            PropertyValue::from("Destroyed Blocks")
        );
        assert!(PropertyValue::parse_as(ValueKind::Integer, "wide", "Width").is_err());
        assert!(PropertyValue::parse_as(ValueKind::Bool, "maybe", "Invisible").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(PropertyValue::Integer(42).to_string(), "42");
        assert_eq!(PropertyValue::Bool(false).to_string(), "false");
        assert_eq!(PropertyValue::from("Default").to_string(), "Default");
    }
}
