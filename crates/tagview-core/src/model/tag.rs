// ── Tag domain types ──
//
// A Tag is a single named telemetry point. Tags are rebuilt from scratch
// on every poll of the current-values endpoint; they carry no identity
// beyond their id string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic data type of a tag, inferred from its name (see [`crate::classify`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagDataType {
    Boolean,
    Number,
    String,
}

impl fmt::Display for TagDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
        };
        write!(f, "{s}")
    }
}

/// A tag's current value. The variant always matches the tag's
/// [`TagDataType`] -- construction goes through
/// [`convert`](crate::classify::convert), which guarantees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl TagValue {
    pub fn data_type(&self) -> TagDataType {
        match self {
            Self::Bool(_) => TagDataType::Boolean,
            Self::Number(_) => TagDataType::Number,
            Self::Text(_) => TagDataType::String,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A single named telemetry point with a classified type and current value.
///
/// Immutable once constructed; a fresh `Tag` is built from the wire record
/// on every poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Stable external identifier, also used as the display name.
    pub id: String,
    pub name: String,
    pub data_type: TagDataType,
    pub value: TagValue,
    pub unit: Option<String>,
    pub description: Option<String>,
}
