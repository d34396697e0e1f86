//! Primitive types shared across the project
//!
//! Contains the UUID newtype and the Content message payload.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

lazy_static! {
    static ref UUID_REGEX: Regex =
        Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap();
}

/// Error type for UUID operations
#[derive(Error, Debug)]
pub enum UUIDError {
    /// Invalid UUID format
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// A universally unique identifier (UUID) type
///
/// This type wraps a String and validates that it conforms to the UUID format.
/// It serializes transparently as a string in JSON.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UUID(String);

impl UUID {
    /// Create a new UUID from a string, validating the format
    pub fn new(id: &str) -> Result<Self, UUIDError> {
        if !UUID_REGEX.is_match(&id.to_lowercase()) {
            return Err(UUIDError::InvalidFormat(id.to_string()));
        }
        Ok(UUID(id.to_lowercase()))
    }

    /// Create a new random UUID (v4)
    pub fn new_v4() -> Self {
        UUID(uuid::Uuid::new_v4().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for UUID {
    type Error = UUIDError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        UUID::new(value)
    }
}

impl TryFrom<String> for UUID {
    type Error = UUIDError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UUID::new(&value)
    }
}

impl From<uuid::Uuid> for UUID {
    fn from(value: uuid::Uuid) -> Self {
        UUID(value.to_string())
    }
}

/// Represents the content of a message turn.
///
/// Matches the host runtime's content schema: the `text` field carries the
/// visible message, the remaining fields are optional metadata the host may
/// attach when a transcript originates from a live platform.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// The main text content visible to users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The agent's internal thought process
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought: Option<String>,
    /// Actions to be performed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    /// Source/origin of the content (e.g., 'discord', 'telegram')
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// UUID of parent message if this is a reply/thread
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<UUID>,
}

impl Content {
    /// Create content holding only a text payload
    pub fn from_text(text: impl Into<String>) -> Self {
        Content {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_valid() {
        let id = UUID::new("123e4567-e89b-12d3-a456-426614174000").unwrap();
        assert_eq!(id.as_str(), "123e4567-e89b-12d3-a456-426614174000");
    }

    #[test]
    fn test_uuid_normalizes_case() {
        let id = UUID::new("123E4567-E89B-12D3-A456-426614174000").unwrap();
        assert_eq!(id.as_str(), "123e4567-e89b-12d3-a456-426614174000");
    }

    #[test]
    fn test_uuid_invalid_format() {
        assert!(UUID::new("not-a-uuid").is_err());
    }

    #[test]
    fn test_uuid_serializes_as_string() {
        let id = UUID::new_v4();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_str()));
    }

    #[test]
    fn test_content_from_text() {
        let content = Content::from_text("hello");
        assert_eq!(content.text.as_deref(), Some("hello"));
        let json = serde_json::to_string(&content).unwrap();
        assert_eq!(json, r#"{"text":"hello"}"#);
    }
}
