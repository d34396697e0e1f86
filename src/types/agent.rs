//! Character types for the compliance project
//!
//! Contains Character and the related persona configuration types. All types
//! serialize to JSON in the same camelCase shape the host runtime expects,
//! so character files remain interchangeable with the TypeScript side.

use super::primitives::{Content, UUID};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Example message for demonstration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageExample {
    /// Associated user name
    pub name: String,
    /// Message content
    pub content: Content,
}

impl MessageExample {
    /// Create an example turn from a speaker name and message text
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        MessageExample {
            name: name.into(),
            content: Content::from_text(text),
        }
    }
}

/// Style configuration for the character
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Style guidelines for all contexts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<String>>,
    /// Style guidelines for chat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat: Option<Vec<String>>,
    /// Style guidelines for posts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Vec<String>>,
}

/// Character settings
///
/// Opaque to this layer; the host runtime interprets the values (secret
/// placeholders included).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CharacterSettings {
    /// Settings values
    #[serde(flatten)]
    pub values: HashMap<String, serde_json::Value>,
}

/// Character secrets
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CharacterSecrets {
    /// Secret values
    #[serde(flatten)]
    pub values: HashMap<String, serde_json::Value>,
}

/// Configuration for an agent's character
///
/// Immutable once constructed; build it through [`crate::parse_character`]
/// or validate it with [`crate::validate_character`] before handing it to
/// the host runtime.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Character {
    /// Optional unique identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UUID>,
    /// Character name
    pub name: String,
    /// Optional username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// System prompt given to the generation engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Character biography (can be string or array)
    #[serde(deserialize_with = "deserialize_bio")]
    pub bio: Bio,
    /// Example conversations, each an ordered list of turns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_examples: Option<Vec<Vec<MessageExample>>>,
    /// Known topics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    /// Plugins to load, in load order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,
    /// Optional configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<CharacterSettings>,
    /// Optional secrets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<CharacterSecrets>,
    /// Writing style guides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleConfig>,
}

impl Character {
    /// Parse a character from JSON string (no validation)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize character to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Get the bio as a single string
    pub fn bio_string(&self) -> String {
        match &self.bio {
            Bio::Single(s) => s.clone(),
            Bio::Multiple(v) => v.join("\n"),
        }
    }
}

impl Default for Character {
    fn default() -> Self {
        Character {
            id: None,
            name: "Unnamed Character".to_string(),
            username: None,
            system: None,
            bio: Bio::Single(String::new()),
            message_examples: None,
            topics: None,
            plugins: None,
            settings: None,
            secrets: None,
            style: None,
        }
    }
}

/// Biography can be a single string or multiple strings
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Bio {
    /// Single string bio
    Single(String),
    /// Multiple string bio
    Multiple(Vec<String>),
}

fn deserialize_bio<'de, D>(deserializer: D) -> Result<Bio, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(Bio::Single(s)),
        serde_json::Value::Array(arr) => {
            let strings: Result<Vec<String>, _> = arr
                .into_iter()
                .map(|v| {
                    v.as_str()
                        .map(String::from)
                        .ok_or_else(|| D::Error::custom("expected string in bio array"))
                })
                .collect();
            Ok(Bio::Multiple(strings?))
        }
        _ => Err(D::Error::custom("bio must be string or array of strings")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_from_json() {
        let json = r#"{
            "name": "TestAgent",
            "bio": "A test agent for testing purposes"
        }"#;

        let character = Character::from_json(json).unwrap();
        assert_eq!(character.name, "TestAgent");
        assert_eq!(character.bio_string(), "A test agent for testing purposes");
    }

    #[test]
    fn test_character_with_array_bio() {
        let json = r#"{
            "name": "TestAgent",
            "bio": ["Line 1", "Line 2", "Line 3"]
        }"#;

        let character = Character::from_json(json).unwrap();
        assert_eq!(character.bio_string(), "Line 1\nLine 2\nLine 3");
    }

    #[test]
    fn test_character_rejects_unknown_fields() {
        let json = r#"{
            "name": "TestAgent",
            "bio": "A test agent",
            "notAField": true
        }"#;

        assert!(Character::from_json(json).is_err());
    }

    #[test]
    fn test_character_message_examples_round_trip() {
        let character = Character {
            name: "TestAgent".to_string(),
            bio: Bio::Single("Test bio".to_string()),
            message_examples: Some(vec![vec![
                MessageExample::new("{{name1}}", "Is this allowed?"),
                MessageExample::new("TestAgent", "No."),
            ]]),
            ..Default::default()
        };

        let json = character.to_json().unwrap();
        assert!(json.contains("\"messageExamples\""));

        let parsed = Character::from_json(&json).unwrap();
        let examples = parsed.message_examples.unwrap();
        assert_eq!(examples[0].len(), 2);
        assert_eq!(examples[0][0].name, "{{name1}}");
        assert_eq!(
            examples[0][1].content.text.as_deref(),
            Some("No.")
        );
    }

    #[test]
    fn test_style_config_serializes_camel_case() {
        let style = StyleConfig {
            all: Some(vec!["Use formal language".to_string()]),
            chat: Some(vec!["Maintain professional tone".to_string()]),
            post: None,
        };

        let json = serde_json::to_string(&style).unwrap();
        assert!(json.contains("\"all\""));
        assert!(json.contains("\"chat\""));
        assert!(!json.contains("\"post\""));
    }
}
