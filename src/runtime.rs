//! Host runtime boundary
//!
//! The agent runtime lives in the host framework, not in this crate. This
//! module defines the capability surface the project relies on: resolving
//! plugin identifiers into a capability set and driving the conversation
//! loop. The host supplies the implementation.

use crate::types::agent::Character;
use anyhow::Result;
use async_trait::async_trait;

/// Capabilities resolved from a list of plugin identifiers.
///
/// Opaque beyond the identifiers themselves; what a capability does is the
/// host's business. Keeping the resolved names visible lets tests assert
/// load order.
#[derive(Clone, Debug, Default)]
pub struct CapabilitySet {
    plugins: Vec<String>,
}

impl CapabilitySet {
    /// Create a capability set from resolved plugin identifiers
    pub fn new(plugins: Vec<String>) -> Self {
        CapabilitySet { plugins }
    }

    /// Resolved plugin identifiers, in load order
    pub fn plugin_names(&self) -> &[String] {
        &self.plugins
    }

    /// Whether the given plugin identifier was resolved
    pub fn contains(&self, identifier: &str) -> bool {
        self.plugins.iter().any(|p| p == identifier)
    }

    /// Number of resolved capabilities
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

/// Abstract interface to the host agent runtime.
///
/// Implemented by the embedding framework. Agent init hooks receive a
/// reference to it at startup.
#[async_trait]
pub trait HostRuntime: Send + Sync {
    /// Resolve plugin identifiers into loaded capabilities
    async fn load_plugins(&self, identifiers: &[String]) -> Result<CapabilitySet>;

    /// Drive the conversation loop for a character with its capabilities
    async fn run_conversation_loop(
        &self,
        character: &Character,
        capabilities: CapabilitySet,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_set_contains() {
        let caps = CapabilitySet::new(vec![
            "@elizaos/plugin-sql".to_string(),
            "@elizaos/plugin-bootstrap".to_string(),
        ]);

        assert_eq!(caps.len(), 2);
        assert!(caps.contains("@elizaos/plugin-sql"));
        assert!(!caps.contains("@elizaos/plugin-discord"));
    }

    #[test]
    fn test_capability_set_preserves_order() {
        let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let caps = CapabilitySet::new(names.clone());

        assert_eq!(caps.plugin_names(), names.as_slice());
    }
}
