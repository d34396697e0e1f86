//! Compliance agent project for the elizaOS agent runtime
//!
//! This crate defines agent personas (currently the Dredd compliance
//! enforcement character) and registers them with a project the host runtime
//! loads at startup. The runtime itself — plugin resolution, model
//! invocation, the message loop — lives in the host framework; this crate
//! supplies validated character data, an environment-gated plugin list, and
//! per-agent init hooks.
//!
//! # Example
//!
//! ```rust
//! use project_compliance::{agents, build_character_plugins};
//! use std::collections::HashMap;
//!
//! let project = agents::project();
//! project.validate().expect("characters satisfy the runtime contract");
//!
//! // Plugin assembly is a pure function of an environment snapshot
//! let plugins = build_character_plugins(&HashMap::new());
//! assert_eq!(plugins[0], "@elizaos/plugin-sql");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod agents;
pub mod character;
pub mod project;
pub mod runtime;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use character::{
    build_character_plugins, environment_snapshot, merge_character_defaults, parse_character,
    validate_character,
};
pub use project::{InitHook, Project, ProjectAgent};
pub use runtime::{CapabilitySet, HostRuntime};
pub use types::agent::{Bio, Character, MessageExample, StyleConfig};
pub use types::primitives::{Content, UUID};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
