//! Core types for the compliance project
//!
//! Import directly from submodules:
//! - agent for Character, Bio, MessageExample, StyleConfig
//! - primitives for UUID and Content

pub mod agent;
pub mod primitives;

pub use agent::{Bio, Character, CharacterSecrets, CharacterSettings, MessageExample, StyleConfig};
pub use primitives::{Content, UUID};
