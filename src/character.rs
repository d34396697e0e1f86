//! Character parsing and validation
//!
//! This module provides functions for loading, parsing, and validating
//! character configurations, plus the environment-gated plugin list builder.

use crate::types::agent::{Bio, Character, CharacterSettings};
use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};

/// Base storage plugin, required by every character
pub const PLUGIN_SQL: &str = "@elizaos/plugin-sql";
/// Anthropic model provider plugin
pub const PLUGIN_ANTHROPIC: &str = "@elizaos/plugin-anthropic";
/// OpenAI model provider plugin
pub const PLUGIN_OPENAI: &str = "@elizaos/plugin-openai";
/// Local model fallback plugin
pub const PLUGIN_LOCAL_AI: &str = "@elizaos/plugin-local-ai";
/// Discord platform integration plugin
pub const PLUGIN_DISCORD: &str = "@elizaos/plugin-discord";
/// Twitter platform integration plugin
pub const PLUGIN_TWITTER: &str = "@elizaos/plugin-twitter";
/// Telegram platform integration plugin
pub const PLUGIN_TELEGRAM: &str = "@elizaos/plugin-telegram";
/// Bootstrap plugin, loaded unless suppressed via IGNORE_BOOTSTRAP
pub const PLUGIN_BOOTSTRAP: &str = "@elizaos/plugin-bootstrap";

/// Parse a character from a JSON string
pub fn parse_character(json: &str) -> Result<Character> {
    let character: Character =
        serde_json::from_str(json).context("Failed to parse character JSON")?;
    validate_character(&character).context("Character validation failed")?;
    Ok(character)
}

/// Validate a character configuration
///
/// Checks the contract the host runtime expects of every character handed to
/// it. Errors name the character and the offending field.
pub fn validate_character(character: &Character) -> Result<()> {
    if character.name.trim().is_empty() {
        anyhow::bail!("Character name is required");
    }
    let name = &character.name;

    match &character.bio {
        Bio::Single(s) => {
            if s.trim().is_empty() {
                anyhow::bail!("Character '{}': bio must not be empty", name);
            }
        }
        Bio::Multiple(entries) => {
            if entries.is_empty() {
                anyhow::bail!("Character '{}': bio must not be empty", name);
            }
            for (i, entry) in entries.iter().enumerate() {
                if entry.trim().is_empty() {
                    anyhow::bail!("Character '{}': bio[{}] is empty", name, i);
                }
            }
        }
    }

    match &character.system {
        Some(system) if !system.trim().is_empty() => {}
        _ => anyhow::bail!("Character '{}': system prompt is required", name),
    }

    let plugins = character
        .plugins
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Character '{}': plugins list is required", name))?;
    let mut seen = HashSet::new();
    for plugin in plugins {
        if plugin.is_empty() {
            anyhow::bail!("Character '{}': empty plugin name in plugins list", name);
        }
        if !seen.insert(plugin.as_str()) {
            anyhow::bail!("Character '{}': duplicate plugin '{}'", name, plugin);
        }
    }
    if !seen.contains(PLUGIN_SQL) {
        anyhow::bail!(
            "Character '{}': plugins must include the base plugin '{}'",
            name,
            PLUGIN_SQL
        );
    }

    let examples = character
        .message_examples
        .as_ref()
        .filter(|e| !e.is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!("Character '{}': messageExamples must not be empty", name)
        })?;
    for (i, transcript) in examples.iter().enumerate() {
        if transcript.len() < 2 {
            anyhow::bail!(
                "Character '{}': messageExamples[{}] needs at least 2 turns",
                name,
                i
            );
        }
        for (j, turn) in transcript.iter().enumerate() {
            if turn.name.trim().is_empty() {
                anyhow::bail!(
                    "Character '{}': messageExamples[{}][{}] is missing a speaker name",
                    name,
                    i,
                    j
                );
            }
            match &turn.content.text {
                Some(text) if !text.trim().is_empty() => {}
                _ => anyhow::bail!(
                    "Character '{}': messageExamples[{}][{}] is missing content.text",
                    name,
                    i,
                    j
                ),
            }
        }
    }

    Ok(())
}

/// Merge character with default values
pub fn merge_character_defaults(mut character: Character) -> Character {
    if character.settings.is_none() {
        character.settings = Some(CharacterSettings::default());
    }

    if character.plugins.is_none() {
        character.plugins = Some(vec![]);
    }

    if character.name.is_empty() {
        character.name = "Unnamed Character".to_string();
    }

    character
}

/// Build character plugins based on environment variables
///
/// Pure function of the given snapshot: a fixed map always yields the same
/// ordered list, and absent variables produce omissions, never errors.
/// Note the local fallback keys off `OPENAI_API_KEY` alone, so an
/// Anthropic-only configuration still loads the local model plugin.
pub fn build_character_plugins(env: &HashMap<String, String>) -> Vec<String> {
    let mut plugins: Vec<String> = vec![PLUGIN_SQL.to_string()];

    // Model provider plugins
    if env_present(env, "ANTHROPIC_API_KEY") {
        plugins.push(PLUGIN_ANTHROPIC.to_string());
    }
    if env_present(env, "OPENAI_API_KEY") {
        plugins.push(PLUGIN_OPENAI.to_string());
    } else {
        plugins.push(PLUGIN_LOCAL_AI.to_string());
    }

    // Platform plugins
    if env_present(env, "DISCORD_API_TOKEN") {
        plugins.push(PLUGIN_DISCORD.to_string());
    }
    if env_present(env, "TWITTER_USERNAME") {
        plugins.push(PLUGIN_TWITTER.to_string());
    }
    if env_present(env, "TELEGRAM_BOT_TOKEN") {
        plugins.push(PLUGIN_TELEGRAM.to_string());
    }

    if !env_present(env, "IGNORE_BOOTSTRAP") {
        plugins.push(PLUGIN_BOOTSTRAP.to_string());
    }

    plugins
}

/// Snapshot the process environment for plugin assembly
///
/// Taken once when the project registry is constructed; changing environment
/// variables afterwards has no effect on the plugin list.
pub fn environment_snapshot() -> HashMap<String, String> {
    std::env::vars().collect()
}

fn env_present(env: &HashMap<String, String>, key: &str) -> bool {
    env.get(key).map(|s| !s.trim().is_empty()).unwrap_or(false)
}
