//! Configuration types for Relay.
//!
//! `RelayConfig` represents the `config.toml` in the data directory that
//! controls the listen address, seed participants, channel parsing, and
//! bot reply length.

use serde::{Deserialize, Serialize};

use crate::user::SeedUsers;

/// Top-level configuration. All sections and fields have defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub seed: SeedConfig,

    #[serde(default)]
    pub channel: ChannelConfig,

    #[serde(default)]
    pub reply: ReplyConfig,
}

/// HTTP listen address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Names of the participants inserted by seeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_human_name")]
    pub human_name: String,
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
}

fn default_human_name() -> String {
    SeedUsers::default().human_name
}

fn default_bot_name() -> String {
    SeedUsers::default().bot_name
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            human_name: default_human_name(),
            bot_name: default_bot_name(),
        }
    }
}

impl From<&SeedConfig> for SeedUsers {
    fn from(c: &SeedConfig) -> Self {
        SeedUsers {
            human_name: c.human_name.clone(),
            bot_name: c.bot_name.clone(),
        }
    }
}

/// Duplex channel parsing options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Accept non-JSON frames as content from the current user.
    #[serde(default)]
    pub accept_plain_text: bool,
}

/// Bot reply generation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyConfig {
    #[serde(default = "default_word_count")]
    pub word_count: usize,
}

fn default_word_count() -> usize {
    8
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            word_count: default_word_count(),
        }
    }
}
