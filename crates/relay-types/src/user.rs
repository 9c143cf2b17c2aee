//! Chat participant types.

use serde::{Deserialize, Serialize};

/// A chat participant, either the human or the bot.
///
/// Users are created only by seeding; the relay never updates or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Display names of the baseline participants inserted at first startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedUsers {
    pub human_name: String,
    pub bot_name: String,
}

impl SeedUsers {
    /// Seed names in insertion order (human first, so it gets the lowest id).
    pub fn names(&self) -> [&str; 2] {
        [self.human_name.as_str(), self.bot_name.as_str()]
    }
}

impl Default for SeedUsers {
    fn default() -> Self {
        Self {
            human_name: "Alice".to_string(),
            bot_name: "Bot".to_string(),
        }
    }
}
