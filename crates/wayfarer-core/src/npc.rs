use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a non-player character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NpcId(String);

impl NpcId {
    /// Create an NPC ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NpcId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A non-player character standing in a location.
///
/// NPCs are scenery with a name: they can be examined and referred to,
/// nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    /// Unique identifier for this NPC.
    pub id: NpcId,
    /// Display name shown to the player.
    pub name: String,
    /// Free-text description shown on examine.
    pub description: String,
    /// Alternative names the player may refer to the NPC by.
    pub aliases: Vec<String>,
}

impl Npc {
    /// Create an NPC with an empty description.
    pub fn new(id: impl Into<NpcId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            aliases: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add an alternative name.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Whether `name` exactly matches this NPC's ID, name, or an alias,
    /// ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        self.id.as_str().eq_ignore_ascii_case(name)
            || self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_covers_id_name_and_aliases() {
        let npc = Npc::new("conductor", "train conductor").with_alias("guard");
        assert!(npc.matches("conductor"));
        assert!(npc.matches("Train Conductor"));
        assert!(npc.matches("guard"));
        assert!(!npc.matches("porter"));
    }
}
