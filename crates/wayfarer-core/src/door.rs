use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// The state a door is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorState {
    /// The door stands open and can be passed through.
    Open,
    /// The door is shut but not locked.
    Closed,
    /// The door is shut and locked.
    Locked,
    /// The door is gone for good. No action leaves this state.
    Destroyed,
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Locked => write!(f, "locked"),
            Self::Destroyed => write!(f, "destroyed"),
        }
    }
}

/// Actions a door can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorAction {
    /// Swing the door open.
    Open,
    /// Shut the door.
    Close,
    /// Lock the shut door.
    Lock,
    /// Unlock the locked door.
    Unlock,
    /// Destroy the door permanently.
    Destroy,
}

/// A door guarding an exit.
///
/// Doors live inside the exit they guard and are found by name or
/// alias. State changes go through [`Door::apply`], which enforces the
/// transition rules; in particular, a destroyed door stays destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Door {
    name: String,
    aliases: Vec<String>,
    state: DoorState,
    required_key: Option<ItemId>,
    reactions: HashMap<DoorAction, String>,
}

impl Door {
    /// Create a closed, unlocked door with no key.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            state: DoorState::Closed,
            required_key: None,
            reactions: HashMap::new(),
        }
    }

    /// Add an alternative name.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Start the door locked, openable only after unlocking with the key.
    pub fn locked_by(mut self, key: impl Into<ItemId>) -> Self {
        self.state = DoorState::Locked;
        self.required_key = Some(key.into());
        self
    }

    /// Start the door open.
    pub fn starts_open(mut self) -> Self {
        self.state = DoorState::Open;
        self
    }

    /// Add a line of reaction text for an action.
    pub fn with_reaction(mut self, action: DoorAction, text: impl Into<String>) -> Self {
        self.reactions.insert(action, text.into());
        self
    }

    /// Display name of the door.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative names the player may use.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Current state.
    pub fn state(&self) -> DoorState {
        self.state
    }

    /// The key item that unlocks this door, if it has a lock.
    pub fn required_key(&self) -> Option<&ItemId> {
        self.required_key.as_ref()
    }

    /// The reaction text for an action, if the table defines one.
    pub fn reaction(&self, action: DoorAction) -> Option<&str> {
        self.reactions.get(&action).map(String::as_str)
    }

    /// Whether the door currently permits passage.
    pub fn is_passable(&self) -> bool {
        self.state == DoorState::Open
    }

    /// Whether `name` exactly matches this door's name or an alias,
    /// ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Apply an action, returning the state the door ends up in.
    ///
    /// Illegal transitions leave the state untouched: a locked door does
    /// not open without unlocking first, an open door cannot be locked,
    /// and nothing ever changes a destroyed door.
    pub fn apply(&mut self, action: DoorAction) -> DoorState {
        self.state = match (self.state, action) {
            (DoorState::Destroyed, _) => DoorState::Destroyed,
            (_, DoorAction::Destroy) => DoorState::Destroyed,
            (DoorState::Closed, DoorAction::Open) => DoorState::Open,
            (DoorState::Open, DoorAction::Close) => DoorState::Closed,
            (DoorState::Closed, DoorAction::Lock) => DoorState::Locked,
            (DoorState::Locked, DoorAction::Unlock) => DoorState::Closed,
            (current, _) => current,
        };
        self.state
    }
}
