use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::GameState;

/// Unique identifier for an item.
///
/// IDs are stable, human-readable strings chosen by the world builder
/// (`"brass-key"`), distinct from the display name shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Create an item ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Actions an item can react to.
///
/// Each action may carry a line of flavour text in the item's reaction
/// table. The `*Failed` variants fire when the action was attempted but
/// rejected, so an item can explain its own refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemAction {
    /// The item was picked up.
    Take,
    /// Picking the item up was rejected.
    TakeFailed,
    /// The item was dropped.
    Drop,
    /// Dropping the item was rejected.
    DropFailed,
    /// The item was used on its own.
    Use,
    /// Using the item was rejected.
    UseFailed,
    /// The item was destroyed.
    Destroy,
    /// Destroying the item was rejected.
    DestroyFailed,
    /// The item was combined with another item.
    Combine,
    /// Combining the item was rejected.
    CombineFailed,
    /// The item's contents were poured into a container.
    Pour,
    /// Pouring the item was rejected.
    PourFailed,
}

/// A precondition guarding some piece of world content.
///
/// Conditions are plain data so worlds remain serializable; they are
/// evaluated against the live game state when the content is accessed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadCondition {
    /// Always satisfied.
    #[default]
    Always,
    /// The player carries the given item.
    HasItem(ItemId),
    /// The given story flag has been set.
    FlagSet(String),
    /// At least this many turns have elapsed.
    TurnsAtLeast(u32),
    /// The inner condition is not satisfied.
    Not(Box<ReadCondition>),
    /// All inner conditions are satisfied.
    All(Vec<ReadCondition>),
    /// At least one inner condition is satisfied.
    Any(Vec<ReadCondition>),
}

impl ReadCondition {
    /// Evaluate this condition against the current game state.
    pub fn evaluate(&self, state: &GameState) -> bool {
        match self {
            Self::Always => true,
            Self::HasItem(id) => state.inventory().contains(id),
            Self::FlagSet(flag) => state.flag(flag),
            Self::TurnsAtLeast(n) => state.turns() >= *n,
            Self::Not(inner) => !inner.evaluate(state),
            Self::All(inner) => inner.iter().all(|c| c.evaluate(state)),
            Self::Any(inner) => inner.iter().any(|c| c.evaluate(state)),
        }
    }
}

/// Written content carried by an item.
///
/// A key with an engraved inscription, a ticket with fine print. The
/// text is revealed when the item is examined and the condition holds;
/// reading may cost extra turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Readable {
    /// The text revealed by reading.
    pub text: String,
    /// Precondition for the text to be legible.
    pub condition: ReadCondition,
    /// Extra turns spent reading.
    pub turn_cost: u32,
    /// Shown instead of the text while the condition is unsatisfied.
    pub hint: Option<String>,
}

impl Readable {
    /// Create readable content that is always legible and free to read.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            condition: ReadCondition::Always,
            turn_cost: 0,
            hint: None,
        }
    }

    /// Guard the text behind a condition.
    pub fn with_condition(mut self, condition: ReadCondition) -> Self {
        self.condition = condition;
        self
    }

    /// Reading spends this many extra turns.
    pub fn with_turn_cost(mut self, turns: u32) -> Self {
        self.turn_cost = turns;
        self
    }

    /// Shown while the condition still blocks reading.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// A physical object the player can find, carry, and use.
///
/// Keys are ordinary items referenced by a door's `required_key`; there
/// is no separate key type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Display name shown to the player.
    pub name: String,
    /// Free-text description shown on examine.
    pub description: String,
    /// Carry weight. Zero for weightless items.
    pub weight: f64,
    /// Alternative names the player may refer to the item by.
    pub aliases: Vec<String>,
    /// Whether the item can be picked up at all.
    pub takeable: bool,
    /// Flavour text per action, consulted after the action resolves.
    pub reactions: HashMap<ItemAction, String>,
    /// Written content, if the item carries any.
    pub readable: Option<Readable>,
}

impl Item {
    /// Create a takeable, weightless item with no description.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            weight: 0.0,
            aliases: Vec::new(),
            takeable: true,
            reactions: HashMap::new(),
            readable: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the carry weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Add an alternative name.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Mark the item as fixed in place.
    pub fn not_takeable(mut self) -> Self {
        self.takeable = false;
        self
    }

    /// Add a line of reaction text for an action.
    pub fn with_reaction(mut self, action: ItemAction, text: impl Into<String>) -> Self {
        self.reactions.insert(action, text.into());
        self
    }

    /// Attach written content.
    pub fn with_readable(mut self, readable: Readable) -> Self {
        self.readable = Some(readable);
        self
    }

    /// The reaction text for an action, if the table defines one.
    pub fn reaction(&self, action: ItemAction) -> Option<&str> {
        self.reactions.get(&action).map(String::as_str)
    }

    /// Whether `name` exactly matches this item's ID, name, or an alias,
    /// ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        self.id.as_str().eq_ignore_ascii_case(name)
            || self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}
