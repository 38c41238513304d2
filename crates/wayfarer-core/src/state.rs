use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::inventory::Inventory;
use crate::location::{Location, LocationId};

/// Settings for fuzzy name matching.
///
/// Carried on the game state so a world can ship with matching tuned to
/// its audience, or disabled outright for exact-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzyConfig {
    /// Whether fuzzy matching runs at all. When off, only exact ID,
    /// name, and alias matches resolve.
    pub enabled: bool,
    /// Largest edit distance still considered a match. Zero behaves
    /// like exact matching.
    pub max_distance: usize,
    /// Tokens that are probably command words, not object names. Kept
    /// away from fuzzy item matching so a mistyped verb does not grab
    /// a similarly named item.
    pub stop_words: HashSet<String>,
}

impl FuzzyConfig {
    /// Whether a token is more likely a command word than an object
    /// name, ignoring case.
    pub fn is_likely_command_token(&self, token: &str) -> bool {
        self.stop_words.contains(&token.to_ascii_lowercase())
    }
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        let stop_words = [
            "look", "examine", "read", "take", "get", "drop", "use", "combine", "pour", "go",
            "inventory", "stats", "open", "unlock", "quit", "all",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();
        Self {
            enabled: true,
            max_distance: 2,
            stop_words,
        }
    }
}

/// The complete mutable state of a running game.
///
/// Owns the world graph and the player's situation. Constructing a
/// state validates the graph: exit targets must exist, two-way exits
/// must have a return leg, and item weights must not be negative, so
/// movement never discovers a dangling edge at play time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    current: LocationId,
    locations: HashMap<LocationId, Location>,
    inventory: Inventory,
    fuzzy: FuzzyConfig,
    flags: HashSet<String>,
    turns: u32,
    last_move_error: Option<String>,
}

impl GameState {
    /// Build a game state from a starting location and the world's
    /// locations.
    pub fn new(
        start: impl Into<LocationId>,
        locations: impl IntoIterator<Item = Location>,
    ) -> WorldResult<Self> {
        let start = start.into();
        let mut map = HashMap::new();
        for location in locations {
            let id = location.id().clone();
            if map.insert(id.clone(), location).is_some() {
                return Err(WorldError::DuplicateLocation(id));
            }
        }
        if !map.contains_key(&start) {
            return Err(WorldError::UnknownStartLocation(start));
        }

        for location in map.values() {
            for exit in location.exits().values() {
                let Some(target) = map.get(&exit.target) else {
                    return Err(WorldError::UnresolvedExitTarget {
                        location: location.id().clone(),
                        direction: exit.direction.to_string(),
                        target: exit.target.clone(),
                    });
                };
                if !exit.one_way {
                    let has_return = target
                        .exit(exit.direction.opposite())
                        .is_some_and(|back| back.target == *location.id());
                    if !has_return {
                        return Err(WorldError::MissingReturnExit {
                            location: location.id().clone(),
                            direction: exit.direction.to_string(),
                            target: exit.target.clone(),
                        });
                    }
                }
            }
            for item in location.items() {
                if item.weight < 0.0 {
                    return Err(WorldError::NegativeWeight(item.id.clone()));
                }
            }
        }

        Ok(Self {
            current: start,
            locations: map,
            inventory: Inventory::new(),
            fuzzy: FuzzyConfig::default(),
            flags: HashSet::new(),
            turns: 0,
            last_move_error: None,
        })
    }

    /// Limit how much weight the player can carry.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.inventory = Inventory::with_capacity(capacity);
        self
    }

    /// Replace the fuzzy matching settings.
    pub fn with_fuzzy(mut self, fuzzy: FuzzyConfig) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// ID of the location the player stands in.
    pub fn current_location_id(&self) -> &LocationId {
        &self.current
    }

    /// The location the player stands in.
    pub fn current_location(&self) -> &Location {
        self.locations
            .get(&self.current)
            .expect("current location is validated at construction and on every move")
    }

    /// Mutable access to the location the player stands in.
    pub fn current_location_mut(&mut self) -> &mut Location {
        self.locations
            .get_mut(&self.current)
            .expect("current location is validated at construction and on every move")
    }

    /// Look up a location by ID.
    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    /// All locations, in no particular order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Move the player to another location.
    pub fn move_to(&mut self, id: &LocationId) -> WorldResult<()> {
        if !self.locations.contains_key(id) {
            return Err(WorldError::UnknownLocation(id.clone()));
        }
        self.current = id.clone();
        Ok(())
    }

    /// The player's carried items.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access to the player's carried items.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// The fuzzy matching settings.
    pub fn fuzzy(&self) -> &FuzzyConfig {
        &self.fuzzy
    }

    /// Mutable access to the fuzzy matching settings.
    pub fn fuzzy_mut(&mut self) -> &mut FuzzyConfig {
        &mut self.fuzzy
    }

    /// Whether a story flag is set.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Set a story flag.
    pub fn set_flag(&mut self, name: impl Into<String>) {
        self.flags.insert(name.into());
    }

    /// Clear a story flag.
    pub fn clear_flag(&mut self, name: &str) {
        self.flags.remove(name);
    }

    /// Number of turns played so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Advance the turn counter.
    pub fn advance_turns(&mut self, turns: u32) {
        self.turns = self.turns.saturating_add(turns);
    }

    /// The failure message of the most recent unsuccessful move, if the
    /// last move failed.
    pub fn last_move_error(&self) -> Option<&str> {
        self.last_move_error.as_deref()
    }

    /// Record that a move failed.
    pub fn set_last_move_error(&mut self, message: impl Into<String>) {
        self.last_move_error = Some(message.into());
    }

    /// Record that a move succeeded.
    pub fn clear_last_move_error(&mut self) {
        self.last_move_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::location::{Direction, Exit};

    fn two_room_world() -> Vec<Location> {
        vec![
            Location::new("platform", "Station Platform", "Wind and soot.")
                .with_exit(Exit::new(Direction::North, "office")),
            Location::new("office", "Ticket Office", "A narrow counter.")
                .with_exit(Exit::new(Direction::South, "platform")),
        ]
    }

    #[test]
    fn construction_accepts_a_well_formed_world() {
        let state = GameState::new("platform", two_room_world()).unwrap();
        assert_eq!(state.current_location().name(), "Station Platform");
        assert_eq!(state.turns(), 0);
        assert!(state.inventory().is_empty());
    }

    #[test]
    fn unknown_start_location_is_rejected() {
        let err = GameState::new("vault", two_room_world()).unwrap_err();
        assert!(matches!(err, WorldError::UnknownStartLocation(_)));
    }

    #[test]
    fn duplicate_location_ids_are_rejected() {
        let err = GameState::new(
            "platform",
            vec![
                Location::new("platform", "Platform", ""),
                Location::new("platform", "Other Platform", ""),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::DuplicateLocation(_)));
    }

    #[test]
    fn dangling_exit_target_is_rejected() {
        let err = GameState::new(
            "platform",
            vec![
                Location::new("platform", "Platform", "")
                    .with_exit(Exit::new(Direction::East, "nowhere")),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::UnresolvedExitTarget { .. }));
    }

    #[test]
    fn two_way_exit_without_return_leg_is_rejected() {
        let err = GameState::new(
            "platform",
            vec![
                Location::new("platform", "Platform", "")
                    .with_exit(Exit::new(Direction::In, "carriage")),
                Location::new("carriage", "Carriage", ""),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::MissingReturnExit { .. }));
    }

    #[test]
    fn one_way_exits_skip_the_return_check() {
        let state = GameState::new(
            "platform",
            vec![
                Location::new("platform", "Platform", "")
                    .with_exit(Exit::new(Direction::In, "carriage").one_way()),
                Location::new("carriage", "Carriage", "")
                    .with_exit(Exit::new(Direction::Out, "platform").one_way()),
            ],
        );
        assert!(state.is_ok());
    }

    #[test]
    fn negative_item_weight_is_rejected() {
        let err = GameState::new(
            "platform",
            vec![
                Location::new("platform", "Platform", "")
                    .with_item(Item::new("void", "impossible item").with_weight(-1.0)),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::NegativeWeight(_)));
    }

    #[test]
    fn move_to_changes_the_current_location() {
        let mut state = GameState::new("platform", two_room_world()).unwrap();
        state.move_to(&LocationId::new("office")).unwrap();
        assert_eq!(state.current_location().name(), "Ticket Office");

        let err = state.move_to(&LocationId::new("vault")).unwrap_err();
        assert!(matches!(err, WorldError::UnknownLocation(_)));
        assert_eq!(state.current_location().name(), "Ticket Office");
    }

    #[test]
    fn flags_and_turns_accumulate() {
        let mut state = GameState::new("platform", two_room_world()).unwrap();
        assert!(!state.flag("signal-seen"));
        state.set_flag("signal-seen");
        assert!(state.flag("signal-seen"));
        state.clear_flag("signal-seen");
        assert!(!state.flag("signal-seen"));

        state.advance_turns(1);
        state.advance_turns(2);
        assert_eq!(state.turns(), 3);
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = GameState::new("platform", two_room_world())
            .unwrap()
            .with_capacity(5.0);
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.current_location_id(), state.current_location_id());
        assert!(
            restored
                .current_location()
                .exit(Direction::North)
                .is_some()
        );
        assert_eq!(restored.inventory().capacity(), Some(5.0));
    }
}
