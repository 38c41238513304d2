use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::door::Door;
use crate::item::{Item, ItemId};
use crate::npc::Npc;

/// Unique identifier for a location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(String);

impl LocationId {
    /// Create a location ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LocationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LocationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A direction of travel.
///
/// The declaration order doubles as the display order when exits are
/// listed, so compass directions come before vertical and enclosure
/// moves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// North.
    North,
    /// Northeast.
    Northeast,
    /// East.
    East,
    /// Southeast.
    Southeast,
    /// South.
    South,
    /// Southwest.
    Southwest,
    /// West.
    West,
    /// Northwest.
    Northwest,
    /// Up.
    Up,
    /// Down.
    Down,
    /// Inward, entering something.
    In,
    /// Outward, leaving something.
    Out,
}

impl Direction {
    /// Parse a full direction name, ignoring case. Short aliases like
    /// `"n"` are handled by the parser configuration, not here.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "north" => Some(Self::North),
            "northeast" => Some(Self::Northeast),
            "east" => Some(Self::East),
            "southeast" => Some(Self::Southeast),
            "south" => Some(Self::South),
            "southwest" => Some(Self::Southwest),
            "west" => Some(Self::West),
            "northwest" => Some(Self::Northwest),
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    /// The lowercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::Northeast => "northeast",
            Self::East => "east",
            Self::Southeast => "southeast",
            Self::South => "south",
            Self::Southwest => "southwest",
            Self::West => "west",
            Self::Northwest => "northwest",
            Self::Up => "up",
            Self::Down => "down",
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// The direction leading back the way you came.
    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::Northeast => Self::Southwest,
            Self::East => Self::West,
            Self::Southeast => Self::Northwest,
            Self::South => Self::North,
            Self::Southwest => Self::Northeast,
            Self::West => Self::East,
            Self::Northwest => Self::Southeast,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A connection from one location to another.
///
/// Exits are one-directional records. A passable corridor between two
/// rooms is two exits, one in each location; the `one_way` flag marks
/// exits that deliberately have no return leg, which exempts them from
/// the symmetry check at world construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exit {
    /// The direction this exit leads in.
    pub direction: Direction,
    /// ID of the location the exit leads to.
    pub target: LocationId,
    /// The door guarding this exit, if any.
    pub door: Option<Door>,
    /// Whether the exit deliberately has no return exit on the far side.
    pub one_way: bool,
}

impl Exit {
    /// Create a plain, doorless, two-way exit.
    pub fn new(direction: Direction, target: impl Into<LocationId>) -> Self {
        Self {
            direction,
            target: target.into(),
            door: None,
            one_way: false,
        }
    }

    /// Put a door on this exit.
    pub fn with_door(mut self, door: Door) -> Self {
        self.door = Some(door);
        self
    }

    /// Mark the exit as having no return leg.
    pub fn one_way(mut self) -> Self {
        self.one_way = true;
        self
    }
}

/// A place the player can stand in.
///
/// Locations own their items, NPCs, and exits. Item containment is only
/// ever changed through [`Location::add_item`] and
/// [`Location::remove_item`], so an item cannot end up both here and in
/// the player's inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    id: LocationId,
    name: String,
    description: String,
    items: Vec<Item>,
    npcs: Vec<Npc>,
    exits: HashMap<Direction, Exit>,
}

impl Location {
    /// Create an empty location.
    pub fn new(
        id: impl Into<LocationId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            npcs: Vec::new(),
            exits: HashMap::new(),
        }
    }

    /// Place an item here.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Put an NPC here.
    pub fn with_npc(mut self, npc: Npc) -> Self {
        self.npcs.push(npc);
        self
    }

    /// Add an exit, silently replacing any previous exit in the same
    /// direction.
    pub fn with_exit(mut self, exit: Exit) -> Self {
        self.exits.insert(exit.direction, exit);
        self
    }

    /// Unique identifier of this location.
    pub fn id(&self) -> &LocationId {
        &self.id
    }

    /// Display name shown to the player.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description shown when looking around.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The items lying here, in placement order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The NPCs standing here.
    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    /// All exits, keyed by direction.
    pub fn exits(&self) -> &HashMap<Direction, Exit> {
        &self.exits
    }

    /// The exit in a direction, if one exists.
    pub fn exit(&self, direction: Direction) -> Option<&Exit> {
        self.exits.get(&direction)
    }

    /// Mutable access to the exit in a direction.
    pub fn exit_mut(&mut self, direction: Direction) -> Option<&mut Exit> {
        self.exits.get_mut(&direction)
    }

    /// Add an exit after construction. Returns the exit previously
    /// registered in that direction, if any, so callers can notice an
    /// overwrite.
    pub fn add_exit(&mut self, exit: Exit) -> Option<Exit> {
        self.exits.insert(exit.direction, exit)
    }

    /// Put an item down here.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove an item by ID, returning it for handover to an inventory.
    pub fn remove_item(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|i| &i.id == id)?;
        Some(self.items.remove(index))
    }

    /// Find an item by exact ID, name, or alias match, ignoring case.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.matches(name))
    }

    /// Put an NPC down here.
    pub fn add_npc(&mut self, npc: Npc) {
        self.npcs.push(npc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_names_round_trip() {
        for name in [
            "north",
            "northeast",
            "east",
            "southeast",
            "south",
            "southwest",
            "west",
            "northwest",
            "up",
            "down",
            "in",
            "out",
        ] {
            let direction = Direction::from_name(name).unwrap();
            assert_eq!(direction.name(), name);
        }
        assert!(Direction::from_name("sideways").is_none());
    }

    #[test]
    fn direction_parse_ignores_case() {
        assert_eq!(Direction::from_name("NORTH"), Some(Direction::North));
        assert_eq!(Direction::from_name("In"), Some(Direction::In));
    }

    #[test]
    fn opposite_is_an_involution() {
        for name in ["north", "southwest", "up", "in"] {
            let direction = Direction::from_name(name).unwrap();
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn add_exit_returns_the_replaced_exit() {
        let mut platform = Location::new("platform", "Platform", "Windy.");
        assert!(
            platform
                .add_exit(Exit::new(Direction::North, "yard"))
                .is_none()
        );

        let replaced = platform
            .add_exit(Exit::new(Direction::North, "office"))
            .unwrap();
        assert_eq!(replaced.target, LocationId::new("yard"));
        assert_eq!(
            platform.exit(Direction::North).unwrap().target,
            LocationId::new("office")
        );
    }

    #[test]
    fn remove_item_hands_the_item_over() {
        let mut platform = Location::new("platform", "Platform", "Windy.")
            .with_item(Item::new("ticket", "paper ticket"));

        let removed = platform.remove_item(&ItemId::new("ticket")).unwrap();
        assert_eq!(removed.id, ItemId::new("ticket"));
        assert!(platform.items().is_empty());
        assert!(platform.remove_item(&ItemId::new("ticket")).is_none());
    }

    #[test]
    fn find_item_matches_aliases_case_insensitively() {
        let platform = Location::new("platform", "Platform", "Windy.")
            .with_item(Item::new("ticket", "paper ticket").with_alias("pass"));

        assert!(platform.find_item("PASS").is_some());
        assert!(platform.find_item("stub").is_none());
    }
}
