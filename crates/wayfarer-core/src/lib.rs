//! Core types for Wayfarer: the world graph and the player's state.
//!
//! This crate defines the data model the engine executes against. It is
//! independent of command parsing: you can assemble a world
//! programmatically with the builder methods and hand it to
//! [`GameState::new`], or deserialize one from JSON.

/// Doors guarding exits, with their state machine.
pub mod door;
/// Error types used throughout the crate.
pub mod error;
/// The player's carried items and the weight limit.
pub mod inventory;
/// Items, their identifiers, reactions, and readable content.
pub mod item;
/// Locations, exits, and directions.
pub mod location;
/// Non-player characters.
pub mod npc;
/// The live game state owning the world graph.
pub mod state;

/// Re-export door types.
pub use door::{Door, DoorAction, DoorState};
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export inventory types.
pub use inventory::{CapacityCheck, Inventory, RejectedItem};
/// Re-export item types.
pub use item::{Item, ItemAction, ItemId, ReadCondition, Readable};
/// Re-export location types.
pub use location::{Direction, Exit, Location, LocationId};
/// Re-export NPC types.
pub use npc::{Npc, NpcId};
/// Re-export game state types.
pub use state::{FuzzyConfig, GameState};
