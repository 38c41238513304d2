//! The closed set of ways a turn can fail.

use wayfarer_core::Direction;

/// Everything that can go wrong while executing a player command.
///
/// These are player mistakes, not bugs: a missing item, a locked door,
/// a full pack. The display text is the message shown to the player, so
/// it is written in the narrator's voice. Turn execution never panics
/// and never returns anything outside this set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TurnError {
    /// There is no exit in that direction.
    #[error("You can't go {0} from here.")]
    NoExit(Direction),

    /// No exit of the current location leads to the named destination.
    #[error("You see no way to \"{0}\" from here.")]
    NoPathTo(String),

    /// The door in the way is closed.
    #[error("The {0} is closed.")]
    DoorIsClosed(String),

    /// The door in the way is locked.
    #[error("The {0} is locked.")]
    DoorIsLocked(String),

    /// The door in the way has been destroyed, permanently.
    #[error("The {0} is destroyed; nothing will ever open it again.")]
    DoorIsDestroyed(String),

    /// No item by that name is in reach.
    #[error("You see no \"{0}\" here.")]
    ItemNotFound(String),

    /// The item is fixed in place.
    #[error("The {0} can't be taken.")]
    ItemNotTakeable(String),

    /// The item would not fit on top of the current load.
    #[error("You are carrying too much to also take the {0}.")]
    InventoryFull(String),

    /// The item alone outweighs the carrying capacity.
    #[error("The {0} is far too heavy to carry.")]
    ItemTooHeavy(String),

    /// The player is not carrying the named item.
    #[error("You aren't carrying a \"{0}\".")]
    ItemNotInInventory(String),

    /// The item has no use reaction.
    #[error("You can't think of a way to use the {0}.")]
    ItemNotUsable(String),

    /// The two items have no combine reaction.
    #[error("The {left} and the {right} don't go together.")]
    CannotCombine {
        /// The left-hand item name.
        left: String,
        /// The right-hand item name.
        right: String,
    },

    /// The fluid has no pour reaction.
    #[error("Pouring the {0} gets you nowhere.")]
    CannotPour(String),

    /// No door by that name is here.
    #[error("You see no door called \"{0}\" here.")]
    DoorNotFound(String),

    /// None of the carried items unlocks the door.
    #[error("You have nothing that fits the lock of the {0}.")]
    WrongKey(String),

    /// The door has no lock to begin with.
    #[error("The {0} has no lock.")]
    NoKeyRequired(String),

    /// The door is not locked.
    #[error("The {0} isn't locked.")]
    DoorNotLocked(String),

    /// The door is already open.
    #[error("The {0} is already open.")]
    DoorAlreadyOpen(String),
}
