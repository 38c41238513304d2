use crate::item::ItemId;
use crate::location::LocationId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when assembling or mutating a world.
///
/// These are builder mistakes, not player mistakes. A malformed player
/// command never produces a `WorldError`; it is reported through the
/// turn result instead.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested location ID does not exist in the world.
    #[error("unknown location: \"{0}\"")]
    UnknownLocation(LocationId),

    /// The starting location handed to the game state does not exist.
    #[error("start location \"{0}\" is not part of the world")]
    UnknownStartLocation(LocationId),

    /// An exit points at a location ID that was never added.
    #[error("exit \"{direction}\" of location \"{location}\" targets missing location \"{target}\"")]
    UnresolvedExitTarget {
        /// The location the exit belongs to.
        location: LocationId,
        /// The direction of the dangling exit.
        direction: String,
        /// The target ID that could not be resolved.
        target: LocationId,
    },

    /// A two-way exit whose target has no exit leading back.
    #[error(
        "two-way exit \"{direction}\" of location \"{location}\" has no return exit in \"{target}\""
    )]
    MissingReturnExit {
        /// The location the exit belongs to.
        location: LocationId,
        /// The direction of the unreciprocated exit.
        direction: String,
        /// The target location missing the return leg.
        target: LocationId,
    },

    /// Two locations share the same ID.
    #[error("duplicate location: \"{0}\"")]
    DuplicateLocation(LocationId),

    /// An item was given a negative weight.
    #[error("item \"{0}\" has a negative weight")]
    NegativeWeight(ItemId),
}
