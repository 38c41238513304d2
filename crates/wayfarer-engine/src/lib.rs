//! Interactive fiction engine for Wayfarer.
//!
//! Turns raw player input into commands and commands into world
//! changes. Parsing is total: any line of input yields exactly one
//! [`Command`], unrecognised input included. Execution is equally
//! total: every command yields a [`CommandResult`], with failures
//! worded by the [`TurnError`] catalogue rather than surfaced as Rust
//! errors.

/// Player-facing failure catalogue.
pub mod error;
/// Command execution against the game state.
pub mod executor;
/// Fuzzy entity name resolution.
pub mod fuzzy;
/// Command parsing and vocabulary configuration.
pub mod parser;

pub use error::TurnError;
pub use executor::{CommandResult, execute, render_location};
pub use fuzzy::FuzzySource;
pub use parser::{Command, ParserConfig, parse};
