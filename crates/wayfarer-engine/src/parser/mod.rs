//! Turning raw player input into commands.

mod command;
mod config;

pub use command::{Command, parse};
pub use config::ParserConfig;
