//! Subcommand implementations.

pub mod demo;
pub mod export;
pub mod play;

use colored::Colorize;
use wayfarer_engine::CommandResult;

/// Print one command result the way the player sees it.
fn print_result(result: &CommandResult) {
    if result.success {
        println!("{}", result.message);
    } else {
        println!("{}", result.message.yellow());
    }
    for reaction in &result.reactions {
        println!("{}", reaction.dimmed());
    }
    println!();
}
