//! A scripted tour of the bundled world.

use wayfarer_engine::{ParserConfig, execute, parse};

/// The fixed script walks every mechanic: reading, weight limits,
/// doors, keys, pouring, and the final stats screen.
const SCRIPT: &[&str] = &[
    "look",
    "examine ticket",
    "take ticket",
    "take trunk",
    "north",
    "take the brass key",
    "take tea flask",
    "unlock oak door",
    "open oak door",
    "east",
    "examine ledger",
    "take ledger",
    "examine ledger",
    "west",
    "south",
    "open carriage door",
    "go in",
    "pour tea into thermos",
    "out",
    "inventory",
    "stats",
    "quit",
];

pub fn run() -> Result<(), String> {
    let mut state = crate::world::demo_world().map_err(|e| e.to_string())?;
    let config = ParserConfig::default();

    for input in SCRIPT {
        println!("> {input}");
        let result = execute(parse(input, &config), &mut state);
        super::print_result(&result);
        if result.quit {
            break;
        }
    }

    Ok(())
}
