//! The closed command set and the keyword-dispatch parser.

use wayfarer_core::Direction;

use super::config::ParserConfig;

/// A parsed player command.
///
/// Object names are carried as raw text; resolving them against the
/// world (including fuzzy matching) happens at execution time, when the
/// current location is known.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Describe the current location.
    Look,
    /// Examine a named item, NPC, or door.
    Examine {
        /// The target name as typed.
        target: String,
    },
    /// Pick up an item.
    Take {
        /// The item name as typed.
        item: String,
    },
    /// Pick up everything in the current location.
    TakeAll,
    /// Put down a carried item.
    Drop {
        /// The item name as typed.
        item: String,
    },
    /// Put down everything carried.
    DropAll,
    /// Use a carried or nearby item.
    Use {
        /// The item name as typed.
        item: String,
    },
    /// Combine two items.
    Combine {
        /// The item the player starts from.
        left: String,
        /// The item it is combined with.
        right: String,
    },
    /// Pour a fluid into a container.
    Pour {
        /// The fluid item name as typed.
        fluid: String,
        /// The container item name as typed.
        container: String,
    },
    /// Move through an exit in a direction.
    Go {
        /// The direction to move in.
        direction: Direction,
    },
    /// Move towards a named location.
    GoTo {
        /// The destination name as typed.
        destination: String,
    },
    /// List carried items.
    Inventory,
    /// Show turn count and carry statistics.
    Stats,
    /// Open a door.
    Open {
        /// The door name as typed.
        door: String,
    },
    /// Unlock a door with a carried key.
    Unlock {
        /// The door name as typed.
        door: String,
    },
    /// End the game.
    Quit,
    /// Anything the parser could not make sense of.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Parse a line of player input into a command.
///
/// Parsing is total: anything unintelligible becomes
/// [`Command::Unknown`] rather than an error. The vocabulary comes
/// entirely from the configuration; the parser itself knows no words.
pub fn parse(input: &str, config: &ParserConfig) -> Command {
    let trimmed = input.trim();
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let Some(&first) = words.first() else {
        return unknown(trimmed);
    };
    let verb = first.to_lowercase();
    let rest = &words[1..];

    // A bare direction word moves without a verb.
    if let Some(direction) = config.direction_of(&verb) {
        return Command::Go { direction };
    }

    if config.go_words.contains(&verb) {
        return parse_go(trimmed, rest, config);
    }
    if config.look_words.contains(&verb) || config.examine_words.contains(&verb) {
        return parse_look(rest, config);
    }
    if config.take_words.contains(&verb) {
        return parse_take(trimmed, rest, config);
    }
    if config.drop_words.contains(&verb) {
        return parse_drop(trimmed, rest, config);
    }
    if config.use_words.contains(&verb) {
        return parse_use(trimmed, rest, config);
    }
    if config.combine_words.contains(&verb) {
        return parse_combine(trimmed, rest, config);
    }
    if config.pour_words.contains(&verb) {
        return parse_pour(trimmed, rest, config);
    }
    if config.open_words.contains(&verb) {
        return parse_door_command(trimmed, rest, config, |door| Command::Open { door });
    }
    if config.unlock_words.contains(&verb) {
        return parse_door_command(trimmed, rest, config, |door| Command::Unlock { door });
    }
    if config.inventory_words.contains(&verb) {
        return Command::Inventory;
    }
    if config.stats_words.contains(&verb) {
        return Command::Stats;
    }
    if config.quit_words.contains(&verb) {
        return Command::Quit;
    }

    unknown(trimmed)
}

fn unknown(input: &str) -> Command {
    Command::Unknown {
        input: input.to_string(),
    }
}

/// The words naming the object of a command: everything after the
/// keyword with filler tokens removed.
fn object_words<'a>(rest: &[&'a str], config: &ParserConfig) -> Vec<&'a str> {
    rest.iter()
        .copied()
        .filter(|w| !config.filler_words.contains(&w.to_lowercase()))
        .collect()
}

fn parse_look(rest: &[&str], config: &ParserConfig) -> Command {
    let object = object_words(rest, config);
    if object.is_empty() {
        Command::Look
    } else {
        Command::Examine {
            target: object.join(" "),
        }
    }
}

fn parse_take(input: &str, rest: &[&str], config: &ParserConfig) -> Command {
    let object = object_words(rest, config);
    match object.first() {
        None => unknown(input),
        Some(first) if first.eq_ignore_ascii_case("all") => Command::TakeAll,
        Some(_) => Command::Take {
            item: object.join(" "),
        },
    }
}

fn parse_drop(input: &str, rest: &[&str], config: &ParserConfig) -> Command {
    let object = object_words(rest, config);
    match object.first() {
        None => unknown(input),
        Some(first) if first.eq_ignore_ascii_case("all") => Command::DropAll,
        Some(_) => Command::Drop {
            item: object.join(" "),
        },
    }
}

fn parse_use(input: &str, rest: &[&str], config: &ParserConfig) -> Command {
    let object = object_words(rest, config);
    if object.is_empty() {
        unknown(input)
    } else {
        Command::Use {
            item: object.join(" "),
        }
    }
}

fn parse_go(input: &str, rest: &[&str], config: &ParserConfig) -> Command {
    // A direction right after the verb wins, trailing words or not
    // ("go in the carriage"). It is read before filler stripping;
    // "up" doubles as a filler token in take/pick phrasings.
    if let Some(first) = rest.first() {
        if let Some(direction) = config.direction_of(first) {
            return Command::Go { direction };
        }
    }

    let object = object_words(rest, config);
    match object.as_slice() {
        [] => unknown(input),
        // A single remaining token may still be a direction ("go to
        // the north"); several tokens are always a destination name.
        [single] => match config.direction_of(single) {
            Some(direction) => Command::Go { direction },
            None => Command::GoTo {
                destination: single.to_string(),
            },
        },
        _ => Command::GoTo {
            destination: object.join(" "),
        },
    }
}

fn parse_combine(input: &str, rest: &[&str], config: &ParserConfig) -> Command {
    let operands: Vec<&str> = rest
        .iter()
        .copied()
        .filter(|w| {
            let lower = w.to_lowercase();
            !config.combine_separators.contains(&lower) && !config.filler_words.contains(&lower)
        })
        .collect();
    // The last operand token is the right-hand item; everything before
    // it names the left-hand item.
    match operands.split_last() {
        Some((right, left)) if !left.is_empty() => Command::Combine {
            left: left.join(" "),
            right: right.to_string(),
        },
        _ => unknown(input),
    }
}

fn parse_pour(input: &str, rest: &[&str], config: &ParserConfig) -> Command {
    // The preposition needs at least one token on each side of it.
    let split = rest.iter().enumerate().position(|(i, w)| {
        i >= 1 && i + 1 < rest.len() && config.pour_prepositions.contains(&w.to_lowercase())
    });
    let Some(split) = split else {
        return unknown(input);
    };

    let fluid = object_words(&rest[..split], config);
    let container = object_words(&rest[split + 1..], config);
    if fluid.is_empty() || container.is_empty() {
        return unknown(input);
    }
    Command::Pour {
        fluid: fluid.join(" "),
        container: container.join(" "),
    }
}

fn parse_door_command(
    input: &str,
    rest: &[&str],
    config: &ParserConfig,
    build: impl FnOnce(String) -> Command,
) -> Command {
    let object = object_words(rest, config);
    if object.is_empty() {
        unknown(input)
    } else {
        build(object.join(" "))
    }
}
