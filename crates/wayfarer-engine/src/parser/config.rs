//! Keyword configuration for the command parser.

use std::collections::{HashMap, HashSet};

use wayfarer_core::Direction;

fn words(list: &[&str]) -> HashSet<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// The surface vocabulary the parser accepts, as plain data.
///
/// Every command kind has its own set of accepted first words, so a
/// world can rename or translate its verbs by handing the parser a
/// different configuration instead of subclassing anything. The
/// defaults cover common English phrasings.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// First words that describe the current location.
    pub look_words: HashSet<String>,
    /// First words that examine a named target.
    pub examine_words: HashSet<String>,
    /// First words that pick an item up.
    pub take_words: HashSet<String>,
    /// First words that put an item down.
    pub drop_words: HashSet<String>,
    /// First words that use an item.
    pub use_words: HashSet<String>,
    /// First words that combine two items.
    pub combine_words: HashSet<String>,
    /// First words that pour a fluid.
    pub pour_words: HashSet<String>,
    /// First words that start a movement command.
    pub go_words: HashSet<String>,
    /// First words that list carried items.
    pub inventory_words: HashSet<String>,
    /// First words that show game statistics.
    pub stats_words: HashSet<String>,
    /// First words that open a door.
    pub open_words: HashSet<String>,
    /// First words that unlock a door.
    pub unlock_words: HashSet<String>,
    /// First words that end the game.
    pub quit_words: HashSet<String>,
    /// Tokens dropped from object names ("take up the key").
    pub filler_words: HashSet<String>,
    /// Tokens splitting the two operands of a combine command.
    pub combine_separators: HashSet<String>,
    /// Tokens splitting fluid from container in a pour command.
    pub pour_prepositions: HashSet<String>,
    /// Short direction spellings ("n", "sw") mapped to directions.
    pub direction_aliases: HashMap<String, Direction>,
    /// Whether full direction names ("north", "in") are recognized on
    /// top of the alias table.
    pub accept_direction_names: bool,
}

impl ParserConfig {
    /// Resolve a single token to a direction, ignoring case.
    pub fn direction_of(&self, token: &str) -> Option<Direction> {
        let token = token.to_ascii_lowercase();
        if let Some(direction) = self.direction_aliases.get(&token) {
            return Some(*direction);
        }
        if self.accept_direction_names {
            return Direction::from_name(&token);
        }
        None
    }

    /// Replace the tokens dropped from object names.
    pub fn with_filler_words(mut self, list: &[&str]) -> Self {
        self.filler_words = words(list);
        self
    }

    /// Replace the tokens splitting the operands of a combine command.
    pub fn with_combine_separators(mut self, list: &[&str]) -> Self {
        self.combine_separators = words(list);
        self
    }

    /// Replace the tokens splitting fluid from container in a pour command.
    pub fn with_pour_prepositions(mut self, list: &[&str]) -> Self {
        self.pour_prepositions = words(list);
        self
    }

    /// Set whether full direction names are recognized on top of the
    /// alias table.
    pub fn with_direction_names(mut self, accept: bool) -> Self {
        self.accept_direction_names = accept;
        self
    }

    /// Add a direction spelling to the alias table.
    pub fn with_direction_alias(mut self, alias: &str, direction: Direction) -> Self {
        self.direction_aliases
            .insert(alias.to_ascii_lowercase(), direction);
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        let direction_aliases = [
            ("n", Direction::North),
            ("ne", Direction::Northeast),
            ("e", Direction::East),
            ("se", Direction::Southeast),
            ("s", Direction::South),
            ("sw", Direction::Southwest),
            ("w", Direction::West),
            ("nw", Direction::Northwest),
            ("u", Direction::Up),
            ("d", Direction::Down),
        ]
        .into_iter()
        .map(|(alias, direction)| (alias.to_string(), direction))
        .collect();

        Self {
            look_words: words(&["look", "l"]),
            examine_words: words(&["examine", "x", "inspect", "describe", "read"]),
            take_words: words(&["take", "get", "grab", "pick"]),
            drop_words: words(&["drop", "discard"]),
            use_words: words(&["use", "apply", "activate"]),
            combine_words: words(&["combine", "join", "attach"]),
            pour_words: words(&["pour"]),
            go_words: words(&["go", "walk", "move", "head", "travel"]),
            inventory_words: words(&["inventory", "inv", "i", "items"]),
            stats_words: words(&["stats", "status", "score"]),
            open_words: words(&["open"]),
            unlock_words: words(&["unlock"]),
            quit_words: words(&["quit", "q", "exit", "bye"]),
            filler_words: words(&["the", "a", "an", "up", "to", "at", "on", "off"]),
            combine_separators: words(&["and", "+", "with"]),
            pour_prepositions: words(&["into", "in", "onto"]),
            direction_aliases,
            accept_direction_names: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_covers_the_basics() {
        let config = ParserConfig::default();
        assert!(config.take_words.contains("get"));
        assert!(config.quit_words.contains("q"));
        assert!(config.filler_words.contains("the"));
        assert!(config.combine_separators.contains("+"));
    }

    #[test]
    fn direction_of_reads_aliases_and_names() {
        let config = ParserConfig::default();
        assert_eq!(config.direction_of("sw"), Some(Direction::Southwest));
        assert_eq!(config.direction_of("NORTH"), Some(Direction::North));
        assert_eq!(config.direction_of("in"), Some(Direction::In));
        assert_eq!(config.direction_of("sideways"), None);
    }

    #[test]
    fn full_names_can_be_switched_off() {
        let config = ParserConfig {
            accept_direction_names: false,
            ..ParserConfig::default()
        };
        assert_eq!(config.direction_of("north"), None);
        assert_eq!(config.direction_of("n"), Some(Direction::North));
    }

    #[test]
    fn builder_chain_overrides_the_vocabulary() {
        let config = ParserConfig::default()
            .with_filler_words(&["der", "die", "das"])
            .with_combine_separators(&["und"])
            .with_pour_prepositions(&["in"])
            .with_direction_names(false)
            .with_direction_alias("O", Direction::East);
        assert!(config.filler_words.contains("das"));
        assert!(!config.filler_words.contains("the"));
        assert!(config.combine_separators.contains("und"));
        assert!(config.pour_prepositions.contains("in"));
        assert!(!config.pour_prepositions.contains("into"));
        assert!(!config.accept_direction_names);
        // Aliases are stored folded, so lookup stays case-insensitive.
        assert_eq!(config.direction_of("o"), Some(Direction::East));
        assert_eq!(config.direction_of("east"), None);
    }
}
