//! Name resolution with bounded-distance fuzzy matching.
//!
//! Matching is case-insensitive Levenshtein distance with a hard cap:
//! anything further away than the configured maximum is discarded
//! outright, and a tie between two surviving candidates means the input
//! was ambiguous, so nothing matches. Resolution is therefore
//! deterministic regardless of candidate order.

use std::cmp::Ordering;

use strsim::levenshtein;
use wayfarer_core::{Exit, FuzzyConfig, Item, Location, Npc};

/// Something the player can refer to by typed name.
pub trait FuzzySource {
    /// The strings this entity can be found by: ID, display name, and
    /// aliases.
    fn search_terms(&self) -> impl Iterator<Item = &str>;

    /// Whether `input` exactly equals one of the search terms, ignoring
    /// case.
    fn matches_exact(&self, input: &str) -> bool {
        self.search_terms().any(|t| t.eq_ignore_ascii_case(input))
    }
}

impl FuzzySource for Item {
    fn search_terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id.as_str())
            .chain(std::iter::once(self.name.as_str()))
            .chain(self.aliases.iter().map(String::as_str))
    }
}

impl FuzzySource for Npc {
    fn search_terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id.as_str())
            .chain(std::iter::once(self.name.as_str()))
            .chain(self.aliases.iter().map(String::as_str))
    }
}

/// Locations answer to their ID or display name, for when the player
/// names a destination instead of a direction.
impl FuzzySource for Location {
    fn search_terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id().as_str()).chain(std::iter::once(self.name()))
    }
}

/// An exit is addressable through its door; a doorless exit has no
/// name and never matches.
impl FuzzySource for Exit {
    fn search_terms(&self) -> impl Iterator<Item = &str> {
        self.door.iter().flat_map(|door| {
            std::iter::once(door.name()).chain(door.aliases().iter().map(String::as_str))
        })
    }
}

/// Distance between the needle and a candidate term, if it is within
/// the cap. The needle must already be lowercased.
fn bounded_distance(needle: &str, term: &str, max_distance: usize) -> Option<usize> {
    let distance = levenshtein(needle, &term.to_lowercase());
    (distance <= max_distance).then_some(distance)
}

/// Smallest in-cap distance between the needle and any of the entity's
/// search terms.
fn entity_distance<T: FuzzySource>(needle: &str, entity: &T, max_distance: usize) -> Option<usize> {
    entity
        .search_terms()
        .filter_map(|term| bounded_distance(needle, term, max_distance))
        .min()
}

/// Find the candidate string closest to `input`.
///
/// Returns `None` on an empty input, when no candidate is within
/// `max_distance`, or when the minimum distance is shared by more than
/// one candidate. With `max_distance` of zero this is exact
/// case-insensitive matching.
pub fn best_token<'a, I>(input: &str, candidates: I, max_distance: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut best: Option<(&str, usize)> = None;
    let mut tied = false;
    for candidate in candidates {
        let Some(distance) = bounded_distance(&needle, candidate, max_distance) else {
            continue;
        };
        match &best {
            None => best = Some((candidate, distance)),
            Some((_, best_distance)) => match distance.cmp(best_distance) {
                Ordering::Less => {
                    best = Some((candidate, distance));
                    tied = false;
                }
                Ordering::Equal => tied = true,
                Ordering::Greater => {}
            },
        }
    }

    if tied { None } else { best.map(|(c, _)| c) }
}

/// Find the entity closest to `input`, measuring each entity by its
/// closest search term.
///
/// The tie rule works across entities: two different entities at the
/// same minimum distance make the input ambiguous and nothing is
/// returned. A later candidate at a strictly smaller distance
/// re-establishes a unique winner.
pub fn best_entity<'a, T, I>(input: &str, candidates: I, max_distance: usize) -> Option<&'a T>
where
    T: FuzzySource,
    I: IntoIterator<Item = &'a T>,
{
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut best: Option<(&T, usize)> = None;
    let mut tied = false;
    for candidate in candidates {
        let Some(distance) = entity_distance(&needle, candidate, max_distance) else {
            continue;
        };
        match &best {
            None => best = Some((candidate, distance)),
            Some((_, best_distance)) => match distance.cmp(best_distance) {
                Ordering::Less => {
                    best = Some((candidate, distance));
                    tied = false;
                }
                Ordering::Equal => tied = true,
                Ordering::Greater => {}
            },
        }
    }

    if tied { None } else { best.map(|(c, _)| c) }
}

/// Resolve a typed name against a candidate set: exact ID, name, or
/// alias match first, then fuzzy matching if the settings allow it.
///
/// Tokens that look like command words are kept out of the fuzzy pass,
/// so a mistyped verb cannot accidentally grab a similarly named
/// entity. An exact match on such a token still resolves.
pub fn resolve<'a, T, I>(input: &str, candidates: I, config: &FuzzyConfig) -> Option<&'a T>
where
    T: FuzzySource,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: Clone,
{
    let needle = input.trim();
    if needle.is_empty() {
        return None;
    }

    let iter = candidates.into_iter();
    if let Some(found) = iter.clone().find(|c| c.matches_exact(needle)) {
        return Some(found);
    }
    if !config.enabled || config.is_likely_command_token(needle) {
        return None;
    }
    best_entity(needle, iter, config.max_distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new("paper-ticket", "paper ticket").with_alias("ticket"),
            Item::new("brass-key", "brass key").with_alias("key"),
            Item::new("tea-flask", "tea flask").with_alias("flask"),
        ]
    }

    #[test]
    fn token_typo_within_cap_matches() {
        let found = best_token("ticke", ["ticket", "flask"], 2);
        assert_eq!(found, Some("ticket"));
    }

    #[test]
    fn token_beyond_cap_is_discarded() {
        assert_eq!(best_token("lantern", ["ticket", "flask"], 2), None);
    }

    #[test]
    fn token_tie_is_ambiguous() {
        // "cat" is one edit from both candidates.
        assert_eq!(best_token("cat", ["bat", "hat"], 2), None);
    }

    #[test]
    fn later_strictly_closer_token_overrides_a_tie() {
        assert_eq!(best_token("cat", ["bat", "hat", "cat"], 2), Some("cat"));
    }

    #[test]
    fn discarded_candidates_cannot_cause_a_tie() {
        // "coats" sits at distance 2; "ct" at distance 1. A third
        // candidate outside the cap must not disturb the outcome.
        assert_eq!(best_token("cat", ["coats", "ct", "lantern"], 2), Some("ct"));
    }

    #[test]
    fn zero_max_distance_is_exact_matching() {
        assert_eq!(best_token("Ticket", ["ticket"], 0), Some("ticket"));
        assert_eq!(best_token("tickets", ["ticket"], 0), None);
    }

    #[test]
    fn empty_input_and_empty_candidates_never_match() {
        assert_eq!(best_token("", ["ticket"], 2), None);
        assert_eq!(best_token("   ", ["ticket"], 2), None);
        assert_eq!(best_token("ticket", [], 2), None);
    }

    #[test]
    fn entity_uses_its_closest_search_term() {
        let items = items();
        // "kee" is 3 away from "brass key" but 1 from the alias "key".
        let found = best_entity("kee", &items, 2).unwrap();
        assert_eq!(found.id.as_str(), "brass-key");
    }

    #[test]
    fn entity_tie_across_entities_is_ambiguous() {
        let items = vec![
            Item::new("red-gem", "gem").with_alias("red"),
            Item::new("blue-gem", "jem"),
        ];
        // "qem" is one edit from "gem" and one from "jem".
        assert!(best_entity::<Item, _>("qem", &items, 2).is_none());
    }

    #[test]
    fn doorless_exits_never_match() {
        use wayfarer_core::{Direction, Exit};
        let exits = vec![Exit::new(Direction::North, "yard")];
        assert!(best_entity::<Exit, _>("door", &exits, 2).is_none());
    }

    #[test]
    fn locations_answer_to_id_and_name() {
        let rooms = vec![
            Location::new("waiting-room", "Waiting Room", ""),
            Location::new("office", "Office", ""),
        ];
        let found = best_entity("waiting room", &rooms, 2).unwrap();
        assert_eq!(found.id().as_str(), "waiting-room");
        let found = best_entity("ofice", &rooms, 2).unwrap();
        assert_eq!(found.id().as_str(), "office");
    }

    #[test]
    fn resolve_prefers_exact_over_fuzzy() {
        let items = vec![
            Item::new("key", "key"),
            Item::new("kex-stone", "kex"),
        ];
        let found = resolve("key", &items, &FuzzyConfig::default()).unwrap();
        assert_eq!(found.id.as_str(), "key");
    }

    #[test]
    fn resolve_without_fuzzy_is_exact_only() {
        let config = FuzzyConfig {
            enabled: false,
            ..FuzzyConfig::default()
        };
        let items = items();
        assert!(resolve::<Item, _>("tickt", &items, &config).is_none());
        assert!(resolve::<Item, _>("Ticket", &items, &config).is_some());
    }

    #[test]
    fn command_like_tokens_are_kept_out_of_the_fuzzy_pass() {
        // "look" is one edit from "book", but it is a command word.
        let items = vec![Item::new("book", "book")];
        let config = FuzzyConfig::default();
        assert!(resolve::<Item, _>("look", &items, &config).is_none());
        assert!(resolve::<Item, _>("boo", &items, &config).is_some());

        // An item actually named after a command word still resolves
        // exactly.
        let shelf = vec![Item::new("look", "look")];
        assert!(resolve::<Item, _>("look", &shelf, &config).is_some());
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn resolution_does_not_depend_on_candidate_order(rotation in 0usize..3) {
                let mut items = items();
                items.rotate_left(rotation);
                let found = resolve("tickt", &items, &FuzzyConfig::default());
                prop_assert_eq!(found.map(|i| i.id.as_str()), Some("paper-ticket"));
            }

            #[test]
            fn ambiguity_does_not_depend_on_candidate_order(swapped in proptest::bool::ANY) {
                let mut items = vec![Item::new("bat", "bat"), Item::new("hat", "hat")];
                if swapped {
                    items.swap(0, 1);
                }
                prop_assert!(best_entity::<Item, _>("cat", &items, 2).is_none());
            }
        }
    }
}
