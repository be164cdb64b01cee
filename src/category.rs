//! Path-based category classification
//!
//! Maps each covered file to one of a fixed set of subsystem labels by
//! testing its path against an ordered list of fragment rules. Order
//! matters: the first matching fragment wins, so more specific fragments
//! must come before broader ones.

/// Label for paths matching none of the fragment rules
pub const OTHER: &str = "Other";

/// Ordered (fragments, label) rules; any listed fragment selects the label
const RULES: &[(&[&str], &str)] = &[
    (&["/core/"], "Core Systems"),
    (&["/commands/"], "Command System"),
    (&["/game/souls/", "/game/minions/"], "Game Entities"),
    (&["/game/combat/"], "Combat System"),
    (&["/game/narrative/"], "Narrative Systems"),
    (&["/game/world/"], "World Systems"),
    (&["/game/progression/"], "Progression"),
    (&["/terminal/"], "Terminal/UI"),
    (&["/utils/"], "Utilities"),
    (&["/data/"], "Data Loaders"),
];

/// Classify a source file path; total over all inputs
pub fn classify(file_path: &str) -> &'static str {
    for &(fragments, label) in RULES {
        if fragments.iter().any(|f| file_path.contains(f)) {
            return label;
        }
    }
    OTHER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fragments_map_to_labels() {
        assert_eq!(classify("src/core/game_loop.c"), "Core Systems");
        assert_eq!(classify("src/commands/parser.c"), "Command System");
        assert_eq!(classify("src/game/souls/soul.c"), "Game Entities");
        assert_eq!(classify("src/game/minions/minion.c"), "Game Entities");
        assert_eq!(classify("src/game/combat/damage.c"), "Combat System");
        assert_eq!(classify("src/game/narrative/endings/ending.c"), "Narrative Systems");
        assert_eq!(classify("src/game/world/map.c"), "World Systems");
        assert_eq!(classify("src/game/progression/xp.c"), "Progression");
        assert_eq!(classify("src/terminal/input.c"), "Terminal/UI");
        assert_eq!(classify("src/utils/hash_table.c"), "Utilities");
        assert_eq!(classify("src/data/loader.c"), "Data Loaders");
    }

    #[test]
    fn unmatched_paths_fall_through_to_other() {
        assert_eq!(classify("src/main.c"), OTHER);
        assert_eq!(classify(""), OTHER);
        // Fragment must include both slashes
        assert_eq!(classify("core/thing.c"), OTHER);
    }

    #[test]
    fn first_matching_rule_wins() {
        // Path carries both a /core/ and a /utils/ fragment; /core/ is
        // listed first so Core Systems takes precedence.
        assert_eq!(classify("src/core/utils/helpers.c"), "Core Systems");
        assert_eq!(classify("src/utils/core/helpers.c"), "Core Systems");
    }
}
