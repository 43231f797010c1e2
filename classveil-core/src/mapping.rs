//! Deterministic, collision-free class-name mappings.
//!
//! The builder walks the extracted class set in lexicographic order,
//! transforms each name, and disambiguates collisions with a numeric
//! suffix. The returned list is ordered longest-original-first; the
//! rewriter depends on that order to keep a short name from corrupting a
//! longer one that contains it.
//!
//! License: MIT OR Apache-2.0

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::transform::{obfuscate_identifier, ObfuscationMethod};

/// One original → obfuscated class-name pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMapping {
    pub original: String,
    pub obfuscated: String,
}

/// Builds the mapping set for one run.
///
/// Empty and excluded names are skipped. Obfuscated names are unique
/// across the whole result; a candidate that collides with an already
/// assigned name, an excluded name, or any input name is retried with
/// `_1`, `_2`, ... suffixes until it is free. Seeding the used set with
/// the input and excluded names means no generated name can ever shadow a
/// class that survives in the documents.
pub fn build_class_mappings(
    class_names: &BTreeSet<String>,
    method: ObfuscationMethod,
    excluded: &HashSet<String>,
) -> Vec<ClassMapping> {
    let mut used: HashSet<String> = excluded.clone();
    used.extend(class_names.iter().cloned());

    let mut mappings = Vec::new();
    for name in class_names {
        if name.is_empty() || excluded.contains(name) {
            continue;
        }

        let base = obfuscate_identifier(name, method);
        let mut candidate = base.clone();
        let mut counter = 1usize;
        while used.contains(&candidate) {
            candidate = format!("{base}_{counter}");
            counter += 1;
        }

        used.insert(candidate.clone());
        mappings.push(ClassMapping {
            original: name.clone(),
            obfuscated: candidate,
        });
    }

    // Stable sort: ties keep the lexicographic scan order.
    mappings.sort_by_key(|m| Reverse(m.original.chars().count()));
    mappings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn excluded(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn excluded_names_never_appear_as_originals() {
        let mappings = build_class_mappings(
            &names(&["btn", "active", "hidden"]),
            ObfuscationMethod::Shift,
            &excluded(&["active"]),
        );
        let originals: BTreeSet<&str> = mappings.iter().map(|m| m.original.as_str()).collect();
        assert_eq!(originals.into_iter().collect::<Vec<_>>(), ["btn", "hidden"]);
    }

    #[test]
    fn output_is_deterministic() {
        let classes = names(&["nav", "card", "footer"]);
        let a = build_class_mappings(&classes, ObfuscationMethod::Hash, &HashSet::new());
        let b = build_class_mappings(&classes, ObfuscationMethod::Hash, &HashSet::new());
        assert_eq!(a, b);
    }

    #[test]
    fn result_is_ordered_longest_original_first() {
        let mappings =
            build_class_mappings(&names(&["a", "ccc", "bb"]), ObfuscationMethod::Hex, &HashSet::new());
        let originals: Vec<&str> = mappings.iter().map(|m| m.original.as_str()).collect();
        assert_eq!(originals, ["ccc", "bb", "a"]);
    }

    #[test]
    fn obfuscated_names_are_pairwise_distinct() {
        // "123" shifts to itself (digits pass through), and "123_1" shifts
        // to itself too, forcing the builder through several collisions
        // against the accumulated output set.
        let mappings = build_class_mappings(
            &names(&["123", "123_1"]),
            ObfuscationMethod::Shift,
            &HashSet::new(),
        );
        let obfuscated: HashSet<&str> = mappings.iter().map(|m| m.obfuscated.as_str()).collect();
        assert_eq!(obfuscated.len(), mappings.len());
        for m in &mappings {
            assert!(!["123", "123_1"].contains(&m.obfuscated.as_str()));
        }
    }

    #[test]
    fn candidates_avoid_excluded_names() {
        // shift("btn") == "ewq"; an excluded class with that exact name must
        // push the candidate to a suffixed variant.
        let mappings = build_class_mappings(
            &names(&["btn"]),
            ObfuscationMethod::Shift,
            &excluded(&["ewq"]),
        );
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings[0].obfuscated, "ewq_1");
    }

    #[test]
    fn empty_names_are_skipped() {
        let mut classes = names(&["btn"]);
        classes.insert(String::new());
        let mappings = build_class_mappings(&classes, ObfuscationMethod::Shift, &HashSet::new());
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings[0].original, "btn");
    }
}
