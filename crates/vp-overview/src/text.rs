//! text.rs — Stateless text and list helpers used by the line builders.

use std::collections::HashMap;
use std::hash::Hash;

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Past tense of an action verb ("create" → "created", "edit" → "edited").
pub fn verb_to_past_tense(verb: &str) -> String {
    match verb {
        "undo" => "undid".to_string(),
        "spam" => "spammed".to_string(),
        "unspam" => "unspammed".to_string(),
        v if v.ends_with('e') => format!("{}d", v),
        v if doubles_final_consonant(v) => {
            let last = &v[v.len() - 1..];
            format!("{}{}ed", v, last)
        }
        v => format!("{}ed", v),
    }
}

/// Multi-syllable verbs stressed on the last syllable ("submitted").
const STRESSED_LAST: &[&str] = &["commit", "submit", "permit", "omit", "unpin", "refer", "prefer"];

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Consonant-vowel-consonant ending of a one-syllable verb ("pin" → "pinned").
fn doubles_final_consonant(verb: &str) -> bool {
    if STRESSED_LAST.contains(&verb) {
        return true;
    }
    let bytes = verb.as_bytes();
    let [.., a, b, c] = bytes else {
        return false;
    };
    let cvc = a.is_ascii_lowercase()
        && c.is_ascii_lowercase()
        && !is_vowel(*a)
        && is_vowel(*b)
        && !is_vowel(*c)
        && !matches!(*c, b'w' | b'x' | b'y');
    let vowel_groups = bytes
        .iter()
        .zip(std::iter::once(&b'_').chain(bytes.iter()))
        .filter(|(cur, prev)| is_vowel(**cur) && !is_vowel(**prev))
        .count();
    cvc && vowel_groups == 1
}

/// English plural of an entity type label.
///
/// Labels ending in "meta" are uncountable ("usermeta", "postmeta").
pub fn pluralize(noun: &str) -> String {
    if noun.ends_with("meta") {
        return noun.to_string();
    }
    let ends_with_consonant_y = noun.len() > 1
        && noun.ends_with('y')
        && !noun[..noun.len() - 1].ends_with(['a', 'e', 'i', 'o', 'u']);
    if ends_with_consonant_y {
        format!("{}ies", &noun[..noun.len() - 1])
    } else if noun.ends_with(['s', 'x', 'z']) || noun.ends_with("ch") || noun.ends_with("sh") {
        format!("{}es", noun)
    } else {
        format!("{}s", noun)
    }
}

/// Join items as "A", "A and B", "A, B and C".
pub fn join<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|s| s.as_ref()).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Keep the first item for each distinct key, preserving order.
pub fn filter_duplicates<'a, T, K, F>(items: &'a [T], key: F) -> Vec<&'a T>
where
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    let mut seen = std::collections::HashSet::new();
    items.iter().filter(|item| seen.insert(key(*item))).collect()
}

/// Number of occurrences of each key.
pub fn count_duplicates<'a, T, K, F>(items: &'a [T], key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("created"), "Created");
        assert_eq!(capitalize("Moved"), "Moved");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn past_tense() {
        assert_eq!(verb_to_past_tense("create"), "created");
        assert_eq!(verb_to_past_tense("edit"), "edited");
        assert_eq!(verb_to_past_tense("unapprove"), "unapproved");
        assert_eq!(verb_to_past_tense("trash"), "trashed");
        assert_eq!(verb_to_past_tense("undo"), "undid");
        assert_eq!(verb_to_past_tense("install"), "installed");
    }

    #[test]
    fn past_tense_doubles_final_consonant() {
        assert_eq!(verb_to_past_tense("pin"), "pinned");
        assert_eq!(verb_to_past_tense("tag"), "tagged");
        assert_eq!(verb_to_past_tense("submit"), "submitted");
        assert_eq!(verb_to_past_tense("unpin"), "unpinned");
        // Unstressed or non-CVC endings stay single.
        assert_eq!(verb_to_past_tense("edit"), "edited");
        assert_eq!(verb_to_past_tense("add"), "added");
        assert_eq!(verb_to_past_tense("fix"), "fixed");
        assert_eq!(verb_to_past_tense("import"), "imported");
        assert_eq!(verb_to_past_tense("rollback"), "rollbacked");
    }

    #[test]
    fn plurals() {
        assert_eq!(pluralize("post"), "posts");
        assert_eq!(pluralize("page"), "pages");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("key"), "keys");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("usermeta"), "usermeta");
        assert_eq!(pluralize("postmeta"), "postmeta");
    }

    #[test]
    fn join_lists() {
        let empty: [&str; 0] = [];
        assert_eq!(join(&empty), "");
        assert_eq!(join(&["A"]), "A");
        assert_eq!(join(&["A", "B"]), "A and B");
        assert_eq!(join(&["A", "B", "C"]), "A, B and C");
    }

    #[test]
    fn filter_duplicates_keeps_first_occurrence() {
        let items = vec![("a", 1), ("b", 2), ("a", 3)];
        let filtered = filter_duplicates(&items, |i| i.0);
        assert_eq!(filtered, vec![&("a", 1), &("b", 2)]);
    }

    #[test]
    fn count_duplicates_totals_match_input() {
        let items = vec!["x", "y", "x", "x"];
        let counts = count_duplicates(&items, |s| *s);
        assert_eq!(counts["x"], 3);
        assert_eq!(counts["y"], 1);
        assert_eq!(counts.values().sum::<usize>(), items.len());
    }
}
