//! disclosure.rs — Which entity lists the reader asked to see in full.
//!
//! Owned by the caller and passed into every render. The set only grows:
//! there is no collapse operation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::line::{EntityList, ListKey};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisclosureState {
    expanded: BTreeSet<ListKey>,
}

impl DisclosureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a list as expanded. Returns false if it already was.
    pub fn expand(&mut self, key: impl Into<ListKey>) -> bool {
        let key = key.into();
        let inserted = self.expanded.insert(key.clone());
        if inserted {
            tracing::debug!(list_key = %key, "expanded entity list");
        }
        inserted
    }

    /// Activate the "show N more" affordance of a collapsed list.
    ///
    /// Issues exactly one `expand` keyed by the list's identity; lists that
    /// are not truncated have no affordance and are left alone.
    pub fn show_more(&mut self, list: &EntityList) -> bool {
        if !list.is_truncated() {
            return false;
        }
        self.expand(list.key.clone())
    }

    pub fn is_expanded(&self, key: &ListKey) -> bool {
        self.expanded.contains(key)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListKey> {
        self.expanded.iter()
    }
}

impl<K: Into<ListKey>> FromIterator<K> for DisclosureState {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut state = Self::new();
        for key in iter {
            state.expand(key);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = DisclosureState::new();
        assert!(state.is_empty());
        assert!(!state.is_expanded(&ListKey::new("post", "create", "")));
    }

    #[test]
    fn expand_is_idempotent() {
        let key = ListKey::new("post", "create", "");
        let mut once = DisclosureState::new();
        once.expand(key.clone());

        let mut twice = DisclosureState::new();
        assert!(twice.expand(key.clone()));
        assert!(!twice.expand(key.clone()));

        assert_eq!(once, twice);
        assert!(twice.is_expanded(&key));
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn expanding_another_list_keeps_earlier_ones() {
        let first = ListKey::new("post", "create", "");
        let second = ListKey::new("plugin", "activate", "");
        let mut state = DisclosureState::new();
        state.expand(first.clone());
        state.expand(second.clone());
        assert!(state.is_expanded(&first));
        assert!(state.is_expanded(&second));
    }

    #[test]
    fn show_more_only_applies_to_truncated_lists() {
        use crate::line::{EntityRef, ListLayout};

        let key = ListKey::new("post", "create", "");
        let mut list = EntityList {
            key: key.clone(),
            layout: ListLayout::Inline,
            shown: vec![EntityRef {
                name: "A".to_string(),
                count: 1,
            }],
            hidden: 0,
        };
        let mut state = DisclosureState::new();
        assert!(!state.show_more(&list));
        assert!(state.is_empty());

        list.layout = ListLayout::Block;
        list.hidden = 2;
        assert!(state.show_more(&list));
        assert!(state.is_expanded(&key));
    }

    #[test]
    fn collects_from_raw_keys() {
        let state: DisclosureState = ["post|||create|||"].into_iter().collect();
        assert!(state.is_expanded(&ListKey::new("post", "create", "")));
    }
}
