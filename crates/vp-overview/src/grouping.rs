//! grouping.rs — Partition a commit's changes by type, then action.
//!
//! Groups keep the order in which their key was first seen. They are
//! never sorted, so the summary follows the order the storage layer
//! reported the changes in.

use crate::change::Change;

/// Group items by key, preserving first-seen key order and item order.
///
/// Every item lands in exactly one group; a group exists only if at least
/// one item maps to it. `Option` keys give the "tag absent" group for free.
pub fn group_by<'a, T, K, F>(items: impl IntoIterator<Item = &'a T>, key: F) -> Vec<(K, Vec<&'a T>)>
where
    T: 'a,
    K: PartialEq,
    F: Fn(&'a T) -> K,
{
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();
    for item in items {
        let k = key(item);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(item),
            None => groups.push((k, vec![item])),
        }
    }
    groups
}

/// Changes sharing one (type, action) pair.
#[derive(Debug, Clone)]
pub struct ActionGroup<'a> {
    pub action: &'a str,
    pub changes: Vec<&'a Change>,
}

impl ActionGroup<'_> {
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// All action groups for one entity type.
#[derive(Debug, Clone)]
pub struct TypeGroup<'a> {
    pub entity_type: &'a str,
    pub actions: Vec<ActionGroup<'a>>,
}

impl TypeGroup<'_> {
    /// Total number of changes across this type's action groups.
    pub fn len(&self) -> usize {
        self.actions.iter().map(|a| a.changes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Partition changes into type → action groups.
pub fn group_changes(changes: &[Change]) -> Vec<TypeGroup<'_>> {
    group_by(changes, |c| c.entity_type.as_str())
        .into_iter()
        .map(|(entity_type, of_type)| TypeGroup {
            entity_type,
            actions: group_by(of_type, |c| c.action.as_str())
                .into_iter()
                .map(|(action, changes)| ActionGroup { action, changes })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Change> {
        vec![
            Change::new("post", "edit", "A"),
            Change::new("plugin", "activate", "akismet"),
            Change::new("post", "create", "B"),
            Change::new("post", "edit", "C"),
            Change::new("plugin", "activate", "jetpack"),
        ]
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let changes = sample();
        let groups = group_changes(&changes);

        let types: Vec<&str> = groups.iter().map(|g| g.entity_type).collect();
        assert_eq!(types, vec!["post", "plugin"]);

        let post_actions: Vec<&str> = groups[0].actions.iter().map(|a| a.action).collect();
        assert_eq!(post_actions, vec!["edit", "create"]);

        let edited: Vec<&str> = groups[0].actions[0]
            .changes
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(edited, vec!["A", "C"]);
    }

    #[test]
    fn grouping_is_a_partition() {
        let changes = sample();
        let groups = group_changes(&changes);
        let total: usize = groups.iter().map(|g| g.len()).sum();
        assert_eq!(total, changes.len());

        for change in &changes {
            let hits = groups
                .iter()
                .flat_map(|g| g.actions.iter())
                .flat_map(|a| a.changes.iter())
                .filter(|c| std::ptr::eq(**c, change))
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn action_group_counts_its_changes() {
        let changes = sample();
        let groups = group_changes(&changes);
        let counts: Vec<(&str, usize)> = groups
            .iter()
            .flat_map(|g| g.actions.iter())
            .map(|a| (a.action, a.len()))
            .collect();
        assert_eq!(counts, vec![("edit", 2), ("create", 1), ("activate", 2)]);
        assert!(groups.iter().flat_map(|g| g.actions.iter()).all(|a| !a.is_empty()));
    }

    #[test]
    fn no_empty_groups() {
        let groups = group_changes(&[]);
        assert!(groups.is_empty());

        let changes = sample();
        for group in group_changes(&changes) {
            assert!(!group.is_empty());
            assert!(group.actions.iter().all(|a| !a.changes.is_empty()));
        }
    }

    #[test]
    fn option_keys_form_an_absent_group() {
        let changes = vec![
            Change::new("post", "create", "A").with_tag("VP-Post-Type", "page"),
            Change::new("post", "create", "B"),
            Change::new("post", "create", "C").with_tag("VP-Post-Type", "page"),
        ];
        let groups = group_by(&changes, |c| c.tag_str("VP-Post-Type"));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Some("page"));
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, None);
    }
}
