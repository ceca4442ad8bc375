// groups.rs — Show how a commit's changes partition into (type, action) groups.

use std::path::Path;

use vp_overview::{group_changes, Commit};

pub fn execute(commit_path: &Path, json: bool) -> anyhow::Result<()> {
    let commit = super::read_commit(commit_path)?;
    let output = if json {
        serde_json::to_string_pretty(&groups_json(&commit))?
    } else {
        format_groups(&commit)
    };
    println!("{}", output);
    Ok(())
}

/// One row per type, indented rows per action with the change count.
pub fn format_groups(commit: &Commit) -> String {
    if commit.changes.is_empty() {
        return "No changes.".to_string();
    }

    let mut output = String::new();
    for type_group in group_changes(&commit.changes) {
        output.push_str(type_group.entity_type);
        output.push('\n');
        for action_group in &type_group.actions {
            output.push_str(&format!(
                "  {:<16} {}\n",
                action_group.action,
                action_group.len()
            ));
        }
    }
    output.push_str(&format!("{} change(s)", commit.changes.len()));
    output
}

pub fn groups_json(commit: &Commit) -> serde_json::Value {
    let groups: Vec<serde_json::Value> = group_changes(&commit.changes)
        .iter()
        .map(|type_group| {
            let actions: Vec<serde_json::Value> = type_group
                .actions
                .iter()
                .map(|a| serde_json::json!({ "action": a.action, "count": a.len() }))
                .collect();
            serde_json::json!({ "type": type_group.entity_type, "actions": actions })
        })
        .collect();
    serde_json::Value::Array(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vp_overview::Change;

    fn commit() -> Commit {
        Commit::new(vec![
            Change::new("post", "edit", "A"),
            Change::new("plugin", "activate", "akismet"),
            Change::new("post", "edit", "B"),
            Change::new("post", "create", "C"),
        ])
    }

    #[test]
    fn lists_groups_in_first_seen_order() {
        assert_eq!(
            format_groups(&commit()),
            "post\n  edit             2\n  create           1\nplugin\n  activate         1\n4 change(s)"
        );
    }

    #[test]
    fn empty_commit() {
        assert_eq!(format_groups(&Commit::new(vec![])), "No changes.");
    }

    #[test]
    fn json_counts() {
        let value = groups_json(&commit());
        assert_eq!(value[0]["type"], "post");
        assert_eq!(value[0]["actions"][0]["count"], 2);
        assert_eq!(value[1]["actions"][0]["action"], "activate");
    }
}
