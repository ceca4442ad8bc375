// template.rs — Entity deduplication and the generic overview line.
//
// Most families end up here: "<Verb> <type> <entities><suffix>", where the
// entity list is deduplicated, annotated with duplicate counts and, when it
// is long, collapsed behind a "show N more" affordance unless the reader
// already expanded it.

use std::collections::HashMap;

use crate::change::Change;
use crate::config::DisplayConfig;
use crate::disclosure::DisclosureState;
use crate::line::{EntityList, EntityRef, ListKey, ListLayout, RenderedLine};
use crate::text;

/// Identity of an entity within a group: (type, action, name).
pub type EntityKey<'a> = (&'a str, &'a str, &'a str);

pub fn entity_key(change: &Change) -> EntityKey<'_> {
    (
        change.entity_type.as_str(),
        change.action.as_str(),
        change.name.as_str(),
    )
}

/// One representative change per distinct (type, action, name), first occurrence wins.
pub fn dedupe<'a>(changes: &[&'a Change]) -> Vec<&'a Change> {
    text::filter_duplicates(changes, |c| entity_key(c))
        .into_iter()
        .copied()
        .collect()
}

/// Total occurrences per (type, action, name).
pub fn count_duplicates<'a>(changes: &[&'a Change]) -> HashMap<EntityKey<'a>, usize> {
    text::count_duplicates(changes, |c| entity_key(*c))
}

/// Distinct entities of a group with their duplicate counts.
pub fn entity_refs(changes: &[&Change]) -> Vec<EntityRef> {
    let counts = count_duplicates(changes);
    dedupe(changes)
        .into_iter()
        .map(|change| EntityRef {
            name: change.name.clone(),
            count: counts.get(&entity_key(change)).copied().unwrap_or(1),
        })
        .collect()
}

/// Renders generic overview lines against one disclosure state.
pub struct LineTemplate<'a> {
    display: &'a DisplayConfig,
    disclosure: &'a DisclosureState,
}

impl<'a> LineTemplate<'a> {
    pub fn new(display: &'a DisplayConfig, disclosure: &'a DisclosureState) -> Self {
        Self {
            display,
            disclosure,
        }
    }

    /// Build the entity list for a line, honoring inline limit and disclosure.
    pub fn entity_list(&self, key: ListKey, entities: Vec<EntityRef>) -> EntityList {
        if entities.len() < self.display.inline_limit {
            return EntityList {
                key,
                layout: ListLayout::Inline,
                shown: entities,
                hidden: 0,
            };
        }

        if self.disclosure.is_expanded(&key) {
            return EntityList {
                key,
                layout: ListLayout::Block,
                shown: entities,
                hidden: 0,
            };
        }

        let hidden = entities.len() - self.display.collapsed_length.min(entities.len());
        let shown = entities
            .into_iter()
            .take(self.display.collapsed_length)
            .collect();
        EntityList {
            key,
            layout: ListLayout::Block,
            shown,
            hidden,
        }
    }

    /// "<Verb> <type> <entities><suffix>".
    ///
    /// The verb is the capitalized past tense of `action`. The type label is
    /// pluralized when more than one distinct entity is listed.
    pub fn render_line(
        &self,
        type_label: &str,
        action: &str,
        entities: Vec<EntityRef>,
        suffix: Option<RenderedLine>,
    ) -> RenderedLine {
        self.render_scoped_line(type_label, type_label, action, entities, suffix)
    }

    /// Like [`render_line`](Self::render_line) for a label that is not the
    /// change type itself, e.g. the post subtype `page` of `post` changes.
    pub fn render_scoped_line(
        &self,
        entity_type: &str,
        type_label: &str,
        action: &str,
        entities: Vec<EntityRef>,
        suffix: Option<RenderedLine>,
    ) -> RenderedLine {
        let suffix = suffix.unwrap_or_default();
        let key = ListKey::scoped(entity_type, type_label, action, &suffix.to_plain_text());
        let verb = text::capitalize(&text::verb_to_past_tense(action));
        let label = if entities.len() == 1 {
            type_label.to_string()
        } else {
            text::pluralize(type_label)
        };

        RenderedLine::new()
            .text(format!("{} ", verb))
            .typed(label)
            .text(" ")
            .entities(self.entity_list(key, entities))
            .extend(suffix)
    }
}
