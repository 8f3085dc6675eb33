//! The pure filter/sort pipeline deriving the visible product list.
//!
//! Stages run in a fixed order: category filter, user filter, text filter,
//! sort, reversal. Each stage is an independent predicate or comparator,
//! so the order only affects how much work later stages see.

use std::cmp::Ordering;

use crate::model::{EnrichedProduct, FilterState, SortField};

/// Case-insensitive string comparison, raw strings as tie-break.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn compare_by(field: SortField, a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Product => compare_text(&a.name, &b.name),
        SortField::Category => compare_text(&a.category.title, &b.category.title),
        SortField::User => compare_text(&a.user.name, &b.user.name),
    }
}

/// Derive the visible, ordered product list from the catalog and the
/// current filter state. The catalog itself is never mutated; a fresh
/// copy is returned.
pub fn compute_visible(catalog: &[EnrichedProduct], state: &FilterState) -> Vec<EnrichedProduct> {
    let mut visible: Vec<EnrichedProduct> = catalog.to_vec();

    // Empty selection means "no restriction", not "exclude all".
    if !state.selected_category_ids.is_empty() {
        visible.retain(|p| state.selected_category_ids.contains(&p.category.id));
    }

    if state.selected_user_id != 0 {
        visible.retain(|p| p.user.id == state.selected_user_id);
    }

    let query = state.search.trim().to_lowercase();
    if !query.is_empty() {
        visible.retain(|p| p.name.to_lowercase().contains(&query));
    }

    if let Some(field) = state.sort_field {
        // sort_by is stable: ties keep their prior relative order.
        visible.sort_by(|a, b| compare_by(field, a, b));
    }

    if state.sort_reversed {
        visible.reverse();
    }

    log::debug!(
        "pipeline: {} of {} products visible",
        visible.len(),
        catalog.len()
    );

    visible
}
