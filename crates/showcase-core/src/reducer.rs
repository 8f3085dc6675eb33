//! Pure reducer mapping user interactions onto the filter state.
//!
//! Event callbacks in the rendering layer translate clicks and keystrokes
//! into [`Action`]s; the reducer is the only place filter state changes.

use crate::model::{FilterState, SortField};

/// A discrete user interaction on the filter controls or table header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Toggle one category chip: select if absent, deselect if present.
    ToggleCategory(u32),
    /// The "All" categories button.
    ClearCategories,
    /// Radio-style user filter; 0 selects all users.
    SelectUser(u32),
    /// Replace the search text.
    SetSearch(String),
    /// The search field's clear button.
    ClearSearch,
    /// A click on a sortable column header.
    SortClicked(SortField),
    /// Restore every field to its default, atomically.
    Reset,
}

/// Apply one action and return the next state. The input state is never
/// mutated.
pub fn reduce(state: &FilterState, action: &Action) -> FilterState {
    let mut next = state.clone();
    match action {
        Action::ToggleCategory(id) => {
            if let Some(pos) = next.selected_category_ids.iter().position(|c| c == id) {
                next.selected_category_ids.remove(pos);
            } else {
                next.selected_category_ids.push(*id);
            }
        }
        Action::ClearCategories => next.selected_category_ids.clear(),
        Action::SelectUser(id) => next.selected_user_id = *id,
        Action::SetSearch(text) => next.search = text.clone(),
        Action::ClearSearch => next.search.clear(),
        Action::SortClicked(field) => {
            let (sort_field, sort_reversed) =
                on_sort_click(next.sort_field, next.sort_reversed, *field);
            next.sort_field = sort_field;
            next.sort_reversed = sort_reversed;
        }
        Action::Reset => next = FilterState::default(),
    }
    log::debug!("reduced {action:?}");
    next
}

/// The three-phase sort cycle for repeated clicks on a column header:
/// new column → ascending, same column → descending, again → cleared.
pub fn on_sort_click(
    current: Option<SortField>,
    reversed: bool,
    clicked: SortField,
) -> (Option<SortField>, bool) {
    if current != Some(clicked) {
        (Some(clicked), false)
    } else if !reversed {
        (Some(clicked), true)
    } else {
        (None, false)
    }
}
