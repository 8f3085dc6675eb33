//! View-model construction: the contract with the rendering collaborator.
//!
//! [`TableView`] carries everything a renderer needs for one frame: the
//! ordered rows, header sort indicators, control highlight flags, and the
//! no-match message. All visual decisions beyond this (markup, colours,
//! layout) belong to the renderer.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::{CatalogTables, EnrichedProduct, FilterState, Sex, SortField};
use crate::pipeline::compute_visible;

/// Shown when no products survive the filters.
pub const EMPTY_MESSAGE: &str = "No products matching selected criteria";

/// Header icon state for one sortable column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

/// One table header cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnView {
    pub field: SortField,
    pub indicator: SortIndicator,
}

/// One table body row, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowView {
    pub id: u32,
    pub name: String,
    /// Rendered as `{icon} - {title}`.
    pub category_label: String,
    pub user_name: String,
    /// The renderer colour-codes the user cell by this attribute.
    pub user_sex: Sex,
}

/// Highlight state for one user filter tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserControlView {
    pub id: u32,
    pub name: String,
    pub active: bool,
}

/// Highlight state for one category chip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryControlView {
    pub id: u32,
    pub title: String,
    pub active: bool,
}

/// Everything the rendering collaborator needs for one frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableView {
    pub generated_at: String,
    pub total: usize,
    pub visible: usize,
    pub all_users_active: bool,
    pub users: Vec<UserControlView>,
    pub categories: Vec<CategoryControlView>,
    pub columns: Vec<ColumnView>,
    pub rows: Vec<RowView>,
    /// `Some` only when no rows survive the filters.
    pub empty_message: Option<String>,
    /// True when the current view already shows the whole catalog.
    pub reset_is_noop: bool,
}

fn indicator_for(field: SortField, state: &FilterState) -> SortIndicator {
    if state.sort_field != Some(field) {
        SortIndicator::Unsorted
    } else if state.sort_reversed {
        SortIndicator::Descending
    } else {
        SortIndicator::Ascending
    }
}

/// Run the pipeline and assemble the full view model for the current
/// filter state.
pub fn build_view(
    tables: &CatalogTables,
    catalog: &[EnrichedProduct],
    state: &FilterState,
) -> TableView {
    let visible = compute_visible(catalog, state);

    let rows: Vec<RowView> = visible
        .iter()
        .map(|p| RowView {
            id: p.id,
            name: p.name.clone(),
            category_label: format!("{} - {}", p.category.icon, p.category.title),
            user_name: p.user.name.clone(),
            user_sex: p.user.sex,
        })
        .collect();

    let users: Vec<UserControlView> = tables
        .users
        .iter()
        .map(|u| UserControlView {
            id: u.id,
            name: u.name.clone(),
            active: state.selected_user_id == u.id,
        })
        .collect();

    let categories: Vec<CategoryControlView> = tables
        .categories
        .iter()
        .map(|c| CategoryControlView {
            id: c.id,
            title: c.title.clone(),
            active: state.is_category_selected(c.id),
        })
        .collect();

    let columns: Vec<ColumnView> = SortField::ALL
        .iter()
        .map(|&field| ColumnView {
            field,
            indicator: indicator_for(field, state),
        })
        .collect();

    let empty_message = if rows.is_empty() {
        Some(EMPTY_MESSAGE.to_string())
    } else {
        None
    };

    TableView {
        generated_at: Utc::now().to_rfc3339(),
        total: catalog.len(),
        visible: rows.len(),
        all_users_active: state.selected_user_id == 0,
        users,
        categories,
        reset_is_noop: rows.len() == catalog.len(),
        columns,
        rows,
        empty_message,
    }
}

/// Write the view model to a JSON file.
pub fn write_view(view: &TableView, output_path: &str) -> std::io::Result<()> {
    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(view).map_err(std::io::Error::other)?;
    std::fs::write(output_path, json)
}
