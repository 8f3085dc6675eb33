//! Core data types for the Showcase catalog.

use serde::{Deserialize, Serialize};

/// Sex attribute of a user, used by the rendering layer for colour-coding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    /// Returns the single-letter code used in the source tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
        }
    }

    /// Parse from the single-letter table code.
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s {
            "m" => Some(Self::Male),
            "f" => Some(Self::Female),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user record from the static tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
}

/// A category record; `owner_id` references a [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub owner_id: u32,
}

/// A product record; `category_id` references a [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
}

/// A product denormalized with its resolved category and that category's
/// owning user. Computed once at load, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichedProduct {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub user: User,
}

/// Sortable column of the product table.
///
/// The "unsorted" state is `Option::<SortField>::None` on [`FilterState`],
/// so comparators only ever see a real column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortField {
    #[serde(rename = "ID")]
    Id,
    Product,
    Category,
    User,
}

impl SortField {
    /// All columns in table order.
    pub const ALL: [SortField; 4] = [Self::Id, Self::Product, Self::Category, Self::User];

    /// Returns the column label as shown in the table header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Product => "Product",
            Self::Category => "Category",
            Self::User => "User",
        }
    }

    /// Parse from a column label (case-sensitive, matching the header).
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s {
            "ID" => Some(Self::Id),
            "Product" => Some(Self::Product),
            "Category" => Some(Self::Category),
            "User" => Some(Self::User),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session-local parameters driving the filter/sort pipeline.
///
/// Created with defaults at session start and mutated only through the
/// reducer; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterState {
    /// Selected category ids, unique, insertion order kept for display.
    #[serde(default)]
    pub selected_category_ids: Vec<u32>,
    /// Selected user id; 0 means "all users".
    #[serde(default)]
    pub selected_user_id: u32,
    /// Free-text search over product names.
    #[serde(default)]
    pub search: String,
    /// Active sort column, or `None` for original order.
    #[serde(default)]
    pub sort_field: Option<SortField>,
    /// Whether the (possibly sorted) sequence is reversed.
    #[serde(default)]
    pub sort_reversed: bool,
}

impl FilterState {
    pub fn is_category_selected(&self, id: u32) -> bool {
        self.selected_category_ids.contains(&id)
    }

    /// True when every field holds its default value.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// The three immutable input tables, supplied as fixed data at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogTables {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}
