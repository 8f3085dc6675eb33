//! Load-time data-integrity errors.

use thiserror::Error;

/// Fatal catalog load failure. No partial catalog is ever produced.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A product references a category id that is not in the tables.
    #[error("product {product_id} references unknown category {category_id}")]
    UnknownCategory { product_id: u32, category_id: u32 },

    /// A category references an owner id that is not in the tables.
    #[error("category {category_id} references unknown owner {owner_id}")]
    UnknownOwner { category_id: u32, owner_id: u32 },

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}
