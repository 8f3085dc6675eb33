//! One-time join of the three static tables into the enriched catalog.

use std::collections::HashMap;
use std::path::Path;

use crate::error::CatalogError;
use crate::model::{CatalogTables, Category, EnrichedProduct, User};

/// Resolve every product's category and that category's owner, preserving
/// original product order. Fails on the first dangling foreign key.
pub fn build_catalog(tables: &CatalogTables) -> Result<Vec<EnrichedProduct>, CatalogError> {
    // First occurrence wins, matching lookup-by-find over the raw tables.
    let mut categories: HashMap<u32, &Category> = HashMap::new();
    for category in &tables.categories {
        categories.entry(category.id).or_insert(category);
    }
    let mut users: HashMap<u32, &User> = HashMap::new();
    for user in &tables.users {
        users.entry(user.id).or_insert(user);
    }

    let mut catalog = Vec::with_capacity(tables.products.len());
    for product in &tables.products {
        let category = categories.get(&product.category_id).copied().ok_or(
            CatalogError::UnknownCategory {
                product_id: product.id,
                category_id: product.category_id,
            },
        )?;
        let user = users
            .get(&category.owner_id)
            .copied()
            .ok_or(CatalogError::UnknownOwner {
                category_id: category.id,
                owner_id: category.owner_id,
            })?;
        catalog.push(EnrichedProduct {
            id: product.id,
            name: product.name.clone(),
            category: category.clone(),
            user: user.clone(),
        });
    }

    log::info!(
        "catalog loaded: {} products, {} categories, {} users",
        catalog.len(),
        tables.categories.len(),
        tables.users.len()
    );

    Ok(catalog)
}

/// Read a catalog JSON document (users, categories, products) from disk.
pub fn read_tables<P: AsRef<Path>>(path: P) -> Result<CatalogTables, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, Sex};

    fn tables() -> CatalogTables {
        CatalogTables {
            users: vec![
                User {
                    id: 1,
                    name: "Max".to_string(),
                    sex: Sex::Male,
                },
                User {
                    id: 2,
                    name: "Anna".to_string(),
                    sex: Sex::Female,
                },
            ],
            categories: vec![
                Category {
                    id: 10,
                    title: "Grocery".to_string(),
                    icon: "🍞".to_string(),
                    owner_id: 2,
                },
                Category {
                    id: 20,
                    title: "Drinks".to_string(),
                    icon: "🍺".to_string(),
                    owner_id: 1,
                },
            ],
            products: vec![
                Product {
                    id: 1,
                    name: "Milk".to_string(),
                    category_id: 10,
                },
                Product {
                    id: 2,
                    name: "Beer".to_string(),
                    category_id: 20,
                },
            ],
        }
    }

    #[test]
    fn join_resolves_category_and_owner() {
        let catalog = build_catalog(&tables()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "Milk");
        assert_eq!(catalog[0].category.title, "Grocery");
        assert_eq!(catalog[0].user.name, "Anna");
        assert_eq!(catalog[1].category.title, "Drinks");
        assert_eq!(catalog[1].user.name, "Max");
    }

    #[test]
    fn join_preserves_product_order() {
        let catalog = build_catalog(&tables()).unwrap();
        let ids: Vec<u32> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn unknown_category_fails() {
        let mut t = tables();
        t.products.push(Product {
            id: 3,
            name: "Ghost".to_string(),
            category_id: 99,
        });
        let err = build_catalog(&t).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownCategory {
                product_id: 3,
                category_id: 99
            }
        ));
    }

    #[test]
    fn unknown_owner_fails() {
        let mut t = tables();
        t.categories[0].owner_id = 77;
        let err = build_catalog(&t).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownOwner {
                category_id: 10,
                owner_id: 77
            }
        ));
    }

    #[test]
    fn empty_tables_build_empty_catalog() {
        let catalog = build_catalog(&CatalogTables::default()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn read_tables_missing_file_is_io_error() {
        let err = read_tables("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
