//! The built-in static tables, shipped with the tool.
//!
//! Equivalent to the fixed users/categories/products tables the original
//! application imports at startup. Every foreign key resolves.

use crate::model::{CatalogTables, Category, Product, Sex, User};

fn user(id: u32, name: &str, sex: Sex) -> User {
    User {
        id,
        name: name.to_string(),
        sex,
    }
}

fn category(id: u32, title: &str, icon: &str, owner_id: u32) -> Category {
    Category {
        id,
        title: title.to_string(),
        icon: icon.to_string(),
        owner_id,
    }
}

fn product(id: u32, name: &str, category_id: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        category_id,
    }
}

/// The fixed dataset used when no catalog file is supplied.
pub fn builtin() -> CatalogTables {
    CatalogTables {
        users: vec![
            user(1, "Max", Sex::Male),
            user(2, "Anna", Sex::Female),
            user(3, "Roma", Sex::Male),
            user(4, "Kate", Sex::Female),
        ],
        categories: vec![
            category(1, "Grocery", "🍞", 2),
            category(2, "Drinks", "🍺", 1),
            category(3, "Fruits", "🍏", 2),
            category(4, "Electronics", "💻", 3),
            category(5, "Clothes", "👚", 4),
        ],
        products: vec![
            product(1, "Milk", 1),
            product(2, "Bread", 1),
            product(3, "Garlic", 1),
            product(4, "Cola", 2),
            product(5, "Beer", 2),
            product(6, "Juice", 2),
            product(7, "Apple", 3),
            product(8, "Banana", 3),
            product(9, "Lemon", 3),
            product(10, "Laptop", 4),
            product(11, "Phone", 4),
            product(12, "Monitor", 4),
            product(13, "T-shirt", 5),
            product(14, "Jeans", 5),
            product(15, "Dress", 5),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::build_catalog;

    #[test]
    fn builtin_tables_are_consistent() {
        // Every foreign key in the shipped dataset must resolve.
        let catalog = build_catalog(&builtin()).unwrap();
        assert_eq!(catalog.len(), 15);
    }

    #[test]
    fn builtin_ids_are_unique() {
        let tables = builtin();
        let mut product_ids: Vec<u32> = tables.products.iter().map(|p| p.id).collect();
        product_ids.sort_unstable();
        product_ids.dedup();
        assert_eq!(product_ids.len(), tables.products.len());

        let mut category_ids: Vec<u32> = tables.categories.iter().map(|c| c.id).collect();
        category_ids.sort_unstable();
        category_ids.dedup();
        assert_eq!(category_ids.len(), tables.categories.len());
    }
}
