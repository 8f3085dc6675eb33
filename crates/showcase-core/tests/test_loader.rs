//! Catalog loading: JSON tables in, enriched products (or a fatal
//! integrity error) out.

mod common;

use std::io::Write;

use common::*;
use pretty_assertions::assert_eq;

use showcase_core::error::CatalogError;
use showcase_core::loader::{build_catalog, read_tables};
use showcase_core::model::Sex;

#[test]
fn fixture_catalog_loads_and_joins() {
    let tables = read_tables(fixture_path("catalog_small.json")).unwrap();
    assert_eq!(tables.users.len(), 2);
    assert_eq!(tables.categories.len(), 2);
    assert_eq!(tables.products.len(), 2);

    let catalog = build_catalog(&tables).unwrap();
    assert_eq!(catalog.len(), 2);

    let milk = &catalog[0];
    assert_eq!(milk.name, "Milk");
    assert_eq!(milk.category.title, "Grocery");
    assert_eq!(milk.category.icon, "🍞");
    assert_eq!(milk.user.name, "Anna");
    assert_eq!(milk.user.sex, Sex::Female);

    let bread = &catalog[1];
    assert_eq!(bread.category.title, "Drinks");
    assert_eq!(bread.user.name, "Max");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let err = read_tables(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn dangling_category_reference_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "users": [{{ "id": 1, "name": "Max", "sex": "m" }}],
            "categories": [{{ "id": 10, "title": "Grocery", "icon": "x", "ownerId": 1 }}],
            "products": [{{ "id": 1, "name": "Milk", "categoryId": 99 }}]
        }}"#
    )
    .unwrap();
    let tables = read_tables(file.path()).unwrap();
    let err = build_catalog(&tables).unwrap_err();
    assert_eq!(
        err.to_string(),
        "product 1 references unknown category 99"
    );
}

#[test]
fn dangling_owner_reference_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "users": [],
            "categories": [{{ "id": 10, "title": "Grocery", "icon": "x", "ownerId": 7 }}],
            "products": [{{ "id": 1, "name": "Milk", "categoryId": 10 }}]
        }}"#
    )
    .unwrap();
    let tables = read_tables(file.path()).unwrap();
    let err = build_catalog(&tables).unwrap_err();
    assert_eq!(err.to_string(), "category 10 references unknown owner 7");
}

#[test]
fn missing_tables_default_to_empty() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{}}").unwrap();
    let tables = read_tables(file.path()).unwrap();
    assert!(tables.users.is_empty());
    assert!(build_catalog(&tables).unwrap().is_empty());
}
