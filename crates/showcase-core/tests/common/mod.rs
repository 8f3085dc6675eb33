//! Shared test helpers for integration tests.

use std::path::{Path, PathBuf};

use showcase_core::dataset;
use showcase_core::loader::build_catalog;
use showcase_core::model::{CatalogTables, EnrichedProduct};

/// Resolve `tests/fixtures/{name}` relative to the workspace root.
pub fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir)
        .join("../../tests/fixtures")
        .join(name)
        .canonicalize()
        .unwrap_or_else(|_| {
            Path::new(manifest_dir)
                .join("../../tests/fixtures")
                .join(name)
        })
}

/// The built-in dataset joined into an enriched catalog.
pub fn builtin_catalog() -> (CatalogTables, Vec<EnrichedProduct>) {
    let tables = dataset::builtin();
    let catalog = build_catalog(&tables).expect("built-in dataset is consistent");
    (tables, catalog)
}
