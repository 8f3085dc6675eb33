//! Showcase Core — product catalog engine.
//!
//! This crate contains all catalog logic: the one-time join of the three
//! static tables, the filter/sort pipeline, the filter-state reducer, and
//! view-model construction for the rendering layer.

pub mod dataset;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod reducer;
pub mod view;
