//! Shared types and chart logic for the DataViz Platform
//!
//! This crate contains the upstream data models, the chart-ready types and
//! the pure aggregation functions used by the backend and, via WASM, by the
//! browser dashboard.

pub mod aggregate;
pub mod charts;
pub mod models;
pub mod types;
pub mod upstream;

pub use aggregate::*;
pub use charts::*;
pub use models::*;
pub use types::*;
pub use upstream::*;
