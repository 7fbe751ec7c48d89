//! # dash-core
//!
//! Core types, key derivation, and error types for dashboard cube schemas.
//!
//! This crate provides the foundational types shared across all dash crates:
//! - `SchemaDocument` and its nested specs (dimensions, measures, categories,
//!   filter configs, parallel period)
//! - Dimension type and measure format enums
//! - Deterministic key/slug helpers and conventional MDX defaults
//! - Cross-cutting error types

pub mod document;
pub mod enums;
pub mod errors;
pub mod keys;

pub use document::{
    CategorySpec, DimensionSpec, FilterConfig, MeasureSpec, ParallelPeriodConfig,
    ParallelPeriodLevel, SchemaDocument,
};
pub use errors::CoreError;
