//! # dash-schema
//!
//! Schema definition and resolution for analytics dashboard cubes.
//!
//! This crate provides:
//! - `SchemaBuilder`: fluent declaration of dimensions, measures, categories,
//!   filter configs, governance filters, and parallel periods
//! - `define_schema`: one-shot declaration from a flat shorthand
//! - `SchemaRegistry`: keyed store of built documents with a default schema and
//!   lenient/strict name resolution
//! - JSON Schema export and validation for raw documents
//!
//! Everything here works in memory. Builders and registries start from
//! built-in defaults; a `dash_config::DashConfig` is only consulted when the
//! caller loads one and hands it to `SchemaBuilder::with_config` or
//! `SchemaRegistry::from_config`.
//!
//! ## Usage
//!
//! ```
//! use dash_core::enums::MeasureFormat;
//! use dash_schema::{DimensionOptions, MeasureOptions, SchemaBuilder, SchemaRegistry};
//!
//! let schema = SchemaBuilder::new()
//!     .set_id("vendas")
//!     .set_data_source("Cube")
//!     .add_dimension("loja", DimensionOptions::default())
//!     .add_measure("valorLiquido", MeasureOptions::formatted(MeasureFormat::Currency))
//!     .build()
//!     .unwrap();
//!
//! let mut registry = SchemaRegistry::new();
//! registry.register(schema).unwrap();
//! assert_eq!(registry.get_hierarchy("loja", None), Some("[loja].[Todos].Children"));
//! assert_eq!(registry.get_measure_mdx("VALOR_LIQUIDO", None), Some("[Measures].[valorliquido]"));
//! ```

pub mod builder;
pub mod error;
pub mod export;
pub mod registry;
pub mod shorthand;

pub use builder::{
    CategoryEntry, CategoryOptions, DimensionEntry, DimensionOptions, MeasureEntry, MeasureOptions,
    SchemaBuilder, create_schema_builder,
};
pub use error::SchemaError;
pub use export::{document_json_schema, parse_document, validate_document_json};
pub use registry::{RegistryOptions, SchemaRegistry, create_schema_registry};
pub use shorthand::{SchemaShorthand, define_schema, define_schema_with};
