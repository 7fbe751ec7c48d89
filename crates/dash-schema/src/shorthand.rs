//! One-shot schema declaration from a flat description.

use dash_core::{CoreError, FilterConfig, SchemaDocument};

use crate::builder::{CategoryEntry, DimensionEntry, MeasureEntry, SchemaBuilder};

/// Flat declaration consumed by [`define_schema`].
///
/// `default_parallel_period` is `None` for "no parallel period",
/// `Some(None)` for the configured default date field, and `Some(Some(field))`
/// for an explicit field.
#[derive(Debug, Clone, Default)]
pub struct SchemaShorthand {
    pub id: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub dimensions: Vec<DimensionEntry>,
    pub time_dimensions: Vec<DimensionEntry>,
    pub measures: Vec<MeasureEntry>,
    pub categories: Vec<CategoryEntry>,
    pub filter_configs: Vec<(String, FilterConfig)>,
    pub governance_filters: Vec<String>,
    pub default_parallel_period: Option<Option<String>>,
}

/// Declare and build a schema in one call.
///
/// # Errors
///
/// Returns `CoreError::MissingField` if `data_source` is empty (or derives an
/// empty id and no id is given).
pub fn define_schema(
    data_source: &str,
    shorthand: SchemaShorthand,
) -> Result<SchemaDocument, CoreError> {
    define_schema_with(SchemaBuilder::new(), data_source, shorthand)
}

/// [`define_schema`] on a caller-supplied (e.g. configured) builder.
///
/// # Errors
///
/// Same as [`define_schema`].
pub fn define_schema_with(
    builder: SchemaBuilder,
    data_source: &str,
    shorthand: SchemaShorthand,
) -> Result<SchemaDocument, CoreError> {
    let SchemaShorthand {
        id,
        name,
        version,
        description,
        dimensions,
        time_dimensions,
        measures,
        categories,
        filter_configs,
        governance_filters,
        default_parallel_period,
    } = shorthand;

    let mut builder = builder
        .set_data_source_info(data_source, id.as_deref(), name.as_deref())
        .add_dimensions(dimensions)
        .add_measures(measures)
        .add_categories(categories);

    for entry in time_dimensions {
        let (name, opts) = entry.into_parts();
        builder = builder.add_time_dimension(name, opts);
    }
    for (config_name, config) in filter_configs {
        builder = builder.add_filter_config(config_name, config);
    }
    if !governance_filters.is_empty() {
        builder = builder.set_governance_filters(governance_filters);
    }
    if let Some(version) = version {
        builder = builder.set_version(version);
    }
    if let Some(description) = description {
        builder = builder.set_description(description);
    }
    if let Some(field) = default_parallel_period {
        builder = builder.set_default_parallel_period(field.as_deref());
    }

    builder.build()
}
