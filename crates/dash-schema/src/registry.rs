//! Keyed store of built schema documents.
//!
//! The `SchemaRegistry` owns every [`SchemaDocument`] an application declares,
//! elects one of them as the default, and resolves semantic names (dimension,
//! measure, category, filter config) into the expressions stored in them.
//!
//! Every nested accessor comes in two forms sharing one lookup: a lenient
//! `get_*` returning `Option`, and a strict `get_*_or_throw` returning
//! `CoreError::NotFound` naming the schema id or key that was missing.
//! Omitting the schema id resolves against the default schema.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use dash_config::RegistryConfig;
use dash_core::{
    CategorySpec, CoreError, DimensionSpec, FilterConfig, MeasureSpec, ParallelPeriodConfig,
    SchemaDocument,
};

/// Behaviour switches for a [`SchemaRegistry`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Re-registering an existing id replaces it instead of failing.
    pub allow_overwrite: bool,
}

impl From<&RegistryConfig> for RegistryOptions {
    fn from(config: &RegistryConfig) -> Self {
        Self {
            allow_overwrite: config.allow_overwrite,
        }
    }
}

/// Empty registry with the given options.
#[must_use]
pub fn create_schema_registry(options: RegistryOptions) -> SchemaRegistry {
    SchemaRegistry::with_options(options)
}

/// Registration-ordered store of schema documents with a default pointer.
///
/// Per schema id the lifecycle is:
///
/// ```text
/// absent → registered → re-registered (overwrite) → absent (unregister)
/// ```
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    options: RegistryOptions,
    schemas: HashMap<String, Arc<SchemaDocument>>,
    /// Ids in first-registration order.
    order: Vec<String>,
    default_id: Option<String>,
}

const DEFAULT_SCHEMA: &str = "(default)";

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::with_options(config.into())
    }

    #[must_use]
    pub const fn options(&self) -> RegistryOptions {
        self.options
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Store `schema` under its id. The first schema ever stored becomes the default.
    ///
    /// Overwriting keeps the id's original position in registration order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::AlreadyRegistered` if the id exists and overwrite is
    /// disabled, or `CoreError::MissingField` if the document lacks an id or
    /// data source.
    pub fn register(&mut self, schema: SchemaDocument) -> Result<Arc<SchemaDocument>, CoreError> {
        schema.validate()?;
        let id = schema.id.clone();

        if self.schemas.contains_key(&id) {
            if !self.options.allow_overwrite {
                return Err(CoreError::AlreadyRegistered { id });
            }
            tracing::debug!(schema = %id, "schema re-registered");
        } else {
            self.order.push(id.clone());
            tracing::debug!(schema = %id, "schema registered");
        }

        if self.default_id.is_none() {
            self.default_id = Some(id.clone());
        }

        let stored = Arc::new(schema);
        self.schemas.insert(id, Arc::clone(&stored));
        Ok(stored)
    }

    /// Remove a schema. Returns whether anything was removed.
    ///
    /// If it was the default, the earliest-registered remaining id becomes the
    /// default, or there is no default once the registry is empty.
    pub fn unregister(&mut self, id: &str) -> bool {
        if self.schemas.remove(id).is_none() {
            return false;
        }
        self.order.retain(|existing| existing != id);

        if self.default_id.as_deref() == Some(id) {
            self.default_id = self.order.first().cloned();
            tracing::debug!(
                schema = %id,
                new_default = ?self.default_id,
                "default schema unregistered"
            );
        } else {
            tracing::debug!(schema = %id, "schema unregistered");
        }
        true
    }

    /// Make `id` the default schema.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if `id` is not registered.
    pub fn set_default(&mut self, id: &str) -> Result<(), CoreError> {
        if !self.schemas.contains_key(id) {
            return Err(CoreError::not_found("schema", id));
        }
        self.default_id = Some(id.to_string());
        Ok(())
    }

    #[must_use]
    pub fn default_id(&self) -> Option<&str> {
        self.default_id.as_deref()
    }

    /// Remove every schema and unset the default.
    pub fn clear(&mut self) {
        self.schemas.clear();
        self.order.clear();
        self.default_id = None;
    }

    // -----------------------------------------------------------------------
    // Schema lookup
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.schemas.contains_key(id)
    }

    /// The schema with `id`, or the default schema when `id` is `None`.
    #[must_use]
    pub fn get(&self, id: Option<&str>) -> Option<&SchemaDocument> {
        self.get_shared(id).map(Arc::as_ref)
    }

    /// Like [`Self::get`], but hands out the shared document.
    #[must_use]
    pub fn get_shared(&self, id: Option<&str>) -> Option<&Arc<SchemaDocument>> {
        let id = id.or(self.default_id.as_deref())?;
        self.schemas.get(id)
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` naming the id (or `(default)` when no
    /// default is set).
    pub fn get_or_throw(&self, id: Option<&str>) -> Result<&SchemaDocument, CoreError> {
        self.get(id).ok_or_else(|| {
            CoreError::not_found(
                "schema",
                id.or(self.default_id.as_deref()).unwrap_or(DEFAULT_SCHEMA),
            )
        })
    }

    /// All documents in registration order.
    #[must_use]
    pub fn list(&self) -> Vec<&SchemaDocument> {
        self.order
            .iter()
            .filter_map(|id| self.schemas.get(id).map(Arc::as_ref))
            .collect()
    }

    /// All ids in registration order.
    #[must_use]
    pub fn list_ids(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    // -----------------------------------------------------------------------
    // Shared lookup primitives
    // -----------------------------------------------------------------------

    fn lookup<'a, T: ?Sized>(
        &'a self,
        schema_id: Option<&str>,
        find: impl FnOnce(&'a SchemaDocument) -> Option<&'a T>,
    ) -> Option<&'a T> {
        self.get(schema_id).and_then(find)
    }

    fn lookup_or_throw<'a, T: ?Sized>(
        &'a self,
        schema_id: Option<&str>,
        kind: &'static str,
        key: &str,
        find: impl FnOnce(&'a SchemaDocument) -> Option<&'a T>,
    ) -> Result<&'a T, CoreError> {
        let doc = self.get_or_throw(schema_id)?;
        find(doc).ok_or_else(|| CoreError::not_found(kind, format!("{key} (schema '{}')", doc.id)))
    }

    // -----------------------------------------------------------------------
    // Dimensions
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn get_dimension(&self, key: &str, schema_id: Option<&str>) -> Option<&DimensionSpec> {
        self.lookup(schema_id, |doc| doc.dimension(key))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema or dimension.
    pub fn get_dimension_or_throw(
        &self,
        key: &str,
        schema_id: Option<&str>,
    ) -> Result<&DimensionSpec, CoreError> {
        self.lookup_or_throw(schema_id, "dimension", key, |doc| doc.dimension(key))
    }

    #[must_use]
    pub fn list_dimensions(
        &self,
        schema_id: Option<&str>,
    ) -> Option<&BTreeMap<String, DimensionSpec>> {
        self.lookup(schema_id, |doc| Some(&doc.dimensions))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema.
    pub fn list_dimensions_or_throw(
        &self,
        schema_id: Option<&str>,
    ) -> Result<&BTreeMap<String, DimensionSpec>, CoreError> {
        Ok(&self.get_or_throw(schema_id)?.dimensions)
    }

    /// Member-set expression of a dimension, e.g. `[loja].[Todos].Children`.
    #[must_use]
    pub fn get_hierarchy(&self, key: &str, schema_id: Option<&str>) -> Option<&str> {
        self.lookup(schema_id, |doc| doc.dimension(key).map(|d| d.hierarchy.as_str()))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema or dimension.
    pub fn get_hierarchy_or_throw(
        &self,
        key: &str,
        schema_id: Option<&str>,
    ) -> Result<&str, CoreError> {
        self.lookup_or_throw(schema_id, "dimension", key, |doc| {
            doc.dimension(key).map(|d| d.hierarchy.as_str())
        })
    }

    /// Reference expression of a dimension, e.g. `[loja]`.
    #[must_use]
    pub fn get_dimension_ref(&self, key: &str, schema_id: Option<&str>) -> Option<&str> {
        self.lookup(schema_id, |doc| doc.dimension(key).map(|d| d.dimension.as_str()))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema or dimension.
    pub fn get_dimension_ref_or_throw(
        &self,
        key: &str,
        schema_id: Option<&str>,
    ) -> Result<&str, CoreError> {
        self.lookup_or_throw(schema_id, "dimension", key, |doc| {
            doc.dimension(key).map(|d| d.dimension.as_str())
        })
    }

    /// Closed member set of a dimension. `None` also when the dimension is open.
    #[must_use]
    pub fn get_dimension_members(&self, key: &str, schema_id: Option<&str>) -> Option<&[String]> {
        self.lookup(schema_id, |doc| {
            doc.dimension(key).and_then(|d| d.members.as_deref())
        })
    }

    // -----------------------------------------------------------------------
    // Measures
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn get_measure(&self, key: &str, schema_id: Option<&str>) -> Option<&MeasureSpec> {
        self.lookup(schema_id, |doc| doc.measure(key))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema or measure.
    pub fn get_measure_or_throw(
        &self,
        key: &str,
        schema_id: Option<&str>,
    ) -> Result<&MeasureSpec, CoreError> {
        self.lookup_or_throw(schema_id, "measure", key, |doc| doc.measure(key))
    }

    #[must_use]
    pub fn list_measures(&self, schema_id: Option<&str>) -> Option<&BTreeMap<String, MeasureSpec>> {
        self.lookup(schema_id, |doc| Some(&doc.measures))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema.
    pub fn list_measures_or_throw(
        &self,
        schema_id: Option<&str>,
    ) -> Result<&BTreeMap<String, MeasureSpec>, CoreError> {
        Ok(&self.get_or_throw(schema_id)?.measures)
    }

    /// Backend expression of a measure, e.g. `[Measures].[valorliquido]`.
    #[must_use]
    pub fn get_measure_mdx(&self, key: &str, schema_id: Option<&str>) -> Option<&str> {
        self.lookup(schema_id, |doc| doc.measure(key).map(|m| m.mdx.as_str()))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema or measure.
    pub fn get_measure_mdx_or_throw(
        &self,
        key: &str,
        schema_id: Option<&str>,
    ) -> Result<&str, CoreError> {
        self.lookup_or_throw(schema_id, "measure", key, |doc| {
            doc.measure(key).map(|m| m.mdx.as_str())
        })
    }

    // -----------------------------------------------------------------------
    // Categories
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn get_category(&self, code: &str, schema_id: Option<&str>) -> Option<&CategorySpec> {
        self.lookup(schema_id, |doc| doc.category(code))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema or category code.
    pub fn get_category_or_throw(
        &self,
        code: &str,
        schema_id: Option<&str>,
    ) -> Result<&CategorySpec, CoreError> {
        self.lookup_or_throw(schema_id, "category", code, |doc| doc.category(code))
    }

    #[must_use]
    pub fn list_categories(
        &self,
        schema_id: Option<&str>,
    ) -> Option<&BTreeMap<String, CategorySpec>> {
        self.lookup(schema_id, |doc| Some(&doc.categories))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema.
    pub fn list_categories_or_throw(
        &self,
        schema_id: Option<&str>,
    ) -> Result<&BTreeMap<String, CategorySpec>, CoreError> {
        Ok(&self.get_or_throw(schema_id)?.categories)
    }

    #[must_use]
    pub fn get_category_color(&self, code: &str, schema_id: Option<&str>) -> Option<&str> {
        self.lookup(schema_id, |doc| doc.category(code).map(|c| c.color.as_str()))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema or category code.
    pub fn get_category_color_or_throw(
        &self,
        code: &str,
        schema_id: Option<&str>,
    ) -> Result<&str, CoreError> {
        self.lookup_or_throw(schema_id, "category", code, |doc| {
            doc.category(code).map(|c| c.color.as_str())
        })
    }

    #[must_use]
    pub fn get_category_label(&self, code: &str, schema_id: Option<&str>) -> Option<&str> {
        self.lookup(schema_id, |doc| doc.category(code).map(|c| c.label.as_str()))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema or category code.
    pub fn get_category_label_or_throw(
        &self,
        code: &str,
        schema_id: Option<&str>,
    ) -> Result<&str, CoreError> {
        self.lookup_or_throw(schema_id, "category", code, |doc| {
            doc.category(code).map(|c| c.label.as_str())
        })
    }

    // -----------------------------------------------------------------------
    // Filter configs and governance
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn get_filter_config(&self, name: &str, schema_id: Option<&str>) -> Option<&FilterConfig> {
        self.lookup(schema_id, |doc| doc.filter_config(name))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema or filter config.
    pub fn get_filter_config_or_throw(
        &self,
        name: &str,
        schema_id: Option<&str>,
    ) -> Result<&FilterConfig, CoreError> {
        self.lookup_or_throw(schema_id, "filter config", name, |doc| {
            doc.filter_config(name)
        })
    }

    #[must_use]
    pub fn list_filter_configs(
        &self,
        schema_id: Option<&str>,
    ) -> Option<&BTreeMap<String, FilterConfig>> {
        self.lookup(schema_id, |doc| Some(&doc.filter_configs))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema.
    pub fn list_filter_configs_or_throw(
        &self,
        schema_id: Option<&str>,
    ) -> Result<&BTreeMap<String, FilterConfig>, CoreError> {
        Ok(&self.get_or_throw(schema_id)?.filter_configs)
    }

    /// Whether filter config `name` lets `dimension` vary. Unknown schema or
    /// config accepts nothing.
    #[must_use]
    pub fn filter_accepts(&self, name: &str, dimension: &str, schema_id: Option<&str>) -> bool {
        self.get_filter_config(name, schema_id)
            .is_some_and(|config| config.accepts(dimension))
    }

    #[must_use]
    pub fn get_governance_filters(&self, schema_id: Option<&str>) -> Option<&[String]> {
        self.lookup(schema_id, |doc| Some(doc.governance_filters.as_slice()))
    }

    // -----------------------------------------------------------------------
    // Data source and parallel period
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn get_data_source(&self, schema_id: Option<&str>) -> Option<&str> {
        self.lookup(schema_id, |doc| Some(doc.data_source.as_str()))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema.
    pub fn get_data_source_or_throw(&self, schema_id: Option<&str>) -> Result<&str, CoreError> {
        self.get_or_throw(schema_id)
            .map(|doc| doc.data_source.as_str())
    }

    #[must_use]
    pub fn get_parallel_period(&self, schema_id: Option<&str>) -> Option<&ParallelPeriodConfig> {
        self.lookup(schema_id, |doc| doc.parallel_period.as_ref())
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema or a schema without
    /// a parallel period.
    pub fn get_parallel_period_or_throw(
        &self,
        schema_id: Option<&str>,
    ) -> Result<&ParallelPeriodConfig, CoreError> {
        self.lookup_or_throw(schema_id, "parallel period", "parallelPeriod", |doc| {
            doc.parallel_period.as_ref()
        })
    }

    /// Offset for one comparison level, e.g. `7` for `"Dia"` under the default periods.
    #[must_use]
    pub fn get_parallel_offset(&self, level: &str, schema_id: Option<&str>) -> Option<i32> {
        self.get_parallel_period(schema_id)?.offset(level)
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown schema, a missing parallel
    /// period, or an unknown level.
    pub fn get_parallel_offset_or_throw(
        &self,
        level: &str,
        schema_id: Option<&str>,
    ) -> Result<i32, CoreError> {
        self.lookup_or_throw(schema_id, "parallel period level", level, |doc| {
            doc.parallel_period.as_ref()?.levels.get(level)
        })
        .map(|l| l.offset)
    }
}
