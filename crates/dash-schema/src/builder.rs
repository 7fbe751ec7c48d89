//! Fluent construction of schema documents.
//!
//! A [`SchemaBuilder`] owns one draft [`SchemaDocument`] and threads it through
//! every call: each method takes the builder by value and hands it back, so a
//! whole declaration reads as one chain ending in [`SchemaBuilder::build`].
//! Names are normalized with [`semantic_key`], and omitted MDX expressions are
//! derived from the conventional defaults in [`dash_core::keys`]. Two names
//! with the same [`fold_key`] (`valorLiquido`, `VALORLIQUIDO`) denote one entry:
//! the later declaration replaces the earlier spec under the key first stored.

use std::collections::BTreeMap;

use dash_config::BuilderConfig;
use dash_core::enums::{DimensionType, MeasureFormat};
use dash_core::keys::{
    default_dimension_ref, default_hierarchy, default_measure_mdx, fold_key, semantic_key, slugify,
};
use dash_core::{
    CategorySpec, CoreError, DimensionSpec, FilterConfig, MeasureSpec, ParallelPeriodConfig,
    ParallelPeriodLevel, SchemaDocument,
};

use crate::error::SchemaError;

// ---------------------------------------------------------------------------
// Declaration options
// ---------------------------------------------------------------------------

/// Optional overrides for a dimension declaration. `Default` means "derive everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionOptions {
    /// Explicit map key; normalized like a name.
    pub key: Option<String>,
    pub hierarchy: Option<String>,
    pub dimension: Option<String>,
    pub kind: Option<DimensionType>,
    pub label: Option<String>,
    pub members: Option<Vec<String>>,
    pub parallel_period_hierarchy: Option<String>,
}

impl DimensionOptions {
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_hierarchy(mut self, hierarchy: impl Into<String>) -> Self {
        self.hierarchy = Some(hierarchy.into());
        self
    }

    #[must_use]
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = Some(members.into_iter().map(Into::into).collect());
        self
    }
}

/// Optional overrides for a measure declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasureOptions {
    pub key: Option<String>,
    /// Full backend expression. Wins over `mdx_name`.
    pub mdx: Option<String>,
    /// Backend member name used in place of the declared name for the default expression.
    pub mdx_name: Option<String>,
    pub label: Option<String>,
    pub format: Option<MeasureFormat>,
    pub decimals: Option<u8>,
}

impl MeasureOptions {
    #[must_use]
    pub fn formatted(format: MeasureFormat) -> Self {
        Self {
            format: Some(format),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(decimals);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryOptions {
    pub icon: Option<String>,
    pub order: Option<i32>,
}

/// One item of a bulk dimension list: a bare name or a name with overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionEntry {
    Name(String),
    WithOptions(String, DimensionOptions),
}

impl DimensionEntry {
    pub(crate) fn into_parts(self) -> (String, DimensionOptions) {
        match self {
            Self::Name(name) => (name, DimensionOptions::default()),
            Self::WithOptions(name, opts) => (name, opts),
        }
    }
}

impl From<&str> for DimensionEntry {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for DimensionEntry {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<(&str, DimensionOptions)> for DimensionEntry {
    fn from((name, opts): (&str, DimensionOptions)) -> Self {
        Self::WithOptions(name.to_string(), opts)
    }
}

/// One item of a bulk measure list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeasureEntry {
    Name(String),
    WithOptions(String, MeasureOptions),
}

impl MeasureEntry {
    fn into_parts(self) -> (String, MeasureOptions) {
        match self {
            Self::Name(name) => (name, MeasureOptions::default()),
            Self::WithOptions(name, opts) => (name, opts),
        }
    }
}

impl From<&str> for MeasureEntry {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for MeasureEntry {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<(&str, MeasureOptions)> for MeasureEntry {
    fn from((name, opts): (&str, MeasureOptions)) -> Self {
        Self::WithOptions(name.to_string(), opts)
    }
}

/// One item of a bulk category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub code: String,
    pub label: String,
    pub color: String,
    pub icon: Option<String>,
    pub order: Option<i32>,
}

impl CategoryEntry {
    #[must_use]
    pub fn new(code: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            color: color.into(),
            icon: None,
            order: None,
        }
    }
}

// ---------------------------------------------------------------------------
// SchemaBuilder
// ---------------------------------------------------------------------------

/// Accumulates declarations and produces one validated [`SchemaDocument`].
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    draft: SchemaDocument,
    config: BuilderConfig,
}

/// Fresh builder with default configuration.
#[must_use]
pub fn create_schema_builder() -> SchemaBuilder {
    SchemaBuilder::new()
}

impl SchemaBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder honouring a loaded [`BuilderConfig`] (default date field, empty-schema warning).
    #[must_use]
    pub fn with_config(config: &BuilderConfig) -> Self {
        Self {
            draft: SchemaDocument::default(),
            config: config.clone(),
        }
    }

    #[must_use]
    pub fn set_id(mut self, id: impl Into<String>) -> Self {
        self.draft.id = id.into();
        self
    }

    #[must_use]
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.draft.name = name.into();
        self
    }

    #[must_use]
    pub fn set_data_source(mut self, source: impl Into<String>) -> Self {
        self.draft.data_source = source.into();
        self
    }

    #[must_use]
    pub fn set_version(mut self, version: impl Into<String>) -> Self {
        self.draft.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.draft.description = Some(description.into());
        self
    }

    /// Set the data source, deriving the id (slug) and display name from it
    /// when they are not given.
    #[must_use]
    pub fn set_data_source_info(
        mut self,
        data_source: impl Into<String>,
        id: Option<&str>,
        name: Option<&str>,
    ) -> Self {
        let data_source = data_source.into();
        self.draft.id = id.map_or_else(|| slugify(&data_source), str::to_string);
        self.draft.name = name.map_or_else(|| data_source.clone(), str::to_string);
        self.draft.data_source = data_source;
        self
    }

    /// Declare a dimension. Omitted expressions default to
    /// `[<name>].[Todos].Children` and `[<name>]`; the type defaults to categorical.
    #[must_use]
    pub fn add_dimension(mut self, name: impl Into<String>, opts: DimensionOptions) -> Self {
        self.insert_dimension(name.into(), opts, None);
        self
    }

    /// Declare a time dimension. The type is always `time`.
    #[must_use]
    pub fn add_time_dimension(mut self, name: impl Into<String>, opts: DimensionOptions) -> Self {
        self.insert_dimension(name.into(), opts, Some(DimensionType::Time));
        self
    }

    #[must_use]
    pub fn add_dimensions<I, E>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<DimensionEntry>,
    {
        for entry in entries {
            let (name, opts) = entry.into().into_parts();
            self.insert_dimension(name, opts, None);
        }
        self
    }

    /// Declare a measure. The expression defaults to `[Measures].[<lowercase name>]`,
    /// using `mdx_name` in place of the name when given.
    #[must_use]
    pub fn add_measure(mut self, name: impl Into<String>, opts: MeasureOptions) -> Self {
        self.insert_measure(name.into(), opts);
        self
    }

    #[must_use]
    pub fn add_measures<I, E>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<MeasureEntry>,
    {
        for entry in entries {
            let (name, opts) = entry.into().into_parts();
            self.insert_measure(name, opts);
        }
        self
    }

    #[must_use]
    pub fn add_category(
        mut self,
        code: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
        opts: CategoryOptions,
    ) -> Self {
        self.draft.categories.insert(
            code.into(),
            CategorySpec {
                label: label.into(),
                color: color.into(),
                icon: opts.icon,
                order: opts.order,
            },
        );
        self
    }

    #[must_use]
    pub fn add_categories<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = CategoryEntry>,
    {
        for entry in entries {
            self = self.add_category(
                entry.code,
                entry.label,
                entry.color,
                CategoryOptions {
                    icon: entry.icon,
                    order: entry.order,
                },
            );
        }
        self
    }

    #[must_use]
    pub fn add_filter_config(mut self, name: impl Into<String>, config: FilterConfig) -> Self {
        self.draft.filter_configs.insert(name.into(), config);
        self
    }

    #[must_use]
    pub fn set_governance_filters<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.draft.governance_filters = keys.into_iter().map(|k| semantic_key(k.as_ref())).collect();
        self
    }

    #[must_use]
    pub fn set_parallel_period<I, K>(mut self, hierarchy: impl Into<String>, levels: I) -> Self
    where
        I: IntoIterator<Item = (K, ParallelPeriodLevel)>,
        K: Into<String>,
    {
        self.draft.parallel_period = Some(ParallelPeriodConfig {
            hierarchy: hierarchy.into(),
            levels: levels
                .into_iter()
                .map(|(name, level)| (name.into(), level))
                .collect::<BTreeMap<_, _>>(),
        });
        self
    }

    /// Compare to the same point one week, one month, and one year back
    /// (`Dia: 7`, `Mes: 1`, `Ano: 1`) on `[BIMF<field>.(Completo)]`.
    #[must_use]
    pub fn set_default_parallel_period(mut self, dimension_name: Option<&str>) -> Self {
        let field = dimension_name.unwrap_or(self.config.default_date_field.as_str());
        self.draft.parallel_period = Some(ParallelPeriodConfig::standard(field));
        self
    }

    /// The current draft, unvalidated.
    #[must_use]
    pub const fn draft(&self) -> &SchemaDocument {
        &self.draft
    }

    /// The current draft as JSON, without validation.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Json` if the draft cannot be serialized.
    pub fn to_json(&self) -> Result<serde_json::Value, SchemaError> {
        Ok(serde_json::to_value(&self.draft)?)
    }

    /// Validate and return the finished document.
    ///
    /// An empty `name` falls back to the data source. A schema without
    /// dimensions is logged as a warning but still built.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingField` naming `id` or `dataSource`.
    pub fn build(self) -> Result<SchemaDocument, CoreError> {
        let mut doc = self.draft;
        doc.validate()?;

        if doc.name.is_empty() {
            doc.name.clone_from(&doc.data_source);
        }
        if doc.dimensions.is_empty() && self.config.warn_on_empty_dimensions {
            tracing::warn!(schema = %doc.id, "schema built without dimensions");
        }

        tracing::debug!(
            schema = %doc.id,
            data_source = %doc.data_source,
            dimensions = doc.dimensions.len(),
            measures = doc.measures.len(),
            "schema built"
        );
        Ok(doc)
    }

    fn insert_dimension(
        &mut self,
        name: String,
        opts: DimensionOptions,
        forced_kind: Option<DimensionType>,
    ) {
        let key = semantic_key(opts.key.as_deref().unwrap_or(&name));
        let spec = DimensionSpec {
            hierarchy: opts.hierarchy.unwrap_or_else(|| default_hierarchy(&name)),
            dimension: opts.dimension.unwrap_or_else(|| default_dimension_ref(&name)),
            kind: forced_kind.or(opts.kind).unwrap_or_default(),
            label: opts.label,
            members: opts.members,
            parallel_period_hierarchy: opts.parallel_period_hierarchy,
            name,
        };
        if let Some(key) = upsert(&mut self.draft.dimensions, key, spec) {
            tracing::trace!(schema = %self.draft.id, %key, "dimension redeclared; keeping the last definition");
        }
    }

    fn insert_measure(&mut self, name: String, opts: MeasureOptions) {
        let key = semantic_key(opts.key.as_deref().unwrap_or(&name));
        let mdx = opts
            .mdx
            .unwrap_or_else(|| default_measure_mdx(opts.mdx_name.as_deref().unwrap_or(&name)));
        let spec = MeasureSpec {
            name,
            mdx,
            label: opts.label,
            format: opts.format,
            decimals: opts.decimals,
        };
        if let Some(key) = upsert(&mut self.draft.measures, key, spec) {
            tracing::trace!(schema = %self.draft.id, %key, "measure redeclared; keeping the last definition");
        }
    }
}

/// Insert `value`, replacing any entry whose key folds to the same spelling.
///
/// The replaced entry keeps its stored key. Returns that key when something
/// was replaced.
fn upsert<V>(map: &mut BTreeMap<String, V>, key: String, value: V) -> Option<String> {
    let folded = fold_key(&key);
    let existing = map.keys().find(|k| fold_key(k) == folded).cloned();
    match existing {
        Some(existing) => {
            map.insert(existing.clone(), value);
            Some(existing)
        }
        None => {
            map.insert(key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vendas() -> SchemaBuilder {
        SchemaBuilder::new().set_id("vendas").set_data_source("Cube")
    }

    #[test]
    fn builds_with_id_and_data_source() {
        let doc = vendas().build().unwrap();
        assert_eq!(doc.id, "vendas");
        assert_eq!(doc.data_source, "Cube");
        assert_eq!(doc.name, "Cube");
    }

    #[test]
    fn missing_id_names_the_field() {
        let err = SchemaBuilder::new().set_data_source("Cube").build().unwrap_err();
        assert_eq!(err, CoreError::MissingField { field: "id" });
        assert!(err.to_string().contains("'id'"));
    }

    #[test]
    fn missing_data_source_names_the_field() {
        let err = SchemaBuilder::new().set_id("vendas").build().unwrap_err();
        assert_eq!(
            err,
            CoreError::MissingField {
                field: "dataSource"
            }
        );
    }

    #[test]
    fn data_source_info_derives_id_and_name() {
        let doc = SchemaBuilder::new()
            .set_data_source_info("[Vendas Diárias]", None, None)
            .build()
            .unwrap();
        assert_eq!(doc.id, "vendasdirias");
        assert_eq!(doc.name, "[Vendas Diárias]");
        assert_eq!(doc.data_source, "[Vendas Diárias]");

        let doc = SchemaBuilder::new()
            .set_data_source_info("[Vendas]", Some("vendas-v2"), Some("Vendas 2"))
            .build()
            .unwrap();
        assert_eq!(doc.id, "vendas-v2");
        assert_eq!(doc.name, "Vendas 2");
    }

    #[test]
    fn dimension_defaults() {
        let doc = vendas()
            .add_dimension("loja", DimensionOptions::default())
            .build()
            .unwrap();
        let loja = &doc.dimensions["LOJA"];
        assert_eq!(loja.name, "loja");
        assert_eq!(loja.hierarchy, "[loja].[Todos].Children");
        assert_eq!(loja.dimension, "[loja]");
        assert_eq!(loja.kind, DimensionType::Categorical);
    }

    #[test]
    fn dimension_overrides_are_kept() {
        let opts = DimensionOptions {
            dimension: Some("[Turno].[Turno]".into()),
            ..DimensionOptions::default()
        }
        .with_hierarchy("[Turno].[Turno].Members")
        .with_label("Turno")
        .with_members(["Manha", "Tarde", "Noite"]);

        let doc = vendas().add_dimension("turno", opts).build().unwrap();
        let turno = &doc.dimensions["TURNO"];
        assert_eq!(turno.hierarchy, "[Turno].[Turno].Members");
        assert_eq!(turno.dimension, "[Turno].[Turno]");
        assert_eq!(turno.label.as_deref(), Some("Turno"));
        assert!(turno.allows_member("Noite"));
        assert!(!turno.allows_member("Madrugada"));
    }

    #[test]
    fn time_dimension_forces_type() {
        let opts = DimensionOptions {
            kind: Some(DimensionType::Categorical),
            parallel_period_hierarchy: Some("[BIMFdatarefvenda.(Completo)]".into()),
            ..DimensionOptions::default()
        };
        let doc = vendas().add_time_dimension("datarefvenda", opts).build().unwrap();
        let date = &doc.dimensions["DATAREFVENDA"];
        assert_eq!(date.kind, DimensionType::Time);
        assert_eq!(
            date.parallel_period_hierarchy.as_deref(),
            Some("[BIMFdatarefvenda.(Completo)]")
        );
        assert_eq!(doc.time_dimensions().count(), 1);
    }

    #[test]
    fn redeclared_dimension_overwrites_in_place() {
        let doc = vendas()
            .add_dimension("loja", DimensionOptions::default())
            .add_dimension("LOJA", DimensionOptions::default().with_label("Filial"))
            .build()
            .unwrap();
        assert_eq!(doc.dimensions.len(), 1);
        let loja = &doc.dimensions["LOJA"];
        assert_eq!(loja.name, "LOJA");
        assert_eq!(loja.label.as_deref(), Some("Filial"));
    }

    #[test]
    fn redeclared_with_other_boundary_style_keeps_one_entry() {
        let doc = vendas()
            .add_measure("valorLiquido", MeasureOptions::formatted(MeasureFormat::Currency))
            .add_measure("VALORLIQUIDO", MeasureOptions::default().with_label("Valor"))
            .add_measure("valorliquido", MeasureOptions::default().with_decimals(2))
            .add_dimension("dataVenda", DimensionOptions::default())
            .add_dimension("datavenda", DimensionOptions::default().with_label("Data"))
            .build()
            .unwrap();

        let measures: Vec<&str> = doc.measures.keys().map(String::as_str).collect();
        assert_eq!(measures, vec!["VALOR_LIQUIDO"]);
        let valor = &doc.measures["VALOR_LIQUIDO"];
        assert_eq!(valor.name, "valorliquido");
        assert_eq!(valor.decimals, Some(2));
        assert_eq!(valor.format, None);
        assert_eq!(valor.mdx, "[Measures].[valorliquido]");

        let dimensions: Vec<&str> = doc.dimensions.keys().map(String::as_str).collect();
        assert_eq!(dimensions, vec!["DATA_VENDA"]);
        assert_eq!(doc.dimensions["DATA_VENDA"].label.as_deref(), Some("Data"));
        assert_eq!(doc.dimensions["DATA_VENDA"].hierarchy, "[datavenda].[Todos].Children");
    }

    #[test]
    fn accented_dimensions_keep_their_letters() {
        let doc = vendas()
            .add_dimensions(["mês", "más", "região"])
            .build()
            .unwrap();
        let keys: Vec<&str> = doc.dimensions.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["MÁS", "MÊS", "REGIÃO"]);
        assert_eq!(doc.dimensions["MÊS"].name, "mês");
        assert_eq!(doc.dimensions["MÁS"].name, "más");
        assert_eq!(doc.dimensions["REGIÃO"].hierarchy, "[região].[Todos].Children");
        assert_eq!(doc.dimension("Região").unwrap().name, "região");
    }

    #[test]
    fn governance_filters_keep_accents() {
        let doc = vendas().set_governance_filters(["região", "códigoFilial"]).build().unwrap();
        assert_eq!(doc.governance_filters, vec!["REGIÃO", "CÓDIGO_FILIAL"]);
    }

    #[test]
    fn explicit_key_is_normalized() {
        let opts = DimensionOptions {
            key: Some("filial".into()),
            ..DimensionOptions::default()
        };
        let doc = vendas().add_dimension("loja", opts).build().unwrap();
        assert!(doc.dimensions.contains_key("FILIAL"));
        assert_eq!(doc.dimensions["FILIAL"].hierarchy, "[loja].[Todos].Children");
    }

    #[test]
    fn bulk_dimensions_mix_names_and_pairs() {
        let doc = vendas()
            .add_dimensions([
                DimensionEntry::from("loja"),
                DimensionEntry::from(("turno", DimensionOptions::default().with_label("Turno"))),
                DimensionEntry::from(String::from("canal")),
            ])
            .build()
            .unwrap();
        let keys: Vec<&str> = doc.dimensions.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["CANAL", "LOJA", "TURNO"]);
        assert_eq!(doc.dimensions["TURNO"].label.as_deref(), Some("Turno"));
    }

    #[test]
    fn measure_defaults_and_overrides() {
        let doc = vendas()
            .add_measure("valorLiquido", MeasureOptions::formatted(MeasureFormat::Currency))
            .add_measure(
                "ticketMedio",
                MeasureOptions {
                    mdx_name: Some("TicketMedioVenda".into()),
                    ..MeasureOptions::default()
                },
            )
            .add_measure(
                "margem",
                MeasureOptions {
                    mdx: Some("[Measures].[Margem Bruta %]".into()),
                    mdx_name: Some("ignored".into()),
                    ..MeasureOptions::formatted(MeasureFormat::Percent).with_decimals(1)
                },
            )
            .build()
            .unwrap();

        let valor = &doc.measures["VALOR_LIQUIDO"];
        assert_eq!(valor.mdx, "[Measures].[valorliquido]");
        assert_eq!(valor.format, Some(MeasureFormat::Currency));
        assert_eq!(doc.measures["TICKET_MEDIO"].mdx, "[Measures].[ticketmediovenda]");
        assert_eq!(doc.measures["MARGEM"].mdx, "[Measures].[Margem Bruta %]");
        assert_eq!(doc.measures["MARGEM"].decimals, Some(1));
    }

    #[test]
    fn bulk_measures_overwrite_by_key() {
        let doc = vendas()
            .add_measures([
                MeasureEntry::from("quantidade"),
                MeasureEntry::from(("Quantidade", MeasureOptions::default().with_label("Qtd"))),
            ])
            .build()
            .unwrap();
        assert_eq!(doc.measures.len(), 1);
        assert_eq!(doc.measures["QUANTIDADE"].label.as_deref(), Some("Qtd"));
        assert_eq!(doc.measures["QUANTIDADE"].mdx, "[Measures].[quantidade]");
    }

    #[test]
    fn categories_filters_and_governance() {
        let doc = vendas()
            .add_category("M", "Manhã", "#f5b041", CategoryOptions::default())
            .add_categories([
                CategoryEntry {
                    icon: Some("moon".into()),
                    order: Some(3),
                    ..CategoryEntry::new("N", "Noite", "#2e4053")
                },
                CategoryEntry::new("T", "Tarde", "#e67e22"),
            ])
            .add_filter_config("kpi", FilterConfig::accepting(["loja"]))
            .set_governance_filters(["loja", "empresa"])
            .build()
            .unwrap();

        assert_eq!(doc.categories.len(), 3);
        assert_eq!(doc.categories["N"].icon.as_deref(), Some("moon"));
        assert_eq!(doc.categories["M"].color, "#f5b041");
        assert_eq!(doc.filter_configs["kpi"].accepts, vec!["LOJA"]);
        assert_eq!(doc.governance_filters, vec!["LOJA", "EMPRESA"]);
    }

    #[test]
    fn default_parallel_period() {
        let doc = vendas()
            .set_default_parallel_period(Some("datarefvenda"))
            .build()
            .unwrap();
        let pp = doc.parallel_period.unwrap();
        assert_eq!(pp.hierarchy, "[BIMFdatarefvenda.(Completo)]");
        assert_eq!(pp.offset("Dia"), Some(7));
        assert_eq!(pp.offset("Mes"), Some(1));
        assert_eq!(pp.offset("Ano"), Some(1));
    }

    #[test]
    fn default_parallel_period_uses_configured_field() {
        let config = BuilderConfig {
            default_date_field: "datamovimento".into(),
            ..BuilderConfig::default()
        };
        let doc = SchemaBuilder::with_config(&config)
            .set_id("estoque")
            .set_data_source("Estoque")
            .set_default_parallel_period(None)
            .build()
            .unwrap();
        assert_eq!(
            doc.parallel_period.unwrap().hierarchy,
            "[BIMFdatamovimento.(Completo)]"
        );
    }

    #[test]
    fn explicit_parallel_period() {
        let doc = vendas()
            .set_parallel_period(
                "[Tempo].[Calendario]",
                [("Semana", ParallelPeriodLevel::new("Semana", 52))],
            )
            .build()
            .unwrap();
        let pp = doc.parallel_period.unwrap();
        assert_eq!(pp.hierarchy, "[Tempo].[Calendario]");
        assert_eq!(pp.offset("Semana"), Some(52));
        assert_eq!(pp.offset("Dia"), None);
    }

    #[test]
    fn to_json_skips_validation() {
        let builder = SchemaBuilder::new().add_dimension("loja", DimensionOptions::default());
        let json = builder.to_json().unwrap();
        assert_eq!(json["id"], "");
        assert_eq!(json["dimensions"]["LOJA"]["hierarchy"], "[loja].[Todos].Children");
        assert_eq!(builder.draft().dimensions.len(), 1);
        assert!(builder.build().is_err());
    }

    #[test]
    fn metadata_setters() {
        let doc = create_schema_builder()
            .set_id("vendas")
            .set_name("Vendas")
            .set_data_source("Cube")
            .set_version("3")
            .set_description("Vendas consolidadas")
            .build()
            .unwrap();
        assert_eq!(doc.name, "Vendas");
        assert_eq!(doc.version.as_deref(), Some("3"));
        assert_eq!(doc.description.as_deref(), Some("Vendas consolidadas"));
    }
}
