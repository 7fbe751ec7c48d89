//! Deterministic key derivation and conventional MDX defaults.
//!
//! Every function here is pure. The builder uses them to normalize declared
//! names, and the registry uses the same functions to normalize lookups, so a
//! dimension declared as `"loja"` resolves through `"LOJA"` and vice versa.

/// Date field used when a default parallel period is requested without naming one.
pub const DEFAULT_DATE_FIELD: &str = "datarefvenda";

/// Derive a schema id from a data-source name: lower-cased, with every
/// non-alphanumeric character stripped.
#[must_use]
pub fn slugify(source: &str) -> String {
    source
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Derive the map key for a dimension or measure name.
///
/// The key is the upper-cased name with camelCase word boundaries kept as `_`,
/// and any run of non-alphanumerics collapsed into a single `_`:
/// `loja` → `LOJA`, `valorLiquido` → `VALOR_LIQUIDO`, `região` → `REGIÃO`.
/// Letters outside ASCII are kept and upper-cased.
#[must_use]
pub fn semantic_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            let boundary = c.is_uppercase() && prev_lower_or_digit;
            if (boundary || pending_separator) && !key.is_empty() {
                key.push('_');
            }
            key.extend(c.to_uppercase());
            prev_lower_or_digit = c.is_lowercase() || c.is_numeric();
            pending_separator = false;
        } else {
            pending_separator = true;
            prev_lower_or_digit = false;
        }
    }

    key
}

/// Spelling-insensitive form used to decide whether two names or keys denote
/// the same entry: upper-cased, with every non-alphanumeric dropped.
///
/// `valorLiquido`, `VALOR_LIQUIDO` and `valorliquido` all fold to `VALORLIQUIDO`.
#[must_use]
pub fn fold_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Whether `a` and `b` fold to the same key.
#[must_use]
pub fn same_key(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// `[<name>].[Todos].Children`
#[must_use]
pub fn default_hierarchy(name: &str) -> String {
    format!("[{name}].[Todos].Children")
}

/// `[<name>]`
#[must_use]
pub fn default_dimension_ref(name: &str) -> String {
    format!("[{name}]")
}

/// `[Measures].[<lowercase name>]`
#[must_use]
pub fn default_measure_mdx(name: &str) -> String {
    format!("[Measures].[{}]", name.to_lowercase())
}

/// `[BIMF<field>.(Completo)]`
#[must_use]
pub fn default_parallel_hierarchy(field: &str) -> String {
    format!("[BIMF{field}.(Completo)]")
}
