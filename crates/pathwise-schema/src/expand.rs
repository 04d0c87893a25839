//! Dotted-path expansion into selectable options.

use serde::{Deserialize, Serialize};

use crate::property::{Property, Relation};
use crate::query::{self, PathCursor};
use crate::schema::{EntityDefinition, EntitySchema};

/// Property name that expands into per-language sub-paths.
pub const TRANSLATIONS_PROPERTY: &str = "translations";

/// Property name that expands into visibility flags.
pub const VISIBILITIES_PROPERTY: &str = "visibilities";

/// Property name that expands into per-currency sub-fields.
pub const PRICE_PROPERTY: &str = "price";

/// Fixed visibility flags; a vocabulary, not derived from the schema.
pub const VISIBILITY_FIELDS: &[&str] = &["all", "link", "search"];

/// Sub-fields of one currency's price object, in emission order.
pub const PRICE_FIELDS: &[&str] = &["net", "gross", "currencyId", "linked", "listPrice"];

/// Placeholder used when no currencies or languages are supplied.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// One selectable path suggestion.
///
/// `label` always equals `value`; both carry the fully qualified dotted
/// path. `relation` is present only on raw association properties, marking
/// the option as expandable by typing another segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathOption {
    /// Display label.
    pub label: String,
    /// Dotted path value.
    pub value: String,
    /// Relation marker for association options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
}

impl PathOption {
    /// Creates a terminal option; the label mirrors the value.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            relation: None,
        }
    }

    /// Creates an option carrying an association relation marker.
    pub fn with_relation(value: impl Into<String>, relation: Relation) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            relation: Some(relation),
        }
    }

    /// Checks if the option can be expanded by another path segment.
    pub fn is_expandable(&self) -> bool {
        self.relation.is_some()
    }
}

/// Currencies and languages available for synthetic leaf expansion.
///
/// Both lists fall back to a single [`DEFAULT_KEY`] placeholder when empty,
/// so a context-free caller still gets complete suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandContext {
    currencies: Vec<String>,
    languages: Vec<String>,
}

impl ExpandContext {
    /// Creates an empty context (placeholder currencies and languages).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the currency ISO codes.
    pub fn currencies<I, S>(mut self, currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.currencies = currencies.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the language locale codes.
    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Currency keys price fields expand with.
    pub fn currency_keys(&self) -> Vec<&str> {
        if self.currencies.is_empty() {
            vec![DEFAULT_KEY]
        } else {
            self.currencies.iter().map(String::as_str).collect()
        }
    }

    /// Locale keys translated fields expand with.
    pub fn language_keys(&self) -> Vec<&str> {
        if self.languages.is_empty() {
            vec![DEFAULT_KEY]
        } else {
            self.languages.iter().map(String::as_str).collect()
        }
    }
}

/// Expands everything selectable at the end of a typed path.
///
/// Resolves `typed` from `root` (see [`crate::query::resolve`]), then
/// flattens the reached definition: translated fields per language,
/// visibility flags, price sub-fields per currency, then the remaining
/// plain properties, in that order, all prefixed with the consumed path.
/// An unknown root yields no options.
///
/// # Example
/// ```
/// use pathwise_schema::{expand_paths, EntityDefinition, EntitySchema, ExpandContext, Property};
///
/// let mut schema = EntitySchema::new();
/// schema.insert(
///     EntityDefinition::builder("product")
///         .property("id", Property::Uuid)
///         .property("price", Property::JsonObject)
///         .build(),
/// );
///
/// let options = expand_paths(&schema, "product", "", &ExpandContext::new());
/// let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
/// assert_eq!(
///     values,
///     vec![
///         "price.DEFAULT.net",
///         "price.DEFAULT.gross",
///         "price.DEFAULT.currencyId",
///         "price.DEFAULT.linked",
///         "price.DEFAULT.listPrice",
///         "id",
///     ],
/// );
/// ```
pub fn expand_paths(
    schema: &EntitySchema,
    root: &str,
    typed: &str,
    ctx: &ExpandContext,
) -> Vec<PathOption> {
    let Some(cursor) = query::resolve(schema, root, typed) else {
        return Vec::new();
    };
    expand_at(schema, &cursor, ctx)
}

/// Expands the definition under an already-resolved cursor.
pub fn expand_at(
    schema: &EntitySchema,
    cursor: &PathCursor<'_>,
    ctx: &ExpandContext,
) -> Vec<PathOption> {
    let mut state = ExpandState::new(cursor.definition, &cursor.prefix);
    expand_translations(schema, ctx, &mut state);
    expand_visibilities(&mut state);
    expand_price(ctx, &mut state);
    expand_remaining(&mut state);
    state.options
}

/// Working state for one expansion pass over an entity definition.
///
/// `properties` is the pool of names not yet consumed; each pass emits its
/// options and removes what it consumed before the next pass runs.
struct ExpandState<'a> {
    definition: &'a EntityDefinition,
    prefix: &'a str,
    properties: Vec<&'a str>,
    options: Vec<PathOption>,
}

impl<'a> ExpandState<'a> {
    fn new(definition: &'a EntityDefinition, prefix: &'a str) -> Self {
        Self {
            definition,
            prefix,
            properties: definition.property_names().collect(),
            options: Vec::new(),
        }
    }
}

/// Emits per-language options for the translation entity's properties.
fn expand_translations(schema: &EntitySchema, ctx: &ExpandContext, state: &mut ExpandState<'_>) {
    if !state.properties.contains(&TRANSLATIONS_PROPERTY) {
        return;
    }
    let Some((_, target)) = state
        .definition
        .get(TRANSLATIONS_PROPERTY)
        .and_then(Property::as_association)
    else {
        return;
    };
    let Some(translation) = schema.get(target) else {
        return;
    };

    for language in ctx.language_keys() {
        for name in translation.property_names() {
            state.options.push(PathOption::new(format!(
                "{}{}.{}.{}",
                state.prefix, TRANSLATIONS_PROPERTY, language, name
            )));
        }
    }

    // Translated fields shadow their flattened copies on the outer
    // definition; drop those along with the association itself.
    state
        .properties
        .retain(|p| *p != TRANSLATIONS_PROPERTY && translation.get(p).is_none());
}

/// Emits the fixed visibility flags.
fn expand_visibilities(state: &mut ExpandState<'_>) {
    if !state.properties.contains(&VISIBILITIES_PROPERTY) {
        return;
    }

    for field in VISIBILITY_FIELDS {
        state.options.push(PathOption::new(format!(
            "{}{}.{}",
            state.prefix, VISIBILITIES_PROPERTY, field
        )));
    }

    state.properties.retain(|p| *p != VISIBILITIES_PROPERTY);
}

/// Emits per-currency price sub-fields.
fn expand_price(ctx: &ExpandContext, state: &mut ExpandState<'_>) {
    if !state.properties.contains(&PRICE_PROPERTY) {
        return;
    }
    // Only the structured price object expands; a scalar that happens to be
    // called price stays a plain property.
    if state.definition.get(PRICE_PROPERTY) != Some(&Property::JsonObject) {
        return;
    }

    for currency in ctx.currency_keys() {
        for field in PRICE_FIELDS {
            state.options.push(PathOption::new(format!(
                "{}{}.{}.{}",
                state.prefix, PRICE_PROPERTY, currency, field
            )));
        }
    }

    state.properties.retain(|p| *p != PRICE_PROPERTY);
}

/// Emits the properties no earlier pass consumed.
fn expand_remaining(state: &mut ExpandState<'_>) {
    for name in &state.properties {
        let value = format!("{}{}", state.prefix, name);
        let option = match state.definition.get(name).and_then(Property::relation) {
            Some(relation) => PathOption::with_relation(value, relation),
            None => PathOption::new(value),
        };
        state.options.push(option);
    }
}
