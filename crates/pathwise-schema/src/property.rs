//! Property and relation types for entity definitions.

use serde::{Deserialize, Serialize};

/// Relation cardinality of an association property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Exactly one row on each side.
    OneToOne,
    /// Many rows here reference one row there (the foreign key lives here).
    ManyToOne,
    /// One row here is referenced by many rows there.
    OneToMany,
    /// Association through a mapping table.
    ManyToMany,
}

impl Relation {
    /// Returns the relation as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::OneToOne => "one_to_one",
            Relation::ManyToOne => "many_to_one",
            Relation::OneToMany => "one_to_many",
            Relation::ManyToMany => "many_to_many",
        }
    }

    /// Returns all relations.
    pub fn all() -> &'static [Relation] {
        &[
            Relation::OneToOne,
            Relation::ManyToOne,
            Relation::OneToMany,
            Relation::ManyToMany,
        ]
    }

    /// Checks if this relation resolves to at most one row.
    ///
    /// Only to-one associations can be walked through while resolving a
    /// dotted path; to-many associations stay terminal suggestions.
    pub fn is_to_one(&self) -> bool {
        matches!(self, Relation::OneToOne | Relation::ManyToOne)
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one_to_one" => Ok(Relation::OneToOne),
            "many_to_one" => Ok(Relation::ManyToOne),
            "one_to_many" => Ok(Relation::OneToMany),
            "many_to_many" => Ok(Relation::ManyToMany),
            _ => Err(format!("unknown relation: {}", s)),
        }
    }
}

/// A single property of an entity definition.
///
/// Deserializes from the registry dump shape, tagged by `type`. Scalar kinds
/// are unit variants; associations carry their relation and target entity.
/// Registries evolve ahead of tools, so an unrecognized tag parses as
/// [`Property::Other`] instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Property {
    /// Reference to another entity.
    Association {
        /// Cardinality of the reference.
        relation: Relation,
        /// Target entity name.
        entity: String,
    },
    /// Structured JSON field. A property of this kind named `price` expands
    /// into per-currency sub-fields.
    JsonObject,
    /// UUID key field.
    Uuid,
    /// Short string field.
    String,
    /// Long text field.
    Text,
    /// Integer field.
    Int,
    /// Floating-point field.
    Float,
    /// Boolean flag.
    Boolean,
    /// Date or datetime field.
    Date,
    /// Binary blob field.
    Blob,
    /// Any scalar kind not modeled explicitly.
    #[serde(other)]
    Other,
}

impl Property {
    /// Convenience constructor for association properties.
    pub fn association(relation: Relation, entity: impl Into<String>) -> Self {
        Property::Association {
            relation,
            entity: entity.into(),
        }
    }

    /// Checks if this property references another entity.
    pub fn is_association(&self) -> bool {
        matches!(self, Property::Association { .. })
    }

    /// Returns the relation and target entity for associations.
    pub fn as_association(&self) -> Option<(Relation, &str)> {
        match self {
            Property::Association { relation, entity } => Some((*relation, entity.as_str())),
            _ => None,
        }
    }

    /// Returns the relation marker carried onto suggestion options.
    pub fn relation(&self) -> Option<Relation> {
        match self {
            Property::Association { relation, .. } => Some(*relation),
            _ => None,
        }
    }

    /// Returns a short kind label for reports.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Property::Association { .. } => "association",
            Property::JsonObject => "json_object",
            Property::Uuid => "uuid",
            Property::String => "string",
            Property::Text => "text",
            Property::Int => "int",
            Property::Float => "float",
            Property::Boolean => "boolean",
            Property::Date => "date",
            Property::Blob => "blob",
            Property::Other => "other",
        }
    }
}
