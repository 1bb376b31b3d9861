//! Static schema descriptors for ingress payloads.
//!
//! A [`Schema`] drives the shape phase of validation and doubles as the
//! published description of the wire contract, so it is `Serialize` and
//! built entirely from `'static` data.

use serde::Serialize;

/// Description of one JSON object payload.
#[derive(Debug, Serialize)]
pub struct Schema {
    /// Stable kebab-case identifier, also used in route paths.
    pub name: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Look up a field descriptor by its wire name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of all required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

/// One field of a [`Schema`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    #[serde(flatten)]
    pub ty: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn required(name: &'static str, ty: FieldType, description: &'static str) -> Self {
        Self {
            name,
            ty,
            required: true,
            default: None,
            description,
        }
    }

    pub const fn optional(name: &'static str, ty: FieldType, description: &'static str) -> Self {
        Self {
            name,
            ty,
            required: false,
            default: None,
            description,
        }
    }

    /// Document the value an absent optional field resolves to.
    pub const fn with_default(self, default: DefaultValue) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }
}

/// Declared type of a field.
///
/// `Integer` bounds and the `Uuid` version are published for clients; they
/// are enforced by the typed constraint phase, not by the shape walk.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    String,
    Integer {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    Number,
    Boolean,
    Uuid {
        #[serde(skip_serializing_if = "Option::is_none")]
        version: Option<u8>,
    },
    Enum {
        values: &'static [&'static str],
    },
    Array {
        items: &'static FieldType,
    },
    Object {
        schema: &'static Schema,
    },
    /// A JSON object with arbitrary keys whose values share one type.
    Map {
        values: &'static FieldType,
    },
    /// Any JSON value, passed through untouched.
    Any,
}

impl FieldType {
    /// Human-readable type name used in violation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String | Self::Enum { .. } => "string",
            Self::Integer { .. } => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Uuid { .. } => "UUID string",
            Self::Array { .. } => "array",
            Self::Object { .. } | Self::Map { .. } => "object",
            Self::Any => "any value",
        }
    }
}

/// Documented default of an optional field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Str(&'static str),
    Int(i64),
    Bool(bool),
}

impl DefaultValue {
    pub fn to_json(self) -> serde_json::Value {
        match self {
            Self::Str(s) => serde_json::Value::from(s),
            Self::Int(i) => serde_json::Value::from(i),
            Self::Bool(b) => serde_json::Value::from(b),
        }
    }
}
