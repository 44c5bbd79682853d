use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};

/// Key of the shared 24-hex-character identifier definition.
pub const OBJECT_ID_DEFINITION: &str = "ObjectId";
pub const OBJECT_ID_LENGTH: u32 = 24;

pub fn definition_ref(title: &str) -> String {
    format!("#/definitions/{title}")
}

/// A node of the JSON-Schema subset Swagger 2.0 accepts. Either `$ref` or
/// `type` is set, never both.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaProperty {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaProperty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaProperty>>,
}

impl SchemaProperty {
    pub fn of_type(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Self::default()
        }
    }

    /// `$ref` to another entry of `definitions`.
    pub fn reference(title: &str) -> Self {
        Self {
            reference: Some(definition_ref(title)),
            ..Self::default()
        }
    }

    pub fn array_of(items: SchemaProperty) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of_type("array")
        }
    }

    pub fn date_time() -> Self {
        Self {
            format: Some("date-time".into()),
            ..Self::of_type("string")
        }
    }

    /// Inline form of an ObjectId: a string of exactly 24 characters.
    pub fn object_id() -> Self {
        Self {
            min_length: Some(OBJECT_ID_LENGTH),
            max_length: Some(OBJECT_ID_LENGTH),
            ..Self::of_type("string")
        }
    }

    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }
}

/// One entry of the document's `definitions` map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDefinition {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub properties: IndexMap<String, SchemaProperty>,
    /// Never an empty list: no required attributes means no key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl SchemaDefinition {
    pub fn object(
        description: Option<String>,
        properties: IndexMap<String, SchemaProperty>,
        required: Vec<String>,
    ) -> Self {
        Self {
            schema_type: "object",
            description,
            properties,
            required: (!required.is_empty()).then_some(required),
        }
    }
}

/// Entries of `definitions` are either entity schemas or the shared ObjectId.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Definition {
    Entity(SchemaDefinition),
    Property(SchemaProperty),
}

impl Definition {
    pub fn as_entity(&self) -> Option<&SchemaDefinition> {
        match self {
            Definition::Entity(definition) => Some(definition),
            Definition::Property(_) => None,
        }
    }
}
