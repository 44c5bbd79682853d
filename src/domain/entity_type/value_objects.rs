use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercase JSON-Schema primitive names accepted verbatim as attribute tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Array,
    Boolean,
    Integer,
    Number,
    Object,
    String,
}

impl PrimitiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Array => "array",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Number => "number",
            PrimitiveType::Object => "object",
            PrimitiveType::String => "string",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "array" => Some(PrimitiveType::Array),
            "boolean" => Some(PrimitiveType::Boolean),
            "integer" => Some(PrimitiveType::Integer),
            "number" => Some(PrimitiveType::Number),
            "object" => Some(PrimitiveType::Object),
            "string" => Some(PrimitiveType::String),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute type tag. Every string is a valid tag: anything outside the fixed
/// vocabulary names another entity type and becomes a `Reference`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttributeType {
    ObjectId,
    /// Typed collection; the element tag lives in the attribute's `items`.
    Array,
    Date,
    Int,
    Float,
    Primitive(PrimitiveType),
    Mixed,
    Reference(String),
}

impl AttributeType {
    pub fn as_str(&self) -> &str {
        match self {
            AttributeType::ObjectId => "ObjectId",
            AttributeType::Array => "Array",
            AttributeType::Date => "Date",
            AttributeType::Int => "int",
            AttributeType::Float => "float",
            AttributeType::Primitive(primitive) => primitive.as_str(),
            AttributeType::Mixed => "Mixed",
            AttributeType::Reference(name) => name,
        }
    }
}

impl From<&str> for AttributeType {
    fn from(tag: &str) -> Self {
        match tag {
            "ObjectId" => AttributeType::ObjectId,
            "Array" => AttributeType::Array,
            "Date" => AttributeType::Date,
            "int" => AttributeType::Int,
            "float" => AttributeType::Float,
            "Mixed" => AttributeType::Mixed,
            other => PrimitiveType::from_tag(other)
                .map(AttributeType::Primitive)
                .unwrap_or_else(|| AttributeType::Reference(other.to_string())),
        }
    }
}

impl From<String> for AttributeType {
    fn from(tag: String) -> Self {
        AttributeType::from(tag.as_str())
    }
}

impl From<AttributeType> for String {
    fn from(value: AttributeType) -> Self {
        match value {
            AttributeType::Reference(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
