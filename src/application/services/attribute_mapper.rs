use crate::application::error::ApplicationError;
use crate::domain::entity_type::{AttributeDescriptor, AttributeType, PrimitiveType};
use crate::domain::swagger::SchemaProperty;
use crate::domain::swagger::schema::OBJECT_ID_DEFINITION;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{fmt, str::FromStr};

// `/pattern/flags` with JavaScript flag letters
static REGEX_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(.*?)/[dgimsuvy]*$").expect("regex literal pattern"));

/// How ObjectId attributes (and every definition's `_id`) are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectIdMode {
    /// `$ref` to the shared `ObjectId` definition.
    #[default]
    Reference,
    /// Bounded-length string repeated at every use site.
    Inline,
}

impl ObjectIdMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectIdMode::Reference => "reference",
            ObjectIdMode::Inline => "inline",
        }
    }
}

impl fmt::Display for ObjectIdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectIdMode {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reference" | "ref" => Ok(ObjectIdMode::Reference),
            "inline" => Ok(ObjectIdMode::Inline),
            other => Err(ApplicationError::validation(format!(
                "unknown object id mode '{other}' (expected 'reference' or 'inline')"
            ))),
        }
    }
}

/// Translates one attribute descriptor into a Swagger schema node.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeMapper {
    object_id_mode: ObjectIdMode,
}

impl AttributeMapper {
    pub fn new(object_id_mode: ObjectIdMode) -> Self {
        Self { object_id_mode }
    }

    pub fn object_id(&self) -> SchemaProperty {
        match self.object_id_mode {
            ObjectIdMode::Reference => SchemaProperty::reference(OBJECT_ID_DEFINITION),
            ObjectIdMode::Inline => SchemaProperty::object_id(),
        }
    }

    pub fn map_attribute(&self, attribute: &AttributeDescriptor) -> SchemaProperty {
        let description = attribute.description.clone();
        match &attribute.attribute_type {
            AttributeType::ObjectId => self.object_id(),
            AttributeType::Array => SchemaProperty {
                description,
                ..SchemaProperty::array_of(self.map_element(attribute.items.as_deref()))
            },
            AttributeType::Date => SchemaProperty {
                description,
                default: attribute.default_value.clone(),
                ..SchemaProperty::date_time()
            },
            AttributeType::Int => numeric("integer", attribute),
            AttributeType::Float => numeric("number", attribute),
            AttributeType::Primitive(primitive) => primitive_property(*primitive, attribute),
            AttributeType::Mixed => SchemaProperty {
                title: Some(attribute.title.clone()),
                description,
                additional_properties: Some(true),
                ..SchemaProperty::of_type("object")
            },
            AttributeType::Reference(name) => SchemaProperty::reference(name),
        }
    }

    fn map_element(&self, items: Option<&str>) -> SchemaProperty {
        match items {
            Some(tag) => self.map_attribute(&AttributeDescriptor::new("", tag)),
            None => SchemaProperty {
                additional_properties: Some(true),
                ..SchemaProperty::of_type("object")
            },
        }
    }
}

fn primitive_property(primitive: PrimitiveType, attribute: &AttributeDescriptor) -> SchemaProperty {
    let constraint = attribute.allowable_values.as_ref();
    SchemaProperty {
        description: attribute.description.clone(),
        enumeration: constraint
            .and_then(|values| values.list_values())
            .map(<[_]>::to_vec),
        pattern: constraint
            .and_then(|values| values.regex_literal())
            .map(strip_regex_literal)
            .filter(|pattern| !pattern.is_empty()),
        default: attribute.default_value.clone(),
        ..SchemaProperty::of_type(primitive.as_str())
    }
}

fn numeric(schema_type: &str, attribute: &AttributeDescriptor) -> SchemaProperty {
    let (minimum, maximum) = attribute
        .allowable_values
        .as_ref()
        .and_then(|values| values.range())
        .map(|(min, max)| (min.cloned(), max.cloned()))
        .unwrap_or_default();

    SchemaProperty {
        description: attribute.description.clone(),
        minimum,
        maximum,
        default: attribute.default_value.clone(),
        ..SchemaProperty::of_type(schema_type)
    }
}

/// `/^[a-z]+$/i` becomes `^[a-z]+$`. Anything not shaped like a regex literal
/// is returned unchanged.
pub fn strip_regex_literal(literal: &str) -> String {
    REGEX_LITERAL
        .captures(literal)
        .and_then(|captures| captures.get(1))
        .map(|body| body.as_str().to_string())
        .unwrap_or_else(|| literal.to_string())
}
