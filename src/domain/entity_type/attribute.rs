use crate::domain::entity_type::value_objects::AttributeType;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Constraint envelope attached to an attribute, keyed by `valueType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "valueType")]
pub enum AllowableValues {
    List {
        #[serde(default)]
        values: Vec<Value>,
    },
    RegExp {
        /// A `/pattern/flags` literal.
        #[serde(default, rename = "match", skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
    },
    Range {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<Number>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<Number>,
    },
}

impl AllowableValues {
    /// Enumerated values, if this is a non-empty list.
    pub fn list_values(&self) -> Option<&[Value]> {
        match self {
            AllowableValues::List { values } if !values.is_empty() => Some(values),
            _ => None,
        }
    }

    pub fn regex_literal(&self) -> Option<&str> {
        match self {
            AllowableValues::RegExp { pattern } => pattern.as_deref(),
            _ => None,
        }
    }

    pub fn range(&self) -> Option<(Option<&Number>, Option<&Number>)> {
        match self {
            AllowableValues::Range { min, max } => Some((min.as_ref(), max.as_ref())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDescriptor {
    pub title: String,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    /// Element tag, only meaningful for `Array`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_allowable_values",
        skip_serializing_if = "Option::is_none"
    )]
    pub allowable_values: Option<AllowableValues>,
    /// `None` only when the key is absent; an explicit `null` is kept.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<Value>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AttributeDescriptor {
    pub fn new(title: impl Into<String>, attribute_type: impl Into<AttributeType>) -> Self {
        Self {
            title: title.into(),
            attribute_type: attribute_type.into(),
            items: None,
            allowable_values: None,
            default_value: None,
            is_required: false,
            description: None,
        }
    }

    pub fn with_items(mut self, items: impl Into<String>) -> Self {
        self.items = Some(items.into());
        self
    }

    pub fn with_allowable_values(mut self, allowable_values: AllowableValues) -> Self {
        self.allowable_values = Some(allowable_values);
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

pub(crate) fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_allowable_values<'de, D>(deserializer: D) -> Result<Option<AllowableValues>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    match serde_json::from_value::<AllowableValues>(raw) {
        Ok(values) => Ok(Some(values)),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unsupported allowableValues");
            Ok(None)
        }
    }
}
