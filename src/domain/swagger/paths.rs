use crate::domain::swagger::schema::SchemaProperty;
use indexmap::IndexMap;
use serde::Serialize;

pub type Paths = IndexMap<String, PathItem>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Path,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(rename = "type")]
    pub parameter_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
}

impl Parameter {
    /// The session token every authenticated Communibase call carries.
    pub fn token() -> Self {
        Self {
            name: "token".into(),
            location: ParameterLocation::Query,
            parameter_type: "string".into(),
            description: None,
            required: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub description: String,
    pub schema: SchemaProperty,
}

impl Response {
    pub fn ok(schema: SchemaProperty) -> Self {
        Self {
            description: "OK".into(),
            schema,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    pub fn new(description: impl Into<String>, ok: SchemaProperty) -> Self {
        let mut responses = IndexMap::new();
        responses.insert("200".to_string(), Response::ok(ok));
        Self {
            description: description.into(),
            parameters: Vec::new(),
            responses,
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// Operations available on one path template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
}

impl PathItem {
    /// Lowercase names of the methods this item defines, in document order.
    pub fn methods(&self) -> Vec<&'static str> {
        [
            ("get", self.get.is_some()),
            ("put", self.put.is_some()),
            ("post", self.post.is_some()),
            ("delete", self.delete.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}
