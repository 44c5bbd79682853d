use crate::domain::swagger::paths::Paths;
use crate::domain::swagger::schema::Definition;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

pub const SWAGGER_VERSION: &str = "2.0";
pub const JSON_MIME: &str = "application/json";
pub const TOKEN_SECURITY_SCHEME: &str = "token_in_query";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentInfo {
    pub version: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: String,
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
}

impl SecurityScheme {
    /// API key passed as the `token` query parameter.
    pub fn token_in_query() -> Self {
        Self {
            scheme_type: "apiKey".into(),
            name: "token".into(),
            location: "query".into(),
        }
    }
}

/// A complete Swagger 2.0 document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub swagger: String,
    pub info: DocumentInfo,
    pub host: String,
    pub base_path: String,
    /// Always empty; resources are not grouped.
    pub tags: Vec<Value>,
    pub schemes: Vec<String>,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
    pub security_definitions: IndexMap<String, SecurityScheme>,
    pub paths: Paths,
    pub definitions: IndexMap<String, Definition>,
}
