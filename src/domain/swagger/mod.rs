pub mod document;
pub mod paths;
pub mod schema;
pub mod service_url;

pub use document::{Document, DocumentInfo, SecurityScheme};
pub use paths::{Operation, Parameter, ParameterLocation, PathItem, Paths, Response};
pub use schema::{Definition, SchemaDefinition, SchemaProperty};
pub use service_url::ServiceUrl;
