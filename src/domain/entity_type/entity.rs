use crate::domain::entity_type::attribute::{AttributeDescriptor, null_as_empty, null_as_false};
use serde::{Deserialize, Serialize};

/// Name of the metadata entity type every Communibase administration exposes.
pub const ENTITY_TYPE_TITLE: &str = "EntityType";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypeDescriptor {
    /// Schema key and URL segment. Assumed unique across a fetched set.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attributes: Vec<AttributeDescriptor>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_resource: bool,
}

impl EntityTypeDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            attributes: Vec::new(),
            is_resource: false,
        }
    }

    pub fn resource(mut self) -> Self {
        self.is_resource = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// The `EntityType` resource itself, so the metadata endpoint shows up in
    /// generated documents alongside the administration's own types.
    pub fn entity_type_meta() -> Self {
        Self::new(ENTITY_TYPE_TITLE)
            .resource()
            .with_attribute(AttributeDescriptor::new("_id", "ObjectId"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_communibase_payload() {
        let entity: EntityTypeDescriptor = serde_json::from_value(json!({
            "_id": "5a0b1c2d3e4f5a6b7c8d9e0f",
            "title": "Person",
            "isResource": true,
            "attributes": [
                {"title": "firstName", "type": "string", "isRequired": true, "isCore": true},
                {"title": "addresses", "type": "Array", "items": "Address"}
            ]
        }))
        .unwrap();

        assert_eq!(entity.title, "Person");
        assert!(entity.is_resource);
        assert_eq!(entity.attributes.len(), 2);
        assert!(entity.attributes[0].is_required);
        assert_eq!(entity.attributes[1].items.as_deref(), Some("Address"));
    }

    #[test]
    fn missing_flags_default_to_embedded_type() {
        let entity: EntityTypeDescriptor =
            serde_json::from_value(json!({"title": "Address"})).unwrap();
        assert!(!entity.is_resource);
        assert!(entity.attributes.is_empty());
    }

    #[test]
    fn null_is_resource_reads_as_embedded() {
        let entity: EntityTypeDescriptor =
            serde_json::from_value(json!({"title": "Address", "isResource": null})).unwrap();
        assert!(!entity.is_resource);
    }

    #[test]
    fn null_attributes_read_as_empty() {
        let entity: EntityTypeDescriptor =
            serde_json::from_value(json!({"title": "Note", "isResource": true, "attributes": null}))
                .unwrap();
        assert!(entity.is_resource);
        assert!(entity.attributes.is_empty());
    }
}
