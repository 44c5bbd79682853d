// tests/support/builders.rs
use cbswagger::domain::entity_type::{AllowableValues, AttributeDescriptor, EntityTypeDescriptor};
use once_cell::sync::Lazy;
use serde_json::{Value, json};

/// A small administration as the Communibase API returns it.
pub static ADMINISTRATION_JSON: Lazy<Value> = Lazy::new(|| {
    json!([
        {
            "_id": "5a0b1c2d3e4f5a6b7c8d9e01",
            "title": "Address",
            "isResource": false,
            "attributes": [
                {"title": "street", "type": "string", "isRequired": true},
                {"title": "zipcode", "type": "string",
                 "allowableValues": {"valueType": "RegExp", "match": "/^[0-9]{4} ?[A-Z]{2}$/i"}},
                {"title": "country", "type": "string", "defaultValue": "NL"}
            ]
        },
        {
            "_id": "5a0b1c2d3e4f5a6b7c8d9e02",
            "title": "Person",
            "description": "A natural person",
            "isResource": true,
            "attributes": [
                {"title": "firstName", "type": "string", "isRequired": true},
                {"title": "gender", "type": "string",
                 "allowableValues": {"valueType": "List", "values": ["M", "F", "O"]}},
                {"title": "age", "type": "int",
                 "allowableValues": {"valueType": "Range", "min": 0, "max": 150}},
                {"title": "birthDate", "type": "Date"},
                {"title": "addresses", "type": "Array", "items": "Address"},
                {"title": "companyId", "type": "ObjectId"},
                {"title": "meta", "type": "Mixed"}
            ]
        }
    ])
});

pub fn administration() -> Vec<EntityTypeDescriptor> {
    serde_json::from_value(ADMINISTRATION_JSON.clone()).expect("fixture decodes")
}

pub fn person_entity() -> EntityTypeDescriptor {
    EntityTypeDescriptor::new("Person")
        .resource()
        .with_attribute(AttributeDescriptor::new("name", "string").required())
}

pub fn contact_entity() -> EntityTypeDescriptor {
    EntityTypeDescriptor::new("Contact")
        .resource()
        .with_attribute(
            AttributeDescriptor::new("kind", "string").with_allowable_values(AllowableValues::List {
                values: vec![json!("email"), json!("phone")],
            }),
        )
        .with_attribute(AttributeDescriptor::new("value", "string").required())
        .with_attribute(AttributeDescriptor::new("personId", "ObjectId").required())
}
