use crate::application::services::attribute_mapper::AttributeMapper;
use crate::domain::entity_type::EntityTypeDescriptor;
use crate::domain::swagger::document::{
    JSON_MIME, SWAGGER_VERSION, TOKEN_SECURITY_SCHEME,
};
use crate::domain::swagger::schema::OBJECT_ID_DEFINITION;
use crate::domain::swagger::{
    Definition, Document, DocumentInfo, Operation, Parameter, ParameterLocation, PathItem, Paths,
    SchemaDefinition, SchemaProperty, SecurityScheme, ServiceUrl,
};
use indexmap::IndexMap;

pub const DEFAULT_TITLE: &str = "Communibase API";
pub const DEFAULT_DESCRIPTION: &str = "A RESTful API for Communibase administration";

/// Human-readable `info` fields of the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: String,
    pub description: String,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            description: DEFAULT_DESCRIPTION.into(),
        }
    }
}

/// Folds entity-type descriptors into Swagger definitions, paths and the
/// surrounding document.
#[derive(Debug, Clone, Default)]
pub struct EntityAssembler {
    mapper: AttributeMapper,
    metadata: DocumentMetadata,
}

impl EntityAssembler {
    pub fn new(mapper: AttributeMapper, metadata: DocumentMetadata) -> Self {
        Self { mapper, metadata }
    }

    pub fn build_definition(&self, entity: &EntityTypeDescriptor) -> SchemaDefinition {
        let mut seeded = IndexMap::new();
        seeded.insert("_id".to_string(), self.mapper.object_id());
        if entity.is_resource {
            seeded.insert("updatedAt".to_string(), SchemaProperty::date_time());
            seeded.insert("updatedBy".to_string(), SchemaProperty::of_type("string"));
        }

        let (properties, required) = entity.attributes.iter().fold(
            (seeded, Vec::<String>::new()),
            |(mut properties, mut required), attribute| {
                properties.insert(attribute.title.clone(), self.mapper.map_attribute(attribute));
                if attribute.is_required && !required.contains(&attribute.title) {
                    required.push(attribute.title.clone());
                }
                (properties, required)
            },
        );

        SchemaDefinition::object(entity.description.clone(), properties, required)
    }

    /// CRUD and search operations for a resource entity type.
    pub fn build_paths(&self, entity: &EntityTypeDescriptor) -> Paths {
        let title = entity.title.as_str();
        let single = || SchemaProperty::reference(title);
        let list = || SchemaProperty::array_of(SchemaProperty::reference(title));

        let collection = PathItem {
            get: Some(
                Operation::new(format!("Returns a list of \"{title}\""), list())
                    .with_parameter(Parameter::token()),
            ),
            post: Some(
                Operation::new(
                    format!(
                        "Creates a new \"{title}\". Returns the \"{title}\" with ID and any \
                         server-side modifications and validations"
                    ),
                    single(),
                )
                .with_parameter(Parameter::token()),
            ),
            ..PathItem::default()
        };

        let item = PathItem {
            get: Some(
                Operation::new(format!("Get a {title}"), single())
                    .with_parameter(id_parameter())
                    .with_parameter(Parameter::token()),
            ),
            put: Some(
                Operation::new(
                    format!(
                        "Update an existing \"{title}\". Returns the \"{title}\" with any \
                         server-side modifications."
                    ),
                    single(),
                )
                .with_parameter(id_parameter())
                .with_parameter(Parameter::token()),
            ),
            delete: Some(
                Operation::new(
                    format!(
                        "Removes a \"{title}\". Response is a JSON object, containing a property \
                         \"success\" with value true in case of a successful delete"
                    ),
                    success_schema(),
                )
                .with_parameter(id_parameter()),
            ),
            ..PathItem::default()
        };

        let search = PathItem {
            post: Some(Operation::new(
                format!(
                    "Search is just like regular \"/{title}.json/crud\" GET operations, but may \
                     POST a more complex query. Returns a list of \"{title}\""
                ),
                list(),
            )),
            ..PathItem::default()
        };

        IndexMap::from([
            (format!("/{title}.json/crud"), collection),
            (format!("/{title}.json/crud/{{id}}"), item),
            (format!("/{title}.json/search"), search),
        ])
    }

    pub fn build_document(&self, entities: &[EntityTypeDescriptor], service_url: &ServiceUrl) -> Document {
        let mut seeded = IndexMap::new();
        seeded.insert(
            OBJECT_ID_DEFINITION.to_string(),
            Definition::Property(SchemaProperty::object_id()),
        );

        let (definitions, paths) = entities.iter().fold(
            (seeded, Paths::new()),
            |(mut definitions, mut paths), entity| {
                tracing::debug!(
                    entity = %entity.title,
                    attributes = entity.attributes.len(),
                    resource = entity.is_resource,
                    "assembling entity type"
                );
                if entity.is_resource {
                    paths.extend(self.build_paths(entity));
                }
                definitions.insert(
                    entity.title.clone(),
                    Definition::Entity(self.build_definition(entity)),
                );
                (definitions, paths)
            },
        );

        Document {
            swagger: SWAGGER_VERSION.into(),
            info: DocumentInfo {
                version: service_url.version(),
                title: self.metadata.title.clone(),
                description: self.metadata.description.clone(),
            },
            host: service_url.host(),
            base_path: service_url.base_path().to_string(),
            tags: Vec::new(),
            schemes: vec![service_url.scheme().to_string()],
            consumes: vec![JSON_MIME.into()],
            produces: vec![JSON_MIME.into()],
            security_definitions: IndexMap::from([(
                TOKEN_SECURITY_SCHEME.to_string(),
                SecurityScheme::token_in_query(),
            )]),
            paths,
            definitions,
        }
    }
}

fn id_parameter() -> Parameter {
    Parameter {
        name: "id".into(),
        location: ParameterLocation::Path,
        parameter_type: "string".into(),
        description: None,
        required: true,
    }
}

fn success_schema() -> SchemaProperty {
    SchemaProperty {
        properties: Some(IndexMap::from([(
            "success".to_string(),
            SchemaProperty::of_type("boolean"),
        )])),
        ..SchemaProperty::of_type("object")
    }
}
