use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::application::services::entity_assembler::EntityAssembler;
use crate::domain::entity_type::{EntityTypeDescriptor, EntityTypeSource};
use crate::domain::swagger::{Document, ServiceUrl};

/// Fetches entity types from a source and assembles them into a document.
pub struct SwaggerGenerator {
    source: Arc<dyn EntityTypeSource>,
    assembler: EntityAssembler,
    service_url: ServiceUrl,
    include_entity_type_meta: bool,
}

impl SwaggerGenerator {
    pub fn new(
        source: Arc<dyn EntityTypeSource>,
        assembler: EntityAssembler,
        service_url: ServiceUrl,
    ) -> Self {
        Self {
            source,
            assembler,
            service_url,
            include_entity_type_meta: true,
        }
    }

    /// Whether the `EntityType` resource itself is documented.
    pub fn with_entity_type_meta(mut self, include: bool) -> Self {
        self.include_entity_type_meta = include;
        self
    }

    pub async fn generate(&self) -> ApplicationResult<Document> {
        let fetched = self.source.fetch_all().await?;
        tracing::info!(count = fetched.len(), "fetched entity types");

        let entities = self.with_meta(fetched);
        let document = self.assembler.build_document(&entities, &self.service_url);
        tracing::info!(
            definitions = document.definitions.len(),
            paths = document.paths.len(),
            "assembled swagger document"
        );
        Ok(document)
    }

    fn with_meta(&self, fetched: Vec<EntityTypeDescriptor>) -> Vec<EntityTypeDescriptor> {
        if !self.include_entity_type_meta {
            return fetched;
        }
        std::iter::once(EntityTypeDescriptor::entity_type_meta())
            .chain(fetched)
            .collect()
    }
}
