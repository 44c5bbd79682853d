use crate::domain::entity_type::entity::EntityTypeDescriptor;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Supplies the entity-type metadata a document is generated from.
#[async_trait]
pub trait EntityTypeSource: Send + Sync {
    async fn fetch_all(&self) -> DomainResult<Vec<EntityTypeDescriptor>>;
}
