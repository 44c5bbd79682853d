// tests/support/mocks/source.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use cbswagger::domain::entity_type::{EntityTypeDescriptor, EntityTypeSource};
use cbswagger::domain::errors::{DomainError, DomainResult};

/// Serves a fixed list of entity types and counts how often it was asked.
pub struct InMemorySource {
    entities: Vec<EntityTypeDescriptor>,
    calls: AtomicUsize,
}

impl InMemorySource {
    pub fn new(entities: Vec<EntityTypeDescriptor>) -> Self {
        Self {
            entities,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntityTypeSource for InMemorySource {
    async fn fetch_all(&self) -> DomainResult<Vec<EntityTypeDescriptor>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entities.clone())
    }
}

pub struct FailingSource;

#[async_trait]
impl EntityTypeSource for FailingSource {
    async fn fetch_all(&self) -> DomainResult<Vec<EntityTypeDescriptor>> {
        Err(DomainError::Unauthorized("401 Unauthorized: Invalid API key".into()))
    }
}
