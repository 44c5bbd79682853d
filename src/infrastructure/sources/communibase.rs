use std::{fmt, time::Duration};

use async_trait::async_trait;

use super::error::{map_reqwest, map_status};
use crate::domain::entity_type::{EntityTypeDescriptor, EntityTypeSource};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::swagger::ServiceUrl;

pub const API_KEY_HEADER: &str = "x-api-key";
const ENTITY_TYPE_ENDPOINT: &str = "EntityType.json/crud/";

/// Reads entity types from the Communibase REST API.
#[derive(Clone)]
pub struct CommunibaseEntityTypeSource {
    client: reqwest::Client,
    api_key: String,
    service_url: ServiceUrl,
}

impl CommunibaseEntityTypeSource {
    pub fn new(
        api_key: impl Into<String>,
        service_url: ServiceUrl,
        timeout: Duration,
    ) -> DomainResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(DomainError::Validation("api key cannot be empty".into()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cbswagger/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(map_reqwest)?;

        Ok(Self {
            client,
            api_key,
            service_url,
        })
    }
}

impl fmt::Debug for CommunibaseEntityTypeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommunibaseEntityTypeSource")
            .field("service_url", &self.service_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl EntityTypeSource for CommunibaseEntityTypeSource {
    async fn fetch_all(&self) -> DomainResult<Vec<EntityTypeDescriptor>> {
        let url = self.service_url.endpoint(ENTITY_TYPE_ENDPOINT)?;
        tracing::debug!(%url, "fetching entity types");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(map_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "entity type request failed");
            return Err(map_status(status, &body));
        }

        response
            .json::<Vec<EntityTypeDescriptor>>()
            .await
            .map_err(map_reqwest)
    }
}
