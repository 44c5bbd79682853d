use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use url::Url;

pub const DEFAULT_SERVICE_URL: &str = "https://api.communibase.nl/0.1/";

/// Base URL of a Communibase API, e.g. `https://api.communibase.nl/0.1/`.
/// Always absolute http(s) with a host and a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrl(Url);

impl ServiceUrl {
    pub fn parse(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();
        let mut url = Url::parse(trimmed)
            .map_err(|err| DomainError::Validation(format!("invalid service url '{trimmed}': {err}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::Validation(format!(
                "service url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(DomainError::Validation(format!(
                "service url '{trimmed}' has no host"
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Host name plus an explicit port when one is given.
    pub fn host(&self) -> String {
        let host = self.0.host_str().unwrap_or_default();
        match self.0.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    pub fn base_path(&self) -> &str {
        self.0.path()
    }

    /// API version: the URL path with every `/` removed.
    pub fn version(&self) -> String {
        self.0.path().replace('/', "")
    }

    /// Resolve an endpoint relative to the service root.
    pub fn endpoint(&self, relative: &str) -> DomainResult<Url> {
        self.0
            .join(relative)
            .map_err(|err| DomainError::Validation(format!("invalid endpoint '{relative}': {err}")))
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
