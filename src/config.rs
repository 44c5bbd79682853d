// src/config.rs
use crate::application::services::{DocumentMetadata, ObjectIdMode};
use crate::domain::swagger::ServiceUrl;
use crate::domain::swagger::service_url::DEFAULT_SERVICE_URL;
use crate::infrastructure::output::{DEFAULT_OUTPUT_FILE, OutputTarget};
use std::{env, time::Duration};
use thiserror::Error;

pub const API_KEY_VAR: &str = "COMMUNIBASE_KEY";
pub const SERVICE_URL_VAR: &str = "COMMUNIBASE_SERVICE_URL";
pub const OBJECT_ID_MODE_VAR: &str = "CBSWAGGER_OBJECT_ID_MODE";
pub const REQUEST_TIMEOUT_VAR: &str = "CBSWAGGER_REQUEST_TIMEOUT_SECS";

#[derive(Clone, Debug)]
pub struct AppConfig {
    api_key: String,
    service_url: ServiceUrl,
    output: OutputTarget,
    object_id_mode: ObjectIdMode,
    include_entity_type_meta: bool,
    metadata: DocumentMetadata,
    request_timeout: Duration,
}

/// Values supplied explicitly by the caller. Anything left `None` falls back
/// to the environment, then to built-in defaults.
#[derive(Clone, Debug, Default)]
pub struct ConfigArgs {
    pub api_key: Option<String>,
    pub output: Option<String>,
    pub service_url: Option<String>,
    pub object_id_mode: Option<String>,
    pub no_entity_type_meta: bool,
    pub title: Option<String>,
    pub description: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing Communibase API key (pass it as the first argument or set {0})")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_request_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Build configuration from explicit arguments, falling back to process
    /// environment variables for values not given.
    pub fn load(args: ConfigArgs) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_args(args, |key| env::var(key).ok())
    }

    /// Like [`AppConfig::load`] with an explicit variable lookup.
    pub fn from_args<F>(args: ConfigArgs, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = args
            .api_key
            .or_else(|| lookup(API_KEY_VAR))
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing(API_KEY_VAR))?;

        let service_url = args
            .service_url
            .or_else(|| lookup(SERVICE_URL_VAR))
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        let service_url =
            ServiceUrl::parse(&service_url).map_err(|err| ConfigError::Invalid(err.to_string()))?;

        let object_id_mode = match args.object_id_mode.or_else(|| lookup(OBJECT_ID_MODE_VAR)) {
            Some(value) => value
                .parse::<ObjectIdMode>()
                .map_err(|err| ConfigError::Invalid(err.to_string()))?,
            None => ObjectIdMode::default(),
        };

        let timeout_secs = match args.timeout_secs {
            Some(secs) => secs,
            None => match lookup(REQUEST_TIMEOUT_VAR) {
                Some(value) => value.trim().parse::<u64>().map_err(|_| {
                    ConfigError::Invalid(format!("{REQUEST_TIMEOUT_VAR} must be a whole number of seconds"))
                })?,
                None => default_request_timeout(),
            },
        };
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid("request timeout must be positive".into()));
        }

        let defaults = DocumentMetadata::default();
        let metadata = DocumentMetadata {
            title: args.title.unwrap_or(defaults.title),
            description: args.description.unwrap_or(defaults.description),
        };

        Ok(Self {
            api_key,
            service_url,
            output: OutputTarget::from_arg(args.output.as_deref().unwrap_or(DEFAULT_OUTPUT_FILE)),
            object_id_mode,
            include_entity_type_meta: !args.no_entity_type_meta,
            metadata,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn service_url(&self) -> &ServiceUrl {
        &self.service_url
    }

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }

    pub fn object_id_mode(&self) -> ObjectIdMode {
        self.object_id_mode
    }

    /// Whether the synthetic `EntityType` resource is prepended.
    pub fn include_entity_type_meta(&self) -> bool {
        self.include_entity_type_meta
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn with_key(key: &str) -> ConfigArgs {
        ConfigArgs {
            api_key: Some(key.into()),
            ..ConfigArgs::default()
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_apply_when_only_key_is_given() {
        let config = AppConfig::from_args(with_key("secret"), no_env).unwrap();
        assert_eq!(config.api_key(), "secret");
        assert_eq!(config.output(), &OutputTarget::File(PathBuf::from("swagger.json")));
        assert_eq!(config.service_url().as_str(), DEFAULT_SERVICE_URL);
        assert_eq!(config.object_id_mode(), ObjectIdMode::Reference);
        assert!(config.include_entity_type_meta());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn dash_output_is_stdout() {
        let args = ConfigArgs {
            output: Some("-".into()),
            ..with_key("secret")
        };
        let config = AppConfig::from_args(args, no_env).unwrap();
        assert_eq!(config.output(), &OutputTarget::Stdout);
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = AppConfig::from_args(ConfigArgs::default(), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(API_KEY_VAR)));

        let err = AppConfig::from_args(with_key("   "), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(API_KEY_VAR)));
    }

    #[test]
    fn environment_fills_gaps() {
        let env: HashMap<&str, &str> = HashMap::from([
            (API_KEY_VAR, "from-env"),
            (SERVICE_URL_VAR, "http://localhost:3000/0.2"),
            (OBJECT_ID_MODE_VAR, "inline"),
            (REQUEST_TIMEOUT_VAR, "5"),
        ]);
        let config = AppConfig::from_args(ConfigArgs::default(), |key| {
            env.get(key).map(|value| value.to_string())
        })
        .unwrap();

        assert_eq!(config.api_key(), "from-env");
        assert_eq!(config.service_url().as_str(), "http://localhost:3000/0.2/");
        assert_eq!(config.object_id_mode(), ObjectIdMode::Inline);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn arguments_take_precedence_over_environment() {
        let args = ConfigArgs {
            object_id_mode: Some("reference".into()),
            no_entity_type_meta: true,
            ..with_key("cli-key")
        };
        let config = AppConfig::from_args(args, |key| match key {
            API_KEY_VAR => Some("env-key".into()),
            OBJECT_ID_MODE_VAR => Some("inline".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.api_key(), "cli-key");
        assert_eq!(config.object_id_mode(), ObjectIdMode::Reference);
        assert!(!config.include_entity_type_meta());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let args = ConfigArgs {
            service_url: Some("nope".into()),
            ..with_key("k")
        };
        let err = AppConfig::from_args(args, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let args = ConfigArgs {
            object_id_mode: Some("shared".into()),
            ..with_key("k")
        };
        let err = AppConfig::from_args(args, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let args = ConfigArgs {
            timeout_secs: Some(0),
            ..with_key("k")
        };
        let err = AppConfig::from_args(args, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = AppConfig::from_args(ConfigArgs::default(), |key| {
            (key == API_KEY_VAR || key == REQUEST_TIMEOUT_VAR).then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn custom_info_metadata() {
        let args = ConfigArgs {
            title: Some("Acme API".into()),
            description: Some("Acme administration".into()),
            ..with_key("k")
        };
        let config = AppConfig::from_args(args, no_env).unwrap();
        assert_eq!(config.metadata().title, "Acme API");
        assert_eq!(config.metadata().description, "Acme administration");
    }
}
