// src/presentation/cli.rs
use crate::application::services::{AttributeMapper, EntityAssembler, SwaggerGenerator};
use crate::config::{AppConfig, ConfigArgs};
use crate::domain::entity_type::EntityTypeSource;
use crate::infrastructure::output::{self, DEFAULT_OUTPUT_FILE};
use crate::infrastructure::sources::CommunibaseEntityTypeSource;
use anyhow::{Context, Result};
use clap::Parser;
use std::{path::PathBuf, sync::Arc};

#[derive(Debug, Parser)]
#[command(name = "cbswagger")]
#[command(about = "Generate a Swagger 2.0 document from Communibase entity types")]
pub struct Cli {
    /// Communibase API key (falls back to COMMUNIBASE_KEY)
    pub api_key: Option<String>,

    /// Output file name, `-` for stdout
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Communibase service url, e.g. https://api.communibase.nl/0.1/
    #[arg(long)]
    pub service_url: Option<String>,

    /// How ObjectId attributes are rendered (reference, inline)
    #[arg(long)]
    pub object_id_mode: Option<String>,

    /// Leave the EntityType resource itself out of the document
    #[arg(long)]
    pub no_entity_type_meta: bool,

    /// info.title of the generated document
    #[arg(long)]
    pub title: Option<String>,

    /// info.description of the generated document
    #[arg(long)]
    pub description: Option<String>,

    /// Request timeout for the entity type fetch
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl From<Cli> for ConfigArgs {
    fn from(cli: Cli) -> Self {
        Self {
            api_key: cli.api_key,
            output: Some(cli.output),
            service_url: cli.service_url,
            object_id_mode: cli.object_id_mode,
            no_entity_type_meta: cli.no_entity_type_meta,
            title: cli.title,
            description: cli.description,
            timeout_secs: cli.timeout_secs,
        }
    }
}

/// Build the generator described by `config` on top of any entity type source.
pub fn generator(config: &AppConfig, source: Arc<dyn EntityTypeSource>) -> SwaggerGenerator {
    let assembler = EntityAssembler::new(
        AttributeMapper::new(config.object_id_mode()),
        config.metadata().clone(),
    );
    SwaggerGenerator::new(source, assembler, config.service_url().clone())
        .with_entity_type_meta(config.include_entity_type_meta())
}

/// Fetch, assemble and write. Returns the created file, if any.
pub async fn execute(config: &AppConfig) -> Result<Option<PathBuf>> {
    let source = CommunibaseEntityTypeSource::new(
        config.api_key(),
        config.service_url().clone(),
        config.request_timeout(),
    )?;
    tracing::info!(service_url = %config.service_url(), "generating swagger document");

    let document = generator(config, Arc::new(source))
        .generate()
        .await
        .context("failed to generate swagger document")?;

    let written = output::write_document(&document, config.output())
        .with_context(|| format!("failed to write {}", config.output()))?;
    if let Some(path) = &written {
        tracing::info!(path = %path.display(), "swagger document written");
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::ObjectIdMode;
    use crate::infrastructure::output::OutputTarget;
    use std::time::Duration;

    fn config(args: &[&str]) -> AppConfig {
        let cli = Cli::try_parse_from(std::iter::once("cbswagger").chain(args.iter().copied())).unwrap();
        AppConfig::from_args(cli.into(), |_| None).unwrap()
    }

    #[test]
    fn positional_key_and_default_output() {
        let config = config(&["secret"]);
        assert_eq!(config.api_key(), "secret");
        assert_eq!(config.output(), &OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT_FILE)));
    }

    #[test]
    fn flags_reach_the_config() {
        let config = config(&[
            "secret",
            "-",
            "--service-url",
            "http://localhost:8080/0.2/",
            "--object-id-mode",
            "inline",
            "--no-entity-type-meta",
            "--timeout-secs",
            "7",
        ]);
        assert_eq!(config.output(), &OutputTarget::Stdout);
        assert_eq!(config.service_url().as_str(), "http://localhost:8080/0.2/");
        assert_eq!(config.object_id_mode(), ObjectIdMode::Inline);
        assert!(!config.include_entity_type_meta());
        assert_eq!(config.request_timeout(), Duration::from_secs(7));
    }
}
