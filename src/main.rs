use anyhow::Result;
use cbswagger::config::AppConfig;
use cbswagger::presentation::cli::{self, Cli};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let args = Cli::parse();
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::load(args.into())?;

    if let Some(path) = cli::execute(&config).await? {
        println!("Created {}", path.display());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
