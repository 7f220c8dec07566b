//! Postcraft command-line entry point.

use anyhow::Result;
use clap::Parser;
use postcraft::cli::{Cli, Commands, handle_fallback, handle_suggest, handle_trending};
use postcraft::{Credentials, PostcraftConfig, build_service};
use postcraft_core::{init_observability, shutdown_observability};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    init_observability("postcraft", 60).map_err(anyhow::Error::msg)?;

    let config = PostcraftConfig::load(cli.config.as_deref())?;
    debug!(?config, "Configuration loaded");

    let output = match cli.command {
        Commands::Suggest {
            content,
            platform,
            provider,
            industry,
            audience,
        } => {
            let service = build_service(&config, &Credentials::from_env());
            let provider = provider.unwrap_or(*config.default_provider());
            info!(%platform, %provider, "Generating suggestions");
            handle_suggest(&service, content, platform, provider, industry, audience).await?
        }
        Commands::Trending {
            platform,
            category,
            provider,
        } => {
            let service = build_service(&config, &Credentials::from_env());
            let provider = provider.unwrap_or(*config.default_provider());
            info!(%platform, %provider, "Fetching trending hashtags");
            handle_trending(&service, platform, category, provider).await?
        }
        Commands::Fallback { content, platform } => handle_fallback(&content, platform)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    shutdown_observability();
    Ok(())
}
