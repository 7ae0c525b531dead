use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use gs_ai::{GeminiClient, IdeaGateway};
use gs_config::GenScriptConfig;
use gs_db::IdeaDb;
use gs_server::{AppState, IdeaService, router};

mod cli;
mod config_warnings;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("genscript error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = GenScriptConfig::load_with_dotenv(cli.config.as_deref())
        .context("failed to load genscript configuration")?;
    cli.apply(&mut config)
        .context("invalid command-line override")?;
    config_warnings::warn_unconfigured(&config);

    let store = IdeaDb::open(&config.database)
        .await
        .context("failed to open idea store")?;
    let model = GeminiClient::new(&config.gemini).context("failed to build Gemini client")?;
    let gateway =
        IdeaGateway::new(Arc::new(model)).with_idea_count(config.generation.idea_count);
    let service = IdeaService::new(gateway, Arc::new(store))
        .with_list_limit(config.generation.list_limit);

    let app = router(AppState::new(service));

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, model = %config.gemini.model, "genscript listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GENSCRIPT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
