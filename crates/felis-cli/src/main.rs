use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod snapshot;
mod store;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("felis error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = felis_config::FelisConfig::load_with_dotenv()?;
    let mut ctx = context::AppContext::init(&config).await?;

    let result = commands::dispatch(cli.command, &mut ctx, &flags).await;

    // Persist whatever the catalog holds so the next short-lived process
    // can serve from disk instead of refetching inside the TTL window.
    if let Err(error) = ctx.persist_snapshot().await {
        tracing::warn!(%error, "failed to persist breed snapshot");
    }

    result
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FELIS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
