use anyhow::{Context, Result};
use clap::Parser;
use persondir::{
    config::{Cli, Settings, DEFAULT_LOG_FILTER},
    diagnostics::FileErrorSink,
    fetch, process, session,
};
use reqwest::Client;
use std::io;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging (stderr; stdout belongs to the prompt) ─────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // ─── 2) config + diagnostic sink ─────────────────────────────────
    let cli = Cli::parse();
    let settings = Settings::from_env();
    let mut sink = FileErrorSink::open(&settings.error_log)?;
    info!(error_log = %sink.path().display(), "startup");

    println!("Running main with URL = {}...", cli.url);

    // ─── 3) download ─────────────────────────────────────────────────
    let client = Client::new();
    let content = match fetch::download_text(&client, &cli.url).await {
        Ok(content) => content,
        Err(e) => {
            error!("download failed: {:#}", e);
            println!("Failed to download data: {:#}", e);
            sink.finish();
            return Ok(());
        }
    };

    // ─── 4) parse ────────────────────────────────────────────────────
    let directory = process::process(&content, &mut sink);
    drop(content);
    info!(rejected = sink.recorded(), "diagnostics written");
    sink.finish();

    // ─── 5) interactive lookups on the blocking pool ─────────────────
    tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let stdout = io::stdout();
        session::run(&directory, stdin.lock(), stdout.lock())
    })
    .await
    .context("interactive session panicked")??;

    info!("all done");
    Ok(())
}
