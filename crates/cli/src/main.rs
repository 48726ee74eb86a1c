use batchdns_domain::CliOverrides;
use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "batchdns")]
#[command(version)]
#[command(about = "Chained DNS resolution worker for queued lookup jobs")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Upstream DNS server, host:port
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Lookup mode ("A" or "CNAME")
    #[arg(short = 'm', long)]
    mode: Option<String>,

    /// Concurrent resolutions per batch
    #[arg(long)]
    concurrency: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        upstream_server: cli.upstream.clone(),
        lookup_mode: cli.mode.clone(),
        concurrency: cli.concurrency,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting batchdns worker v{}", env!("CARGO_PKG_VERSION"));
    info!(
        upstream = %config.dns.upstream_server,
        mode = %config.dns.lookup_mode,
        "Consuming jobs from stdin"
    );

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received ctrl-c, shutting down");
            signal_token.cancel();
        }
    });

    let worker = Arc::new(di::build_worker(&config)?.with_cancellation(shutdown));
    worker.start().await?;

    info!("Worker shutdown complete");
    Ok(())
}
