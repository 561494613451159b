use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use visibleip_dns_domain::CliOverrides;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "visibleip-dns")]
#[command(version)]
#[command(about = "Synthetic DNS responder for names that embed an IPv4 address")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address; repeat to listen on several
    #[arg(short = 'b', long = "bind", value_name = "ADDR")]
    bind: Vec<String>,

    /// Domain suffix under which addresses are embedded
    #[arg(short = 's', long)]
    suffix: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_addresses: cli.bind,
        suffix: cli.suffix,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting visibleip-dns v{}", env!("CARGO_PKG_VERSION"));

    let shutdown = CancellationToken::new();
    tokio::spawn(wait_for_shutdown_signal(shutdown.clone()));

    server::start_dns_server(&config, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn wait_for_shutdown_signal(shutdown: CancellationToken) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    info!("Shutdown signal received");
    shutdown.cancel();
}
