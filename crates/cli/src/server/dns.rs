use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use visibleip_dns_application::SynthesizeAnswersUseCase;
use visibleip_dns_domain::Config;
use visibleip_dns_infrastructure::dns::{DnsServer, SyntheticAnswerHandler};

/// Runs one listener per configured address until `shutdown` fires.
/// Fails without serving anything if any address cannot be bound.
pub async fn start_dns_server(config: &Config, shutdown: CancellationToken) -> anyhow::Result<()> {
    let use_case = Arc::new(SynthesizeAnswersUseCase::new(&config.synthesis));
    let handler = SyntheticAnswerHandler::new(use_case);

    let bind_addrs: Vec<SocketAddr> = config
        .bind_ips()
        .into_iter()
        .map(|ip| SocketAddr::new(ip, config.server.dns_port))
        .collect();

    info!(
        bind_addresses = ?bind_addrs,
        suffix = %config.synthesis.suffix,
        ttl = config.synthesis.ttl,
        "Starting DNS server"
    );

    let server = DnsServer::new(handler)
        .with_cancellation(shutdown)
        .start(&bind_addrs)
        .await?;

    server.wait().await;
    Ok(())
}
