use super::errors::ListenerError;
use super::handler::SyntheticAnswerHandler;
use super::listener::UdpListener;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Supervises one UDP listener per bind address.
///
/// Every listener task reports its bind result before serving. `start`
/// returns only once all of them have bound, or fails with the first bind
/// error after stopping the listeners that did come up.
pub struct DnsServer {
    handler: Arc<SyntheticAnswerHandler>,
    shutdown: CancellationToken,
}

impl DnsServer {
    pub fn new(handler: SyntheticAnswerHandler) -> Self {
        Self {
            handler: Arc::new(handler),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self, bind_addrs: &[SocketAddr]) -> Result<RunningDnsServer, ListenerError> {
        let shutdown = self.shutdown.child_token();
        let mut join_set: JoinSet<()> = JoinSet::new();
        let mut pending = Vec::with_capacity(bind_addrs.len());

        for &addr in bind_addrs {
            let (ready_tx, ready_rx) = oneshot::channel::<Result<SocketAddr, ListenerError>>();
            let handler = Arc::clone(&self.handler);
            let listener_shutdown = shutdown.clone();

            join_set.spawn(async move {
                let listener = match UdpListener::bind(addr) {
                    Ok(listener) => {
                        let _ = ready_tx.send(Ok(listener.local_addr()));
                        listener
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };
                listener.run(handler, listener_shutdown).await;
            });

            pending.push((addr, ready_rx));
        }

        let mut local_addrs = Vec::with_capacity(pending.len());
        for (addr, ready_rx) in pending {
            let ready = ready_rx
                .await
                .unwrap_or(Err(ListenerError::StartupAborted { addr }));

            match ready {
                Ok(local_addr) => local_addrs.push(local_addr),
                Err(e) => {
                    error!(bind_address = %addr, error = %e, "DNS listener failed to start");
                    shutdown.cancel();
                    while join_set.join_next().await.is_some() {}
                    return Err(e);
                }
            }
        }

        info!(listeners = local_addrs.len(), "DNS server ready");

        Ok(RunningDnsServer {
            local_addrs,
            join_set,
            shutdown,
        })
    }
}

pub struct RunningDnsServer {
    local_addrs: Vec<SocketAddr>,
    join_set: JoinSet<()>,
    shutdown: CancellationToken,
}

impl RunningDnsServer {
    /// Bound addresses, in the order they were configured.
    pub fn local_addrs(&self) -> &[SocketAddr] {
        &self.local_addrs
    }

    /// Waits for every listener to exit.
    pub async fn wait(mut self) {
        while let Some(joined) = self.join_set.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "DNS listener task failed");
            }
        }
    }

    pub async fn shutdown(self) {
        self.shutdown.cancel();
        self.wait().await;
    }
}
