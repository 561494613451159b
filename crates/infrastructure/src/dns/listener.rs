//! UDP listener owning one bound socket.
//!
//! ```text
//! recv_from() ──► spawn ──► SyntheticAnswerHandler::handle_datagram() ──► send_to()
//! ```
//!
//! Each datagram is handled on its own task so a slow send never stalls the
//! receive loop.

use super::errors::ListenerError;
use super::handler::SyntheticAnswerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Large enough for EDNS-sized queries.
pub const MAX_DATAGRAM_SIZE: usize = 4096;

/// Pause after a receive error that may repeat on every call, such as EBADF.
const RECV_ERROR_BACKOFF: Duration = Duration::from_millis(100);

pub struct UdpListener {
    socket: Arc<UdpSocket>,
    local_addr: SocketAddr,
}

impl UdpListener {
    /// Binds `addr`. Must be called from within a tokio runtime.
    pub fn bind(addr: SocketAddr) -> Result<Self, ListenerError> {
        let socket =
            create_udp_socket(addr).map_err(|source| ListenerError::Bind { addr, source })?;
        let socket = UdpSocket::from_std(socket)?;
        let local_addr = socket.local_addr()?;

        Ok(Self {
            socket: Arc::new(socket),
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serves until `shutdown` is cancelled. Receive and send errors are logged, never fatal.
    pub async fn run(self, handler: Arc<SyntheticAnswerHandler>, shutdown: CancellationToken) {
        let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];
        info!(bind_address = %self.local_addr, suffix = %handler.suffix(), "DNS listener ready");

        loop {
            let received = tokio::select! {
                _ = shutdown.cancelled() => {
                    info!(bind_address = %self.local_addr, "DNS listener shutting down");
                    break;
                }
                received = self.socket.recv_from(&mut recv_buf) => received,
            };

            match received {
                Ok((n, src)) => {
                    let datagram: Arc<[u8]> = Arc::from(&recv_buf[..n]);
                    let handler = Arc::clone(&handler);
                    let socket = Arc::clone(&self.socket);

                    tokio::spawn(async move {
                        let Some(reply) = handler.handle_datagram(&datagram, src) else {
                            return;
                        };
                        match socket.send_to(&reply, src).await {
                            Ok(sent) => debug!(client = %src, bytes = sent, "Reply sent"),
                            Err(e) => warn!(client = %src, error = %e, "Failed to send reply"),
                        }
                    });
                }
                Err(e) => {
                    let Some(backoff) = recv_error_backoff(&e) else {
                        debug!(bind_address = %self.local_addr, error = %e, "Transient recv error");
                        continue;
                    };
                    error!(bind_address = %self.local_addr, error = %e, "UDP recv error");
                    tokio::select! {
                        _ = shutdown.cancelled() => {
                            info!(bind_address = %self.local_addr, "DNS listener shutting down");
                            break;
                        }
                        _ = tokio::time::sleep(backoff) => {}
                    }
                }
            }
        }
    }
}

/// `None` for errors that clear on the next call: interrupted syscalls and the
/// ICMP port-unreachable some platforms report for an earlier reply.
fn recv_error_backoff(error: &io::Error) -> Option<Duration> {
    match error.kind() {
        io::ErrorKind::Interrupted | io::ErrorKind::ConnectionReset => None,
        _ => Some(RECV_ERROR_BACKOFF),
    }
}

fn create_udp_socket(addr: SocketAddr) -> io::Result<std::net::UdpSocket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    // Separate v4 and v6 listeners may share a port.
    if addr.is_ipv6() {
        socket.set_only_v6(true)?;
    }
    socket.bind(&addr.into())?;
    socket.set_nonblocking(true)?;
    Ok(socket.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_recv_errors_retry_immediately() {
        for kind in [io::ErrorKind::Interrupted, io::ErrorKind::ConnectionReset] {
            assert_eq!(recv_error_backoff(&io::Error::from(kind)), None);
        }
    }

    #[test]
    fn test_persistent_recv_errors_back_off() {
        let bad_fd = io::Error::from_raw_os_error(9);

        assert_eq!(recv_error_backoff(&bad_fd), Some(RECV_ERROR_BACKOFF));
        assert_eq!(
            recv_error_backoff(&io::Error::from(io::ErrorKind::Other)),
            Some(RECV_ERROR_BACKOFF)
        );
    }
}
