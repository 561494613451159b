use std::io;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListenerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Listener task for {addr} exited before reporting readiness")]
    StartupAborted { addr: SocketAddr },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
