//! visibleip-dns Infrastructure Layer
pub mod dns;
