pub mod errors;
pub mod handler;
pub mod listener;
pub mod record_type_map;
pub mod server;

pub use errors::ListenerError;
pub use handler::SyntheticAnswerHandler;
pub use listener::UdpListener;
pub use record_type_map::RecordTypeMapper;
pub use server::{DnsServer, RunningDnsServer};
