//! visibleip-dns Domain Layer
pub mod config;
pub mod dns_question;
pub mod dns_record;
pub mod embedded_address;
pub mod errors;
pub mod synthesized_answer;

pub use config::{CliOverrides, Config, ConfigError, LogFormat, SynthesisConfig};
pub use dns_question::DnsQuestion;
pub use dns_record::RecordType;
pub use embedded_address::decode_embedded_address;
pub use errors::DecodeError;
pub use synthesized_answer::SynthesizedAnswer;
