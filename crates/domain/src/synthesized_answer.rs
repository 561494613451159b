use std::net::Ipv4Addr;
use std::sync::Arc;

/// An A record built from the address embedded in a question's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAnswer {
    /// Index of the question this answers, within the request.
    pub question_index: usize,
    pub name: Arc<str>,
    pub address: Ipv4Addr,
    pub ttl: u32,
}

impl SynthesizedAnswer {
    pub fn new(question_index: usize, name: Arc<str>, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            question_index,
            name,
            address,
            ttl,
        }
    }
}
