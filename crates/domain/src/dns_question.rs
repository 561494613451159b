use super::RecordType;
use std::sync::Arc;

/// One question from an inbound message; `name` keeps the received case and trailing dot.
#[derive(Debug, Clone)]
pub struct DnsQuestion {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuestion {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}
