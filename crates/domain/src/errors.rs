use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Name has {labels} labels, an embedded address needs at least 5")]
    TooFewLabels { labels: usize },

    #[error("Leading labels do not form an IPv4 address: {0}")]
    InvalidAddress(String),
}
