//! Recovers the IPv4 address carried in the leading labels of a query name.
//!
//! `203.0.113.7.visibleip.com.` splits into
//! `["203", "0", "113", "7", "visibleip", "com", ""]`; the first four labels
//! are joined back with `.` and handed to the standard dotted-decimal parser,
//! so octet bounds and leading-zero handling are whatever `Ipv4Addr` accepts.

use crate::errors::DecodeError;
use std::net::Ipv4Addr;

/// Four address octets plus at least one suffix label.
pub const MIN_LABELS: usize = 5;

pub fn decode_embedded_address(name: &str) -> Result<Ipv4Addr, DecodeError> {
    let labels: Vec<&str> = name.split('.').collect();
    if labels.len() < MIN_LABELS {
        return Err(DecodeError::TooFewLabels {
            labels: labels.len(),
        });
    }

    let candidate = labels[..4].join(".");
    candidate
        .parse::<Ipv4Addr>()
        .map_err(|_| DecodeError::InvalidAddress(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_count_includes_trailing_root() {
        // "1.2.3.4." has five split parts but only four real labels
        assert_eq!(
            decode_embedded_address("1.2.3.4."),
            Ok(Ipv4Addr::new(1, 2, 3, 4))
        );
        assert_eq!(
            decode_embedded_address("1.2.3.4"),
            Err(DecodeError::TooFewLabels { labels: 4 })
        );
    }
}
