use std::sync::Arc;
use tracing::debug;
use visibleip_dns_domain::config::synthesis::{name_ends_with_suffix, normalize_suffix};
use visibleip_dns_domain::{
    decode_embedded_address, DnsQuestion, RecordType, SynthesisConfig, SynthesizedAnswer,
};

/// Turns the questions of one request into A records for the names that embed an address.
///
/// A question is answered only when it asks for an A record, its name ends with
/// the configured suffix, and the leading labels decode to an IPv4 address.
/// Anything else is left unanswered: no error surfaces to the client, so the
/// reply does not reveal which name shapes are accepted.
#[derive(Debug, Clone)]
pub struct SynthesizeAnswersUseCase {
    suffix: Arc<str>,
    ttl: u32,
}

impl SynthesizeAnswersUseCase {
    pub fn new(config: &SynthesisConfig) -> Self {
        Self {
            suffix: normalize_suffix(&config.suffix).into(),
            ttl: config.ttl,
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Answers in question order; at most one per question.
    pub fn execute(&self, questions: &[DnsQuestion]) -> Vec<SynthesizedAnswer> {
        questions
            .iter()
            .enumerate()
            .filter_map(|(index, question)| self.answer(index, question))
            .collect()
    }

    pub fn answer(&self, index: usize, question: &DnsQuestion) -> Option<SynthesizedAnswer> {
        if question.record_type != RecordType::A {
            debug!(
                name = %question.name,
                record_type = %question.record_type,
                "Skipping non-A question"
            );
            return None;
        }

        if !name_ends_with_suffix(&question.name, &self.suffix) {
            debug!(name = %question.name, suffix = %self.suffix, "Skipping name outside suffix");
            return None;
        }

        match decode_embedded_address(&question.name) {
            Ok(address) => Some(SynthesizedAnswer::new(
                index,
                Arc::clone(&question.name),
                address,
                self.ttl,
            )),
            Err(e) => {
                debug!(name = %question.name, error = %e, "No embedded address");
                None
            }
        }
    }
}
