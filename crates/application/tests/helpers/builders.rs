use visibleip_dns_application::SynthesizeAnswersUseCase;
use visibleip_dns_domain::{DnsQuestion, RecordType, SynthesisConfig};

pub struct QuestionBuilder {
    name: String,
    record_type: RecordType,
}

impl QuestionBuilder {
    pub fn new() -> Self {
        Self {
            name: "203.0.113.7.visibleip.com.".to_string(),
            record_type: RecordType::A,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn build(self) -> DnsQuestion {
        DnsQuestion::new(self.name, self.record_type)
    }
}

impl Default for QuestionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn a(name: &str) -> DnsQuestion {
    QuestionBuilder::new().name(name).build()
}

pub fn aaaa(name: &str) -> DnsQuestion {
    QuestionBuilder::new()
        .name(name)
        .record_type(RecordType::AAAA)
        .build()
}

pub fn questions(items: &[(&str, RecordType)]) -> Vec<DnsQuestion> {
    items
        .iter()
        .map(|(name, rt)| QuestionBuilder::new().name(name).record_type(*rt).build())
        .collect()
}

pub fn use_case_for_suffix(suffix: &str) -> SynthesizeAnswersUseCase {
    SynthesizeAnswersUseCase::new(&SynthesisConfig {
        suffix: suffix.to_string(),
        ttl: 0,
    })
}
