use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RData, RecordType};
use std::net::Ipv4Addr;
use std::sync::Arc;
use visibleip_dns_application::SynthesizeAnswersUseCase;
use visibleip_dns_domain::SynthesisConfig;
use visibleip_dns_infrastructure::dns::SyntheticAnswerHandler;

pub struct QueryMessageBuilder {
    id: u16,
    op_code: OpCode,
    message_type: MessageType,
    questions: Vec<(String, RecordType)>,
}

impl QueryMessageBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x4242,
            op_code: OpCode::Query,
            message_type: MessageType::Query,
            questions: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn op_code(mut self, op_code: OpCode) -> Self {
        self.op_code = op_code;
        self
    }

    pub fn message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.questions.push((name.to_string(), record_type));
        self
    }

    pub fn build(self) -> Message {
        let mut message = Message::new();
        message.set_id(self.id);
        message.set_message_type(self.message_type);
        message.set_op_code(self.op_code);
        message.set_recursion_desired(true);
        for (name, record_type) in self.questions {
            message.add_query(Query::query(Name::from_ascii(&name).unwrap(), record_type));
        }
        message
    }
}

impl Default for QueryMessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn query_message(questions: &[(&str, RecordType)]) -> Message {
    questions
        .iter()
        .fold(QueryMessageBuilder::new(), |builder, (name, rt)| {
            builder.question(name, *rt)
        })
        .build()
}

pub fn handler_for_suffix(suffix: &str) -> SyntheticAnswerHandler {
    let use_case = SynthesizeAnswersUseCase::new(&SynthesisConfig {
        suffix: suffix.to_string(),
        ttl: 0,
    });
    SyntheticAnswerHandler::new(Arc::new(use_case))
}

pub fn a_addresses(message: &Message) -> Vec<Ipv4Addr> {
    message
        .answers()
        .iter()
        .filter_map(|record| match record.data() {
            Some(RData::A(a)) => Some(a.0),
            _ => None,
        })
        .collect()
}
