//! DNS message handling for synthesized A records.
//!
//! The handler is a plain value shared by every listener. It never fails:
//! any question it chooses not to answer is simply left out of an otherwise
//! successful, authoritative reply.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Header, Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};
use visibleip_dns_application::SynthesizeAnswersUseCase;
use visibleip_dns_domain::DnsQuestion;

#[derive(Clone)]
pub struct SyntheticAnswerHandler {
    use_case: Arc<SynthesizeAnswersUseCase>,
}

impl SyntheticAnswerHandler {
    pub fn new(use_case: Arc<SynthesizeAnswersUseCase>) -> Self {
        Self { use_case }
    }

    pub fn suffix(&self) -> &str {
        self.use_case.suffix()
    }

    /// Builds the reply for a decoded request.
    ///
    /// Id, opcode, RD and CD come from the request; QR and AA are set and the
    /// question section is echoed. QUERY and NOTIFY are answered alike; any
    /// other opcode gets NOTIMP.
    pub fn handle(&self, request: &Message) -> Message {
        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);

        let mut response = Message::new();
        response.set_header(header);
        for query in request.queries() {
            response.add_query(query.clone());
        }

        if !matches!(request.op_code(), OpCode::Query | OpCode::Notify) {
            debug!(op_code = ?request.op_code(), "Unsupported opcode");
            response.set_response_code(ResponseCode::NotImp);
            return response;
        }

        let questions: Vec<DnsQuestion> = request
            .queries()
            .iter()
            .map(|query| {
                DnsQuestion::new(
                    query.name().to_ascii(),
                    RecordTypeMapper::from_hickory(query.query_type()),
                )
            })
            .collect();

        for answer in self.use_case.execute(&questions) {
            // Reuse the wire name so the answer owner matches the question byte for byte.
            let name = request.queries()[answer.question_index].name().clone();
            response.add_answer(Record::from_rdata(
                name,
                answer.ttl,
                RData::A(A(answer.address)),
            ));
        }

        response
    }

    /// Decodes a datagram, handles it and encodes the reply.
    ///
    /// Returns `None` when nothing should be sent back: the datagram is not a
    /// DNS message, it is itself a response, or the reply failed to encode.
    pub fn handle_datagram(&self, datagram: &[u8], src: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(datagram) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %src, error = %e, "Dropping malformed datagram");
                return None;
            }
        };

        if request.message_type() == MessageType::Response {
            debug!(client = %src, id = request.id(), "Ignoring inbound response");
            return None;
        }

        let response = self.handle(&request);
        debug!(
            client = %src,
            id = request.id(),
            questions = request.queries().len(),
            answers = response.answers().len(),
            "Sending response"
        );

        match response.to_vec() {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(client = %src, error = %e, "Failed to encode response");
                None
            }
        }
    }
}
