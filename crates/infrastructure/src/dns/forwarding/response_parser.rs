use super::record_type_map::RecordTypeMapper;
use dnsdiff_application::ports::RawResponse;
use dnsdiff_domain::DomainError;
use hickory_proto::op::{Message, MessageType};
use tracing::debug;

/// A decoded reply plus the header bits the client still needs.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,
    pub truncated: bool,
    pub response: RawResponse,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Message is not a response".to_string(),
            ));
        }

        let response = RawResponse {
            rcode: message.response_code(),
            authoritative: message.authoritative(),
            answers: message.answers().to_vec(),
            authority: message.name_servers().to_vec(),
            additionals: message.additionals().to_vec(),
        };

        debug!(
            id = message.id(),
            kind = ?message.queries().first().and_then(|q| RecordTypeMapper::from_hickory(q.query_type())),
            rcode = ?response.rcode,
            authoritative = response.authoritative,
            truncated = message.truncated(),
            answers = response.answers.len(),
            authority = response.authority.len(),
            additionals = response.additionals.len(),
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            id: message.id(),
            truncated: message.truncated(),
            response,
        })
    }

    /// Parses a reply and checks it answers the query with `expected_id`.
    pub fn parse_reply(response_bytes: &[u8], expected_id: u16) -> Result<ParsedResponse, DomainError> {
        let parsed = Self::parse(response_bytes)?;
        if parsed.id != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                parsed.id, expected_id
            )));
        }
        Ok(parsed)
    }
}
