use super::forwarding::{MessageBuilder, ParsedResponse, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use dnsdiff_application::ports::{DnsTransport, RawResponse};
use dnsdiff_domain::{DnsQuery, DomainError};
use std::time::{Duration, Instant};
use tracing::debug;

/// Speaks DNS directly to one server per query: UDP first, TCP when the
/// UDP answer comes back truncated.
#[derive(Debug, Default, Clone, Copy)]
pub struct WireDnsClient;

impl WireDnsClient {
    pub fn new() -> Self {
        Self
    }

    async fn send_and_parse(
        transport: &Transport,
        query_bytes: &[u8],
        query_id: u16,
        timeout: Duration,
    ) -> Result<ParsedResponse, DomainError> {
        let response = transport.send(query_bytes, timeout).await?;
        let parsed = ResponseParser::parse_reply(&response.bytes, query_id)?;
        debug!(
            protocol = response.protocol_used,
            id = query_id,
            truncated = parsed.truncated,
            "Reply accepted"
        );
        Ok(parsed)
    }
}

#[async_trait]
impl DnsTransport for WireDnsClient {
    async fn exchange(
        &self,
        query: &DnsQuery,
        timeout: Duration,
    ) -> Result<RawResponse, DomainError> {
        let start = Instant::now();
        let (query_id, query_bytes) = MessageBuilder::build_query(&query.hostname, query.kind)?;

        let udp = Transport::udp(query.server);
        let parsed = Self::send_and_parse(&udp, &query_bytes, query_id, timeout).await?;

        if !parsed.truncated {
            return Ok(parsed.response);
        }

        debug!(
            server = %query.server,
            hostname = %query.hostname,
            kind = %query.kind,
            "Response truncated (TC bit), retrying via TCP"
        );

        let remaining = timeout.saturating_sub(start.elapsed());
        if remaining.is_zero() {
            return Err(DomainError::TransportTimeout {
                server: query.server.to_string(),
            });
        }

        let tcp = Transport::tcp(query.server);
        let parsed = Self::send_and_parse(&tcp, &query_bytes, query_id, remaining).await?;
        Ok(parsed.response)
    }
}
