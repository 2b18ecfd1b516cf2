use async_trait::async_trait;
use dnsdiff_domain::{DnsQuery, DomainError};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use std::time::Duration;

/// A decoded response, as seen by the delegation resolver.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub rcode: ResponseCode,
    pub authoritative: bool,
    pub answers: Vec<Record>,
    /// Records from the AUTHORITY section (NS referrals, SOA for NODATA).
    pub authority: Vec<Record>,
    /// Records from the ADDITIONAL section (glue).
    pub additionals: Vec<Record>,
}

impl RawResponse {
    pub fn new(rcode: ResponseCode, authoritative: bool) -> Self {
        Self {
            rcode,
            authoritative,
            answers: vec![],
            authority: vec![],
            additionals: vec![],
        }
    }

    pub fn status(&self) -> &'static str {
        rcode_to_status(self.rcode)
    }
}

pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
    match rcode {
        ResponseCode::NoError => "NOERROR",
        ResponseCode::NXDomain => "NXDOMAIN",
        ResponseCode::ServFail => "SERVFAIL",
        ResponseCode::Refused => "REFUSED",
        ResponseCode::NotImp => "NOTIMP",
        ResponseCode::FormErr => "FORMERR",
        _ => "UNKNOWN",
    }
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends one query to `query.server` and waits at most `timeout` for the
    /// decoded response. Never retries.
    async fn exchange(&self, query: &DnsQuery, timeout: Duration)
        -> Result<RawResponse, DomainError>;
}
