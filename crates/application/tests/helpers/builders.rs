#![allow(dead_code)]

use dnsdiff_application::ports::RawResponse;
use dnsdiff_domain::ResolverConfig;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::rdata::{A, AAAA, MX, NS, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

pub fn name(s: &str) -> Name {
    Name::from_str(&format!("{}.", s.trim_end_matches('.'))).unwrap()
}

pub fn addr(s: &str) -> SocketAddr {
    s.parse().unwrap()
}

pub fn a_record(owner: &str, ip: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(ip.parse::<Ipv4Addr>().unwrap())))
}

pub fn aaaa_record(owner: &str, ip: &str) -> Record {
    Record::from_rdata(
        name(owner),
        300,
        RData::AAAA(AAAA(ip.parse::<Ipv6Addr>().unwrap())),
    )
}

pub fn mx_record(owner: &str, preference: u16, exchange: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::MX(MX::new(preference, name(exchange))))
}

pub fn ns_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::NS(NS(name(target))))
}

pub fn txt_record(owner: &str, segments: &[&str]) -> Record {
    Record::from_rdata(
        name(owner),
        300,
        RData::TXT(TXT::new(segments.iter().map(|s| s.to_string()).collect())),
    )
}

/// Resolver settings suitable for tests: short timeout, near-zero backoff.
pub fn test_config() -> ResolverConfig {
    ResolverConfig {
        timeout_ms: 500,
        max_attempts: 3,
        backoff_ms: 1,
        load_balance_probes: 10,
        max_delegation_hops: 10,
        accept_recursive_answers: false,
    }
}

pub fn slow_backoff_config() -> ResolverConfig {
    ResolverConfig {
        backoff_ms: Duration::from_secs(60).as_millis() as u64,
        ..test_config()
    }
}

pub struct RawResponseBuilder {
    response: RawResponse,
}

impl RawResponseBuilder {
    pub fn authoritative() -> Self {
        Self {
            response: RawResponse::new(ResponseCode::NoError, true),
        }
    }

    pub fn non_authoritative() -> Self {
        Self {
            response: RawResponse::new(ResponseCode::NoError, false),
        }
    }

    /// Non-authoritative NOERROR with an NS referral in AUTHORITY.
    pub fn referral(zone: &str, target: &str) -> Self {
        Self::non_authoritative().authority(ns_record(zone, target))
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.response.rcode = rcode;
        self
    }

    pub fn answer(mut self, record: Record) -> Self {
        self.response.answers.push(record);
        self
    }

    pub fn authority(mut self, record: Record) -> Self {
        self.response.authority.push(record);
        self
    }

    pub fn glue(mut self, owner: &str, ip: IpAddr) -> Self {
        let record = match ip {
            IpAddr::V4(v4) => Record::from_rdata(name(owner), 300, RData::A(A(v4))),
            IpAddr::V6(v6) => Record::from_rdata(name(owner), 300, RData::AAAA(AAAA(v6))),
        };
        self.response.additionals.push(record);
        self
    }

    pub fn build(self) -> RawResponse {
        self.response
    }
}
