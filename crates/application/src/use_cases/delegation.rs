use crate::ports::{DnsTransport, NameServerLookup, RawResponse};
use dnsdiff_domain::{DnsQuery, DomainError, ResolverConfig, DEFAULT_DNS_PORT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::records::normalize::name_to_string;

/// Follows NS referrals from a starting server until a server answers
/// authoritatively.
pub struct DelegationResolver {
    transport: Arc<dyn DnsTransport>,
    lookup: Arc<dyn NameServerLookup>,
    timeout: Duration,
    max_hops: usize,
    accept_recursive_answers: bool,
}

impl DelegationResolver {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        lookup: Arc<dyn NameServerLookup>,
        config: &ResolverConfig,
    ) -> Self {
        Self {
            transport,
            lookup,
            timeout: config.timeout(),
            max_hops: config.max_delegation_hops,
            accept_recursive_answers: config.accept_recursive_answers,
        }
    }

    /// Issues `query` and follows referrals. At most `max_hops` servers are
    /// queried before giving up with [`DomainError::DelegationLoopDetected`].
    pub async fn resolve(
        &self,
        query: &DnsQuery,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, DomainError> {
        let mut current = query.clone();

        for hop in 0..self.max_hops {
            let response = tokio::select! {
                _ = cancel.cancelled() => return Err(DomainError::Cancelled),
                result = self.transport.exchange(&current, self.timeout) => result?,
            };

            if response.authoritative {
                debug!(
                    server = %current.server,
                    hostname = %current.hostname,
                    kind = %current.kind,
                    hop,
                    status = response.status(),
                    "Authoritative answer"
                );
                return Ok(response);
            }

            let referral = first_referral(&response);

            if self.accept_recursive_answers
                && (!response.answers.is_empty() || referral.is_none())
            {
                debug!(
                    server = %current.server,
                    hostname = %current.hostname,
                    kind = %current.kind,
                    status = response.status(),
                    "Accepting non-authoritative answer"
                );
                return Ok(response);
            }

            let target = referral.ok_or_else(|| DomainError::DelegationExhausted {
                hostname: current.hostname.to_string(),
                reason: format!(
                    "non-authoritative {} response from {} carries no NS referral",
                    response.status(),
                    current.server
                ),
            })?;

            let next = self.locate(&target, &response, &current, cancel).await?;
            debug!(
                from = %current.server,
                to = %next,
                referral = %name_to_string(&target),
                hostname = %current.hostname,
                "Following referral"
            );
            current = current.redirected(next);
        }

        Err(DomainError::DelegationLoopDetected {
            hostname: query.hostname.to_string(),
            hops: self.max_hops,
        })
    }

    /// Finds an address for a referral target: glue first, then the system
    /// lookup.
    async fn locate(
        &self,
        target: &Name,
        response: &RawResponse,
        current: &DnsQuery,
        cancel: &CancellationToken,
    ) -> Result<SocketAddr, DomainError> {
        if let Some(ip) = glue_address(target, &response.additionals) {
            return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
        }

        let target_name = name_to_string(target);
        let addrs = tokio::select! {
            _ = cancel.cancelled() => return Err(DomainError::Cancelled),
            result = self.lookup.lookup(&target_name, DEFAULT_DNS_PORT) => result,
        };

        let exhausted = |reason: String| DomainError::DelegationExhausted {
            hostname: current.hostname.to_string(),
            reason,
        };

        match addrs {
            Ok(addrs) => addrs
                .iter()
                .find(|addr| addr.is_ipv4())
                .or_else(|| addrs.first())
                .copied()
                .ok_or_else(|| exhausted(format!("referral target {} has no address", target_name))),
            Err(DomainError::Cancelled) => Err(DomainError::Cancelled),
            Err(e) => Err(exhausted(format!(
                "failed to look up referral target {}: {}",
                target_name, e
            ))),
        }
    }
}

fn first_referral(response: &RawResponse) -> Option<Name> {
    response.authority.iter().find_map(|record| match record.data() {
        RData::NS(ns) => Some(ns.0.clone()),
        _ => None,
    })
}

/// A glue is preferred over AAAA regardless of section order.
fn glue_address(target: &Name, additionals: &[Record]) -> Option<IpAddr> {
    let wanted = name_to_string(target);
    let glue: Vec<IpAddr> = additionals
        .iter()
        .filter(|record| name_to_string(record.name()).eq_ignore_ascii_case(&wanted))
        .filter_map(|record| match record.data() {
            RData::A(a) => Some(IpAddr::V4(a.0)),
            RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
            _ => None,
        })
        .collect();

    glue.iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| glue.first())
        .copied()
}
