use crate::use_cases::DelegationResolver;
use dnsdiff_domain::{DnsQuery, DomainError, KindRecords, RecordKind};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::normalize::answer_values;

/// How many times a kind is queried per resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStrategy {
    Single,
    /// Query repeatedly and keep the union of every answer, so that
    /// round-robin servers expose their whole address pool.
    LoadBalanced { probes: usize },
}

impl ProbeStrategy {
    pub fn for_kind(kind: RecordKind, probes: usize) -> Self {
        if kind.is_load_balanced() {
            ProbeStrategy::LoadBalanced {
                probes: probes.max(1),
            }
        } else {
            ProbeStrategy::Single
        }
    }

    pub fn probe_count(&self) -> usize {
        match self {
            ProbeStrategy::Single => 1,
            ProbeStrategy::LoadBalanced { probes } => *probes,
        }
    }
}

/// Resolves one record kind and normalizes the answers.
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    kind: RecordKind,
    strategy: ProbeStrategy,
}

impl RecordExtractor {
    pub fn new(kind: RecordKind, strategy: ProbeStrategy) -> Self {
        Self { kind, strategy }
    }

    /// One extractor per kind, in declaration order.
    pub fn all(load_balance_probes: usize) -> Vec<Self> {
        RecordKind::ALL
            .into_iter()
            .map(|kind| Self::new(kind, ProbeStrategy::for_kind(kind, load_balance_probes)))
            .collect()
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn strategy(&self) -> ProbeStrategy {
        self.strategy
    }

    /// The reported status is the one of the last query issued.
    pub async fn extract(
        &self,
        resolver: &DelegationResolver,
        server: SocketAddr,
        hostname: &str,
        cancel: &CancellationToken,
    ) -> Result<KindRecords, DomainError> {
        let query = DnsQuery::new(server, hostname, self.kind);
        let mut values = Vec::new();
        let mut status = "";

        for _ in 0..self.strategy.probe_count() {
            let response = resolver.resolve(&query, cancel).await?;
            values.extend(answer_values(self.kind, &response.answers));
            status = response.status();
        }

        let records = KindRecords::new(self.kind, values, status);
        debug!(
            server = %server,
            hostname,
            kind = %self.kind,
            values = records.values().len(),
            status = %records.status,
            "Records extracted"
        );
        Ok(records)
    }
}
