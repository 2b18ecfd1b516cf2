use crate::ports::NameServerLookup;
use crate::use_cases::records::RecordExtractor;
use crate::use_cases::DelegationResolver;
use dnsdiff_domain::{DomainError, NameServer, ResolvedRecords, ResolverConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const MAX_NAME_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// Whole-record-set retry with linear backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_unit: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            backoff_unit: config.backoff_unit(),
        }
    }

    /// Delay after failed attempt `attempt` (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff_unit * attempt
    }
}

pub struct ResolveHostUseCase {
    delegation: DelegationResolver,
    lookup: Arc<dyn NameServerLookup>,
    extractors: Vec<RecordExtractor>,
    retry: RetryPolicy,
}

impl ResolveHostUseCase {
    pub fn new(
        delegation: DelegationResolver,
        lookup: Arc<dyn NameServerLookup>,
        config: &ResolverConfig,
    ) -> Self {
        Self {
            delegation,
            lookup,
            extractors: RecordExtractor::all(config.load_balance_probes),
            retry: RetryPolicy::from_config(config),
        }
    }

    /// Resolves every record kind of `hostname` against `server`.
    ///
    /// A retryable failure restarts the whole set with a fresh result; the
    /// last failure is wrapped in [`DomainError::ResolutionFailed`].
    /// Cancellation surfaces as [`DomainError::Cancelled`].
    pub async fn execute(
        &self,
        server: &NameServer,
        hostname: &str,
        cancel: &CancellationToken,
    ) -> Result<ResolvedRecords, DomainError> {
        let mut attempt = 1;

        loop {
            let error = match self.attempt(server, hostname, cancel).await {
                Ok(records) => return Ok(records),
                Err(e) if e.is_cancelled() => return Err(e),
                Err(e) => e,
            };

            if !error.is_retryable() || attempt >= self.retry.max_attempts {
                return Err(DomainError::ResolutionFailed {
                    server: server.to_string(),
                    hostname: hostname.to_string(),
                    attempts: attempt,
                    cause: Box::new(error),
                });
            }

            let delay = self.retry.delay_after(attempt);
            warn!(
                server = %server,
                hostname,
                attempt,
                max_attempts = self.retry.max_attempts,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "Resolution attempt failed, retrying"
            );

            tokio::select! {
                _ = cancel.cancelled() => return Err(DomainError::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }

            attempt += 1;
        }
    }

    async fn attempt(
        &self,
        server: &NameServer,
        hostname: &str,
        cancel: &CancellationToken,
    ) -> Result<ResolvedRecords, DomainError> {
        let hostname = validate_hostname(hostname)?;
        let addr = self.server_addr(server, cancel).await?;
        let mut records = ResolvedRecords::new(hostname);

        for extractor in &self.extractors {
            let kind_records = extractor
                .extract(&self.delegation, addr, hostname, cancel)
                .await?;
            records.set(kind_records);
        }

        debug!(server = %addr, hostname, "Record set resolved");
        Ok(records)
    }

    async fn server_addr(
        &self,
        server: &NameServer,
        cancel: &CancellationToken,
    ) -> Result<SocketAddr, DomainError> {
        if let Some(addr) = server.socket_addr() {
            return Ok(addr);
        }

        let (hostname, port) = server
            .unresolved_parts()
            .ok_or_else(|| DomainError::InvalidServerAddress(server.to_string()))?;

        let addrs = tokio::select! {
            _ = cancel.cancelled() => return Err(DomainError::Cancelled),
            result = self.lookup.lookup(hostname, port) => result?,
        };

        addrs
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::TransportIo(format!("No addresses found for {}", server)))
    }
}

/// Strips one trailing dot and checks RFC 1035 length limits.
fn validate_hostname(hostname: &str) -> Result<&str, DomainError> {
    let trimmed = hostname.trim();
    let name = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let invalid = |reason: &str| DomainError::InvalidDomainName(format!("{}: {}", hostname, reason));

    if name.is_empty() {
        return Err(invalid("empty name"));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(invalid("name too long"));
    }
    if name.chars().any(|c| c.is_whitespace()) {
        return Err(invalid("contains whitespace"));
    }
    for label in name.split('.') {
        if label.is_empty() {
            return Err(invalid("empty label"));
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(invalid("label too long"));
        }
    }

    Ok(name)
}
