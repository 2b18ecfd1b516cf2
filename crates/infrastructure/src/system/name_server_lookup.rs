use async_trait::async_trait;
use dnsdiff_application::ports::NameServerLookup;
use dnsdiff_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Resolves name server hostnames through the operating system resolver.
pub struct SystemNameServerLookup {
    timeout: Duration,
}

impl SystemNameServerLookup {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl NameServerLookup for SystemNameServerLookup {
    async fn lookup(&self, hostname: &str, port: u16) -> Result<Vec<SocketAddr>, DomainError> {
        resolve_all(hostname, port, self.timeout).await
    }
}

/// Resolves a hostname to all its IP addresses (IPv4 + IPv6).
pub async fn resolve_all(
    hostname: &str,
    port: u16,
    timeout: Duration,
) -> Result<Vec<SocketAddr>, DomainError> {
    let target = format!("{}:{}", hostname, port);

    let addrs_iter = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: target.clone(),
        })?
        .map_err(|e| DomainError::TransportIo(format!("DNS resolution failed for {}: {}", target, e)))?;

    let addrs: Vec<SocketAddr> = addrs_iter.collect();

    if addrs.is_empty() {
        return Err(DomainError::TransportIo(format!(
            "No addresses found for {}",
            target
        )));
    }

    debug!(target = %target, addresses = addrs.len(), "Name server resolved");
    Ok(addrs)
}
