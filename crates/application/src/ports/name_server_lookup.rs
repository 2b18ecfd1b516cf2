use async_trait::async_trait;
use dnsdiff_domain::DomainError;
use std::net::SocketAddr;

#[async_trait]
pub trait NameServerLookup: Send + Sync {
    /// Resolves a name server hostname through the system resolver.
    async fn lookup(&self, hostname: &str, port: u16) -> Result<Vec<SocketAddr>, DomainError>;
}
