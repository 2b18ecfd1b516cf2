use super::RecordKind;
use std::net::SocketAddr;
use std::sync::Arc;

/// One question sent to one server. Built per attempt and never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub server: SocketAddr,
    pub hostname: Arc<str>,
    pub kind: RecordKind,
}

impl DnsQuery {
    pub fn new(server: SocketAddr, hostname: impl Into<Arc<str>>, kind: RecordKind) -> Self {
        Self {
            server,
            hostname: hostname.into(),
            kind,
        }
    }

    /// Same question, asked of a different server.
    pub fn redirected(&self, server: SocketAddr) -> Self {
        Self {
            server,
            hostname: Arc::clone(&self.hostname),
            kind: self.kind,
        }
    }
}
