use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport I/O error: {0}")]
    TransportIo(String),

    #[error("Delegation exhausted for {hostname}: {reason}")]
    DelegationExhausted { hostname: String, reason: String },

    #[error("Delegation loop detected for {hostname} after {hops} hops")]
    DelegationLoopDetected { hostname: String, hops: usize },

    #[error("Resolution of {hostname} via {server} failed after {attempts} attempt(s)")]
    ResolutionFailed {
        server: String,
        hostname: String,
        attempts: u32,
        #[source]
        cause: Box<DomainError>,
    },

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Network-level failures: timeouts, refused connections, socket errors
    /// and responses that could not be decoded.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportIo(_)
                | DomainError::InvalidDnsResponse(_)
        )
    }

    /// Errors the host resolver may recover from by re-running the whole
    /// record set.
    pub fn is_retryable(&self) -> bool {
        self.is_transport_error()
            || matches!(
                self,
                DomainError::DelegationExhausted { .. } | DomainError::DelegationLoopDetected { .. }
            )
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }
}
