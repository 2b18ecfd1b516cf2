use crate::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// A name server endpoint as given by the operator: an IP or a hostname,
/// with an optional port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameServer {
    Resolved(SocketAddr),
    Unresolved { hostname: Arc<str>, port: u16 },
}

impl NameServer {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            NameServer::Resolved(addr) => Some(*addr),
            NameServer::Unresolved { .. } => None,
        }
    }

    pub fn port(&self) -> u16 {
        match self {
            NameServer::Resolved(addr) => addr.port(),
            NameServer::Unresolved { port, .. } => *port,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, NameServer::Unresolved { .. })
    }

    /// Returns (hostname, port) if this endpoint still needs a lookup.
    pub fn unresolved_parts(&self) -> Option<(&str, u16)> {
        match self {
            NameServer::Unresolved { hostname, port } => Some((hostname, *port)),
            NameServer::Resolved(_) => None,
        }
    }
}

impl fmt::Display for NameServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameServer::Resolved(addr) => write!(f, "{}", addr),
            NameServer::Unresolved { hostname, port } => write!(f, "{}:{}", hostname, port),
        }
    }
}

fn parse_host_port(s: &str) -> Result<(&str, Option<u16>), DomainError> {
    let invalid_port =
        |p: &str| DomainError::InvalidServerAddress(format!("Invalid port '{}' in '{}'", p, s));

    if let Some(rest) = s.strip_prefix('[') {
        let end = rest.find(']').ok_or_else(|| {
            DomainError::InvalidServerAddress(format!("Unterminated IPv6 bracket in '{}'", s))
        })?;
        let host = &rest[..end];
        return match rest[end + 1..].strip_prefix(':') {
            Some(port_str) => {
                let port = port_str.parse::<u16>().map_err(|_| invalid_port(port_str))?;
                Ok((host, Some(port)))
            }
            None if rest[end + 1..].is_empty() => Ok((host, None)),
            None => Err(DomainError::InvalidServerAddress(format!(
                "Unexpected trailing data in '{}'",
                s
            ))),
        };
    }

    // A bare IPv6 address contains several colons and carries no port.
    if s.matches(':').count() > 1 {
        return Ok((s, None));
    }

    match s.rsplit_once(':') {
        Some((host, port_str)) => {
            let port = port_str.parse::<u16>().map_err(|_| invalid_port(port_str))?;
            Ok((host, Some(port)))
        }
        None => Ok((s, None)),
    }
}

impl FromStr for NameServer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::InvalidServerAddress(
                "Empty server address".to_string(),
            ));
        }

        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(NameServer::Resolved(addr));
        }

        let (host, port) = parse_host_port(s)?;
        let port = port.unwrap_or(DEFAULT_DNS_PORT);

        if host.is_empty() {
            return Err(DomainError::InvalidServerAddress(format!(
                "Missing host in '{}'",
                s
            )));
        }

        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(NameServer::Resolved(SocketAddr::new(ip, port)));
        }

        let hostname = host.trim_end_matches('.');
        if hostname.is_empty() || hostname.contains(char::is_whitespace) {
            return Err(DomainError::InvalidServerAddress(format!(
                "Invalid server hostname '{}'",
                host
            )));
        }

        Ok(NameServer::Unresolved {
            hostname: hostname.into(),
            port,
        })
    }
}
