//! dnsdiff domain layer
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod host_diff;
pub mod name_server;
pub mod record_kind;
pub mod resolved_records;

pub use config::{CliOverrides, ComparisonConfig, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_query::DnsQuery;
pub use errors::DomainError;
pub use host_diff::{DiffEntry, HostDiff};
pub use name_server::{NameServer, DEFAULT_DNS_PORT};
pub use record_kind::RecordKind;
pub use resolved_records::{KindRecords, ResolvedRecords};
