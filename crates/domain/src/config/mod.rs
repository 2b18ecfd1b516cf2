//! Configuration module for dnsdiff
//!
//! - `root`: main configuration, file loading and CLI overrides
//! - `comparison`: the two servers and the host list to compare
//! - `resolver`: timeouts, retry policy, probing and delegation limits
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod comparison;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use comparison::ComparisonConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
