//! dnsdiff infrastructure: wire-level DNS client and system name lookup.
pub mod dns;
pub mod system;
