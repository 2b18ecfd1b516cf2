mod dns_transport;
mod name_server_lookup;

pub use dns_transport::{rcode_to_status, DnsTransport, RawResponse};
pub use name_server_lookup::NameServerLookup;

pub use dnsdiff_domain::DnsQuery;
