pub mod name_server_lookup;

pub use name_server_lookup::SystemNameServerLookup;
