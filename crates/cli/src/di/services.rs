use anyhow::Context;
use dnsdiff_application::ports::{DnsTransport, NameServerLookup};
use dnsdiff_application::use_cases::{DelegationResolver, DiffHostUseCase, ResolveHostUseCase};
use dnsdiff_domain::{Config, NameServer};
use dnsdiff_infrastructure::dns::WireDnsClient;
use dnsdiff_infrastructure::system::SystemNameServerLookup;
use std::sync::Arc;
use tracing::info;

pub struct DiffServices {
    pub diff_host: Arc<DiffHostUseCase>,
}

impl DiffServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let server_a: NameServer = config
            .comparison
            .server_a
            .parse()
            .context("invalid NS A")?;
        let server_b: NameServer = config
            .comparison
            .server_b
            .parse()
            .context("invalid NS B")?;

        let transport: Arc<dyn DnsTransport> = Arc::new(WireDnsClient::new());
        let lookup: Arc<dyn NameServerLookup> =
            Arc::new(SystemNameServerLookup::new(config.resolver.timeout()));

        let delegation = DelegationResolver::new(transport, lookup.clone(), &config.resolver);
        let resolver = Arc::new(ResolveHostUseCase::new(delegation, lookup, &config.resolver));

        info!(
            server_a = %server_a,
            server_b = %server_b,
            timeout_ms = config.resolver.timeout_ms,
            max_attempts = config.resolver.max_attempts,
            accept_recursive_answers = config.resolver.accept_recursive_answers,
            "Diff services initialized"
        );

        Ok(Self {
            diff_host: Arc::new(DiffHostUseCase::new(resolver, server_a, server_b)),
        })
    }
}
