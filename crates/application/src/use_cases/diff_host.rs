use crate::use_cases::ResolveHostUseCase;
use dnsdiff_domain::{DomainError, HostDiff, NameServer};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, info_span, Instrument};

/// Resolves one hostname against both servers and compares the results.
pub struct DiffHostUseCase {
    resolver: Arc<ResolveHostUseCase>,
    server_a: NameServer,
    server_b: NameServer,
}

impl DiffHostUseCase {
    pub fn new(resolver: Arc<ResolveHostUseCase>, server_a: NameServer, server_b: NameServer) -> Self {
        Self {
            resolver,
            server_a,
            server_b,
        }
    }

    pub async fn execute(
        &self,
        hostname: &str,
        cancel: &CancellationToken,
    ) -> Result<HostDiff, DomainError> {
        let side_a = self
            .resolver
            .execute(&self.server_a, hostname, cancel)
            .instrument(info_span!("resolve", side = "a", server = %self.server_a, hostname));
        let side_b = self
            .resolver
            .execute(&self.server_b, hostname, cancel)
            .instrument(info_span!("resolve", side = "b", server = %self.server_b, hostname));

        let (records_a, records_b) = tokio::try_join!(side_a, side_b)?;

        let diff = HostDiff::between(&records_a, &records_b);
        info!(hostname, differences = diff.len(), "Host compared");
        Ok(diff)
    }
}
