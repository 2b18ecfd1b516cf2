pub mod delegation;
pub mod diff_host;
pub mod records;
pub mod resolve_host;

pub use delegation::DelegationResolver;
pub use diff_host::DiffHostUseCase;
pub use records::{ProbeStrategy, RecordExtractor};
pub use resolve_host::{ResolveHostUseCase, RetryPolicy};
