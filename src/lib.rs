//! path-discovery: compute agent subscriptions from local filesystem paths.
//!
//! Mapping documents (JSON lists of `{ "path", "subs" }` records) are loaded
//! from local files or HTTP(S) URLs. Every listed path that exists on this
//! host contributes its subscriptions to a deduplicated, prefixed list.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use adapters::UriSourceLoader;

pub use adapters::SourceLocation;
pub use app::Resolution;
pub use domain::{
    AppError, CheckOutcome, CheckStatus, DiscoveryConfig, MappingDocument, MappingEntry,
    SubscriptionSet, TrustConfig,
};
pub use ports::{MemorySourceLoader, SourceLoader};

/// Run a full check: validate `config`, load every source and classify the result.
pub fn check(config: &DiscoveryConfig) -> CheckOutcome {
    let loader = UriSourceLoader::new(config.trust.clone());
    app::check(config, &loader)
}

/// Resolve subscriptions for `config`, failing on the first bad source.
pub fn discover(config: &DiscoveryConfig) -> Result<Vec<String>, AppError> {
    config.validate()?;
    let loader = UriSourceLoader::new(config.trust.clone());
    app::resolve(config, &loader).into_result()
}
