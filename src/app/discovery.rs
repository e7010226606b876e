//! Path-to-subscription resolution.

use tracing::{debug, info, warn};

use crate::domain::{AppError, DiscoveryConfig, MappingDocument, SubscriptionSet};
use crate::ports::SourceLoader;

/// Result of resolving every configured source.
///
/// `subscriptions` holds whatever was collected before `error` stopped the
/// run; it is the complete set only when `error` is `None`.
#[derive(Debug)]
pub struct Resolution {
    pub subscriptions: SubscriptionSet,
    pub error: Option<AppError>,
}

impl Resolution {
    /// Collapse into a `Result`, discarding partial output on failure.
    pub fn into_result(self) -> Result<Vec<String>, AppError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.subscriptions.into_vec()),
        }
    }
}

/// Resolve subscriptions for every source in `config`, in order.
///
/// Stops at the first source that fails to load or parse.
pub fn resolve<L: SourceLoader>(config: &DiscoveryConfig, loader: &L) -> Resolution {
    let mut subscriptions = SubscriptionSet::new(config.subscription_prefix.as_str());

    for source in &config.sources {
        if let Err(err) = apply_source(source, loader, &mut subscriptions) {
            warn!(%source, error = %err, "stopping discovery");
            return Resolution { subscriptions, error: Some(err) };
        }
    }

    info!(count = subscriptions.len(), "discovered subscriptions");
    Resolution { subscriptions, error: None }
}

fn apply_source<L: SourceLoader>(
    source: &str,
    loader: &L,
    subscriptions: &mut SubscriptionSet,
) -> Result<(), AppError> {
    let bytes = loader.load(source)?;
    let document = MappingDocument::parse(source, &bytes)?;
    debug!(%source, entries = document.entries.len(), "parsed paths file");

    for entry in &document.entries {
        if !entry.path_exists() {
            debug!(path = %entry.path, "path not present, skipping");
            continue;
        }
        debug!(path = %entry.path, subs = ?entry.subscriptions, "path present");
        subscriptions.extend(&entry.subscriptions);
    }

    Ok(())
}
