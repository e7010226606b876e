//! Maps resolution results onto the check status protocol.

use std::io::{self, Write};

use crate::app::discovery;
use crate::domain::{CheckOutcome, CheckStatus, DiscoveryConfig};
use crate::ports::SourceLoader;

/// Validate `config`, resolve it with `loader`, and classify the result.
///
/// Partially collected subscriptions are kept even when a source fails.
pub fn check<L: SourceLoader>(config: &DiscoveryConfig, loader: &L) -> CheckOutcome {
    if let Err(err) = config.validate() {
        return CheckOutcome { status: err.status(), subscriptions: Vec::new(), error: Some(err) };
    }

    let resolution = discovery::resolve(config, loader);
    let status = resolution.error.as_ref().map_or(CheckStatus::Ok, |err| err.status());

    CheckOutcome {
        status,
        subscriptions: resolution.subscriptions.into_vec(),
        error: resolution.error,
    }
}

/// Write one subscription per line. Nothing is written for an empty list.
pub fn write_subscriptions<W: Write>(out: &mut W, subscriptions: &[String]) -> io::Result<()> {
    for sub in subscriptions {
        writeln!(out, "{}", sub)?;
    }
    out.flush()
}

/// Status line for the error stream, e.g. `path-discovery WARNING: ...`.
pub fn status_line(outcome: &CheckOutcome) -> Option<String> {
    outcome
        .error
        .as_ref()
        .map(|err| format!("{} {}: {}", env!("CARGO_PKG_NAME"), outcome.status, err))
}
