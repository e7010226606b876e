use std::error::Error as StdError;

use thiserror::Error;

use crate::domain::CheckStatus;

/// Library-wide error type for path discovery.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required configuration is missing or inconsistent.
    #[error("{0}")]
    ConfigurationInvalid(String),

    /// Source could not be opened or fetched.
    #[error("Failed to open paths file {source_id}: {details}")]
    SourceUnreachable { source_id: String, details: String },

    /// Source was opened but its content could not be read to the end.
    #[error("Failed to read from paths file {source_id}: {details}")]
    SourceReadError { source_id: String, details: String },

    /// Source content is not a list of path mappings.
    #[error("Failed to parse JSON from paths file {source_id}: {details}")]
    DocumentMalformed { source_id: String, details: String },

    /// Trust store for secure fetches could not be assembled.
    #[error("Failed to load trusted CA bundle {path}: {details}")]
    TrustStore { path: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::ConfigurationInvalid(message.into())
    }

    pub(crate) fn unreachable(source: &str, details: impl ToString) -> Self {
        AppError::SourceUnreachable { source_id: source.to_string(), details: details.to_string() }
    }

    pub(crate) fn read_failed(source: &str, details: impl ToString) -> Self {
        AppError::SourceReadError { source_id: source.to_string(), details: details.to_string() }
    }

    /// Check status this error is reported with.
    pub fn status(&self) -> CheckStatus {
        match self {
            AppError::ConfigurationInvalid(_) => CheckStatus::Critical,
            AppError::SourceUnreachable { .. }
            | AppError::SourceReadError { .. }
            | AppError::DocumentMalformed { .. }
            | AppError::TrustStore { .. } => CheckStatus::Warning,
        }
    }

    /// Source identifier the failure is attributed to, if any.
    pub fn source_id(&self) -> Option<&str> {
        match self {
            AppError::SourceUnreachable { source_id, .. }
            | AppError::SourceReadError { source_id, .. }
            | AppError::DocumentMalformed { source_id, .. } => Some(source_id),
            AppError::ConfigurationInvalid(_) | AppError::TrustStore { .. } => None,
        }
    }
}

/// Render `err` followed by each underlying cause, separated by `: `.
///
/// Causes whose text already appears in the message are skipped.
pub(crate) fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_critical() {
        let err = AppError::config_error("--paths-file is required");
        assert_eq!(err.status(), CheckStatus::Critical);
        assert_eq!(err.to_string(), "--paths-file is required");
    }

    #[test]
    fn resolution_errors_are_warnings_and_name_the_source() {
        let err = AppError::unreachable("https://example.test/paths.json", "connection refused");
        assert_eq!(err.status(), CheckStatus::Warning);
        assert_eq!(err.source_id(), Some("https://example.test/paths.json"));
        assert!(err.to_string().contains("https://example.test/paths.json"));

        let err = AppError::DocumentMalformed {
            source_id: "/etc/paths.json".into(),
            details: "expected value".into(),
        };
        assert_eq!(err.status(), CheckStatus::Warning);
        assert_eq!(err.source_id(), Some("/etc/paths.json"));
    }

    #[derive(Debug, Error)]
    #[error("invalid peer certificate: UnknownIssuer")]
    struct Handshake;

    #[derive(Debug, Error)]
    #[error("client error (Connect)")]
    struct Connect(#[source] Handshake);

    #[derive(Debug, Error)]
    #[error("error sending request for url (https://cfg.test/paths.json)")]
    struct Request(#[source] Connect);

    #[test]
    fn error_chain_includes_every_cause() {
        let chain = error_chain(&Request(Connect(Handshake)));
        assert_eq!(
            chain,
            "error sending request for url (https://cfg.test/paths.json): client error (Connect): \
             invalid peer certificate: UnknownIssuer"
        );
    }

    #[derive(Debug, Error)]
    #[error("wrapper: invalid peer certificate: UnknownIssuer")]
    struct Repeating(#[source] Handshake);

    #[test]
    fn error_chain_skips_causes_already_in_message() {
        assert_eq!(
            error_chain(&Repeating(Handshake)),
            "wrapper: invalid peer certificate: UnknownIssuer"
        );
    }
}
