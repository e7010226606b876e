//! Three-state check status reported to the host runner.

use std::fmt;

use crate::domain::AppError;

/// Outcome severity understood by the check runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Critical,
}

impl CheckStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            CheckStatus::Ok => 0,
            CheckStatus::Warning => 1,
            CheckStatus::Critical => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the reporting layer needs from one check invocation.
#[derive(Debug)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    /// Prefixed subscriptions collected before completion or failure.
    pub subscriptions: Vec<String>,
    pub error: Option<AppError>,
}

impl CheckOutcome {
    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }
}
