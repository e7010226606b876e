//! Source loading port definition.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::AppError;

/// Port for turning a source identifier into raw mapping bytes.
pub trait SourceLoader {
    /// Load the full content of `source`.
    fn load(&self, source: &str) -> Result<Vec<u8>, AppError>;
}

/// In-memory loader for exercising resolution without I/O.
///
/// Records every identifier it is asked for, in call order.
#[derive(Debug, Default)]
pub struct MemorySourceLoader {
    documents: HashMap<String, Vec<u8>>,
    requested: RefCell<Vec<String>>,
}

impl MemorySourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, source: &str, content: impl Into<Vec<u8>>) -> Self {
        self.documents.insert(source.to_string(), content.into());
        self
    }

    /// Identifiers requested so far.
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl SourceLoader for MemorySourceLoader {
    fn load(&self, source: &str) -> Result<Vec<u8>, AppError> {
        self.requested.borrow_mut().push(source.to_string());
        self.documents
            .get(source)
            .cloned()
            .ok_or_else(|| AppError::unreachable(source, "no such document"))
    }
}
