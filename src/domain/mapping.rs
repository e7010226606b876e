//! Mapping document wire format.

use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;

/// One `{ "path", "subs" }` record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MappingEntry {
    pub path: String,
    #[serde(default, rename = "subs", deserialize_with = "null_as_empty")]
    pub subscriptions: Vec<String>,
}

impl MappingEntry {
    /// Whether `path` is present on the local filesystem.
    ///
    /// Only a definite "not found" excludes the entry; other stat failures
    /// (permission denied and the like) still count as present.
    pub fn path_exists(&self) -> bool {
        match std::fs::metadata(Path::new(&self.path)) {
            Ok(_) => true,
            Err(err) => {
                !matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
            }
        }
    }
}

/// Entries decoded from a single source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingDocument {
    pub entries: Vec<MappingEntry>,
}

impl MappingDocument {
    pub fn parse(source: &str, bytes: &[u8]) -> Result<Self, AppError> {
        let entries: Vec<MappingEntry> =
            serde_json::from_slice(bytes).map_err(|e| AppError::DocumentMalformed {
                source_id: source.to_string(),
                details: e.to_string(),
            })?;
        Ok(Self { entries })
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
