mod source_loader;

pub use source_loader::{MemorySourceLoader, SourceLoader};
