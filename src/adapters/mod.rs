pub mod source_location;
pub mod uri_source_loader;

pub use source_location::SourceLocation;
pub use uri_source_loader::UriSourceLoader;
