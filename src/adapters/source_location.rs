//! Classification of source identifiers.

use std::fmt;
use std::path::PathBuf;

use url::Url;

/// Where a mapping document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// `http://` or `https://` resource.
    Remote(Url),
    /// Plain path or `file://` URI.
    Local(PathBuf),
    /// `file://` URI naming a non-local host.
    ForeignFile(Url),
}

impl SourceLocation {
    /// Classify an identifier. Anything that is not an `http(s)` or `file`
    /// URI is treated as a local path.
    pub fn parse(source: &str) -> Self {
        match Url::parse(source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => SourceLocation::Remote(url),
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => SourceLocation::Local(path),
                Err(()) => SourceLocation::ForeignFile(url),
            },
            _ => SourceLocation::Local(PathBuf::from(source)),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Remote(url) | SourceLocation::ForeignFile(url) => {
                write!(f, "{}", url)
            }
            SourceLocation::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_and_https_are_remote() {
        assert!(matches!(
            SourceLocation::parse("http://cfg.test/paths.json"),
            SourceLocation::Remote(_)
        ));
        assert!(matches!(
            SourceLocation::parse("https://cfg.test/paths.json"),
            SourceLocation::Remote(_)
        ));
    }

    #[test]
    fn file_uri_resolves_to_local_path() {
        assert_eq!(
            SourceLocation::parse("file:///etc/sensu/paths.json"),
            SourceLocation::Local(PathBuf::from("/etc/sensu/paths.json"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn file_uri_with_remote_host_is_not_a_local_path() {
        assert!(matches!(
            SourceLocation::parse("file://fileserver/share/paths.json"),
            SourceLocation::ForeignFile(_)
        ));
    }

    #[test]
    fn plain_paths_stay_local() {
        assert_eq!(
            SourceLocation::parse("/etc/sensu/paths.json"),
            SourceLocation::Local(PathBuf::from("/etc/sensu/paths.json"))
        );
        assert_eq!(
            SourceLocation::parse("conf/paths.json"),
            SourceLocation::Local(PathBuf::from("conf/paths.json"))
        );
    }

    #[test]
    fn unsupported_schemes_fall_back_to_local_paths() {
        assert_eq!(
            SourceLocation::parse("ftp://cfg.test/paths.json"),
            SourceLocation::Local(PathBuf::from("ftp://cfg.test/paths.json"))
        );
    }
}
