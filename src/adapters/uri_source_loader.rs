//! Source loader for local paths, `file://` URIs and HTTP(S) URLs using reqwest.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use reqwest::Certificate;
use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::adapters::SourceLocation;
use crate::domain::error::error_chain;
use crate::domain::{AppError, TrustConfig};
use crate::ports::SourceLoader;

/// Loads mapping documents from the filesystem or over the network.
///
/// A fresh HTTP client is built for every remote load; nothing is cached
/// between calls.
#[derive(Debug, Clone, Default)]
pub struct UriSourceLoader {
    trust: TrustConfig,
}

impl UriSourceLoader {
    pub fn new(trust: TrustConfig) -> Self {
        Self { trust }
    }

    fn load_local(&self, source: &str, path: &Path) -> Result<Vec<u8>, AppError> {
        let mut file = File::open(path).map_err(|e| AppError::unreachable(source, e))?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).map_err(|e| AppError::read_failed(source, e))?;
        Ok(buf)
    }

    fn load_remote(&self, source: &str, url: Url) -> Result<Vec<u8>, AppError> {
        let client = self.build_client(source)?;

        let response = client
            .get(url)
            .send()
            .map_err(|e| AppError::unreachable(source, error_chain(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::unreachable(source, format!("HTTP status {}", status)));
        }

        let body =
            response.bytes().map_err(|e| AppError::read_failed(source, error_chain(&e)))?;
        Ok(body.to_vec())
    }

    fn build_client(&self, source: &str) -> Result<Client, AppError> {
        if !self.trust.is_customized() {
            return Client::builder()
                .build()
                .map_err(|e| AppError::unreachable(source, error_chain(&e)));
        }

        let mut builder = Client::builder()
            .use_rustls_tls()
            .tls_built_in_webpki_certs(false)
            .tls_built_in_native_certs(true);

        if let Some(bundle) = &self.trust.ca_bundle {
            for cert in load_ca_bundle(bundle)? {
                builder = builder.add_root_certificate(cert);
            }
        }

        if self.trust.skip_verify {
            debug!("TLS certificate verification disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder.build().map_err(|e| AppError::unreachable(source, error_chain(&e)))
    }
}

/// Read every PEM certificate in `path`. Non-certificate sections are skipped.
fn load_ca_bundle(path: &Path) -> Result<Vec<Certificate>, AppError> {
    let trust_error = |details: String| AppError::TrustStore {
        path: path.display().to_string(),
        details,
    };

    let pem = fs::read(path).map_err(|e| trust_error(e.to_string()))?;
    let certs = Certificate::from_pem_bundle(&pem).map_err(|e| trust_error(error_chain(&e)))?;
    debug!(bundle = %path.display(), count = certs.len(), "loaded trusted CA certificates");
    Ok(certs)
}

impl SourceLoader for UriSourceLoader {
    fn load(&self, source: &str) -> Result<Vec<u8>, AppError> {
        let location = SourceLocation::parse(source);
        debug!(%source, %location, "loading paths file");

        match location {
            SourceLocation::Remote(url) => self.load_remote(source, url),
            SourceLocation::Local(path) => self.load_local(source, &path),
            SourceLocation::ForeignFile(_) => {
                Err(AppError::unreachable(source, "file URI does not name a local path"))
            }
        }
    }
}
