//! CLI Adapter.

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use crate::adapters::UriSourceLoader;
use crate::app::report;
use crate::domain::{DiscoveryConfig, TrustConfig};

#[derive(Parser)]
#[command(name = "path-discovery")]
#[command(version)]
#[command(
    about = "Discover file system paths and output a list of agent subscriptions.",
    long_about = None
)]
struct Cli {
    /// The agent subscription name prefix
    #[arg(short = 'p', long, env = "SUBSCRIPTION_PREFIX", default_value = "")]
    subscription_prefix: String,
    /// The file location(s) for the mapping file (file path(s) or URL(s))
    #[arg(short = 'f', long = "paths-file", env = "PATHS_FILE", value_delimiter = ',')]
    paths_files: Vec<String>,
    /// Skip TLS certificate verification (not recommended!)
    #[arg(short = 'i', long)]
    insecure_skip_verify: bool,
    /// TLS CA certificate bundle in PEM format
    #[arg(short = 't', long)]
    trusted_ca_file: Option<PathBuf>,
    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> DiscoveryConfig {
        let sources = self.paths_files.into_iter().filter(|s| !s.trim().is_empty());
        DiscoveryConfig::new(sources)
            .with_prefix(self.subscription_prefix)
            .with_trust(TrustConfig {
                skip_verify: self.insecure_skip_verify,
                ca_bundle: self.trusted_ca_file,
            })
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.into_config();
    let loader = UriSourceLoader::new(config.trust.clone());
    let outcome = report::check(&config, &loader);

    if let Err(e) = report::write_subscriptions(&mut io::stdout().lock(), &outcome.subscriptions) {
        eprintln!("Error: {}", e);
    }
    if let Some(line) = report::status_line(&outcome) {
        eprintln!("{}", line);
    }

    std::process::exit(outcome.exit_code());
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("path_discovery={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
