//! vault2conjur - Clone a HashiCorp Vault namespace into CyberArk Conjur.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vault2conjur::cli::output;
use vault2conjur::cli::{execute, Cli};
use vault2conjur::core::constants::LOG_ENV;
use vault2conjur::error::{ConfigError, Error, SourceStoreError, TargetAuthError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vault2conjur=debug")
        } else {
            EnvFilter::new("vault2conjur=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.config) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingField { .. }) => {
                Some("pass it as a flag, an environment variable, or in .vault2conjur.toml")
            }
            Error::Source(SourceStoreError::Unauthenticated) => {
                Some("check --vault-token / VAULT_TOKEN")
            }
            Error::TargetAuth(TargetAuthError::Rejected { .. }) => {
                Some("check --conjur-api-key / CONJUR_API_KEY")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
