//! Command-line interface.

pub mod args;
pub mod completions;
pub mod dump;
pub mod generate;
pub mod init;
pub mod output;
pub mod source;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::FileConfig;
use crate::error::Result;

pub use args::{ConjurArgs, VaultArgs};

/// vault2conjur - Clone a HashiCorp Vault namespace into CyberArk Conjur.
#[derive(Parser)]
#[command(
    name = "vault2conjur",
    about = "Clone a HashiCorp Vault namespace into CyberArk Conjur",
    long_about = "Clone a HashiCorp Vault namespace into CyberArk Conjur.\n\n\
                  Run `generate-policy` first and load the policy into Conjur, \
                  then run `init-secrets` to set the variable values.",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to .vault2conjur.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// 1) Generate a Conjur policy file from a Vault namespace
    GeneratePolicy {
        #[command(flatten)]
        vault: VaultArgs,

        /// Translate a saved tree dump instead of crawling Vault
        #[arg(long, value_name = "FILE")]
        from_dump: Option<PathBuf>,

        /// Where the policy YAML is written (`-` for stdout)
        #[arg(long, default_value = crate::core::constants::POLICY_OUT_FILE)]
        out: String,
    },

    /// 2) Set the values of the secrets in Conjur
    InitSecrets {
        #[command(flatten)]
        vault: VaultArgs,

        #[command(flatten)]
        conjur: ConjurArgs,

        /// Read secrets from a saved tree dump instead of crawling Vault
        #[arg(long, value_name = "FILE")]
        from_dump: Option<PathBuf>,

        /// List the variables that would be set without contacting Conjur
        #[arg(long)]
        dry_run: bool,
    },

    /// Crawl a Vault namespace and save the tree as JSON
    DumpTree {
        #[command(flatten)]
        vault: VaultArgs,

        /// Where the dump is written (`-` for stdout)
        #[arg(long, default_value = "-")]
        out: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, config: Option<PathBuf>) -> Result<()> {
    use Command::*;

    let load = || FileConfig::load(config.as_deref());

    match command {
        GeneratePolicy {
            vault,
            from_dump,
            out,
        } => generate::execute(&load()?, vault, from_dump.as_deref(), &out),
        InitSecrets {
            vault,
            conjur,
            from_dump,
            dry_run,
        } => init::execute(&load()?, vault, conjur, from_dump.as_deref(), dry_run),
        DumpTree { vault, out } => dump::execute(&load()?, vault, &out),
        Completions { shell } => completions::execute(shell),
    }
}
