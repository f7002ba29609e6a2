//! Init-secrets command.
//!
//! Sets the values of the Conjur variables declared by a previously loaded
//! policy. Must run after the policy from `generate-policy` has been loaded.

use std::path::Path;

use crate::cli::args::{ConjurArgs, VaultArgs};
use crate::cli::output;
use crate::cli::source::load_tree;
use crate::core::config::FileConfig;
use crate::core::flatten::flatten;
use crate::core::initializer::{InitReport, SecretInitializer};
use crate::core::target::Conjur;
use crate::error::{Error, Result};

/// Set the secrets in Conjur.
pub fn execute(
    file: &FileConfig,
    vault: VaultArgs,
    conjur: ConjurArgs,
    from_dump: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let (flags, api_key) = conjur.into_parts();
    let section = flags.or(&file.conjur);

    if dry_run {
        let namespace = section.require_namespace()?;
        let tree = output::step(1, 2, "Processing logical structure of the Vault namespace", || {
            load_tree(file, vault, from_dump)
        })?;
        let secrets = flatten(&tree, &namespace);
        output::progress(2, 2, "Listing variables (dry run)");
        output::progress_done(true);
        for path in secrets.keys() {
            output::list_item(path);
        }
        output::kv("variables:", secrets.len());
        return Ok(());
    }

    // fail on missing Conjur settings before crawling
    let settings = section.resolve(api_key)?;

    let tree = output::step(1, 2, "Processing logical structure of the Vault namespace", || {
        load_tree(file, vault, from_dump)
    })?;
    let secrets = flatten(&tree, &settings.namespace);

    let target = Conjur::new(&settings.url, &settings.account)?;
    let report = output::step(2, 2, "Setting the secrets in Conjur", || {
        let report = SecretInitializer::new(settings.host_identity()).initialize(
            &secrets,
            &target,
            &settings.api_key,
        );
        if report.is_complete() {
            Ok(report)
        } else {
            Err(report)
        }
    });

    let report = report.unwrap_or_else(|r| r);
    print_report(&report);
    check(&report)
}

fn print_report(report: &InitReport) {
    output::header("See the report:");
    output::kv(
        "Conjur auth successful:",
        if report.authenticated { "yes" } else { "no" },
    );
    output::kv("# of secrets set successfully:", report.succeeded);
    output::kv("# of secrets failed to set:", report.failed);
    for e in &report.errors {
        output::warn(&e.to_string());
    }
}

fn check(report: &InitReport) -> Result<()> {
    if !report.authenticated {
        output::hint("check --conjur-api-key and that the policy has been loaded");
        return Err(Error::Incomplete("Conjur authentication failed".to_string()));
    }
    // failed writes are listed in the report and do not fail the run
    if report.failed > 0 {
        output::warn(&format!(
            "{} of {} secrets failed to set",
            report.failed,
            report.succeeded + report.failed
        ));
    } else {
        output::success("all secrets set");
    }
    Ok(())
}
