//! Shared CLI output helpers.
//!
//! Status output goes to stderr so stdout can carry a policy or tree dump.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;
use std::io::{self, Write as IoWrite};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ policy written to policy.yml`
pub fn success(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✓").green(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Print an error message (red).
///
/// Example: `✗ source store: token was rejected`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ pass --vault-token or set VAULT_TOKEN`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold header.
pub fn header(title: &str) {
    if colors_enabled() {
        eprintln!("{}", style(title).bold());
    } else {
        eprintln!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  succeeded:  12`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        eprintln!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        eprintln!("  {}  {}", label, value);
    }
}

/// Print a list item with bullet.
pub fn list_item(item: &str) {
    eprintln!("  • {}", item);
}

/// Format a path string in cyan.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p.to_string()
    }
}

/// Start a numbered progress line: `1/3 Crawling vault... `.
///
/// Call `progress_done()` to finish the line.
pub fn progress(step: usize, of: usize, label: &str) {
    if colors_enabled() {
        eprint!("{} {}... ", style(format!("{}/{}", step, of)).bold(), style(label).dim());
    } else {
        eprint!("{}/{} {}... ", step, of, label);
    }
    let _ = io::stderr().flush();
}

/// Finish a progress line with success/failure indicator.
pub fn progress_done(success: bool) {
    if colors_enabled() {
        if success {
            eprintln!("{}", style("ok").green());
        } else {
            eprintln!("{}", style("failed").red());
        }
    } else {
        eprintln!("{}", if success { "ok" } else { "failed" });
    }
}

/// Run `f` inside a numbered progress line.
pub fn step<T, E>(
    step: usize,
    of: usize,
    label: &str,
    f: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    progress(step, of, label);
    let result = f();
    progress_done(result.is_ok());
    result
}

/// Write raw text to stdout without decoration.
pub fn raw(text: &str) {
    print!("{}", text);
    let _ = io::stdout().flush();
}
