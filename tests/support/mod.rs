//! Test support utilities for vault2conjur integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod server;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Child processes run with `.current_dir()` set to `dir` and `HOME` set to
/// `home`, so no config file from the developer's machine leaks in.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with `dump.json` holding `SAMPLE_DUMP`.
    pub fn with_dump() -> Self {
        let t = Self::new();
        t.write("dump.json", SAMPLE_DUMP);
        t
    }

    /// Write a file into the working directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Read a file from the working directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("failed to read test file")
    }

    /// Whether a file exists in the working directory.
    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }
}
