//! Test fixtures and constants.

/// A tree dump with two top-level folders, a nested folder and a name that
/// is both a folder and a secret (`app`).
pub const SAMPLE_DUMP: &str = r#"{
  "children": {
    "db": {
      "children": {},
      "entries": { "password": "p1", "user": "admin" }
    },
    "app": {
      "children": {
        "cache": { "children": {}, "entries": { "url": "redis://cache:6379" } }
      },
      "entries": { "token": "t0k3n" }
    }
  },
  "entries": {}
}"#;

/// Number of key/value pairs in `SAMPLE_DUMP`.
pub const SAMPLE_ENTRY_COUNT: usize = 4;

/// Flattened paths of `SAMPLE_DUMP` under the `it/app` namespace, in order.
pub const SAMPLE_PATHS: &[&str] = &[
    "it/app/db/password",
    "it/app/db/user",
    "it/app/app/cache/url",
    "it/app/app/token",
];

/// Secret values in `SAMPLE_DUMP`; must never show up in policy output.
pub const SAMPLE_VALUES: &[&str] = &["p1", "admin", "redis://cache:6379", "t0k3n"];

/// Address nothing listens on, for connection failure tests.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";
