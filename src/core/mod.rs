//! Core library components.
//!
//! This module contains the translation engine (crawl, translate, flatten,
//! initialize) and the store adapters it talks to.

pub mod config;
pub mod constants;
pub mod flatten;
pub mod initializer;
pub mod policy;
pub mod source;
pub mod target;
pub mod tree;
pub mod types;
