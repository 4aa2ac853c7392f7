//! Configuration loading and resolution.
//!
//! `load` is the entry point: it layers config files, environment and CLI
//! flags and returns the validated [`ResolvedConfig`] the workflow runs on.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::{QUERY_PLACEHOLDER, ResolvedConfig, SourceSpec};
