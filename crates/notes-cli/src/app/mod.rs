//! Application-level utilities for the notes CLI.
//!
//! - Config path resolution
//! - Password prompts and environment overrides
//! - The per-invocation [`AppContext`]

mod context;
mod passphrase;
mod resolver;

pub use context::AppContext;
pub use resolver::resolve_config_path;
