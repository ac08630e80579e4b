//! CLI module
//!
//! Command-line interface for generating mappings.
//!
//! # Commands
//!
//! - `generate` - Render a mapping from an explicit field configuration
//! - `collect` - Collect documents over HTTP and infer their mapping

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::Runner;
pub use server::{app, flush, serve, AppState, ServerConfig};
