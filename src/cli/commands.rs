//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Search-index mapping generator CLI
#[derive(Parser, Debug)]
#[command(name = "mapsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a mapping from an explicit field configuration file
    Generate {
        /// Field configuration file (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit a reusable index template instead of a plain mapping
        #[arg(short, long)]
        template: bool,
    },

    /// Collect JSON documents over HTTP and infer their mapping
    Collect {
        /// Port to listen on
        #[arg(short, long, default_value = "8888")]
        port: u16,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
