// Allow common clippy pedantic lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! Mapsmith CLI
//!
//! Command-line interface for generating search-index mappings

use clap::Parser;
use mapsmith::cli::{Cli, Runner};
use mapsmith::error::ErrorTally;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let tally = ErrorTally::new();
    let runner = Runner::new(cli, tally.clone());

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        tally.record();
    }

    // Every recorded error raises the exit code, capped at the u8 range
    let errors = u8::try_from(tally.count()).unwrap_or(u8::MAX);
    if errors != 0 {
        std::process::exit(i32::from(errors));
    }
}
