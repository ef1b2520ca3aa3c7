//! Binary crate for the `sunny` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Terminal rendering of panels, glyphs, and forecast cards
//! - Process exit-code handling

use clap::Parser;

mod cli;
mod palette;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Theme fallback warnings come through the log facade; surface them by
    // default without requiring RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
