//! Entry point for lore, a terminal assistant backed by a hosted
//! knowledge base.
//!
//! This binary loads environment variables, parses CLI arguments via [`cli`],
//! and dispatches to the appropriate subcommand handler.

mod assistant;
mod cli;
mod config;
mod constants;
mod corpus;
mod error;
mod output;
mod runner;
mod tools;

use anyhow::Result;

/// Runs the lore CLI.
///
/// Loads `.env` files (silently ignored if absent), parses command-line
/// arguments into a [`cli::Cli`] struct, and dispatches the chosen
/// subcommand via [`cli::run`].
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = cli::parse();
    cli::run(cli).await
}
