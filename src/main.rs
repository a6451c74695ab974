//! Command line front end for the chat markup engine.
//!
//! Renders messages to their rich-text JSON, or strips / extracts their
//! color codes.

mod cli;
mod log_init;

use clap::Parser;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
