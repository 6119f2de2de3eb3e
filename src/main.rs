//! `passwd-svc`: query passwd and group style records files from the command
//! line.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
