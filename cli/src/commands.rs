pub mod check;
pub mod normalize;

use std::io::{self, BufRead};

use clap::{Parser, Subcommand};
use ipcanon_common::network::family::AddressFamily;

#[derive(Parser)]
#[command(name = "ipcanon")]
#[command(about = "Validate and canonicalize IPv4 and IPv6 addresses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Only accept addresses of this family (4 or 6)
    #[arg(short, long, global = true)]
    pub family: Option<AddressFamily>,

    /// Silence informational output, repeat for less
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the canonical form of every valid address
    #[command(alias = "n")]
    Normalize { addresses: Vec<String> },
    /// Report which addresses are valid, failing if any is not
    #[command(alias = "c")]
    Check { addresses: Vec<String> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Uses the addresses given on the command line, or one per line from stdin
/// when none were given.
pub fn read_inputs(addresses: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !addresses.is_empty() {
        return Ok(addresses);
    }
    read_lines(io::stdin().lock())
}

fn read_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut inputs = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        inputs.push(line);
    }

    Ok(inputs)
}
