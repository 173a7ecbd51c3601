mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, normalize};
use ipcanon_common::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = Config {
        family: commands.family,
        quiet: commands.quiet,
    };

    match commands.command {
        Commands::Normalize { addresses } => {
            let inputs = commands::read_inputs(addresses)?;
            normalize::normalize(inputs, &cfg)
        }
        Commands::Check { addresses } => {
            let inputs = commands::read_inputs(addresses)?;
            check::check(inputs, &cfg)
        }
    }
}
