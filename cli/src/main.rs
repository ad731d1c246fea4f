mod commands;
mod terminal;

use commands::{CommandLine, Commands, convert, validate, watch};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Convert { value, from, to } => {
            convert::convert(&value, from, to, commands.reverse)
        }
        Commands::Validate {
            value,
            kind,
            strict,
        } => validate::validate(&value, kind, strict),
        Commands::Watch => watch::watch(commands.reverse),
    }
}
