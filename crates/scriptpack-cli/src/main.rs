//! scriptpack CLI entry point: argument parsing, logging setup and command
//! dispatch.

use clap::Parser;
use miette::Result;
use scriptpack_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
        cli::Command::Modes => commands::modes_execute(),
    };

    result.map_err(error::cli_error_to_miette)
}
