//! Monolink CLI entry point
//!
//! Parses command-line arguments, initializes logging, and executes the
//! requested subcommand. All errors propagate here and are printed to stderr
//! before the process exits non-zero.

use clap::Parser;
use colored::Colorize;
use monolink::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    cli.init_logging();

    if let Err(e) = cli.execute() {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
