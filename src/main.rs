//! Blueprint's main application entry point.
//! Parses command-line arguments, configures logging, and dispatches to the
//! selected command, funneling any fatal error through the default handler.

use blueprint::cli::{run, Cli};
use blueprint::error::default_error_handler;
use blueprint::logger::init_logger;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    init_logger(cli.verbose);

    if let Err(err) = run(cli) {
        default_error_handler(err);
    }
}
