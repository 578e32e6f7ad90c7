//! HeroCard - Command-line tool for rendering adventurer snapshot cards

use std::process::ExitCode;

use herocard::cli;

fn main() -> ExitCode {
    cli::run()
}
