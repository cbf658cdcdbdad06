//! keycalc: button-press calculator
//!
//! ## Usage
//!
//! ```bash
//! keycalc tui                       # Interactive keypad (mouse)
//! keycalc eval 7 + 3 =              # Prints 10
//! keycalc eval --steps 1 2 . 5 %    # Display after every press
//! keycalc grid                      # Button layout
//! ```

use clap::Parser;
use keycalc_cli::{
    eval_output, grid_output, init_logging, run_tui, Cli, CliResult, Commands, LogTarget,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.config();

    match &cli.command {
        Commands::Tui(args) => run_tui(&config, args),
        Commands::Eval(args) => {
            init_logging(config.verbosity, &LogTarget::Stderr)?;
            println!("{}", eval_output(&config, args)?);
            Ok(())
        }
        Commands::Grid(args) => {
            init_logging(config.verbosity, &LogTarget::Stderr)?;
            println!("{}", grid_output(args)?);
            Ok(())
        }
    }
}
