//! keycalc CLI library
//!
//! Command-line and terminal front-end for the keycalc calculator.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod runner;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, GridArgs, TuiArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::{init_logging, LogTarget};
pub use output::{EvalReport, OutputFormat, Step};
pub use runner::{eval_output, grid_output, run_tui};
