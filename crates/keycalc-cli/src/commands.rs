//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{CliConfig, ColorChoice, Verbosity};
use crate::output::OutputFormat;

/// keycalc: a button-press calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration derived from the global flags
    #[must_use]
    pub fn config(&self) -> CliConfig {
        CliConfig::new()
            .with_verbosity(Verbosity::from_flags(self.quiet, self.verbose))
            .with_color(self.color.clone().into())
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal calculator
    Tui(TuiArgs),

    /// Press a sequence of buttons and print the display
    ///
    /// Labels: 0-9 . AC +/- % + - × ÷ =  (also * x / for × and ÷)
    Eval(EvalArgs),

    /// Print the button grid
    Grid(GridArgs),
}

/// Arguments for the tui command
#[derive(Parser, Debug)]
pub struct TuiArgs {
    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Button labels to press, in order
    #[arg(required = true)]
    pub tokens: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the display after every press
    #[arg(long)]
    pub steps: bool,
}

/// Arguments for the grid command
#[derive(Parser, Debug)]
pub struct GridArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
