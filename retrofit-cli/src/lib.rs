//! Standard command line tools, used by the retrofit binary.

use clap::Parser;
use retrofit_core::numeric::NumericError;
use std::ffi::OsString;
use thiserror::Error;

pub mod narrate;
pub mod square;

/// CLI arguments.
#[derive(Parser, Debug)]
#[clap(version = "1.0", long_about = None)]
#[clap(about = "Records extended with behaviour after the fact.")]
#[non_exhaustive]
pub enum CliArgs {
    /// Run a record through its routine, printing its state after each call.
    Narrate(narrate::NarrateArgs),
    /// Square an integer.
    Square(square::SquareArgs),
    /// External commands
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

/// Error type for the CLI.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// Error writing output.
    #[error("Error writing output: {0}")]
    Output(#[from] std::io::Error),
    /// Errors produced by the `square` subcommand.
    #[error(transparent)]
    Numeric(#[from] NumericError),
}
