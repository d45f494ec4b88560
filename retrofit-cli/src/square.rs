//! The `square` subcommand.

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use retrofit_core::numeric::square_number;
use std::io::Write;
use tracing::debug;

use crate::CliError;

/// Square an integer.
#[derive(Parser, Debug)]
#[clap(version = "1.0", long_about = None)]
#[clap(about = "Square an integer.")]
#[non_exhaustive]
pub struct SquareArgs {
    /// The number to square.
    #[arg(allow_negative_numbers = true)]
    pub number: i64,

    /// Verbosity.
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl SquareArgs {
    /// Write the square of the number to `out`.
    pub fn run_with_output<W: Write>(&self, mut out: W) -> Result<()> {
        let squared = square_number(self.number).map_err(CliError::from)?;
        debug!(number = self.number, squared, "squared");
        writeln!(out, "{squared}").map_err(CliError::from)?;
        Ok(())
    }

    /// Write the square of the number to stdout.
    pub fn run(&self) -> Result<()> {
        self.run_with_output(std::io::stdout().lock())
    }
}
