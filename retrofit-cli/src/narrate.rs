//! The `narrate` subcommand.

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use clio::Output;
use retrofit_core::{Action, Narrator, OutputFormat, Scenario};
use std::io::Write;
use std::str::FromStr;
use strum::VariantNames as _;
use tracing::info;

use crate::CliError;

/// Run a record through its routine.
#[derive(Parser, Debug)]
#[clap(version = "1.0", long_about = None)]
#[clap(about = "Narrate a record through its routine.")]
#[non_exhaustive]
pub struct NarrateArgs {
    /// Name of the record.
    #[arg(short, long, default_value = "Becca")]
    pub name: String,

    /// Actions to apply, in order.
    ///
    /// Without any, the record eats, sleeps, then eats a Big Mac.
    #[arg(
        short,
        long = "action",
        value_name = "ACTION",
        value_parser = parse_action,
    )]
    pub actions: Vec<Action>,

    #[arg(long, default_value = "false")]
    /// Output one JSON object per line instead of text.
    pub json: bool,

    /// Output file. Use '-' for stdout.
    #[clap(short, long, value_parser, default_value = "-")]
    pub output: Output,

    /// Verbosity.
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

fn parse_action(s: &str) -> Result<Action, String> {
    Action::from_str(s)
        .map_err(|_| format!("expected one of: {}", Action::VARIANTS.join(", ")))
}

impl NarrateArgs {
    /// The scenario selected by the arguments.
    pub fn scenario(&self) -> Scenario {
        if self.actions.is_empty() {
            Scenario::playground(self.name.as_str())
        } else {
            Scenario::from_actions(self.name.as_str(), self.actions.iter().copied())
        }
    }

    /// The output format selected by the arguments.
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Run the scenario.
    ///
    /// # Arguments
    ///
    /// * `output_override` - Optional writer to use instead of the CLI output argument.
    pub fn run_with_output<W: Write>(&mut self, mut output_override: Option<W>) -> Result<()> {
        let scenario = self.scenario();
        let format = self.format();

        let writer: &mut dyn Write = if let Some(ref mut w) = output_override {
            w
        } else {
            &mut self.output
        };
        let mut narrator = Narrator::new(writer, format);
        let human = scenario.run(&mut narrator).map_err(CliError::Output)?;
        narrator.flush().map_err(CliError::Output)?;

        info!(name = human.name(), state = %human.state(), "finished");
        Ok(())
    }

    /// Run the scenario, writing to the CLI output argument.
    pub fn run(&mut self) -> Result<()> {
        self.run_with_output(None::<Vec<u8>>)
    }
}
