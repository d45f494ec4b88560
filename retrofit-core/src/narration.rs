//! Running a record through a sequence of actions, printing its state as it
//! changes.

use std::io::{self, Write};

use smol_str::{SmolStr, format_smolstr};
use tracing::{debug, info};

use crate::{Action, Human, HumanState};

/// A single action in a [`Scenario`], optionally announced by a caption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// The behaviour to invoke.
    pub action: Action,
    /// Printed before the action runs, between blank lines.
    pub caption: Option<SmolStr>,
}

impl Step {
    /// A step without caption.
    pub fn new(action: Action) -> Self {
        Self {
            action,
            caption: None,
        }
    }

    /// A step announced by `caption`.
    pub fn with_caption(action: Action, caption: impl Into<SmolStr>) -> Self {
        Self {
            action,
            caption: Some(caption.into()),
        }
    }
}

impl From<Action> for Step {
    fn from(action: Action) -> Self {
        Self::new(action)
    }
}

/// A named record and the steps applied to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    name: SmolStr,
    steps: Vec<Step>,
}

impl Scenario {
    /// Create a scenario for a record called `name`.
    pub fn new(name: impl Into<SmolStr>, steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            name: name.into(),
            steps: steps.into_iter().collect(),
        }
    }

    /// Create a scenario from bare actions, without captions.
    pub fn from_actions(
        name: impl Into<SmolStr>,
        actions: impl IntoIterator<Item = Action>,
    ) -> Self {
        Self::new(name, actions.into_iter().map(Step::new))
    }

    /// Eat, sleep, then eat a Big Mac.
    pub fn playground(name: impl Into<SmolStr>) -> Self {
        let name = name.into();
        let caption = format_smolstr!("{name} ate a Big Mac");
        Self::new(
            name,
            [
                Step::new(Action::Eat),
                Step::new(Action::Sleep),
                Step::with_caption(Action::EatBigMac, caption),
            ],
        )
    }

    /// [`Scenario::playground`] for Becca.
    pub fn becca() -> Self {
        Self::playground("Becca")
    }

    /// Name of the record the scenario constructs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The steps, in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Construct the record, report it, then apply and report every step.
    ///
    /// Returns the record in its final state.
    pub fn run<W: Write>(&self, narrator: &mut Narrator<W>) -> io::Result<Human> {
        info!(name = %self.name, steps = self.steps.len(), "running scenario");
        let mut human = Human::new(self.name.clone());
        narrator.report(0, None, &human)?;

        for (i, step) in self.steps.iter().enumerate() {
            if let Some(caption) = &step.caption {
                narrator.caption(caption)?;
            }
            step.action.apply(&mut human);
            debug!(step = i + 1, action = %step.action, state = %human.state(), "applied");
            narrator.report(i + 1, Some(step.action), &human)?;
        }
        Ok(human)
    }
}

/// How a [`Narrator`] renders the record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Name and flags on three lines, captions included.
    #[default]
    Text,
    /// One [`Snapshot`] object per line. Captions are dropped.
    Json,
}

/// The state of a record after a step, as written in [`OutputFormat::Json`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot<'a> {
    /// Zero for the freshly constructed record.
    pub step: usize,
    /// The action that led here, if any.
    pub action: Option<Action>,
    /// Name of the record.
    pub name: &'a str,
    /// The flags.
    #[serde(flatten)]
    pub state: HumanState,
}

/// Writes record states to a sink.
#[derive(Debug)]
pub struct Narrator<W> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> Narrator<W> {
    /// Create a narrator writing `format` to `writer`.
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Write the state of `human` after `step`.
    pub fn report(
        &mut self,
        step: usize,
        action: Option<Action>,
        human: &Human,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{human}"),
            OutputFormat::Json => {
                let snapshot = Snapshot {
                    step,
                    action,
                    name: human.name(),
                    state: human.state(),
                };
                serde_json::to_writer(&mut self.writer, &snapshot)?;
                writeln!(self.writer)
            }
        }
    }

    /// Announce what happens next.
    pub fn caption(&mut self, caption: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => write!(self.writer, "\n{caption}\n\n"),
            OutputFormat::Json => Ok(()),
        }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod test {
    use super::{Narrator, OutputFormat, Scenario, Step};
    use crate::{Action, HumanState};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn run_to_string(scenario: &Scenario, format: OutputFormat) -> String {
        let mut narrator = Narrator::new(Vec::new(), format);
        scenario.run(&mut narrator).unwrap();
        String::from_utf8(narrator.into_inner()).unwrap()
    }

    #[test]
    fn becca_text() {
        const EXPECTED: &str = "\
Becca
true
true
Becca
false
true
Becca
false
false

Becca ate a Big Mac

Becca
false
true
";
        assert_eq!(
            run_to_string(&Scenario::becca(), OutputFormat::Text),
            EXPECTED
        );
    }

    #[test]
    fn becca_final_state() {
        let mut narrator = Narrator::new(std::io::sink(), OutputFormat::Text);
        let becca = Scenario::becca().run(&mut narrator).unwrap();
        assert_eq!(becca.name(), "Becca");
        assert_eq!(becca.state(), HumanState::new(false, true));
    }

    #[test]
    fn becca_json() {
        let out = run_to_string(&Scenario::becca(), OutputFormat::Json);
        let lines: Vec<Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(
            lines,
            vec![
                json!({"step": 0, "action": null, "name": "Becca", "is_hungry": true, "is_sleepy": true}),
                json!({"step": 1, "action": "eat", "name": "Becca", "is_hungry": false, "is_sleepy": true}),
                json!({"step": 2, "action": "sleep", "name": "Becca", "is_hungry": false, "is_sleepy": false}),
                json!({"step": 3, "action": "eat-big-mac", "name": "Becca", "is_hungry": false, "is_sleepy": true}),
            ]
        );
    }

    #[test]
    fn playground_caption_follows_name() {
        let scenario = Scenario::playground("Ann");
        assert_eq!(scenario.name(), "Ann");
        assert_eq!(
            scenario.steps(),
            [
                Step::new(Action::Eat),
                Step::new(Action::Sleep),
                Step::with_caption(Action::EatBigMac, "Ann ate a Big Mac"),
            ]
        );
    }

    #[rstest]
    #[case::empty(vec![], "Zed\ntrue\ntrue\n")]
    #[case::sleep_twice(vec![Action::Sleep, Action::Sleep], "Zed\ntrue\ntrue\nZed\ntrue\nfalse\nZed\ntrue\nfalse\n")]
    #[case::big_mac(vec![Action::EatBigMac], "Zed\ntrue\ntrue\nZed\nfalse\ntrue\n")]
    fn from_actions_text(#[case] actions: Vec<Action>, #[case] expected: &str) {
        let scenario = Scenario::from_actions("Zed", actions);
        assert!(scenario.steps().iter().all(|s| s.caption.is_none()));
        assert_eq!(run_to_string(&scenario, OutputFormat::Text), expected);
    }
}
