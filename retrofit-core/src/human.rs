//! The extensible record.

use derive_more::Display;
use smol_str::SmolStr;

/// A named person with two independent flags.
///
/// Only the data is declared here. Behaviour is attached through
/// [`crate::Routine`].
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("{name}\n{is_hungry}\n{is_sleepy}")]
pub struct Human {
    name: SmolStr,
    pub(crate) is_hungry: bool,
    pub(crate) is_sleepy: bool,
}

/// The mutable part of a [`Human`], detached from its name.
#[derive(
    Clone, Copy, Debug, Display, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[display("(hungry: {is_hungry}, sleepy: {is_sleepy})")]
pub struct HumanState {
    /// Whether the human wants to eat.
    pub is_hungry: bool,
    /// Whether the human wants to sleep.
    pub is_sleepy: bool,
}

impl HumanState {
    /// Create a new state from its two flags.
    #[must_use]
    pub const fn new(is_hungry: bool, is_sleepy: bool) -> Self {
        Self {
            is_hungry,
            is_sleepy,
        }
    }
}

impl Default for HumanState {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl Human {
    /// Makes a new `Human`, hungry and sleepy.
    ///
    /// The name is not validated.
    ///
    /// # Example
    ///
    /// ```
    /// # use retrofit_core::Human;
    /// let becca = Human::new("Becca");
    /// assert_eq!(becca.to_string(), "Becca\ntrue\ntrue");
    /// ```
    pub fn new(name: impl Into<SmolStr>) -> Self {
        let HumanState {
            is_hungry,
            is_sleepy,
        } = HumanState::default();
        Self {
            name: name.into(),
            is_hungry,
            is_sleepy,
        }
    }

    /// The name given at construction.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the human wants to eat.
    #[inline]
    #[must_use]
    pub fn is_hungry(&self) -> bool {
        self.is_hungry
    }

    /// Whether the human wants to sleep.
    #[inline]
    #[must_use]
    pub fn is_sleepy(&self) -> bool {
        self.is_sleepy
    }

    /// Snapshot of both flags.
    #[must_use]
    pub fn state(&self) -> HumanState {
        HumanState::new(self.is_hungry, self.is_sleepy)
    }
}

#[cfg(test)]
mod test {
    use super::{Human, HumanState};
    use rstest::rstest;

    #[rstest]
    #[case("Becca")]
    #[case("")]
    #[case("Jean-Luc Picard")]
    fn new_human_is_hungry_and_sleepy(#[case] name: &str) {
        let human = Human::new(name);
        assert_eq!(human.name(), name);
        assert!(human.is_hungry());
        assert!(human.is_sleepy());
        assert_eq!(human.state(), HumanState::new(true, true));
    }

    #[test]
    fn display_matches_console_layout() {
        let mut human = Human::new("Becca");
        assert_eq!(human.to_string(), "Becca\ntrue\ntrue");

        human.is_sleepy = false;
        assert_eq!(human.to_string(), "Becca\ntrue\nfalse");
    }

    #[test]
    fn state_display() {
        assert_eq!(
            HumanState::new(false, true).to_string(),
            "(hungry: false, sleepy: true)"
        );
    }
}
