//! Behaviour attached to [`Human`] from outside its declaration.
//!
//! Eating and sleeping were written as two separate groups of methods. Here
//! they form a single capability trait, so everything a record can do is
//! listed in one place.

use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};
use tracing::trace;

use crate::Human;

/// Daily behaviour of a record.
///
/// Every method is total and idempotent.
pub trait Routine {
    /// No longer hungry. Sleepiness is untouched.
    fn eat(&mut self);

    /// No longer hungry, and sleepy again whatever the previous state.
    fn eat_big_mac(&mut self);

    /// No longer sleepy. Hunger is untouched.
    fn sleep(&mut self);
}

impl Routine for Human {
    fn eat(&mut self) {
        self.is_hungry = false;
        trace!(name = self.name(), "ate");
    }

    fn eat_big_mac(&mut self) {
        self.is_hungry = false;
        self.is_sleepy = true;
        trace!(name = self.name(), "ate a big mac");
    }

    fn sleep(&mut self) {
        self.is_sleepy = false;
        trace!(name = self.name(), "slept");
    }
}

/// A [`Routine`] method, by name.
///
/// The textual form is kebab-case: `eat`, `eat-big-mac`, `sleep`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    VariantNames,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Action {
    /// [`Routine::eat`]
    Eat,
    /// [`Routine::eat_big_mac`]
    EatBigMac,
    /// [`Routine::sleep`]
    Sleep,
}

impl Action {
    /// Call the named method on `target`.
    pub fn apply(self, target: &mut impl Routine) {
        match self {
            Action::Eat => target.eat(),
            Action::EatBigMac => target.eat_big_mac(),
            Action::Sleep => target.sleep(),
        }
    }
}
