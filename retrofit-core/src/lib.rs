//! Records whose behaviour is attached after their declaration.
//!
//! A [`Human`] only stores its name and two flags. Everything it can *do*
//! lives in the [`Routine`] capability trait, implemented separately from
//! the type, and the [`narration`] module drives a record through a
//! [`Scenario`] while printing its state after every call.
//!
//! Foreign types are extended with free functions instead, see
//! [`numeric::square_number`].

pub mod human;
pub mod narration;
pub mod numeric;
pub mod routine;

pub use crate::human::{Human, HumanState};
pub use crate::narration::{Narrator, OutputFormat, Scenario, Snapshot, Step};
pub use crate::routine::{Action, Routine};
