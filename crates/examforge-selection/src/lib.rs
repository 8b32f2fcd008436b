//! Examforge — evenly-distributed exam question selection.
//!
//! Selects a pseudo-random subset of questions from a pool of exercises,
//! distributing picks evenly across exercises and reproducing the exact
//! same selection for a given seed so that an exam can be regenerated
//! identically.

pub mod question;
pub mod select;

pub use question::SelectedQuestion;
pub use select::select_questions;
