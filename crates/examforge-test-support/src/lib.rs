//! Shared test doubles for the Examforge exam engine.

mod logging;
mod shuffle;

pub use logging::CaptureWriter;
pub use shuffle::{IdentityShuffle, ReverseShuffle};
