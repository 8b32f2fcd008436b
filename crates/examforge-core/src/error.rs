//! Selection error types.

use thiserror::Error;

/// Top-level selection error type.
///
/// Both variants signal a caller contract violation and are raised before
/// any output is constructed; a failed call never returns partial results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Two parallel input arrays disagree on length.
    #[error("exercise_ids and {field} must have the same length: {expected} != {actual}")]
    ShapeMismatch {
        /// The array that disagrees with `exercise_ids`.
        field: &'static str,
        /// The length of `exercise_ids`.
        expected: usize,
        /// The length of the disagreeing array.
        actual: usize,
    },

    /// The combined question pool is smaller than the requested count.
    #[error("not enough questions to reach {requested}: pool holds {available}")]
    InsufficientQuestions {
        /// The requested number of questions.
        requested: usize,
        /// The total number of questions available across all exercises.
        available: usize,
    },
}
