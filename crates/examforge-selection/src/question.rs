//! Selected question records.

use serde::{Deserialize, Serialize};

/// A single selected question, paired with the exercise it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedQuestion {
    /// Identifier of the exercise the question belongs to.
    pub exercise_id: String,
    /// Identifier of the selected question.
    pub question_id: String,
    /// Display title of the exercise.
    pub title: String,
}
