//! Evenly-distributed, seed-reproducible question selection.

use examforge_core::error::SelectionError;
use examforge_core::shuffle::{SeededShuffle, shuffled};
use examforge_core::sort::sorted_by_key;

use crate::question::SelectedQuestion;

/// Chooses an evenly-distributed random selection of questions from exercises.
///
/// `exercise_ids`, `exercise_titles`, and `question_id_arrays` are parallel:
/// index `i` across all three refers to the same exercise. Exercises are
/// visited in a pseudo-random cycle fixed by `seed`, taking at most one
/// question per exercise per pass, and the result is sorted by exercise
/// title (stable, ascending). Identical inputs and seed always produce an
/// identical result, so an exam can be regenerated exactly.
///
/// Emits a warning when `num_questions` is smaller than the number of
/// exercises, since some exercises will then be skipped entirely.
///
/// # Errors
///
/// Returns [`SelectionError::ShapeMismatch`] if the parallel arrays disagree
/// on length, and [`SelectionError::InsufficientQuestions`] if the combined
/// pool holds fewer than `num_questions` questions.
///
/// # Panics
///
/// Panics if every question stack empties before the target count is
/// reached (invariant ruled out by the pool-size validation).
pub fn select_questions(
    num_questions: usize,
    exercise_ids: &[String],
    exercise_titles: &[String],
    question_id_arrays: &[Vec<String>],
    seed: u64,
    shuffle: &dyn SeededShuffle,
) -> Result<Vec<SelectedQuestion>, SelectionError> {
    if exercise_ids.len() != question_id_arrays.len() {
        return Err(SelectionError::ShapeMismatch {
            field: "question_id_arrays",
            expected: exercise_ids.len(),
            actual: question_id_arrays.len(),
        });
    }
    if exercise_ids.len() != exercise_titles.len() {
        return Err(SelectionError::ShapeMismatch {
            field: "exercise_titles",
            expected: exercise_ids.len(),
            actual: exercise_titles.len(),
        });
    }
    let available: usize = question_id_arrays.iter().map(Vec::len).sum();
    if available < num_questions {
        return Err(SelectionError::InsufficientQuestions {
            requested: num_questions,
            available,
        });
    }
    if num_questions < exercise_ids.len() {
        tracing::warn!(
            "Selecting {} questions from {} exercises",
            num_questions,
            exercise_ids.len()
        );
    }

    // Visit exercises pseudo-randomly, in case there are more exercises
    // than questions to select.
    let order = shuffle.permutation(exercise_ids.len(), seed);

    // Shuffled copy of each exercise's question ids; the caller's arrays
    // are never touched. Each copy is drained from the end.
    let mut question_stacks: Vec<Vec<String>> = question_id_arrays
        .iter()
        .map(|question_ids| shuffled(shuffle, question_ids, seed))
        .collect();

    let mut output = Vec::with_capacity(num_questions);
    let mut cursor = 0;
    let mut popped_this_cycle = false;
    while output.len() < num_questions {
        let exercise = order[cursor];
        // An exhausted exercise stays empty and is skipped on every pass.
        if let Some(question_id) = question_stacks[exercise].pop() {
            output.push(SelectedQuestion {
                exercise_id: exercise_ids[exercise].clone(),
                question_id,
                title: exercise_titles[exercise].clone(),
            });
            popped_this_cycle = true;
        }
        cursor = (cursor + 1) % exercise_ids.len();
        if cursor == 0 {
            assert!(
                popped_this_cycle,
                "question pool exhausted before reaching the target count"
            );
            popped_this_cycle = false;
        }
    }

    Ok(sorted_by_key(output, |question| question.title.clone()))
}
