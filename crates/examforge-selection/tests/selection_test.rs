//! End-to-end selection tests against the production shuffle.

use std::collections::HashMap;

use examforge_core::shuffle::ChaChaShuffle;
use examforge_selection::select_questions;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn fixture() -> (Vec<String>, Vec<String>, Vec<Vec<String>>) {
    let exercise_ids = strings(&["frac", "dec", "geo", "alg"]);
    let exercise_titles = strings(&["Fractions", "Decimals", "Geometry", "Algebra"]);
    let question_id_arrays = (0..4)
        .map(|exercise| {
            (0..5)
                .map(|question| format!("ex{exercise}-q{question}"))
                .collect()
        })
        .collect();
    (exercise_ids, exercise_titles, question_id_arrays)
}

#[test]
fn test_selection_is_spread_evenly_across_exercises() {
    let (ids, titles, questions) = fixture();

    let result = select_questions(10, &ids, &titles, &questions, 2026, &ChaChaShuffle).unwrap();

    assert_eq!(result.len(), 10);
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for selected in &result {
        *counts.entry(selected.exercise_id.as_str()).or_default() += 1;
    }
    // Ten questions over four exercises: round-robin gives each exercise
    // two or three picks, never zero.
    assert_eq!(counts.len(), 4);
    assert!(counts.values().all(|&count| (2..=3).contains(&count)));
}

#[test]
fn test_regenerating_with_the_same_seed_reproduces_the_exam() {
    let (ids, titles, questions) = fixture();

    let original = select_questions(12, &ids, &titles, &questions, 77, &ChaChaShuffle).unwrap();
    let regenerated = select_questions(12, &ids, &titles, &questions, 77, &ChaChaShuffle).unwrap();

    assert_eq!(original, regenerated);
}

#[test]
fn test_different_seeds_produce_different_exams() {
    let exercise_ids = strings(&["a", "b", "c", "d", "e", "f"]);
    let exercise_titles = strings(&["A", "B", "C", "D", "E", "F"]);
    let question_id_arrays: Vec<Vec<String>> = (0..6)
        .map(|exercise| {
            (0..5)
                .map(|question| format!("ex{exercise}-q{question}"))
                .collect()
        })
        .collect();

    let first = select_questions(
        20,
        &exercise_ids,
        &exercise_titles,
        &question_id_arrays,
        1,
        &ChaChaShuffle,
    )
    .unwrap();
    let second = select_questions(
        20,
        &exercise_ids,
        &exercise_titles,
        &question_id_arrays,
        2,
        &ChaChaShuffle,
    )
    .unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_selection_result_stays_sorted_by_title() {
    let (ids, titles, questions) = fixture();

    let result = select_questions(15, &ids, &titles, &questions, 31, &ChaChaShuffle).unwrap();

    let result_titles: Vec<&str> = result.iter().map(|selected| selected.title.as_str()).collect();
    let mut sorted = result_titles.clone();
    sorted.sort_unstable();
    assert_eq!(result_titles, sorted);
}
