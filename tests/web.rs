//! Browser smoke test, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use gpacalc::engine::compute_grades;
use gpacalc::form::{FormState, SubjectEntry};
use gpacalc::grade::Grade;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn computes_a_perfect_semester() {
    let scale = Grade::defaults();
    let subjects = vec![SubjectEntry {
        grade: "O".into(),
        credit: "10".into(),
    }];

    let scores = compute_grades("", "", &subjects, &scale);
    assert_eq!(scores.sgpa, "10.00");
    assert_eq!(scores.cgpa, "10.00");
}

#[wasm_bindgen_test]
fn default_form_computes_zeroes() {
    let scale = Grade::defaults();
    let form = FormState::default();

    let scores = compute_grades(
        &form.previous_cgpa,
        &form.previous_credits,
        &form.subjects,
        &scale,
    );
    assert_eq!(scores.sgpa, "0.00");
    assert_eq!(scores.cgpa, "0.00");
}
