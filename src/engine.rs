use indexmap::IndexMap;

use crate::form::SubjectEntry;
use crate::grade::{self, Grade};
use crate::util::parse_or_zero;

/// The two averages, formatted for display. Recomputed in full on every
/// trigger; nothing is cached between runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Scores {
    pub sgpa: String,
    pub cgpa: String,
}

/// Credit-weighted averaging over the current semester, blended with a
/// previously recorded CGPA/credit total.
///
/// The previous CGPA is re-expanded into points over its credits before
/// the blend, so the CGPA is one weighted mean over old and new credits
/// together. Malformed numeric fields and unknown grade symbols
/// contribute zero, and a zero credit total yields `"0.00"` instead of a
/// division by zero. This never fails.
pub fn compute_grades(
    previous_cgpa: &str,
    previous_credits: &str,
    subjects: &[SubjectEntry],
    scale: &IndexMap<String, Grade>,
) -> Scores {
    let (semester_credits, semester_points) =
        subjects.iter().fold((0.0, 0.0), |(credits, points), subject| {
            let credit = parse_or_zero(&subject.credit);
            let grade_points = grade::points_for(scale, &subject.grade);
            (credits + credit, points + grade_points * credit)
        });

    let sgpa = if semester_credits > 0.0 {
        semester_points / semester_credits
    } else {
        0.0
    };

    let previous_cgpa = parse_or_zero(previous_cgpa);
    let previous_credits = parse_or_zero(previous_credits);

    let total_credits = previous_credits + semester_credits;
    let total_points = previous_cgpa * previous_credits + semester_points;

    let cgpa = if total_credits > 0.0 {
        total_points / total_credits
    } else {
        0.0
    };

    Scores {
        sgpa: format!("{:.2}", sgpa),
        cgpa: format!("{:.2}", cgpa),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(grade: &str, credit: &str) -> SubjectEntry {
        SubjectEntry {
            grade: grade.into(),
            credit: credit.into(),
        }
    }

    fn compute(
        previous_cgpa: &str,
        previous_credits: &str,
        subjects: &[SubjectEntry],
    ) -> Scores {
        compute_grades(previous_cgpa, previous_credits, subjects, &Grade::defaults())
    }

    #[test]
    fn zero_semester_credits_gives_zero_sgpa() {
        let scores = compute("", "", &[subject("O", ""), subject("A", "0")]);
        assert_eq!(scores.sgpa, "0.00");
    }

    #[test]
    fn zero_credits_everywhere_gives_zero_cgpa() {
        let scores = compute("", "", &[]);
        assert_eq!(scores.sgpa, "0.00");
        assert_eq!(scores.cgpa, "0.00");

        let scores = compute("9.0", "", &[subject("O", "")]);
        assert_eq!(scores.cgpa, "0.00");
    }

    #[test]
    fn single_top_grade_is_a_ten() {
        for credit in &["1", "4", "10", "0.5"] {
            let scores = compute("", "", &[subject("O", credit)]);
            assert_eq!(scores.sgpa, "10.00");
            assert_eq!(scores.cgpa, "10.00");
        }
    }

    #[test]
    fn single_fail_is_a_zero() {
        let scores = compute("", "", &[subject("F", "3")]);
        assert_eq!(scores.sgpa, "0.00");
        assert_eq!(scores.cgpa, "0.00");
    }

    #[test]
    fn worked_semester_with_history() {
        let scores = compute("8.00", "20", &[subject("A", "4"), subject("B+", "3")]);
        // 8*4 + 7*3 = 53 points over 7 credits; 8*20 + 53 = 213 over 27.
        assert_eq!(scores.sgpa, "7.57");
        assert_eq!(scores.cgpa, "7.89");
    }

    #[test]
    fn malformed_fields_contribute_nothing() {
        let scores = compute(
            "abc",
            "",
            &[subject("A", "x"), subject("B", "3"), subject("O", "")],
        );
        assert_eq!(scores.sgpa, "6.00");
        assert_eq!(scores.cgpa, "6.00");
    }

    #[test]
    fn unknown_grade_counts_as_zero_points() {
        let scores = compute("", "", &[subject("D", "5"), subject("O", "5")]);
        assert_eq!(scores.sgpa, "5.00");
    }

    #[test]
    fn cgpa_blends_the_two_weighted_means() {
        let cases: &[(&str, &str, &[(&str, &str)])] = &[
            ("8.00", "20", &[("A", "4"), ("B+", "3")]),
            ("6.50", "40", &[("O", "5")]),
            ("9.25", "12", &[("C", "2"), ("C", "2"), ("A+", "6")]),
            ("", "", &[("B", "3"), ("A", "4")]),
            ("7.00", "10", &[]),
        ];

        for (previous_cgpa, previous_credits, semester) in cases {
            let subjects: Vec<SubjectEntry> =
                semester.iter().map(|(g, c)| subject(g, c)).collect();
            let scores = compute(previous_cgpa, previous_credits, &subjects);

            let scale = Grade::defaults();
            let p = parse_or_zero(previous_credits);
            let x = parse_or_zero(previous_cgpa);
            let c: f64 = subjects.iter().map(|s| parse_or_zero(&s.credit)).sum();
            let points: f64 = subjects
                .iter()
                .map(|s| grade::points_for(&scale, &s.grade) * parse_or_zero(&s.credit))
                .sum();
            let s = if c > 0.0 { points / c } else { 0.0 };
            let expected = if p + c > 0.0 {
                (x * p + s * c) / (p + c)
            } else {
                0.0
            };
            assert_eq!(scores.cgpa, format!("{:.2}", expected));
        }
    }

    #[test]
    fn recomputing_unchanged_input_is_identical() {
        let subjects = [subject("A+", "4"), subject("B", "3")];
        let first = compute("7.50", "30", &subjects);
        let second = compute("7.50", "30", &subjects);
        assert_eq!(first, second);
    }
}
