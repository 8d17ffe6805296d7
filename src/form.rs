pub const DEFAULT_GRADE: &str = "O";
pub const DEFAULT_SUBJECT_COUNT: usize = 5;

/// One row of the subject table. Both fields hold what the user typed or
/// picked; the credit text is only coerced to a number at compute time.
#[derive(Clone, Debug, PartialEq)]
pub struct SubjectEntry {
    pub grade: String,
    pub credit: String,
}

impl Default for SubjectEntry {
    fn default() -> Self {
        Self {
            grade: DEFAULT_GRADE.into(),
            credit: String::new(),
        }
    }
}

/// Everything the form captures. The previous-CGPA and previous-credits
/// fields are raw text for the same reason the credits are: coercion is
/// the engine's job, not the form's.
#[derive(Clone, Debug)]
pub struct FormState {
    pub previous_cgpa: String,
    pub previous_credits: String,
    pub subjects: Vec<SubjectEntry>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            previous_cgpa: String::new(),
            previous_credits: String::new(),
            subjects: vec![SubjectEntry::default(); DEFAULT_SUBJECT_COUNT],
        }
    }
}

impl FormState {
    /// Replaces the subject list with `count` fresh rows. Changing the
    /// count starts the table over; prior rows are dropped, not kept as a
    /// prefix.
    pub fn set_subject_count(&mut self, count: usize) {
        self.subjects = vec![SubjectEntry::default(); count];
    }

    pub fn set_subject_grade(&mut self, index: usize, grade: String) {
        if let Some(subject) = self.subjects.get_mut(index) {
            subject.grade = grade;
        }
    }

    pub fn set_subject_credit(&mut self, index: usize, credit: String) {
        if let Some(subject) = self.subjects.get_mut(index) {
            subject.credit = credit;
        }
    }

    pub fn set_previous_cgpa(&mut self, value: String) {
        self.previous_cgpa = value;
    }

    pub fn set_previous_credits(&mut self, value: String) {
        self.previous_credits = value;
    }
}
