//! The reference class submission ledger.
//!
//! Stands in for the real submission backend: six classes with their
//! homeroom teachers and a per-class submitted flag. The counts it reports
//! feed `ApprovalWorkflowEngine::open_day`.

use chrono::NaiveDate;

use rollcall_engine::traits::SubmissionSource;

/// One class and the state of its attendance submission for the day.
#[derive(Debug, Clone)]
pub struct ClassRoster {
    pub name: &'static str,
    pub teacher: &'static str,
    pub submitted: bool,
}

/// In-memory submission tracker for the reference school's six classes.
#[derive(Debug, Clone)]
pub struct ClassSubmissionLedger {
    classes: Vec<ClassRoster>,
}

impl ClassSubmissionLedger {
    /// The reference state: Class 3 and Class 5 have not yet submitted.
    pub fn reference() -> Self {
        let class = |name, teacher, submitted| ClassRoster {
            name,
            teacher,
            submitted,
        };
        Self {
            classes: vec![
                class("Class 1", "Ms. Gurpreet Kaur", true),
                class("Class 2", "Mr. Harpreet Singh", true),
                class("Class 3", "Ms. Navjot Kaur", false),
                class("Class 4", "Mr. Manpreet Singh", true),
                class("Class 5", "Ms. Simran Kaur", false),
                class("Class 6", "Mr. Balwinder Singh", true),
            ],
        }
    }

    /// Record a class's submission. Unknown names are ignored.
    pub fn mark_submitted(&mut self, class_name: &str) {
        if let Some(class) = self.classes.iter_mut().find(|c| c.name == class_name) {
            class.submitted = true;
        }
    }

    /// Record every outstanding class as submitted.
    pub fn mark_all_submitted(&mut self) {
        for class in &mut self.classes {
            class.submitted = true;
        }
    }

    /// Classes that have not yet submitted, for reminder lists.
    pub fn outstanding(&self) -> Vec<&ClassRoster> {
        self.classes.iter().filter(|c| !c.submitted).collect()
    }

    pub fn classes(&self) -> &[ClassRoster] {
        &self.classes
    }
}

impl SubmissionSource for ClassSubmissionLedger {
    /// `(submitted, total)` for the day. The reference ledger tracks a
    /// single day, so the date is not consulted.
    fn submission_counts(&self, _date: NaiveDate) -> (u32, u32) {
        let submitted = self.classes.iter().filter(|c| c.submitted).count() as u32;
        (submitted, self.classes.len() as u32)
    }
}
