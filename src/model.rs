use serde::{Deserialize, Serialize};

/// Substituted for an empty grade description when a row is displayed.
pub const GRADE_PLACEHOLDER: &str = "등급";

/// Full parsed result for one input page. Built once per file, rendered,
/// then discarded; never mutated after extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub heading: String,
    pub subjects: Vec<Subject>,
}

impl Report {
    /// A report with no subjects produces no output file.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.subjects.iter().map(|s| s.cards.len()).sum()
    }
}

/// One exam subject area (국어, 수학, ...) grouping cards.
/// A subject with zero cards is never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub cards: Vec<Card>,
}

/// One sub-topic or exam variant within a subject.
/// A card with zero grade rows is never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub difficulty: String,
    pub grades: Vec<GradeRow>,
}

/// One grade-tier entry. `grade` is usually "1".."9" but may be arbitrary
/// label text; `value` stays raw text and is never parsed numerically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRow {
    pub grade: String,
    pub desc: String,
    pub value: String,
}
