//! Answer statistics.
//!
//! Reduces an answer collection into counts per recognized category.
//! Values outside the three exact literals are excluded from every counter,
//! including the total; the source data relies on this behavior.

use crate::models::{Answer, AnswerValue};

/// Aggregate Yes / No / N-A counts over one response's answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerStats {
    /// Number of "Yes" answers.
    pub yes: usize,
    /// Number of "No" answers.
    pub no: usize,
    /// Number of "N/A" answers.
    pub na: usize,
}

impl AnswerStats {
    /// Compute statistics from an answer list.
    pub fn from_answers(answers: &[Answer]) -> Self {
        answers.iter().fold(Self::default(), |mut stats, answer| {
            match answer.answer {
                AnswerValue::Yes => stats.yes += 1,
                AnswerValue::No => stats.no += 1,
                AnswerValue::NotApplicable => stats.na += 1,
                AnswerValue::Other(_) => {}
            }
            stats
        })
    }

    /// Total counted answers. Unrecognized values are not included.
    pub fn total(&self) -> usize {
        self.yes + self.no + self.na
    }

    /// Display percentage for one category, rounded to the nearest integer.
    ///
    /// Each category is rounded independently, so the three percentages may
    /// not sum to exactly 100. When the total is zero the percentage is 0.
    pub fn percentage(&self, count: usize) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        ((count as f64 / total as f64) * 100.0).round() as u32
    }
}
