//! Grouping answers by topical area.
//!
//! Used purely for display sectioning; grouping has no effect on the
//! statistics.

use crate::models::Answer;
use indexmap::IndexMap;

/// Bucket name for answers with an absent or empty area.
pub const OTHER_AREA: &str = "Other";

/// Partition answers into buckets keyed by area name.
///
/// Groups appear in first-seen order and each answer keeps its original
/// relative order within its group.
pub fn group_by_area(answers: &[Answer]) -> IndexMap<String, Vec<Answer>> {
    let mut grouped: IndexMap<String, Vec<Answer>> = IndexMap::new();

    for answer in answers {
        let area = match answer.area.as_deref() {
            Some(area) if !area.is_empty() => area.to_string(),
            _ => OTHER_AREA.to_string(),
        };
        grouped.entry(area).or_default().push(answer.clone());
    }

    grouped
}
