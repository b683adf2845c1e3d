//! Summary derivation over a loaded answer set.
//!
//! Statistics and grouping are pure recomputations from the immutable
//! answer list; nothing here holds state between calls.

pub mod grouping;
pub mod stats;

pub use grouping::{group_by_area, OTHER_AREA};
pub use stats::AnswerStats;
