// Early-career view: entry-tier patterns, one-line insights, self-reported
// signal comparison, and the common early moves guide.

pub mod insight;
pub mod moves;
pub mod patterns;
pub mod signals;

pub use insight::{select_insight, FixedIndex, RandomSource, RngSource, SingleInsight};
pub use patterns::{extract_early_patterns, EarlyPatterns};
pub use signals::{compare_signals, SignalComparisonResult};
