//! Peer career-pattern engine.
//!
//! Pure, synchronous computations over a snapshot of self-reported professional
//! profiles: field statistics and career patterns, a self-vs-field gap, early
//! career patterns and insights, early resume signal comparison, and a phased
//! roadmap. Loading and rendering are left to callers; `snapshot` and `report`
//! are the pieces the bundled binary uses for that.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod early;
pub mod errors;
pub mod models;
pub mod report;
pub mod roadmap;
pub mod snapshot;

pub use analysis::{analyze_profiles, AnalysisResult, CareerStage};
pub use catalog::Vocabulary;
pub use early::{compare_signals, extract_early_patterns, select_insight};
pub use errors::EngineError;
pub use models::{EarlyResumeSignals, EducationStage, Profile};
pub use report::{build_report, PeerReport};
pub use roadmap::{build_roadmap, CareerRoadmap};
