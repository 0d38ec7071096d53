// Field analysis: frequency ranking, stage segmentation, career patterns,
// self-vs-field gap, and templated recommendations.

pub mod analyzer;
pub mod frequency;
pub mod gap;
pub mod patterns;
pub mod recommendations;
pub mod stage;

pub use analyzer::{analyze_profiles, AnalysisResult};
pub use stage::CareerStage;
