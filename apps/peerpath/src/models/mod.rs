pub mod profile;
pub mod signals;

pub use profile::Profile;
pub use signals::{EarlyResumeSignals, EducationStage};
