// Personalized roadmap: phase selection and templated milestones.

pub mod builder;
pub mod templates;

pub use builder::{build_roadmap, phase_for_years, CareerRoadmap, RoadmapMilestone};
