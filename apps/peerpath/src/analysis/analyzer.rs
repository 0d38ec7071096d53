//! Field analysis — composes the aggregator, segmenter, pattern synthesizer,
//! gap analyzer, and recommendation generator into one `AnalysisResult`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::frequency::{self, round_half_up, CompanyAnalysis, ProfileField, SkillAnalysis};
use crate::analysis::gap::{analyze_user_gap, UserGap};
use crate::analysis::patterns::{synthesize_career_patterns, CareerPattern};
use crate::analysis::recommendations::generate_recommendations;
use crate::analysis::stage::CareerStage;
use crate::models::Profile;

const TOP_SKILLS: usize = 15;
const TOP_COMPANIES: usize = 10;

/// Snapshot analysis of a profile collection. Recomputed on demand, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_profiles: usize,
    pub average_experience: i32,
    pub skill_analysis: Vec<SkillAnalysis>,
    pub company_analysis: Vec<CompanyAnalysis>,
    pub common_majors: Vec<String>,
    /// Ordered entry → mid → senior; empty tiers are absent.
    pub career_patterns: Vec<CareerPattern>,
    pub recommendations: Vec<String>,
    pub user_gap: Option<UserGap>,
}

impl AnalysisResult {
    /// The zero-profile result: every count zero, every list empty, no gap.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Career pattern for a tier, looked up by stage rather than position.
    pub fn pattern_for(&self, stage: CareerStage) -> Option<&CareerPattern> {
        self.career_patterns.iter().find(|p| p.stage == stage)
    }

    pub fn top_major(&self) -> Option<&str> {
        self.common_majors.first().map(String::as_str)
    }

    pub fn top_skill_names(&self, limit: usize) -> Vec<String> {
        self.skill_analysis
            .iter()
            .take(limit)
            .map(|s| s.skill.clone())
            .collect()
    }
}

/// Analyzes a profile collection, optionally against a self profile.
///
/// An empty collection yields `AnalysisResult::empty()` even when a self
/// profile is supplied.
pub fn analyze_profiles(profiles: &[Profile], user: Option<&Profile>) -> AnalysisResult {
    if profiles.is_empty() {
        debug!("no profiles supplied; returning empty analysis");
        return AnalysisResult::empty();
    }

    let skill_analysis: Vec<SkillAnalysis> =
        frequency::top(profiles, ProfileField::Skills, TOP_SKILLS)
            .into_iter()
            .map(SkillAnalysis::from)
            .collect();

    let company_analysis: Vec<CompanyAnalysis> =
        frequency::top(profiles, ProfileField::Companies, TOP_COMPANIES)
            .into_iter()
            .map(CompanyAnalysis::from)
            .collect();

    let common_majors: Vec<String> = frequency::rank(profiles, ProfileField::Major)
        .into_iter()
        .map(|e| e.value)
        .collect();

    let career_patterns = synthesize_career_patterns(profiles);
    let average_experience = average_years(profiles);

    let recommendations =
        generate_recommendations(&skill_analysis, &company_analysis, average_experience);

    let user_gap = user.map(|u| analyze_user_gap(u, &skill_analysis, average_experience));

    debug!(
        total_profiles = profiles.len(),
        skills = skill_analysis.len(),
        companies = company_analysis.len(),
        patterns = career_patterns.len(),
        has_user_gap = user_gap.is_some(),
        "analyzed profiles"
    );

    AnalysisResult {
        total_profiles: profiles.len(),
        average_experience,
        skill_analysis,
        company_analysis,
        common_majors,
        career_patterns,
        recommendations,
        user_gap,
    }
}

fn average_years(profiles: &[Profile]) -> i32 {
    let sum: i64 = profiles.iter().map(|p| p.years_experience as i64).sum();
    round_half_up(sum as f64 / profiles.len() as f64) as i32
}
