//! Career Pattern Synthesizer — per-tier common titles and typical skills.

use serde::{Deserialize, Serialize};

use crate::analysis::frequency::{self, round_half_up, ProfileField, SkillAnalysis};
use crate::analysis::stage::{self, CareerStage};
use crate::models::Profile;

const TITLES_PER_STAGE: usize = 3;
const SKILLS_PER_STAGE: usize = 8;

/// Fixed typical-years values for the entry and mid tiers. Only the senior
/// tier's value is computed from the data.
const ENTRY_TYPICAL_YEARS: i32 = 2;
const MID_TYPICAL_YEARS: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPattern {
    pub stage: CareerStage,
    /// Display label, e.g. "Entry-Level (0-3 years)".
    pub label: String,
    pub common_titles: Vec<String>,
    pub average_years_in_stage: i32,
    pub typical_skills: Vec<SkillAnalysis>,
}

/// Builds one pattern per non-empty tier, entry → mid → senior.
///
/// Profiles are stably sorted by years of experience first, so ties inside a
/// tier resolve in order of experience and then input order.
pub fn synthesize_career_patterns(profiles: &[Profile]) -> Vec<CareerPattern> {
    if profiles.is_empty() {
        return Vec::new();
    }

    let mut by_experience: Vec<&Profile> = profiles.iter().collect();
    by_experience.sort_by_key(|p| p.years_experience);

    let buckets = stage::segment(&by_experience);

    CareerStage::ALL
        .iter()
        .filter_map(|&stage| {
            let tier = buckets.get(stage);
            if tier.is_empty() {
                return None;
            }
            Some(CareerPattern {
                stage,
                label: stage.label().to_string(),
                common_titles: frequency::top(tier, ProfileField::Title, TITLES_PER_STAGE)
                    .into_iter()
                    .map(|e| e.value)
                    .collect(),
                average_years_in_stage: typical_years(stage, tier),
                typical_skills: frequency::top(tier, ProfileField::Skills, SKILLS_PER_STAGE)
                    .into_iter()
                    .map(SkillAnalysis::from)
                    .collect(),
            })
        })
        .collect()
}

fn typical_years(stage: CareerStage, tier: &[&Profile]) -> i32 {
    match stage {
        CareerStage::Entry => ENTRY_TYPICAL_YEARS,
        CareerStage::Mid => MID_TYPICAL_YEARS,
        CareerStage::Senior => {
            let sum: i64 = tier.iter().map(|p| p.years_experience as i64).sum();
            round_half_up(sum as f64 / tier.len() as f64) as i32
        }
    }
}
