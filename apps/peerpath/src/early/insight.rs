//! Insight Selector — builds candidate one-line insights from early patterns
//! and picks one through an injected random source.
//!
//! `RandomSource` is the only seam for non-determinism. Production callers wrap
//! a `rand` generator in `RngSource`; tests use `FixedIndex` or a seeded `StdRng`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::stage;
use crate::early::patterns::{EarlyPatterns, ExperienceCategory};
use crate::models::Profile;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Which pattern an insight was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightKind {
    General,
    SkillsRole,
    SkillCombination,
    CompanyPathway,
    ActivityPattern,
    RoleProgression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleInsight {
    pub insight: String,
    pub context: InsightKind,
}

// ────────────────────────────────────────────────────────────────────────────
// Random source seam
// ────────────────────────────────────────────────────────────────────────────

/// Picks an index in `0..len`. Callers never pass `len == 0`.
pub trait RandomSource {
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Adapts any `rand` generator.
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Always picks the same position, clamped to the last candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Selection
// ────────────────────────────────────────────────────────────────────────────

/// Builds every insight whose data requirements are met, in a fixed order.
pub fn build_insight_candidates(patterns: &EarlyPatterns, major: &str) -> Vec<SingleInsight> {
    let mut candidates = Vec::new();
    let skills = &patterns.common_skills;
    let roles = &patterns.common_roles;

    if let (Some(skill), Some(role)) = (skills.first(), roles.first()) {
        candidates.push(SingleInsight {
            insight: format!(
                "{}% of early-career {major} professionals start with {} skills, often in roles like {}.",
                skill.percentage, skill.skill, role.role
            ),
            context: InsightKind::SkillsRole,
        });
    }

    if let [first, second, ..] = skills.as_slice() {
        candidates.push(SingleInsight {
            insight: format!(
                "The most common early technical foundation combines {} and {}, found in {}% and {}% of early professionals respectively.",
                first.skill, second.skill, first.percentage, second.percentage
            ),
            context: InsightKind::SkillCombination,
        });
    }

    let companies: Vec<&str> = patterns
        .experiences_in(ExperienceCategory::Company)
        .take(2)
        .map(|e| e.experience.as_str())
        .collect();
    if !companies.is_empty() {
        candidates.push(SingleInsight {
            insight: format!(
                "{major} professionals typically begin their careers at companies like {}, where they build core competencies.",
                companies.join(" or ")
            ),
            context: InsightKind::CompanyPathway,
        });
    }

    if let Some(activity) = patterns
        .experiences_in(ExperienceCategory::ProjectActivity)
        .next()
    {
        candidates.push(SingleInsight {
            insight: format!(
                "Early exposure to {} is a common pattern among successful {major} professionals, typically occurring in the first few years.",
                activity.experience
            ),
            context: InsightKind::ActivityPattern,
        });
    }

    if let [first, second, ..] = roles.as_slice() {
        candidates.push(SingleInsight {
            insight: format!(
                "{major} early careers commonly start as {}, with many transitioning to {} within the first 3 years.",
                first.role, second.role
            ),
            context: InsightKind::RoleProgression,
        });
    }

    candidates
}

/// The insight returned when the entry tier is empty or nothing qualifies.
pub fn fallback_insight(major: &str) -> SingleInsight {
    SingleInsight {
        insight: format!(
            "Early-career professionals in {major} typically start their journey by building foundational skills and gaining hands-on experience."
        ),
        context: InsightKind::General,
    }
}

/// Selects one insight uniformly among the qualifying candidates.
pub fn select_insight(
    profiles: &[Profile],
    patterns: &EarlyPatterns,
    major: &str,
    rng: &mut dyn RandomSource,
) -> SingleInsight {
    if stage::entry_tier(profiles).is_empty() {
        return fallback_insight(major);
    }

    let mut candidates = build_insight_candidates(patterns, major);
    debug!(candidates = candidates.len(), "built insight candidates");

    if candidates.is_empty() {
        return fallback_insight(major);
    }

    let index = rng.pick_index(candidates.len()).min(candidates.len() - 1);
    candidates.swap_remove(index)
}
