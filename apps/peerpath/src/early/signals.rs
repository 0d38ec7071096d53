//! Signal Classifier — places self-reported early resume signals relative to
//! how often peers at each stage show them.
//!
//! Skills are matched against peer skills; experiences against peer companies.
//! A signal is `common` when enough entry-tier peers have it, `later` when it is
//! rarer early but common in the mid tier, and `less-common` otherwise.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::frequency::{self, percentage_of, ProfileField};
use crate::analysis::stage::{self, StageBuckets};
use crate::models::{EarlyResumeSignals, Profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalKind {
    Skill,
    Experience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalComparison {
    Common,
    Later,
    LessCommon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparedSignal {
    pub signal: String,
    #[serde(rename = "type")]
    pub kind: SignalKind,
    pub comparison: SignalComparison,
    /// Share of entry-tier peers with this signal, 0–100.
    pub frequency: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalComparisonResult {
    pub common_at_stage: Vec<ComparedSignal>,
    pub often_appears_later: Vec<ComparedSignal>,
    pub less_common_early: Vec<ComparedSignal>,
    pub user_strengths: Vec<String>,
    pub aligned_with_pattern: bool,
}

/// Percent thresholds for the `common` and `later` buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    pub skill_percent: u32,
    pub experience_percent: u32,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            skill_percent: 40,
            experience_percent: 30,
        }
    }
}

/// Classifies one signal from its entry-tier and mid-tier percentages.
pub fn classify(early_percent: u32, mid_percent: u32, threshold: u32) -> SignalComparison {
    if early_percent >= threshold {
        SignalComparison::Common
    } else if mid_percent > early_percent && mid_percent >= threshold {
        SignalComparison::Later
    } else {
        SignalComparison::LessCommon
    }
}

pub fn compare_signals(signals: &EarlyResumeSignals, profiles: &[Profile]) -> SignalComparisonResult {
    compare_signals_with(signals, profiles, &ClassificationThresholds::default())
}

/// Compares self-reported signals against stage-segmented peer frequencies.
///
/// An empty entry tier short-circuits to an empty, unaligned result.
/// Alignment counts every `common` signal (skills and experiences) against
/// half the number of self-reported skills only.
pub fn compare_signals_with(
    signals: &EarlyResumeSignals,
    profiles: &[Profile],
    thresholds: &ClassificationThresholds,
) -> SignalComparisonResult {
    let buckets = stage::segment(profiles);
    if buckets.entry.is_empty() {
        debug!("entry tier empty; signal comparison skipped");
        return SignalComparisonResult::default();
    }

    let mut compared = compare_field(
        &signals.skills,
        &buckets,
        ProfileField::Skills,
        SignalKind::Skill,
        thresholds.skill_percent,
    );
    compared.extend(compare_field(
        &signals.experiences,
        &buckets,
        ProfileField::Companies,
        SignalKind::Experience,
        thresholds.experience_percent,
    ));

    let mut result = SignalComparisonResult::default();
    for signal in compared {
        match signal.comparison {
            SignalComparison::Common => {
                result.user_strengths.push(signal.signal.clone());
                result.common_at_stage.push(signal);
            }
            SignalComparison::Later => result.often_appears_later.push(signal),
            SignalComparison::LessCommon => result.less_common_early.push(signal),
        }
    }

    result.aligned_with_pattern =
        result.common_at_stage.len() as f64 >= signals.skills.len() as f64 * 0.5;

    debug!(
        common = result.common_at_stage.len(),
        later = result.often_appears_later.len(),
        less_common = result.less_common_early.len(),
        aligned = result.aligned_with_pattern,
        "compared early resume signals"
    );

    result
}

fn compare_field(
    values: &[String],
    buckets: &StageBuckets<'_>,
    field: ProfileField,
    kind: SignalKind,
    threshold: u32,
) -> Vec<ComparedSignal> {
    let early_counts = frequency::count_map(&buckets.entry, field);
    let mid_counts = frequency::count_map(&buckets.mid, field);

    values
        .iter()
        .map(|value| {
            let early_percent = percentage_of(
                early_counts.get(value).copied().unwrap_or(0),
                buckets.entry.len(),
            );
            let mid_percent = percentage_of(
                mid_counts.get(value).copied().unwrap_or(0),
                buckets.mid.len(),
            );
            ComparedSignal {
                signal: value.clone(),
                kind,
                comparison: classify(early_percent, mid_percent, threshold),
                frequency: early_percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EducationStage;

    fn make_profile(years: i32, skills: &[&str], companies: &[&str]) -> Profile {
        Profile {
            name: format!("p{years}"),
            title: "Engineer".to_string(),
            major: "Computer Science".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            years_experience: years,
            companies: companies.iter().map(|c| c.to_string()).collect(),
            description: None,
        }
    }

    fn make_signals(skills: &[&str], experiences: &[&str]) -> EarlyResumeSignals {
        EarlyResumeSignals {
            stage: EducationStage::Graduating,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experiences: experiences.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(classify(40, 0, 40), SignalComparison::Common);
        assert_eq!(classify(39, 41, 40), SignalComparison::Later);
        assert_eq!(classify(10, 10, 40), SignalComparison::LessCommon);
        assert_eq!(classify(39, 39, 40), SignalComparison::LessCommon);
        assert_eq!(classify(30, 0, 30), SignalComparison::Common);
        assert_eq!(classify(20, 30, 30), SignalComparison::Later);
    }

    #[test]
    fn test_rounded_percentages_on_the_threshold() {
        let profiles = vec![
            make_profile(0, &["Python"], &[]),
            make_profile(1, &["Python"], &[]),
            make_profile(1, &["SQL"], &[]),
            make_profile(2, &[], &[]),
            make_profile(3, &[], &[]),
            make_profile(4, &["SQL"], &[]),
            make_profile(5, &["SQL"], &[]),
            make_profile(6, &[], &[]),
            make_profile(7, &[], &[]),
            make_profile(8, &[], &[]),
        ];
        let result = compare_signals(&make_signals(&["Python", "SQL"], &[]), &profiles);

        // Python: 2 of 5 entry profiles, exactly 40%
        assert_eq!(result.common_at_stage.len(), 1);
        assert_eq!(result.common_at_stage[0].signal, "Python");
        assert_eq!(result.common_at_stage[0].frequency, 40);

        // SQL: 20% early, 40% mid
        assert_eq!(result.often_appears_later.len(), 1);
        assert_eq!(result.often_appears_later[0].signal, "SQL");
        assert_eq!(result.often_appears_later[0].frequency, 20);
        assert!(result.less_common_early.is_empty());
    }

    #[test]
    fn test_empty_entry_tier_short_circuits() {
        let profiles = vec![make_profile(5, &["Python"], &[])];
        let result = compare_signals(&make_signals(&["Python"], &["Acme"]), &profiles);
        assert_eq!(result, SignalComparisonResult::default());
        assert!(!result.aligned_with_pattern);
    }

    #[test]
    fn test_skills_bucketed_by_stage_frequency() {
        let profiles = vec![
            make_profile(1, &["Python", "Excel"], &[]),
            make_profile(2, &["Python"], &[]),
            make_profile(5, &["Kubernetes"], &[]),
            make_profile(6, &["Kubernetes"], &[]),
        ];
        let result = compare_signals(&make_signals(&["Python", "Kubernetes", "Cobol"], &[]), &profiles);

        assert_eq!(result.common_at_stage.len(), 1);
        assert_eq!(result.common_at_stage[0].signal, "Python");
        assert_eq!(result.common_at_stage[0].frequency, 100);
        assert_eq!(result.common_at_stage[0].kind, SignalKind::Skill);

        assert_eq!(result.often_appears_later.len(), 1);
        assert_eq!(result.often_appears_later[0].signal, "Kubernetes");
        assert_eq!(result.often_appears_later[0].frequency, 0);

        assert_eq!(result.less_common_early.len(), 1);
        assert_eq!(result.less_common_early[0].signal, "Cobol");

        assert_eq!(result.user_strengths, vec!["Python"]);
        // 1 common >= 3 * 0.5 is false
        assert!(!result.aligned_with_pattern);
    }

    #[test]
    fn test_experiences_match_companies_with_lower_threshold() {
        let profiles = vec![
            make_profile(0, &[], &["Acme"]),
            make_profile(1, &[], &[]),
            make_profile(2, &[], &[]),
        ];
        // Acme: 33% of entry tier, above the experience threshold of 30
        let result = compare_signals(&make_signals(&[], &["Acme"]), &profiles);
        assert_eq!(result.common_at_stage.len(), 1);
        assert_eq!(result.common_at_stage[0].kind, SignalKind::Experience);
        assert_eq!(result.common_at_stage[0].frequency, 33);
    }

    #[test]
    fn test_alignment_denominator_counts_only_skills() {
        let profiles = vec![make_profile(1, &["Python"], &["Acme"])];
        // 2 common (1 skill + 1 experience) vs 4 skills * 0.5 = 2 → aligned
        let result = compare_signals(
            &make_signals(&["Python", "Rust", "Go", "Zig"], &["Acme"]),
            &profiles,
        );
        assert_eq!(result.common_at_stage.len(), 2);
        assert!(result.aligned_with_pattern);
    }

    #[test]
    fn test_no_skills_is_trivially_aligned() {
        let profiles = vec![make_profile(1, &["Python"], &[])];
        let result = compare_signals(&make_signals(&[], &["Nowhere"]), &profiles);
        assert!(result.common_at_stage.is_empty());
        assert!(result.aligned_with_pattern);
    }

    #[test]
    fn test_empty_mid_tier_never_later() {
        let profiles = vec![make_profile(1, &["Excel"], &[]), make_profile(2, &[], &[])];
        let result = compare_signals(&make_signals(&["SQL"], &[]), &profiles);
        assert_eq!(result.less_common_early.len(), 1);
    }

    #[test]
    fn test_custom_thresholds() {
        let profiles = vec![
            make_profile(1, &["Python"], &[]),
            make_profile(2, &[], &[]),
            make_profile(3, &[], &[]),
            make_profile(3, &[], &[]),
        ];
        let signals = make_signals(&["Python"], &[]);
        // 25% of the entry tier
        let default_result = compare_signals(&signals, &profiles);
        assert_eq!(default_result.less_common_early.len(), 1);

        let lenient = ClassificationThresholds {
            skill_percent: 25,
            experience_percent: 25,
        };
        let result = compare_signals_with(&signals, &profiles, &lenient);
        assert_eq!(result.common_at_stage.len(), 1);
        assert_eq!(result.common_at_stage[0].frequency, 25);
    }

    #[test]
    fn test_compared_signal_wire_shape() {
        let signal = ComparedSignal {
            signal: "SQL".to_string(),
            kind: SignalKind::Skill,
            comparison: SignalComparison::LessCommon,
            frequency: 10,
        };
        let json = serde_json::to_value(&signal).unwrap();
        assert_eq!(json["type"], "skill");
        assert_eq!(json["comparison"], "less-common");
    }
}
