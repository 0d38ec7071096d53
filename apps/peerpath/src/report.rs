//! One-shot report — runs every computation over a single snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::analysis::{analyze_profiles, AnalysisResult};
use crate::catalog::Vocabulary;
use crate::early::moves::{moves_for_major, EarlyMove};
use crate::early::{compare_signals, extract_early_patterns, select_insight};
use crate::early::{EarlyPatterns, RandomSource, SignalComparisonResult, SingleInsight};
use crate::roadmap::{build_roadmap, CareerRoadmap};
use crate::snapshot::ProfileSnapshot;

const DEFAULT_MAJOR: &str = "your field";

#[derive(Debug, Clone, Serialize)]
pub struct PeerReport {
    pub generated_at: DateTime<Utc>,
    pub major: String,
    pub analysis: AnalysisResult,
    pub early_patterns: EarlyPatterns,
    pub insight: SingleInsight,
    /// Present only when self-reported signals were supplied.
    pub signal_comparison: Option<SignalComparisonResult>,
    /// Present only when a self profile was supplied.
    pub roadmap: Option<CareerRoadmap>,
    pub early_moves: &'static [EarlyMove],
}

/// Builds the full report. `major_override` wins over the snapshot's major,
/// which wins over the most common major among the profiles.
pub fn build_report(
    snapshot: &ProfileSnapshot,
    major_override: Option<&str>,
    vocabulary: &Vocabulary,
    rng: &mut dyn RandomSource,
) -> PeerReport {
    let profiles = &snapshot.profiles;
    let analysis = analyze_profiles(profiles, snapshot.self_profile.as_ref());

    let major = major_override
        .or(snapshot.major.as_deref())
        .or(analysis.top_major())
        .unwrap_or(DEFAULT_MAJOR)
        .to_string();

    let early_patterns = extract_early_patterns(profiles, vocabulary);
    let insight = select_insight(profiles, &early_patterns, &major, rng);
    let signal_comparison = snapshot
        .signals
        .as_ref()
        .map(|signals| compare_signals(signals, profiles));
    let roadmap = snapshot
        .self_profile
        .as_ref()
        .map(|user| build_roadmap(user, &analysis));

    debug!(
        major = %major,
        has_comparison = signal_comparison.is_some(),
        has_roadmap = roadmap.is_some(),
        "assembled peer report"
    );

    PeerReport {
        generated_at: Utc::now(),
        early_moves: moves_for_major(&major),
        major,
        analysis,
        early_patterns,
        insight,
        signal_comparison,
        roadmap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::early::insight::InsightKind;
    use crate::early::FixedIndex;
    use crate::models::{EarlyResumeSignals, Profile};

    fn make_profile(name: &str, major: &str, years: i32, skills: &[&str]) -> Profile {
        Profile {
            name: name.to_string(),
            title: "Engineer".to_string(),
            major: major.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            years_experience: years,
            companies: vec!["Acme".to_string()],
            description: None,
        }
    }

    #[test]
    fn test_empty_snapshot_report() {
        let report = build_report(
            &ProfileSnapshot::default(),
            None,
            &Vocabulary::default(),
            &mut FixedIndex(0),
        );
        assert_eq!(report.major, "your field");
        assert_eq!(report.analysis, AnalysisResult::empty());
        assert!(report.early_patterns.is_empty());
        assert_eq!(report.insight.context, InsightKind::General);
        assert!(report.signal_comparison.is_none());
        assert!(report.roadmap.is_none());
        assert_eq!(report.early_moves.len(), 8);
    }

    #[test]
    fn test_major_precedence() {
        let snapshot = ProfileSnapshot {
            major: None,
            profiles: vec![make_profile("a", "Economics", 1, &["Excel"])],
            ..ProfileSnapshot::default()
        };
        let vocab = Vocabulary::default();
        let inferred = build_report(&snapshot, None, &vocab, &mut FixedIndex(0));
        assert_eq!(inferred.major, "Economics");

        let snapshot = ProfileSnapshot {
            major: Some("Finance".to_string()),
            ..snapshot
        };
        let from_snapshot = build_report(&snapshot, None, &vocab, &mut FixedIndex(0));
        assert_eq!(from_snapshot.major, "Finance");

        let overridden = build_report(&snapshot, Some("Law"), &vocab, &mut FixedIndex(0));
        assert_eq!(overridden.major, "Law");
        assert!(overridden.insight.insight.contains("Law"));
    }

    #[test]
    fn test_optional_sections_follow_inputs() {
        let snapshot = ProfileSnapshot {
            major: Some("Computer Science".to_string()),
            profiles: vec![
                make_profile("a", "Computer Science", 1, &["Python"]),
                make_profile("b", "Computer Science", 6, &["Go"]),
            ],
            self_profile: Some(make_profile("me", "Computer Science", 2, &["Rust"])),
            signals: Some(EarlyResumeSignals {
                skills: vec!["Python".to_string()],
                ..EarlyResumeSignals::default()
            }),
        };
        let report = build_report(&snapshot, None, &Vocabulary::default(), &mut FixedIndex(0));

        let comparison = report.signal_comparison.expect("signals supplied");
        assert_eq!(comparison.user_strengths, vec!["Python"]);
        let roadmap = report.roadmap.expect("self profile supplied");
        assert_eq!(roadmap.current_phase, 1);
        assert!(report.analysis.user_gap.is_some());
        assert_eq!(report.insight.context, InsightKind::SkillsRole);
    }

    #[test]
    fn test_report_serializes() {
        let report = build_report(
            &ProfileSnapshot::default(),
            Some("Physics"),
            &Vocabulary::default(),
            &mut FixedIndex(0),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["major"], "Physics");
        assert!(json["roadmap"].is_null());
        assert!(json["generated_at"].is_string());
        assert_eq!(json["early_moves"].as_array().unwrap().len(), 8);
    }
}
