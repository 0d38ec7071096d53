//! Early-Pattern Extractor — what entry-tier professionals commonly have.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::frequency::{self, ProfileField};
use crate::analysis::stage;
use crate::catalog::Vocabulary;
use crate::models::Profile;

const EARLY_SKILLS_LIMIT: usize = 12;
const EARLY_ROLES_LIMIT: usize = 10;
const EARLY_EXPERIENCES_LIMIT: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCount {
    pub role: String,
    pub count: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceCategory {
    Company,
    #[serde(rename = "Project/Activity")]
    ProjectActivity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSignal {
    pub experience: String,
    pub category: ExperienceCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarlyPatterns {
    pub common_skills: Vec<SkillCount>,
    pub common_roles: Vec<RoleCount>,
    pub common_experiences: Vec<ExperienceSignal>,
}

impl EarlyPatterns {
    pub fn is_empty(&self) -> bool {
        self.common_skills.is_empty()
            && self.common_roles.is_empty()
            && self.common_experiences.is_empty()
    }

    /// Experience signals of one category, in list order.
    pub fn experiences_in(&self, category: ExperienceCategory) -> impl Iterator<Item = &ExperienceSignal> {
        self.common_experiences
            .iter()
            .filter(move |e| e.category == category)
    }
}

/// Extracts skills, roles, and experience signals from the entry tier.
pub fn extract_early_patterns(profiles: &[Profile], vocabulary: &Vocabulary) -> EarlyPatterns {
    let early = stage::entry_tier(profiles);
    if early.is_empty() {
        debug!("entry tier empty; no early patterns");
        return EarlyPatterns::default();
    }

    let common_skills = frequency::top(&early, ProfileField::Skills, EARLY_SKILLS_LIMIT)
        .into_iter()
        .map(|e| SkillCount {
            skill: e.value,
            count: e.count,
            percentage: e.percentage,
        })
        .collect();

    let common_roles = frequency::top(&early, ProfileField::Title, EARLY_ROLES_LIMIT)
        .into_iter()
        .map(|e| RoleCount {
            role: e.value,
            count: e.count,
            percentage: e.percentage,
        })
        .collect();

    let common_experiences = collect_experience_signals(&early, vocabulary);

    debug!(
        entry_profiles = early.len(),
        experiences = common_experiences.len(),
        "extracted early patterns"
    );

    EarlyPatterns {
        common_skills,
        common_roles,
        common_experiences,
    }
}

/// Companies (each once, first-seen order) interleaved per profile with
/// keyword hits from its description, deduplicated by text and capped.
fn collect_experience_signals(early: &[&Profile], vocabulary: &Vocabulary) -> Vec<ExperienceSignal> {
    let mut signals = Vec::new();
    let mut seen_companies: HashSet<&str> = HashSet::new();

    for profile in early {
        for company in &profile.companies {
            if seen_companies.insert(company.as_str()) {
                signals.push(ExperienceSignal {
                    experience: company.clone(),
                    category: ExperienceCategory::Company,
                });
            }
        }

        if let Some(description) = profile.description.as_deref() {
            for keyword in vocabulary.find_activity_keywords(description) {
                signals.push(ExperienceSignal {
                    experience: keyword.to_string(),
                    category: ExperienceCategory::ProjectActivity,
                });
            }
        }
    }

    let mut seen_text: HashSet<String> = HashSet::new();
    signals
        .into_iter()
        .filter(|s| seen_text.insert(s.experience.clone()))
        .take(EARLY_EXPERIENCES_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile(
        name: &str,
        title: &str,
        years: i32,
        skills: &[&str],
        companies: &[&str],
        description: Option<&str>,
    ) -> Profile {
        Profile {
            name: name.to_string(),
            title: title.to_string(),
            major: "Computer Science".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            years_experience: years,
            companies: companies.iter().map(|c| c.to_string()).collect(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_no_entry_profiles_gives_empty_patterns() {
        let profiles = vec![make_profile("a", "Lead", 6, &["Go"], &["Acme"], None)];
        let patterns = extract_early_patterns(&profiles, &Vocabulary::default());
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_only_entry_tier_is_counted() {
        let profiles = vec![
            make_profile("a", "Intern", 1, &["Python"], &[], None),
            make_profile("b", "Junior Dev", 3, &["Python", "SQL"], &[], None),
            make_profile("c", "Lead", 7, &["Go", "Go"], &[], None),
        ];
        let patterns = extract_early_patterns(&profiles, &Vocabulary::default());
        assert_eq!(patterns.common_skills.len(), 2);
        assert_eq!(patterns.common_skills[0].skill, "Python");
        assert_eq!(patterns.common_skills[0].count, 2);
        assert_eq!(patterns.common_skills[0].percentage, 100);
        assert_eq!(patterns.common_roles.len(), 2);
        assert_eq!(patterns.common_roles[0].role, "Intern");
        assert_eq!(patterns.common_roles[0].percentage, 50);
    }

    #[test]
    fn test_experience_signals_order_and_categories() {
        let profiles = vec![
            make_profile(
                "a",
                "Intern",
                0,
                &[],
                &["Acme", "Globex"],
                Some("Summer INTERNSHIP plus a hackathon"),
            ),
            make_profile("b", "Intern", 2, &[], &["Globex", "Initech"], Some("startup internship")),
        ];
        let patterns = extract_early_patterns(&profiles, &Vocabulary::default());
        let texts: Vec<&str> = patterns
            .common_experiences
            .iter()
            .map(|e| e.experience.as_str())
            .collect();
        assert_eq!(
            texts,
            vec!["Acme", "Globex", "internship", "hackathon", "Initech", "startup"]
        );
        assert_eq!(patterns.common_experiences[0].category, ExperienceCategory::Company);
        assert_eq!(
            patterns.common_experiences[2].category,
            ExperienceCategory::ProjectActivity
        );
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_category() {
        let profiles = vec![
            make_profile("a", "RA", 1, &[], &["research"], None),
            make_profile("b", "RA", 1, &[], &[], Some("undergraduate research")),
        ];
        let patterns = extract_early_patterns(&profiles, &Vocabulary::default());
        assert_eq!(patterns.common_experiences.len(), 1);
        assert_eq!(patterns.common_experiences[0].category, ExperienceCategory::Company);
    }

    #[test]
    fn test_experiences_capped_at_fifteen() {
        let companies: Vec<String> = (0..20).map(|i| format!("co-{i}")).collect();
        let refs: Vec<&str> = companies.iter().map(String::as_str).collect();
        let profiles = vec![make_profile("a", "Intern", 1, &[], &refs, None)];
        let patterns = extract_early_patterns(&profiles, &Vocabulary::default());
        assert_eq!(patterns.common_experiences.len(), 15);
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocabulary = Vocabulary {
            activity_keywords: vec!["robotics".to_string()],
            ..Vocabulary::default()
        };
        let profiles = vec![make_profile(
            "a",
            "Intern",
            1,
            &[],
            &[],
            Some("Robotics club and an internship"),
        )];
        let patterns = extract_early_patterns(&profiles, &vocabulary);
        assert_eq!(patterns.common_experiences.len(), 1);
        assert_eq!(patterns.common_experiences[0].experience, "robotics");
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&ExperienceCategory::ProjectActivity).unwrap(),
            r#""Project/Activity""#
        );
        assert_eq!(
            serde_json::to_string(&ExperienceCategory::Company).unwrap(),
            r#""Company""#
        );
    }
}
