//! Roadmap Builder — turns a self profile and a field analysis into a phase
//! and three milestones.
//!
//! Phase boundaries match the stage tiers (≤3 → 1, ≤8 → 2, else 3). Tier skill
//! lists are looked up by stage, so a missing mid tier yields an empty list
//! rather than another tier's skills.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::gap::{missing_skills, years_behind};
use crate::analysis::stage::CareerStage;
use crate::analysis::AnalysisResult;
use crate::models::Profile;
use crate::roadmap::templates::{templates_for_phase, MilestoneTemplate, SkillSource};

const FIELD_FALLBACK: &str = "your field";
const SKILL_FALLBACK: &str = "your target skills";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapMilestone {
    pub id: String,
    pub phase: u8,
    pub title: String,
    pub duration: String,
    pub description: String,
    pub skills: Vec<String>,
    pub actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    pub milestone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRoadmap {
    pub current_phase: u8,
    pub user_profile: Profile,
    pub milestones: Vec<RoadmapMilestone>,
    pub total_duration: String,
    pub summary: String,
}

pub fn phase_for_years(years: i32) -> u8 {
    match CareerStage::from_years(years) {
        CareerStage::Entry => 1,
        CareerStage::Mid => 2,
        CareerStage::Senior => 3,
    }
}

pub fn build_roadmap(user: &Profile, analysis: &AnalysisResult) -> CareerRoadmap {
    let phase = phase_for_years(user.years_experience);
    let field_average = analysis.average_experience;

    let milestones: Vec<RoadmapMilestone> = templates_for_phase(phase)
        .iter()
        .map(|template| render_milestone(template, phase, user, analysis))
        .collect();

    debug!(
        phase,
        years = user.years_experience,
        field_average,
        "built career roadmap"
    );

    CareerRoadmap {
        current_phase: phase,
        user_profile: user.clone(),
        milestones,
        total_duration: total_duration(phase, user.years_experience, field_average),
        summary: summary(phase, user, analysis),
    }
}

fn render_milestone(
    template: &MilestoneTemplate,
    phase: u8,
    user: &Profile,
    analysis: &AnalysisResult,
) -> RoadmapMilestone {
    let first_missing = missing_skills(user, &analysis.skill_analysis, 1);
    let skill = first_missing.first().map(String::as_str).unwrap_or(SKILL_FALLBACK);
    let major = analysis.top_major().unwrap_or(FIELD_FALLBACK);

    let resources = template
        .resources
        .iter()
        .map(|r| r.replace("{skill}", skill).replace("{major}", major))
        .collect();

    RoadmapMilestone {
        id: template.id.to_string(),
        phase,
        title: template.title.to_string(),
        duration: template.duration.to_string(),
        description: template.description.to_string(),
        skills: resolve_skills(template.skills, user, analysis),
        actions: template.actions.iter().map(|a| a.to_string()).collect(),
        resources: Some(resources),
        milestone: template.milestone.to_string(),
    }
}

fn resolve_skills(source: SkillSource, user: &Profile, analysis: &AnalysisResult) -> Vec<String> {
    match source {
        SkillSource::Missing(limit) => missing_skills(user, &analysis.skill_analysis, limit),
        SkillSource::FieldTop(limit) => analysis.top_skill_names(limit),
        SkillSource::Stage(stage, limit) => analysis
            .pattern_for(stage)
            .map(|p| {
                p.typical_skills
                    .iter()
                    .take(limit)
                    .map(|s| s.skill.clone())
                    .collect()
            })
            .unwrap_or_default(),
        SkillSource::Fixed(skills) => skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn total_duration(phase: u8, user_years: i32, field_average: i32) -> String {
    match phase {
        1 => format!(
            "18-24 months to mid-level (typical career path: {field_average} years to senior)"
        ),
        2 => {
            let remaining = years_behind(field_average, user_years);
            if remaining > 0 {
                format!("12-24 months to senior level ({remaining} years ahead)")
            } else {
                "12-24 months to senior level (already past the field's typical years to senior)"
                    .to_string()
            }
        }
        _ => "Focus on strategic impact and leadership".to_string(),
    }
}

fn summary(phase: u8, user: &Profile, analysis: &AnalysisResult) -> String {
    let field_average = analysis.average_experience;
    match phase {
        1 => {
            let top = analysis.top_skill_names(3);
            let focus = if top.is_empty() {
                "the field's most common skills".to_string()
            } else {
                top.join(", ")
            };
            format!(
                "Based on the analysis of {} professionals in your field, you're at the beginning of your career journey. \
                 Your roadmap focuses on building foundational skills and securing your first role. \
                 Most professionals in {} take {field_average} years to reach senior positions. \
                 Your first 18-24 months should focus on the top skills: {focus}.",
                analysis.total_profiles,
                analysis.top_major().unwrap_or(FIELD_FALLBACK),
            )
        }
        2 => {
            let remaining = years_behind(field_average, user.years_experience);
            let remaining = if remaining > 0 {
                remaining.to_string()
            } else {
                "continued".to_string()
            };
            let top = analysis.top_skill_names(2);
            let mastery = if top.is_empty() {
                "your core skills".to_string()
            } else {
                top.join(" and ")
            };
            format!(
                "You're in the mid-career phase with {} years of experience. \
                 Based on peer patterns, you typically need {remaining} more years to reach senior leadership. \
                 Your roadmap emphasizes specialization, leadership development, and building your unique value proposition. \
                 Focus on demonstrating mastery in {mastery}.",
                user.years_experience,
            )
        }
        _ => format!(
            "You've reached the senior phase of your career. \
             Your roadmap now focuses on strategic impact, thought leadership, and shaping the direction of your field. \
             With {} years of experience, consider expanding your influence through mentorship, board roles, or industry initiatives. \
             This phase is about leveraging your expertise to create lasting impact.",
            user.years_experience,
        ),
    }
}
