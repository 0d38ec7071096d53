//! Gap Analyzer — diffs a self profile against the field's top skills.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::frequency::SkillAnalysis;
use crate::models::Profile;

const MISSING_SKILLS_LIMIT: usize = 5;
const SKILLS_AHEAD_LIMIT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserGap {
    /// Field top skills the self profile lacks, in field rank order.
    pub missing_skills: Vec<String>,
    /// Self skills outside the field's top list, in self order.
    pub skills_ahead: Vec<String>,
    /// field average − self years; negative means the self profile is ahead.
    pub experience_gap: i64,
}

pub fn analyze_user_gap(
    user: &Profile,
    field_skills: &[SkillAnalysis],
    average_experience: i32,
) -> UserGap {
    let user_skills = unique_in_order(&user.skills);
    let field_set: HashSet<&str> = field_skills.iter().map(|s| s.skill.as_str()).collect();

    let skills_ahead = user_skills
        .iter()
        .filter(|skill| !field_set.contains(*skill))
        .take(SKILLS_AHEAD_LIMIT)
        .map(|s| s.to_string())
        .collect();

    UserGap {
        missing_skills: missing_skills(user, field_skills, MISSING_SKILLS_LIMIT),
        skills_ahead,
        experience_gap: years_behind(average_experience, user.years_experience),
    }
}

/// `field_average - years`, widened so unvalidated year values cannot overflow.
pub fn years_behind(field_average: i32, years: i32) -> i64 {
    i64::from(field_average) - i64::from(years)
}

/// Field skills (in rank order) the user lacks, up to `limit`.
pub fn missing_skills(user: &Profile, field_skills: &[SkillAnalysis], limit: usize) -> Vec<String> {
    let user_set: HashSet<&str> = user.skills.iter().map(String::as_str).collect();
    field_skills
        .iter()
        .filter(|s| !user_set.contains(s.skill.as_str()))
        .take(limit)
        .map(|s| s.skill.clone())
        .collect()
}

fn unique_in_order(values: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    values
        .iter()
        .map(String::as_str)
        .filter(|v| seen.insert(*v))
        .collect()
}
