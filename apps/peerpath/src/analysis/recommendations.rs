use crate::analysis::frequency::{CompanyAnalysis, SkillAnalysis};

const GENERAL_SKILL_BREADTH: &str = "Build a diverse skill set across both technical and soft skills - this is common among successful professionals.";
const GENERAL_MENTORSHIP: &str = "Seek mentorship from professionals with 5+ years of experience to accelerate your career growth.";

/// Builds the templated recommendation sentences, in order:
/// top skills, top companies, years to senior, then the two general sentences.
///
/// Data-driven sentences are skipped when their data is absent, so the result
/// holds between 2 and 5 entries.
pub fn generate_recommendations(
    skills: &[SkillAnalysis],
    companies: &[CompanyAnalysis],
    average_experience: i32,
) -> Vec<String> {
    let mut recommendations = Vec::with_capacity(5);

    if !skills.is_empty() {
        let top_skills: Vec<&str> = skills.iter().take(3).map(|s| s.skill.as_str()).collect();
        recommendations.push(format!(
            "Focus on developing {} - these are the most common skills among successful professionals in this field.",
            top_skills.join(", ")
        ));
    }

    if !companies.is_empty() {
        let top_companies: Vec<&str> = companies
            .iter()
            .take(2)
            .map(|c| c.company.as_str())
            .collect();
        recommendations.push(format!(
            "Consider gaining experience at companies like {} to strengthen your career trajectory.",
            top_companies.join(", ")
        ));
    }

    if average_experience > 0 {
        recommendations.push(format!(
            "Professionals in this field typically reach senior positions after {average_experience} years. Plan your skill development accordingly."
        ));
    }

    recommendations.push(GENERAL_SKILL_BREADTH.to_string());
    recommendations.push(GENERAL_MENTORSHIP.to_string());

    recommendations
}
