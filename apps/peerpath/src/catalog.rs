//! Vocabulary catalogs — the keyword, skill, major, and experience-type lists
//! the engine matches against. Passed explicitly so callers can substitute
//! their own lists; `Vocabulary::default()` carries the built-in ones.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

const ACTIVITY_KEYWORDS: &[&str] = &[
    "internship",
    "freelance",
    "startup",
    "open source",
    "hackathon",
    "personal project",
    "volunteer",
    "bootcamp",
    "teaching",
    "research",
    "leadership",
    "team",
    "collaboration",
];

const EARLY_SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "Java",
    "HTML & CSS",
    "SQL",
    "React",
    "Git & Version Control",
    "Problem Solving",
    "Data Analysis",
    "Excel",
    "Communication",
    "Time Management",
    "Teamwork",
    "Critical Thinking",
    "Agile Methodology",
    "API Development",
    "Mobile Development",
    "Cloud Platforms (AWS/GCP/Azure)",
];

const MAJORS: &[&str] = &[
    "Computer Science",
    "Software Engineering",
    "Data Science",
    "Business Administration",
    "Economics",
    "Finance",
    "Marketing",
    "Mechanical Engineering",
    "Electrical Engineering",
    "Civil Engineering",
    "Chemical Engineering",
    "Psychology",
    "Biology",
    "Chemistry",
    "Physics",
    "Mathematics",
    "Statistics",
    "Accounting",
    "Management",
    "Information Technology",
    "Nursing",
    "Medicine",
    "Engineering Management",
    "Product Management",
    "Design",
    "Graphic Design",
    "Industrial Design",
    "Architecture",
    "Environmental Science",
    "Biotechnology",
    "Pharmaceutical Science",
    "Communications",
    "Journalism",
    "Law",
    "Political Science",
    "International Relations",
    "Environmental Engineering",
    "Biomedical Engineering",
    "Aerospace Engineering",
];

const EXPERIENCE_TYPES: &[(&str, &str)] = &[
    ("internship", "Internship"),
    ("hackathon", "Hackathon"),
    ("personal-project", "Personal Project"),
    ("coding-competition", "Coding Competition"),
    ("club-leadership", "Club Leadership"),
    ("open-source", "Open Source Contribution"),
    ("volunteer", "Volunteer Work"),
    ("research", "Research"),
    ("course-project", "Course Project"),
    ("freelance", "Freelance Project"),
];

/// A self-reportable experience type: stable code plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceType {
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Lower-case terms scanned for in profile descriptions.
    pub activity_keywords: Vec<String>,
    /// Skills offered when a student self-reports early resume signals.
    pub early_skills: Vec<String>,
    pub majors: Vec<String>,
    pub experience_types: Vec<ExperienceType>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            activity_keywords: to_owned_list(ACTIVITY_KEYWORDS),
            early_skills: to_owned_list(EARLY_SKILLS),
            majors: to_owned_list(MAJORS),
            experience_types: EXPERIENCE_TYPES
                .iter()
                .map(|(code, label)| ExperienceType {
                    code: code.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }
}

impl Vocabulary {
    /// Loads a vocabulary from a JSON file. Lists missing from the file keep
    /// their built-in defaults.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| EngineError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Activity keywords present in `text`, matched case-insensitively, in
    /// vocabulary order.
    pub fn find_activity_keywords(&self, text: &str) -> Vec<&str> {
        let lower = text.to_lowercase();
        self.activity_keywords
            .iter()
            .filter(|kw| lower.contains(&kw.to_lowercase()))
            .map(String::as_str)
            .collect()
    }

    /// Catalog majors containing `query` (case-insensitive), in catalog order.
    /// A blank query suggests nothing.
    pub fn suggest_majors(&self, query: &str) -> Vec<&str> {
        search(&self.majors, query)
    }

    /// Early-skill catalog entries containing `query`, same matching rules as
    /// [`Vocabulary::suggest_majors`].
    pub fn suggest_early_skills(&self, query: &str) -> Vec<&str> {
        search(&self.early_skills, query)
    }

    pub fn experience_label(&self, code: &str) -> Option<&str> {
        self.experience_types
            .iter()
            .find(|t| t.code == code)
            .map(|t| t.label.as_str())
    }
}

fn search<'a>(catalog: &'a [String], query: &str) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|entry| entry.to_lowercase().contains(&query))
        .map(String::as_str)
        .collect()
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
