use serde::{Deserialize, Serialize};

/// A self-reported professional profile.
///
/// `years_experience` is not validated here; negative values flow straight
/// into averages and gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub major: String,
    /// Ordered; duplicates allowed.
    #[serde(default)]
    pub skills: Vec<String>,
    pub years_experience: i32,
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
