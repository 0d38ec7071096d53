use serde::{Deserialize, Serialize};

/// Where the person reporting early resume signals currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationStage {
    HighSchool,
    #[default]
    EarlyCollege,
    GapYear,
    Graduating,
}

impl EducationStage {
    pub const ALL: [EducationStage; 4] = [
        EducationStage::HighSchool,
        EducationStage::EarlyCollege,
        EducationStage::GapYear,
        EducationStage::Graduating,
    ];

    /// Display label for the stage.
    pub fn label(&self) -> &'static str {
        match self {
            EducationStage::HighSchool => "High School",
            EducationStage::EarlyCollege => "Early College (Year 1-2)",
            EducationStage::GapYear => "Gap Year",
            EducationStage::Graduating => "Graduating Soon",
        }
    }
}

/// Self-reported early resume signals, submitted independently of a full profile.
///
/// `experiences` are matched against peer company names by the classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarlyResumeSignals {
    #[serde(default)]
    pub stage: EducationStage,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experiences: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_stage_wire_names() {
        let stage: EducationStage = serde_json::from_str(r#""high-school""#).unwrap();
        assert_eq!(stage, EducationStage::HighSchool);
        assert_eq!(
            serde_json::to_string(&EducationStage::GapYear).unwrap(),
            r#""gap-year""#
        );
    }

    #[test]
    fn test_education_stage_labels() {
        let labels: Vec<&str> = EducationStage::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec![
                "High School",
                "Early College (Year 1-2)",
                "Gap Year",
                "Graduating Soon"
            ]
        );
    }

    #[test]
    fn test_signals_default_to_early_college() {
        let signals: EarlyResumeSignals = serde_json::from_str(r#"{"skills": ["SQL"]}"#).unwrap();
        assert_eq!(signals.stage, EducationStage::EarlyCollege);
        assert_eq!(signals.skills, vec!["SQL"]);
        assert!(signals.experiences.is_empty());
    }
}
