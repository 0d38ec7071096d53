// Milestone templates per roadmap phase. Text is fixed; the skills list and
// `{skill}` / `{major}` placeholders are filled in by the builder.

use crate::analysis::stage::CareerStage;

/// Where a milestone's skills list comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkillSource {
    /// First N field top skills the user is missing.
    Missing(usize),
    /// First N field top skills.
    FieldTop(usize),
    /// First N typical skills of a tier's career pattern.
    Stage(CareerStage, usize),
    Fixed(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct MilestoneTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub skills: SkillSource,
    pub actions: &'static [&'static str],
    pub resources: &'static [&'static str],
    pub milestone: &'static str,
}

pub static PHASE_ONE: [MilestoneTemplate; 3] = [
    MilestoneTemplate {
        id: "phase-1-1",
        title: "Foundation Building (Months 1-3)",
        duration: "3 months",
        description: "Establish core competencies and key technical skills needed in the field",
        skills: SkillSource::Missing(4),
        actions: &[
            "Complete online courses in top missing skills",
            "Build 2-3 portfolio projects demonstrating key competencies",
            "Join relevant professional communities and networks",
            "Find a mentor in the field (ideally 5+ years experience)",
            "Contribute to open-source or volunteer projects",
        ],
        resources: &[
            "Coursera, Udemy, edX courses in {skill}",
            "GitHub portfolio for project work",
            "LinkedIn/industry networking events",
        ],
        milestone: "Complete foundational certification or 2 portfolio projects",
    },
    MilestoneTemplate {
        id: "phase-1-2",
        title: "Entry-Level Positioning (Months 4-8)",
        duration: "5 months",
        description: "Secure first role and establish professional credibility",
        skills: SkillSource::Missing(3),
        actions: &[
            "Target entry-level positions (internships, junior roles)",
            "Tailor resume and cover letters to field requirements",
            "Prepare for technical interviews in your domain",
            "Attend industry conferences or webinars",
            "Start documenting your growth and achievements",
        ],
        resources: &[
            "LeetCode/HackerRank for skill practice",
            "Interview preparation guides specific to {major}",
            "Company career pages and networking contacts",
        ],
        milestone: "Secure entry-level position or internship",
    },
    MilestoneTemplate {
        id: "phase-1-3",
        title: "First Role Mastery (Months 9-18)",
        duration: "10 months",
        description: "Excel in initial position and build practical experience",
        skills: SkillSource::FieldTop(5),
        actions: &[
            "Master core responsibilities in first 90 days",
            "Take on increasingly complex projects",
            "Build strong relationships with team and mentors",
            "Continue skill development through work assignments",
            "Seek feedback and document achievements regularly",
        ],
        resources: &[
            "Company training programs",
            "Senior team members and mentors",
            "Industry-specific certifications",
        ],
        milestone: "Successfully complete 1 year in role with positive feedback",
    },
];

pub static PHASE_TWO: [MilestoneTemplate; 3] = [
    MilestoneTemplate {
        id: "phase-2-1",
        title: "Specialization Development (Current - 6 months)",
        duration: "6 months",
        description: "Deepen expertise and develop specialized skills",
        skills: SkillSource::Stage(CareerStage::Mid, 5),
        actions: &[
            "Identify and develop deeper expertise in 2-3 areas",
            "Lead technical initiatives or projects",
            "Mentor junior team members",
            "Attend advanced training and certifications",
            "Develop expertise that differentiates you",
        ],
        resources: &[
            "Advanced certifications in your field",
            "Leadership and management courses",
            "Speaking at industry events",
        ],
        milestone: "Become recognized as subject matter expert",
    },
    MilestoneTemplate {
        id: "phase-2-2",
        title: "Leadership Transition (6-12 months)",
        duration: "6 months",
        description: "Move toward senior individual contributor or management roles",
        skills: SkillSource::Fixed(&[
            "Leadership",
            "Project Management",
            "Strategic Thinking",
            "Communication",
        ]),
        actions: &[
            "Lead larger initiatives and cross-functional projects",
            "Develop mentoring and coaching skills",
            "Build strategic network within and outside company",
            "Take on visible leadership responsibilities",
            "Pursue management certifications if interested",
        ],
        resources: &[
            "Executive presence coaching",
            "MBA or management certification programs",
            "Leadership development workshops",
        ],
        milestone: "Lead successful major project or earn promotion consideration",
    },
    MilestoneTemplate {
        id: "phase-2-3",
        title: "Senior Positioning (12+ months)",
        duration: "12+ months",
        description: "Establish yourself in senior roles",
        skills: SkillSource::Fixed(&[
            "Strategic Planning",
            "Business Acumen",
            "Innovation",
            "Executive Communication",
        ]),
        actions: &[
            "Transition to senior IC or management role",
            "Influence organizational strategy",
            "Build reputation as industry thought leader",
            "Expand external network and speaking engagements",
            "Mentor multiple junior professionals",
        ],
        resources: &[
            "Executive coaching",
            "Board memberships or advisory roles",
            "Conference speaking opportunities",
        ],
        milestone: "Secure senior-level position or promotion",
    },
];

pub static PHASE_THREE: [MilestoneTemplate; 3] = [
    MilestoneTemplate {
        id: "phase-3-1",
        title: "Strategic Leadership (Current Phase)",
        duration: "Ongoing",
        description: "Shape strategy and influence at organizational level",
        skills: SkillSource::Fixed(&[
            "Strategic Vision",
            "P&L Management",
            "Organizational Leadership",
            "Innovation",
        ]),
        actions: &[
            "Drive strategic initiatives and transformation",
            "Build and mentor high-performing teams",
            "Expand influence beyond your function",
            "Consider board or executive advisory roles",
            "Establish yourself as industry thought leader",
        ],
        resources: &[
            "Executive coaching and peer advisory groups",
            "Board service opportunities",
            "Speaking at major industry events",
        ],
        milestone: "Drive significant strategic impact",
    },
    MilestoneTemplate {
        id: "phase-3-2",
        title: "Thought Leadership & Legacy",
        duration: "Ongoing",
        description: "Build lasting impact and mentor next generation",
        skills: SkillSource::Fixed(&[
            "Visionary Thinking",
            "Executive Presence",
            "Institutional Knowledge",
        ]),
        actions: &[
            "Write and speak about industry trends",
            "Build advisory boards or councils",
            "Mentor rising leaders in your field",
            "Consider angel investing or startup advising",
            "Plan long-term career evolution or transition",
        ],
        resources: &[
            "Publishing opportunities (articles, books)",
            "Speaking circuits and conferences",
            "Venture capital or angel networks",
        ],
        milestone: "Establish lasting thought leadership",
    },
    MilestoneTemplate {
        id: "phase-3-3",
        title: "Next Chapter Planning",
        duration: "Ongoing",
        description: "Explore alternative paths while maintaining impact",
        skills: SkillSource::Fixed(&[
            "Entrepreneurship",
            "Board Governance",
            "Consulting",
            "Teaching",
        ]),
        actions: &[
            "Evaluate next career chapter (startup, board, teaching, etc.)",
            "Build diversified professional portfolio",
            "Develop new skills for next phase",
            "Explore board opportunities in profit/nonprofit",
            "Consider consulting or startup advisory roles",
        ],
        resources: &[
            "Executive transition coaching",
            "Startup founder networks",
            "Board governance training",
        ],
        milestone: "Clarify and plan next career evolution",
    },
];

pub fn templates_for_phase(phase: u8) -> &'static [MilestoneTemplate; 3] {
    match phase {
        1 => &PHASE_ONE,
        2 => &PHASE_TWO,
        _ => &PHASE_THREE,
    }
}
