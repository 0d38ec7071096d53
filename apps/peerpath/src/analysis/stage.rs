//! Stage Segmenter — partitions profiles into entry / mid / senior tiers.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::models::Profile;

/// Year boundaries shared by every tier-aware computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageThresholds {
    /// Inclusive upper bound of the entry tier.
    pub entry_max_years: i32,
    /// Inclusive upper bound of the mid tier.
    pub mid_max_years: i32,
}

impl Default for StageThresholds {
    fn default() -> Self {
        Self {
            entry_max_years: 3,
            mid_max_years: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareerStage {
    Entry,
    Mid,
    Senior,
}

impl CareerStage {
    pub const ALL: [CareerStage; 3] = [CareerStage::Entry, CareerStage::Mid, CareerStage::Senior];

    /// Tier for a years-of-experience value under the default thresholds.
    /// Negative values land in the entry tier.
    pub fn from_years(years: i32) -> Self {
        StageThresholds::default().classify(years)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareerStage::Entry => "Entry-Level (0-3 years)",
            CareerStage::Mid => "Mid-Level (4-8 years)",
            CareerStage::Senior => "Senior+ (8+ years)",
        }
    }
}

impl StageThresholds {
    pub fn classify(&self, years: i32) -> CareerStage {
        if years <= self.entry_max_years {
            CareerStage::Entry
        } else if years <= self.mid_max_years {
            CareerStage::Mid
        } else {
            CareerStage::Senior
        }
    }
}

/// Profiles split by tier, each tier keeping the input order.
#[derive(Debug, Default)]
pub struct StageBuckets<'a> {
    pub entry: Vec<&'a Profile>,
    pub mid: Vec<&'a Profile>,
    pub senior: Vec<&'a Profile>,
}

impl<'a> StageBuckets<'a> {
    pub fn get(&self, stage: CareerStage) -> &[&'a Profile] {
        match stage {
            CareerStage::Entry => &self.entry,
            CareerStage::Mid => &self.mid,
            CareerStage::Senior => &self.senior,
        }
    }

    pub fn len(&self) -> usize {
        self.entry.len() + self.mid.len() + self.senior.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn segment<P: Borrow<Profile>>(profiles: &[P]) -> StageBuckets<'_> {
    let mut buckets = StageBuckets::default();
    for profile in profiles {
        let profile = profile.borrow();
        match CareerStage::from_years(profile.years_experience) {
            CareerStage::Entry => buckets.entry.push(profile),
            CareerStage::Mid => buckets.mid.push(profile),
            CareerStage::Senior => buckets.senior.push(profile),
        }
    }
    tracing::debug!(
        entry = buckets.entry.len(),
        mid = buckets.mid.len(),
        senior = buckets.senior.len(),
        "segmented profiles by stage"
    );
    buckets
}

/// Entry-tier profiles only, in input order.
pub fn entry_tier<P: Borrow<Profile>>(profiles: &[P]) -> Vec<&Profile> {
    profiles
        .iter()
        .map(|p| p.borrow())
        .filter(|p| CareerStage::from_years(p.years_experience) == CareerStage::Entry)
        .collect()
}
