//! Frequency Aggregator — counts a categorical profile attribute and ranks it.
//!
//! Counting preserves first-occurrence order and ranking uses a stable sort, so
//! equal counts keep the order in which values were first seen. Every occurrence
//! counts: a skill listed twice on one profile contributes two.

use std::borrow::Borrow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Profile;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One ranked value of a profile attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub value: String,
    pub count: usize,
    /// round(count / total × 100)
    pub percentage: u32,
    /// Name of the profile behind each occurrence, in insertion order.
    pub holders: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub skill: String,
    pub frequency: usize,
    pub percentage: u32,
    pub profiles_with_skill: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAnalysis {
    pub company: String,
    pub frequency: usize,
    pub percentage: u32,
}

impl From<FrequencyEntry> for SkillAnalysis {
    fn from(entry: FrequencyEntry) -> Self {
        SkillAnalysis {
            skill: entry.value,
            frequency: entry.count,
            percentage: entry.percentage,
            profiles_with_skill: entry.holders,
        }
    }
}

impl From<FrequencyEntry> for CompanyAnalysis {
    fn from(entry: FrequencyEntry) -> Self {
        CompanyAnalysis {
            company: entry.value,
            frequency: entry.count,
            percentage: entry.percentage,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field extraction
// ────────────────────────────────────────────────────────────────────────────

/// Which categorical attribute of a profile to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Skills,
    Companies,
    Major,
    Title,
}

impl ProfileField {
    fn values<'p>(&self, profile: &'p Profile) -> &'p [String] {
        match self {
            ProfileField::Skills => &profile.skills,
            ProfileField::Companies => &profile.companies,
            ProfileField::Major => std::slice::from_ref(&profile.major),
            ProfileField::Title => std::slice::from_ref(&profile.title),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Counting
// ────────────────────────────────────────────────────────────────────────────

/// Counting structure that remembers the order values were first seen in.
#[derive(Debug, Default)]
struct OrderedTally {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize, Vec<String>)>,
}

impl OrderedTally {
    fn record(&mut self, value: &str, holder: &str) {
        match self.index.get(value) {
            Some(&slot) => {
                let (_, count, holders) = &mut self.entries[slot];
                *count += 1;
                holders.push(holder.to_string());
            }
            None => {
                self.index.insert(value.to_string(), self.entries.len());
                self.entries
                    .push((value.to_string(), 1, vec![holder.to_string()]));
            }
        }
    }
}

/// Ranks every distinct value of `field` across `profiles`, most frequent first.
///
/// Percentages use `profiles.len()` as the denominator. An empty collection
/// yields an empty ranking.
pub fn rank<P: Borrow<Profile>>(profiles: &[P], field: ProfileField) -> Vec<FrequencyEntry> {
    let total = profiles.len();
    if total == 0 {
        return Vec::new();
    }

    let mut tally = OrderedTally::default();
    for profile in profiles {
        let profile = profile.borrow();
        for value in field.values(profile) {
            tally.record(value, &profile.name);
        }
    }

    let mut ranked: Vec<FrequencyEntry> = tally
        .entries
        .into_iter()
        .map(|(value, count, holders)| FrequencyEntry {
            value,
            count,
            percentage: percentage_of(count, total),
            holders,
        })
        .collect();

    // Stable: ties keep first-occurrence order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// `rank`, truncated to the first `limit` entries.
pub fn top<P: Borrow<Profile>>(
    profiles: &[P],
    field: ProfileField,
    limit: usize,
) -> Vec<FrequencyEntry> {
    let mut ranked = rank(profiles, field);
    ranked.truncate(limit);
    ranked
}

/// Occurrence count per distinct value, for point lookups.
pub fn count_map<P: Borrow<Profile>>(profiles: &[P], field: ProfileField) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for profile in profiles {
        for value in field.values(profile.borrow()) {
            *counts.entry(value.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// round(count / total × 100); 0 when there is nothing to divide by.
pub fn percentage_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    round_half_up(count as f64 / total as f64 * 100.0) as u32
}

/// Rounds halves toward positive infinity (2.5 → 3, -2.5 → -2).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
