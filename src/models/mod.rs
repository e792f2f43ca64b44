// Core data structures shared by the search engine, the pipeline and the JSON layer.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Highest period number a weekly slot may carry. Periods outside
/// `1..=MAX_PERIOD` are treated as malformed and occupy nothing.
pub const MAX_PERIOD: u8 = 15;

/// One meeting day of a course: a day token plus the periods it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub periods: BTreeSet<u8>,
}

impl TimeSlot {
    pub fn new(day: &str, periods: &[u8]) -> Self {
        TimeSlot {
            day: day.to_string(),
            periods: periods.iter().copied().collect(),
        }
    }

    /// Day token used for comparisons ("mon", " Mon " and "MON" are the same day).
    pub fn day_key(&self) -> String {
        self.day.trim().to_uppercase()
    }
}

/// A course offering as seen by the engine. Read-only input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    #[serde(default)]
    pub name: String,
    /// Shared by cross-listed sections of the same logical course.
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub credits: i32,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
    /// Department whose major this course belongs to, if it is a major course.
    #[serde(default)]
    pub major_tag: Option<String>,
    /// Set by the catalog ingester for major courses of an unrelated department.
    #[serde(default)]
    pub major_candidate: bool,
    /// Generalized type tag ("general-education", "teaching-certificate", ...).
    #[serde(default)]
    pub type_tag: Option<String>,
}

impl Course {
    pub fn new(code: &str, credits: i32, slots: Vec<TimeSlot>) -> Self {
        Course {
            code: code.to_string(),
            name: String::new(),
            group_id: None,
            credits,
            slots,
            major_tag: None,
            major_candidate: false,
            type_tag: None,
        }
    }

    /// Group identifier when present, course code otherwise.
    pub fn identity_key(&self) -> &str {
        match self.group_id.as_deref().map(str::trim) {
            Some(g) if !g.is_empty() => g,
            _ => &self.code,
        }
    }

    /// Credit value with negative data clamped to zero.
    pub fn credit_value(&self) -> u32 {
        self.credits.max(0) as u32
    }
}

/// Bucket a course's credits are counted under.
///
/// Serialized as its canonical name; any unknown name is a general tag kept
/// verbatim, so `"general-education"` and `"teaching-certificate"` both land in
/// `General`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeLabel {
    Major,
    DoubleMajor,
    Minor,
    OpenElective,
    General(String),
    Other,
}

impl TypeLabel {
    pub fn as_str(&self) -> &str {
        match self {
            TypeLabel::Major => "major",
            TypeLabel::DoubleMajor => "double-major",
            TypeLabel::Minor => "minor",
            TypeLabel::OpenElective => "elective-for-others",
            TypeLabel::General(tag) => tag,
            TypeLabel::Other => "other",
        }
    }
}

impl From<&str> for TypeLabel {
    fn from(s: &str) -> Self {
        match s.trim() {
            "major" => TypeLabel::Major,
            "double-major" => TypeLabel::DoubleMajor,
            "minor" => TypeLabel::Minor,
            "elective-for-others" => TypeLabel::OpenElective,
            "other" | "" => TypeLabel::Other,
            tag => TypeLabel::General(tag.to_string()),
        }
    }
}

impl From<String> for TypeLabel {
    fn from(s: String) -> Self {
        TypeLabel::from(s.as_str())
    }
}

impl From<TypeLabel> for String {
    fn from(label: TypeLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive credit bound for one type bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditRange {
    pub min: u32,
    pub max: u32,
}

impl CreditRange {
    pub fn new(min: u32, max: u32) -> Self {
        CreditRange { min, max }
    }

    pub fn contains(&self, credits: u32) -> bool {
        credits >= self.min && credits <= self.max
    }

    /// Range still open once `have` credits are already counted.
    /// `None` when `have` already exceeds the maximum.
    pub fn remaining_after(&self, have: u32) -> Option<CreditRange> {
        let max = self.max.checked_sub(have)?;
        Some(CreditRange {
            min: self.min.saturating_sub(have),
            max,
        })
    }
}

/// Per-type ranges, optional total bounds and the order types are searched in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditSettings {
    #[serde(default)]
    pub ranges: BTreeMap<TypeLabel, CreditRange>,
    #[serde(default)]
    pub min_total: Option<u32>,
    #[serde(default)]
    pub max_total: Option<u32>,
    #[serde(default)]
    pub target_types: Vec<TypeLabel>,
}

impl CreditSettings {
    pub fn range(&self, label: &TypeLabel) -> Option<&CreditRange> {
        self.ranges.get(label)
    }

    pub fn with_range(mut self, label: TypeLabel, min: u32, max: u32) -> Self {
        self.ranges.insert(label, CreditRange::new(min, max));
        self
    }

    pub fn with_total(mut self, min: u32, max: u32) -> Self {
        self.min_total = Some(min);
        self.max_total = Some(max);
        self
    }

    pub fn with_targets(mut self, targets: &[TypeLabel]) -> Self {
        self.target_types = targets.to_vec();
        self
    }

    /// Rejects ranges with `max < min`, for types and for the total.
    pub fn validate(&self) -> Result<()> {
        for (label, range) in &self.ranges {
            if range.max < range.min {
                return Err(EngineError::InvalidCreditRange {
                    label: label.to_string(),
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if let (Some(min), Some(max)) = (self.min_total, self.max_total) {
            if max < min {
                return Err(EngineError::InvalidTotalRange { min, max });
            }
        }
        Ok(())
    }
}

/// Relationship between a student and their secondary department.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecondaryMajorKind {
    #[default]
    None,
    Minor,
    IntensiveMinor,
    DoubleMajor,
    Intensive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub major: String,
    #[serde(default)]
    pub secondary_major: Option<String>,
    #[serde(default)]
    pub secondary_kind: SecondaryMajorKind,
}

/// Credits of a course set split by type bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditBreakdown {
    pub by_type: BTreeMap<TypeLabel, u32>,
    pub total: u32,
}

impl CreditBreakdown {
    pub fn of(&self, label: &TypeLabel) -> u32 {
        self.by_type.get(label).copied().unwrap_or(0)
    }
}

/// An accepted, conflict-free course set with its credit breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    pub courses: Vec<Course>,
    pub credits: CreditBreakdown,
}

impl Timetable {
    pub fn codes(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.code.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Found,
    /// Nothing combined, but the mandatory courses alone meet the credit criteria.
    MandatoryOnly,
    NoSolution,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub outcome: Outcome,
    pub timetables: Vec<Timetable>,
    pub budget_exhausted: bool,
}
