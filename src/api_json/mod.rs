use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithm::filters::TimePreference;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{Course, CreditSettings, StudentProfile};

/// Recommendation request.
///
/// # Expected JSON:
/// ```json
/// {
///   "student": { "major": "CSE", "secondary_major": "MATH", "secondary_kind": "minor" },
///   "mandatory": [
///     { "code": "CSE301", "credits": 3, "major_tag": "CSE",
///       "slots": [{ "day": "Mon", "periods": [1, 2, 3] }] }
///   ],
///   "catalog": [
///     { "code": "GE110", "group_id": "GE110", "credits": 2, "type_tag": "general-education",
///       "slots": [{ "day": "Wed", "periods": [5, 6] }] }
///   ],
///   "credit_settings": {
///     "ranges": { "major": { "min": 3, "max": 9 }, "general-education": { "min": 2, "max": 4 } },
///     "min_total": 12,
///     "max_total": 18,
///     "target_types": ["major", "general-education"]
///   },
///   "time_preference": {
///     "windows": [{ "day": "Mon", "from": 1, "to": 9 }],
///     "exclude_unscheduled": false
///   },
///   "wanted": 5
/// }
/// ```
///
/// # Fields:
/// - `student`: profile used to classify courses; without it every course counts as "other"
/// - `mandatory`: required and retake courses present in every timetable
/// - `catalog`: electives visible to the student, already filtered for eligibility
/// - `credit_settings`: per-type ranges, total bounds and the order types are filled in
/// - `time_preference`: optional allowed windows applied to the catalog before searching
/// - `wanted`: maximum number of timetables; falls back to `SUGANG_WANTED`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendInput {
    #[serde(default)]
    pub student: Option<StudentProfile>,
    #[serde(default)]
    pub mandatory: Vec<Course>,
    #[serde(default)]
    pub catalog: Vec<Course>,
    #[serde(default)]
    pub credit_settings: CreditSettings,
    #[serde(default)]
    pub time_preference: Option<TimePreference>,
    #[serde(default)]
    pub wanted: Option<usize>,
}

impl RecommendInput {
    /// Requested cap, or the configured default.
    pub fn wanted_or_default(&self, config: &EngineConfig) -> usize {
        self.wanted.unwrap_or(config.default_wanted)
    }
}

pub fn parse_json_input(json_str: &str) -> std::result::Result<RecommendInput, serde_json::Error> {
    serde_json::from_str::<RecommendInput>(json_str)
}

/// Reads and parses a request file.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<RecommendInput> {
    let raw = fs::read_to_string(path)?;
    Ok(parse_json_input(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreditRange, SecondaryMajorKind, TypeLabel};

    #[test]
    fn test_parse_full_request() {
        let json_data = r#"
        {
            "student": { "major": "CSE", "secondary_major": "MATH", "secondary_kind": "double-major" },
            "mandatory": [
                { "code": "CSE301", "credits": 3, "major_tag": "CSE",
                  "slots": [{ "day": "Mon", "periods": [1, 2, 3] }] }
            ],
            "catalog": [
                { "code": "GE110-01", "group_id": "GE110", "credits": 2, "type_tag": "general-education",
                  "slots": [{ "day": "Wed", "periods": [5, 6] }] },
                { "code": "BIO200", "credits": 3, "major_tag": "BIO", "major_candidate": true }
            ],
            "credit_settings": {
                "ranges": { "major": { "min": 3, "max": 9 } },
                "min_total": 12,
                "max_total": 18,
                "target_types": ["major", "general-education"]
            },
            "time_preference": { "windows": [{ "day": "Mon", "from": 1, "to": 9 }] },
            "wanted": 3
        }
        "#;

        let params = parse_json_input(json_data).expect("request must parse");
        let student = params.student.expect("student");
        assert_eq!(student.major, "CSE");
        assert_eq!(student.secondary_kind, SecondaryMajorKind::DoubleMajor);

        assert_eq!(params.mandatory.len(), 1);
        assert_eq!(params.mandatory[0].slots[0].periods.len(), 3);
        assert_eq!(params.catalog[0].identity_key(), "GE110");
        assert!(params.catalog[1].major_candidate);
        assert!(params.catalog[1].slots.is_empty());

        let settings = params.credit_settings;
        assert_eq!(settings.range(&TypeLabel::Major), Some(&CreditRange::new(3, 9)));
        assert_eq!(settings.target_types[1], TypeLabel::from("general-education"));
        assert_eq!(settings.max_total, Some(18));

        let pref = params.time_preference.expect("preference");
        assert_eq!(pref.windows.len(), 1);
        assert!(!pref.exclude_unscheduled);
        assert_eq!(params.wanted, Some(3));
    }

    #[test]
    fn test_parse_minimal_request_uses_defaults() {
        let params = parse_json_input("{}").expect("empty request must parse");
        assert!(params.student.is_none());
        assert!(params.catalog.is_empty());
        assert!(params.credit_settings.target_types.is_empty());
        let config = EngineConfig {
            default_wanted: 7,
            step_budget: None,
        };
        assert_eq!(params.wanted_or_default(&config), 7);
    }

    #[test]
    fn test_negative_period_is_a_parse_error() {
        let json_data = r#"{ "catalog": [ { "code": "X", "slots": [{ "day": "Mon", "periods": [-1] }] } ] }"#;
        assert!(parse_json_input(json_data).is_err());
    }
}
