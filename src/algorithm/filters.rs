/// Time-preference pre-filter for the elective pool.
///
/// Runs before the combination search: a course survives only if every cell
/// it occupies falls inside one of the student's allowed windows. The search
/// itself never looks at preferences.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::conflict::occupied_cells;
use crate::models::Course;

/// Allowed periods `from..=to` on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub day: String,
    pub from: u8,
    pub to: u8,
}

impl TimeWindow {
    pub fn new(day: &str, from: u8, to: u8) -> Self {
        TimeWindow {
            day: day.to_string(),
            from,
            to,
        }
    }

    fn covers(&self, day: &str, period: u8) -> bool {
        self.day.trim().eq_ignore_ascii_case(day) && (self.from..=self.to).contains(&period)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePreference {
    #[serde(default)]
    pub windows: Vec<TimeWindow>,
    /// Drop courses that have no scheduled meeting at all.
    #[serde(default)]
    pub exclude_unscheduled: bool,
}

/// True if the course lies entirely within the preference's windows.
pub fn fits_preference(course: &Course, pref: &TimePreference) -> bool {
    let cells = occupied_cells(course);
    if cells.is_empty() {
        return !pref.exclude_unscheduled;
    }
    cells
        .iter()
        .all(|(day, period)| pref.windows.iter().any(|w| w.covers(day, *period)))
}

/// Keeps the courses that fit `pref`, in their original order.
/// Without a preference the pool passes through untouched.
pub fn apply_time_preference(pool: &[Course], pref: Option<&TimePreference>) -> Vec<Course> {
    let Some(pref) = pref else {
        return pool.to_vec();
    };
    pool.iter()
        .filter(|course| {
            let keep = fits_preference(course, pref);
            if !keep {
                debug!("   ⊘ {} outside the allowed time windows", course.code);
            }
            keep
        })
        .cloned()
        .collect()
}
