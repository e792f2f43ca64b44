// Time-conflict detection over weekly (day, period) cells.
//
// Each day is a bit vector indexed by period number. A course occupies the
// union of its slots; two courses conflict when they share any set bit on the
// same day. Malformed slots (empty day, period outside 1..=MAX_PERIOD)
// occupy nothing.

use std::collections::BTreeMap;

use crate::models::{Course, MAX_PERIOD, TimeSlot};

fn period_bit(period: u8) -> Option<u32> {
    if (1..=MAX_PERIOD).contains(&period) {
        Some(1u32 << period)
    } else {
        None
    }
}

fn slot_mask(slot: &TimeSlot) -> u32 {
    slot.periods
        .iter()
        .filter_map(|&p| period_bit(p))
        .fold(0, |acc, bit| acc | bit)
}

/// Occupancy of one course grouped by day. Slots of the same course that
/// repeat a cell are merged rather than treated as a self-conflict.
fn course_masks(course: &Course) -> BTreeMap<String, u32> {
    let mut out: BTreeMap<String, u32> = BTreeMap::new();
    for slot in &course.slots {
        let day = slot.day_key();
        if day.is_empty() {
            continue;
        }
        let mask = slot_mask(slot);
        if mask != 0 {
            *out.entry(day).or_default() |= mask;
        }
    }
    out
}

/// Every (day, period) cell the course occupies, ordered by day then period.
pub fn occupied_cells(course: &Course) -> Vec<(String, u8)> {
    course_masks(course)
        .into_iter()
        .flat_map(|(day, mask)| {
            (1..=MAX_PERIOD)
                .filter(move |&p| mask & (1u32 << p) != 0)
                .map(move |p| (day.clone(), p))
        })
        .collect()
}

/// True if any slot of the course is missing its day or carries an
/// out-of-range period.
pub fn is_malformed(course: &Course) -> bool {
    course.slots.iter().any(|s| {
        s.day.trim().is_empty() || s.periods.iter().any(|&p| period_bit(p).is_none())
    })
}

/// Weekly grid of occupied cells, grown one course at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyGrid {
    days: BTreeMap<String, u32>,
}

impl OccupancyGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the course would not collide with anything already placed.
    pub fn fits(&self, course: &Course) -> bool {
        course_masks(course)
            .iter()
            .all(|(day, mask)| self.days.get(day).is_none_or(|used| used & mask == 0))
    }

    /// Places the course if it fits. On conflict the grid is left untouched.
    pub fn try_occupy(&mut self, course: &Course) -> bool {
        if !self.fits(course) {
            return false;
        }
        for (day, mask) in course_masks(course) {
            *self.days.entry(day).or_default() |= mask;
        }
        true
    }

    /// Places every course or none of them.
    pub fn try_occupy_all<'a, I>(&mut self, courses: I) -> bool
    where
        I: IntoIterator<Item = &'a Course>,
    {
        let mut next = self.clone();
        for course in courses {
            if !next.try_occupy(course) {
                return false;
            }
        }
        *self = next;
        true
    }

    /// Frees the cells of a course previously placed with `try_occupy`.
    pub fn release(&mut self, course: &Course) {
        for (day, mask) in course_masks(course) {
            if let Some(used) = self.days.get_mut(&day) {
                *used &= !mask;
                if *used == 0 {
                    self.days.remove(&day);
                }
            }
        }
    }

    pub fn occupied_cells(&self) -> usize {
        self.days.values().map(|m| m.count_ones() as usize).sum()
    }
}

/// True if any two courses of the set share a (day, period) cell.
/// Short-circuits on the first collision.
pub fn has_conflict<'a, I>(courses: I) -> bool
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut grid = OccupancyGrid::new();
    courses.into_iter().any(|c| !grid.try_occupy(c))
}

/// True if the two courses share a cell.
pub fn courses_conflict(a: &Course, b: &Course) -> bool {
    let ma = course_masks(a);
    course_masks(b)
        .iter()
        .any(|(day, mask)| ma.get(day).is_some_and(|m| m & mask != 0))
}

/// Indices `(i, j)` with `i < j` of the first colliding pair, scanning in order.
pub fn find_conflict(courses: &[Course]) -> Option<(usize, usize)> {
    let mut grid = OccupancyGrid::new();
    for (j, course) in courses.iter().enumerate() {
        if !grid.try_occupy(course) {
            let i = courses[..j].iter().position(|prev| courses_conflict(prev, course))?;
            return Some((i, j));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, day: &str, periods: &[u8]) -> Course {
        Course::new(code, 3, vec![TimeSlot::new(day, periods)])
    }

    #[test]
    fn disjoint_days_do_not_conflict() {
        let a = course("A", "Mon", &[1, 2, 3]);
        let b = course("B", "Tue", &[1, 2, 3]);
        assert!(!has_conflict([&a, &b]));
    }

    #[test]
    fn shared_period_conflicts() {
        let a = course("A", "Mon", &[1, 2]);
        let b = course("B", "mon", &[2, 3]);
        assert!(has_conflict([&a, &b]));
        assert!(courses_conflict(&a, &b));
    }

    #[test]
    fn adjacent_periods_do_not_conflict() {
        let a = course("A", "Wed", &[1, 2]);
        let b = course("B", "Wed", &[3, 4]);
        assert!(!has_conflict([&a, &b]));
    }

    #[test]
    fn courses_without_slots_never_conflict() {
        let a = Course::new("A", 3, vec![]);
        let b = course("B", "Mon", &[1]);
        assert!(!has_conflict([&a, &b, &a]));
    }

    #[test]
    fn malformed_slots_occupy_nothing() {
        let a = course("A", "", &[1, 2]);
        let b = course("B", "Mon", &[0, 40]);
        let c = course("C", "Mon", &[1, 2]);
        assert!(is_malformed(&a));
        assert!(is_malformed(&b));
        assert!(!is_malformed(&c));
        assert!(!has_conflict([&a, &b, &c]));
    }

    #[test]
    fn repeated_slot_within_one_course_is_not_a_conflict() {
        let a = Course::new(
            "A",
            3,
            vec![TimeSlot::new("Mon", &[1, 2]), TimeSlot::new("Mon", &[2, 3])],
        );
        assert!(!has_conflict([&a]));
    }

    #[test]
    fn failed_occupy_leaves_grid_unchanged() {
        let mut grid = OccupancyGrid::new();
        let a = course("A", "Mon", &[1, 2]);
        assert!(grid.try_occupy(&a));
        let before = grid.clone();
        let b = Course::new(
            "B",
            3,
            vec![TimeSlot::new("Tue", &[5]), TimeSlot::new("Mon", &[2])],
        );
        assert!(!grid.try_occupy(&b));
        assert_eq!(grid, before);
    }

    #[test]
    fn release_frees_cells() {
        let mut grid = OccupancyGrid::new();
        let a = course("A", "Mon", &[1, 2]);
        assert!(grid.try_occupy(&a));
        assert_eq!(grid.occupied_cells(), 2);
        grid.release(&a);
        assert_eq!(grid.occupied_cells(), 0);
        assert!(grid.fits(&a));
    }

    #[test]
    fn occupied_cells_lists_valid_cells_only() {
        let a = Course::new(
            "A",
            3,
            vec![TimeSlot::new("tue", &[2, 1]), TimeSlot::new("Mon", &[0, 15, 16])],
        );
        assert_eq!(
            occupied_cells(&a),
            vec![("MON".to_string(), 15), ("TUE".to_string(), 1), ("TUE".to_string(), 2)]
        );
    }

    #[test]
    fn find_conflict_reports_first_pair() {
        let a = course("A", "Mon", &[1]);
        let b = course("B", "Tue", &[1]);
        let c = course("C", "Tue", &[1, 2]);
        assert_eq!(find_conflict(&[a.clone(), b.clone()]), None);
        assert_eq!(find_conflict(&[a, b, c]), Some((1, 2)));
    }
}
