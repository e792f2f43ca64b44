// Enumerates the subsets of one type's elective pool that land inside a credit
// range, are conflict-free and hold each identity key at most once.

use crate::algorithm::budget::StepBudget;
use crate::algorithm::conflict::OccupancyGrid;
use crate::models::{Course, CreditRange};

struct PartialSearch<'a, 'b> {
    pool: &'b [&'a Course],
    range: CreditRange,
    budget: &'b mut StepBudget,
    current: Vec<&'a Course>,
    grid: OccupancyGrid,
    found: Vec<Vec<&'a Course>>,
}

impl<'a> PartialSearch<'a, '_> {
    fn descend(&mut self, start: usize, sum: u32) {
        if !self.budget.tick() {
            return;
        }
        if self.range.contains(sum) {
            self.found.push(self.current.clone());
        }
        if sum >= self.range.max {
            return;
        }

        for idx in start..self.pool.len() {
            if self.budget.is_exhausted() {
                return;
            }
            let course = self.pool[idx];
            let next_sum = sum.saturating_add(course.credit_value());
            if next_sum > self.range.max {
                continue;
            }
            let key = course.identity_key();
            if self.current.iter().any(|c| c.identity_key() == key) {
                continue;
            }
            if !self.grid.try_occupy(course) {
                continue;
            }
            self.current.push(course);
            self.descend(idx + 1, next_sum);
            self.current.pop();
            self.grid.release(course);
        }
    }
}

/// All qualifying subsets of `pool`, in index order: a subset is reported
/// before its extensions, and the empty subset comes first whenever
/// `range.min == 0`. Subsets of any size qualify, not only maximal ones.
pub fn find_partial_combinations<'a>(pool: &[&'a Course], range: CreditRange) -> Vec<Vec<&'a Course>> {
    find_partial_combinations_within(pool, range, &mut StepBudget::unlimited())
}

/// Same as [`find_partial_combinations`], spending one budget step per node.
/// When the budget runs out the subsets found so far are returned.
pub fn find_partial_combinations_within<'a>(
    pool: &[&'a Course],
    range: CreditRange,
    budget: &mut StepBudget,
) -> Vec<Vec<&'a Course>> {
    let mut search = PartialSearch {
        pool,
        range,
        budget,
        current: Vec::new(),
        grid: OccupancyGrid::new(),
        found: Vec::new(),
    };
    search.descend(0, 0);
    search.found
}
