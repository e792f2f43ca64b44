// combine.rs - cross-type timetable search
//
// The search walks the target types in order. At each type it asks the
// partial finder for the subsets of that type's electives that fill what is
// left of the type's credit range, extends the accumulated timetable with each
// one that fits next to what is already placed, and recurses into the next
// type. Once every type has been visited the assembled timetable is checked
// against the full credit criteria.
//
// Every level works on its own extended copy of the candidate, so nothing a
// sibling branch sees is ever mutated. The accepted list and the step budget
// are the only state shared across branches; both live in `CombinationSearch`
// and are threaded through the recursion by `&mut self`.

use std::collections::{HashMap, HashSet};

use log::{debug, info};

use crate::algorithm::budget::StepBudget;
use crate::algorithm::conflict::{OccupancyGrid, find_conflict};
use crate::algorithm::credits::{credits_by_type, meets_criteria, total_credits};
use crate::algorithm::partial::find_partial_combinations_within;
use crate::error::{EngineError, Result};
use crate::models::{Course, CreditBreakdown, CreditSettings, Timetable, TypeLabel};

/// Timetables found by one search, plus whether the step budget cut it short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub timetables: Vec<Timetable>,
    pub budget_exhausted: bool,
    pub steps: u64,
}

/// Rejects a base set whose courses repeat an identity key or overlap in time.
pub fn validate_base(base: &[Course]) -> Result<()> {
    let mut keys = HashSet::new();
    for course in base {
        if !keys.insert(course.identity_key()) {
            return Err(EngineError::DuplicateMandatory {
                key: course.identity_key().to_string(),
            });
        }
    }
    if let Some((i, j)) = find_conflict(base) {
        return Err(EngineError::MandatoryConflict {
            first: base[i].code.clone(),
            second: base[j].code.clone(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone)]
struct Candidate<'a> {
    courses: Vec<&'a Course>,
    credits: CreditBreakdown,
    grid: OccupancyGrid,
}

impl<'a> Candidate<'a> {
    fn holds_key(&self, key: &str) -> bool {
        self.courses.iter().any(|c| c.identity_key() == key)
    }

    fn extended(&self, label: &TypeLabel, partial: &[&'a Course], grid: OccupancyGrid) -> Self {
        let added = total_credits(partial.iter().copied());
        let mut credits = self.credits.clone();
        let bucket = credits.by_type.entry(label.clone()).or_default();
        *bucket = bucket.saturating_add(added);
        credits.total = credits.total.saturating_add(added);

        let mut courses = self.courses.clone();
        courses.extend_from_slice(partial);
        Candidate { courses, credits, grid }
    }
}

struct CombinationSearch<'a> {
    settings: &'a CreditSettings,
    pools: HashMap<TypeLabel, Vec<&'a Course>>,
    wanted: usize,
    budget: StepBudget,
    accepted: Vec<Timetable>,
    seen: HashSet<Vec<String>>,
}

impl<'a> CombinationSearch<'a> {
    fn is_done(&self) -> bool {
        self.accepted.len() >= self.wanted || self.budget.is_exhausted()
    }

    fn descend(&mut self, type_index: usize, candidate: &Candidate<'a>) {
        if self.is_done() || !self.budget.tick() {
            return;
        }

        let settings = self.settings;
        let Some(label) = settings.target_types.get(type_index) else {
            self.accept(candidate);
            return;
        };

        let Some(range) = settings.range(label) else {
            debug!("type {} has no credit range; skipped", label);
            self.descend(type_index + 1, candidate);
            return;
        };

        let have = candidate.credits.of(label);
        let Some(remaining) = range.remaining_after(have) else {
            debug!("type {}: {} credits already exceed max {}", label, have, range.max);
            return;
        };

        let pool: &[&'a Course] = self.pools.get(label).map(Vec::as_slice).unwrap_or(&[]);
        let partials = find_partial_combinations_within(pool, remaining, &mut self.budget);
        if partials.is_empty() {
            debug!(
                "type {}: no partial within [{}, {}] out of {} courses; branch dropped",
                label,
                remaining.min,
                remaining.max,
                pool.len()
            );
            return;
        }

        for partial in &partials {
            if self.is_done() {
                return;
            }
            if partial.iter().any(|c| candidate.holds_key(c.identity_key())) {
                continue;
            }
            let mut grid = candidate.grid.clone();
            if !grid.try_occupy_all(partial.iter().copied()) {
                continue;
            }
            let next = candidate.extended(label, partial, grid);
            self.descend(type_index + 1, &next);
        }
    }

    fn accept(&mut self, candidate: &Candidate<'a>) {
        if !meets_criteria(self.settings, &candidate.credits) {
            debug!("candidate rejected by credit criteria (total {})", candidate.credits.total);
            return;
        }
        // keyed on codes: two sections of one group are distinct timetables
        let mut codes: Vec<String> = candidate.courses.iter().map(|c| c.code.clone()).collect();
        codes.sort();
        if !self.seen.insert(codes) {
            debug!("candidate duplicates an accepted timetable");
            return;
        }
        self.accepted.push(Timetable {
            courses: candidate.courses.iter().map(|c| (*c).clone()).collect(),
            credits: candidate.credits.clone(),
        });
    }
}

/// Up to `wanted` conflict-free timetables that extend `base` with electives
/// from `pool` and satisfy `settings`.
///
/// Results come in traversal order: target types in the order listed in
/// `settings`, and each type's subsets in pool order. The base must already be
/// conflict-free and duplicate-free; it is validated here and rejected before
/// any search starts. An empty result is not an error.
pub fn generate<F>(
    base: &[Course],
    pool: &[Course],
    settings: &CreditSettings,
    wanted: usize,
    classify: F,
) -> Result<Vec<Timetable>>
where
    F: Fn(&Course) -> TypeLabel,
{
    generate_within(base, pool, settings, wanted, classify, StepBudget::unlimited())
        .map(|outcome| outcome.timetables)
}

/// [`generate`] bounded by a step budget.
pub fn generate_within<F>(
    base: &[Course],
    pool: &[Course],
    settings: &CreditSettings,
    wanted: usize,
    classify: F,
    budget: StepBudget,
) -> Result<SearchOutcome>
where
    F: Fn(&Course) -> TypeLabel,
{
    settings.validate()?;
    if wanted == 0 {
        return Err(EngineError::InvalidWanted);
    }
    validate_base(base)?;

    let base_keys: HashSet<&str> = base.iter().map(Course::identity_key).collect();
    let mut pools: HashMap<TypeLabel, Vec<&Course>> = HashMap::new();
    for course in pool {
        if base_keys.contains(course.identity_key()) {
            debug!("{} already in the base timetable; left out of the pool", course.code);
            continue;
        }
        pools.entry(classify(course)).or_default().push(course);
    }

    let mut grid = OccupancyGrid::new();
    for course in base {
        grid.try_occupy(course);
    }
    let root = Candidate {
        courses: base.iter().collect(),
        credits: credits_by_type(base, settings, &classify),
        grid,
    };

    let mut search = CombinationSearch {
        settings,
        pools,
        wanted,
        budget,
        accepted: Vec::new(),
        seen: HashSet::new(),
    };
    search.descend(0, &root);

    info!(
        "combination search: {} timetable(s) in {} steps{}",
        search.accepted.len(),
        search.budget.used(),
        if search.budget.is_exhausted() { " (step budget exhausted)" } else { "" }
    );

    Ok(SearchOutcome {
        budget_exhausted: search.budget.is_exhausted(),
        steps: search.budget.used(),
        timetables: search.accepted,
    })
}
