// Credit aggregation per type bucket, and the credit criteria check used as
// the search's feasibility oracle.

use crate::models::{Course, CreditBreakdown, CreditSettings, TypeLabel};

/// Sums credits per type. Every type named in `settings` (ranges and target
/// types) is present in the result, with zero when no course counts toward it.
/// Each course adds its whole credit value to the single bucket chosen by
/// `classify`.
pub fn credits_by_type<'a, I, F>(courses: I, settings: &CreditSettings, classify: F) -> CreditBreakdown
where
    I: IntoIterator<Item = &'a Course>,
    F: Fn(&Course) -> TypeLabel,
{
    let mut out = seeded(settings);
    for course in courses {
        let credits = course.credit_value();
        let bucket = out.by_type.entry(classify(course)).or_default();
        *bucket = bucket.saturating_add(credits);
        out.total = out.total.saturating_add(credits);
    }
    out
}

/// Zero entry for every type the settings mention.
pub fn seeded(settings: &CreditSettings) -> CreditBreakdown {
    let mut out = CreditBreakdown::default();
    for label in settings.ranges.keys().chain(settings.target_types.iter()) {
        out.by_type.entry(label.clone()).or_insert(0);
    }
    out
}

/// Saturates at `u32::MAX` instead of overflowing on oversized credit values.
pub fn total_credits<'a, I>(courses: I) -> u32
where
    I: IntoIterator<Item = &'a Course>,
{
    courses
        .into_iter()
        .fold(0u32, |acc, c| acc.saturating_add(c.credit_value()))
}

/// True if every configured type range and the total bounds hold.
pub fn meets_criteria(settings: &CreditSettings, credits: &CreditBreakdown) -> bool {
    let types_ok = settings
        .ranges
        .iter()
        .all(|(label, range)| range.contains(credits.of(label)));
    let min_ok = settings.min_total.is_none_or(|min| credits.total >= min);
    let max_ok = settings.max_total.is_none_or(|max| credits.total <= max);
    types_ok && min_ok && max_ok
}
