// recommend.rs - request pipeline around the combination search
//
// PHASE 1: validate input
//   - credit ranges (max >= min) and wanted > 0
//   - mandatory courses: no repeated identity key, no time conflict
// PHASE 2: prepare the pool
//   - warn about malformed entries (they degrade, never abort)
//   - apply the time-preference pre-filter
// PHASE 3: combination search (algorithm::combine::generate_within)
// PHASE 4: fallback
//   - nothing combined: offer the mandatory courses alone when they already
//     satisfy the credit criteria

use log::{info, warn};

use crate::algorithm::classify::classify;
use crate::algorithm::combine::{generate_within, validate_base};
use crate::algorithm::conflict::is_malformed;
use crate::algorithm::credits::{credits_by_type, meets_criteria};
use crate::algorithm::filters::apply_time_preference;
use crate::api_json::RecommendInput;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::models::{Course, Outcome, Recommendation, Timetable, TypeLabel};

fn report_malformed(courses: &[Course], what: &str) {
    for course in courses {
        if course.credits < 0 {
            warn!(
                "{} course {} has negative credits ({}); counted as 0",
                what, course.code, course.credits
            );
        }
        if is_malformed(course) {
            warn!("{} course {} has malformed time slots; those cells are ignored", what, course.code);
        }
    }
}

/// Runs the full pipeline for one request.
///
/// Errors only for rejected input (bad credit ranges, `wanted == 0`,
/// conflicting or repeated mandatory courses). Finding nothing is reported
/// as `Outcome::NoSolution`.
pub fn recommend(input: &RecommendInput, config: &EngineConfig) -> Result<Recommendation> {
    let settings = &input.credit_settings;
    let wanted = input.wanted_or_default(config);

    info!("📋 PHASE 1: validate input");
    settings.validate()?;
    if wanted == 0 {
        return Err(EngineError::InvalidWanted);
    }
    validate_base(&input.mandatory)?;

    info!("📋 PHASE 2: prepare pool");
    if input.student.is_none() {
        warn!("request has no student profile; every course will count as 'other'");
    }
    report_malformed(&input.mandatory, "mandatory");
    report_malformed(&input.catalog, "catalog");
    let pool = apply_time_preference(&input.catalog, input.time_preference.as_ref());
    info!("   ✓ pool: {} of {} courses after time preferences", pool.len(), input.catalog.len());

    info!("📋 PHASE 3: combination search");
    let student = input.student.as_ref();
    let classify_for_student = |course: &Course| -> TypeLabel {
        if student.is_none() {
            return TypeLabel::Other;
        }
        classify(course, student)
    };
    let outcome = generate_within(
        &input.mandatory,
        &pool,
        settings,
        wanted,
        &classify_for_student,
        config.budget(),
    )?;

    if !outcome.timetables.is_empty() {
        info!("✅ {} timetable(s) recommended", outcome.timetables.len());
        return Ok(Recommendation {
            outcome: Outcome::Found,
            timetables: outcome.timetables,
            budget_exhausted: outcome.budget_exhausted,
        });
    }

    info!("📋 PHASE 4: fallback");
    let credits = credits_by_type(&input.mandatory, settings, &classify_for_student);
    if !input.mandatory.is_empty() && meets_criteria(settings, &credits) {
        info!("   ✓ mandatory courses alone meet the credit criteria");
        return Ok(Recommendation {
            outcome: Outcome::MandatoryOnly,
            timetables: vec![Timetable {
                courses: input.mandatory.clone(),
                credits,
            }],
            budget_exhausted: outcome.budget_exhausted,
        });
    }

    warn!("⚠️  no timetable satisfies the credit settings");
    Ok(Recommendation {
        outcome: Outcome::NoSolution,
        timetables: Vec::new(),
        budget_exhausted: outcome.budget_exhausted,
    })
}
