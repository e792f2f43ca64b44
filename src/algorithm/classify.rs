// Maps a course to the bucket a given student counts it under.

use log::warn;

use crate::models::{Course, SecondaryMajorKind, StudentProfile, TypeLabel};

fn same_department(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    !a.is_empty() && a.eq_ignore_ascii_case(b)
}

/// First match wins:
/// 1. major tag equal to the student's major -> `Major`
/// 2. major tag equal to the secondary major -> `DoubleMajor` or `Minor`,
///    depending on the relationship kind
/// 3. flagged as a major course of another department -> `OpenElective`
/// 4. generalized type tag -> that tag
/// 5. `Other`
///
/// Never fails. Without a student profile every course is `Other`.
pub fn classify(course: &Course, student: Option<&StudentProfile>) -> TypeLabel {
    let Some(student) = student else {
        warn!("no student profile; course {} counted as other", course.code);
        return TypeLabel::Other;
    };

    if let Some(tag) = course.major_tag.as_deref() {
        if same_department(tag, &student.major) {
            return TypeLabel::Major;
        }
        if let Some(secondary) = student.secondary_major.as_deref() {
            if same_department(tag, secondary) {
                match student.secondary_kind {
                    SecondaryMajorKind::DoubleMajor => return TypeLabel::DoubleMajor,
                    SecondaryMajorKind::Minor | SecondaryMajorKind::IntensiveMinor => {
                        return TypeLabel::Minor;
                    }
                    SecondaryMajorKind::None | SecondaryMajorKind::Intensive => {}
                }
            }
        }
    }

    if course.major_candidate {
        return TypeLabel::OpenElective;
    }

    match course.type_tag.as_deref().map(str::trim) {
        Some(tag) if !tag.is_empty() => TypeLabel::from(tag),
        _ => TypeLabel::Other,
    }
}
