use sugang::algorithm::{classify, generate};
use sugang::models::{Course, CreditSettings, StudentProfile, TimeSlot, Timetable, TypeLabel};

fn student() -> StudentProfile {
    StudentProfile {
        major: "CSE".to_string(),
        ..StudentProfile::default()
    }
}

fn major(code: &str, credits: i32, day: &str, periods: &[u8]) -> Course {
    let mut c = Course::new(code, credits, vec![TimeSlot::new(day, periods)]);
    c.major_tag = Some("CSE".to_string());
    c
}

fn ge(code: &str, credits: i32, day: &str, periods: &[u8]) -> Course {
    let mut c = Course::new(code, credits, vec![TimeSlot::new(day, periods)]);
    c.type_tag = Some("ge".to_string());
    c
}

fn codes(found: &[Timetable]) -> Vec<Vec<&str>> {
    found.iter().map(|t| t.codes()).collect()
}

fn major_and_ge() -> CreditSettings {
    CreditSettings::default()
        .with_range(TypeLabel::Major, 3, 6)
        .with_range(TypeLabel::from("ge"), 2, 2)
        .with_total(5, 8)
        .with_targets(&[TypeLabel::Major, TypeLabel::from("ge")])
}

#[test]
fn three_results_in_pool_order() {
    let s = student();
    let pool = vec![
        major("A", 3, "Mon", &[1, 2, 3]),
        major("B", 3, "Tue", &[1, 2, 3]),
        ge("C", 2, "Wed", &[1, 2]),
    ];
    let found = generate(&[], &pool, &major_and_ge(), 3, |c: &Course| classify(c, Some(&s)))
        .expect("search must run");

    assert_eq!(codes(&found), vec![vec!["A", "C"], vec!["A", "B", "C"], vec!["B", "C"]]);
    let totals: Vec<u32> = found.iter().map(|t| t.credits.total).collect();
    assert_eq!(totals, vec![5, 8, 5]);
}

#[test]
fn wanted_one_returns_the_first_in_traversal_order() {
    let s = student();
    let pool = vec![
        major("A", 3, "Mon", &[1, 2, 3]),
        major("B", 3, "Tue", &[1, 2, 3]),
        ge("C", 2, "Wed", &[1, 2]),
        ge("D", 2, "Thu", &[1, 2]),
    ];
    let found = generate(&[], &pool, &major_and_ge(), 1, |c: &Course| classify(c, Some(&s)))
        .expect("search must run");
    assert_eq!(codes(&found), vec![vec!["A", "C"]]);
}

#[test]
fn elective_conflicting_with_base_is_never_combined() {
    let s = student();
    let base = vec![major("X", 3, "Mon", &[1, 2])];
    let pool = vec![ge("Y", 2, "Mon", &[1])];
    let requires_ge = CreditSettings::default()
        .with_range(TypeLabel::from("ge"), 2, 2)
        .with_targets(&[TypeLabel::from("ge")]);
    let found = generate(&base, &pool, &requires_ge, 5, |c: &Course| classify(c, Some(&s)))
        .expect("search must run");
    assert!(found.is_empty());

    let optional_ge = CreditSettings::default()
        .with_range(TypeLabel::from("ge"), 0, 2)
        .with_targets(&[TypeLabel::from("ge")]);
    let found = generate(&base, &pool, &optional_ge, 5, |c: &Course| classify(c, Some(&s)))
        .expect("search must run");
    assert_eq!(codes(&found), vec![vec!["X"]]);
}

#[test]
fn total_bounds_filter_assembled_timetables() {
    let s = student();
    let pool = vec![
        major("A", 3, "Mon", &[1, 2, 3]),
        major("B", 3, "Tue", &[1, 2, 3]),
        ge("C", 2, "Wed", &[1, 2]),
    ];
    let settings = major_and_ge().with_total(5, 5);
    let found = generate(&[], &pool, &settings, 10, |c: &Course| classify(c, Some(&s)))
        .expect("search must run");
    assert_eq!(codes(&found), vec![vec!["A", "C"], vec!["B", "C"]]);
}

#[test]
fn cross_listed_sections_never_appear_together() {
    let s = student();
    let mut a1 = major("A-01", 3, "Mon", &[1]);
    let mut a2 = major("A-02", 3, "Tue", &[1]);
    a1.group_id = Some("A".to_string());
    a2.group_id = Some("A".to_string());
    let pool = vec![a1, a2, ge("C", 2, "Wed", &[1])];
    let found = generate(&[], &pool, &major_and_ge(), 10, |c: &Course| classify(c, Some(&s)))
        .expect("search must run");
    assert_eq!(codes(&found), vec![vec!["A-01", "C"], vec!["A-02", "C"]]);
}

#[test]
fn secondary_major_counts_in_its_own_bucket() {
    let s = StudentProfile {
        major: "CSE".to_string(),
        secondary_major: Some("MATH".to_string()),
        secondary_kind: sugang::models::SecondaryMajorKind::Minor,
    };
    let mut m = Course::new("MATH201", 3, vec![TimeSlot::new("Fri", &[1, 2, 3])]);
    m.major_tag = Some("MATH".to_string());
    let pool = vec![major("A", 3, "Mon", &[1, 2, 3]), m];
    let settings = CreditSettings::default()
        .with_range(TypeLabel::Major, 3, 3)
        .with_range(TypeLabel::Minor, 3, 3)
        .with_targets(&[TypeLabel::Major, TypeLabel::Minor]);
    let found = generate(&[], &pool, &settings, 5, |c: &Course| classify(c, Some(&s)))
        .expect("search must run");
    assert_eq!(codes(&found), vec![vec!["A", "MATH201"]]);
    assert_eq!(found[0].credits.of(&TypeLabel::Minor), 3);
}

#[test]
fn repeated_calls_are_deterministic() {
    let s = student();
    let pool: Vec<Course> = (1..=6)
        .map(|p| major(&format!("M{p}"), 3, "Mon", &[p]))
        .chain((1..=4).map(|p| ge(&format!("G{p}"), 2, "Tue", &[p])))
        .collect();
    let run = || {
        generate(&[], &pool, &major_and_ge(), 7, |c: &Course| classify(c, Some(&s)))
            .expect("search must run")
    };
    let first = run();
    assert_eq!(first.len(), 7);
    for _ in 0..3 {
        assert_eq!(run(), first);
    }
}
