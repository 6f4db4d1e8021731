//! End-to-end planning scenarios on a realistic 21-course catalog.

use std::collections::HashSet;

use course_plan::conflict::courses_conflict;
use course_plan::models::{Catalog, Course, Plan, PlanRequest, Preferences};
use course_plan::planner::{Planner, SolveStatus, MAX_COURSES};

/// 21 courses across six departments. Twice-weekly courses run 1.5h
/// per session; once-weekly courses run as many hours as credits.
fn sample_catalog() -> Catalog {
    let rows: &[(&str, &str, &str, u32, &str, f64, &[u8])] = &[
        ("1", "CS301", "Database Systems", 3, "Computer Science", 9.0, &[0, 2]),
        ("2", "CS302", "Operating Systems", 3, "Computer Science", 11.0, &[1, 3]),
        ("3", "CS303", "Machine Learning Basics", 3, "Computer Science", 14.0, &[0, 2]),
        ("4", "CS304", "Web Programming", 3, "Computer Science", 16.0, &[1, 3]),
        ("5", "CS305", "Artificial Intelligence", 3, "Computer Science", 13.0, &[4]),
        ("6", "MGT301", "Corporate Finance", 3, "Management", 10.0, &[0, 2]),
        ("7", "MGT302", "Marketing Strategy", 3, "Management", 14.0, &[1, 3]),
        ("8", "MGT303", "Management Information Systems", 3, "Management", 16.0, &[0, 2]),
        ("9", "ECON301", "Microeconomics", 3, "Economics", 9.0, &[1, 3]),
        ("10", "ECON302", "Macroeconomics", 3, "Economics", 11.0, &[0, 2]),
        ("11", "ECON303", "Econometrics", 3, "Economics", 15.0, &[1, 3]),
        ("12", "STAT301", "Introduction to Statistics", 3, "Statistics", 10.0, &[1, 3]),
        ("13", "STAT302", "Data Mining", 3, "Statistics", 13.0, &[0, 2]),
        ("14", "STAT303", "Regression Analysis", 3, "Statistics", 15.0, &[4]),
        ("15", "PSY301", "Consumer Psychology", 3, "Psychology", 11.0, &[1, 3]),
        ("16", "PSY302", "Organizational Psychology", 3, "Psychology", 14.0, &[0, 2]),
        ("17", "PSY303", "Cognitive Psychology", 3, "Psychology", 16.0, &[4]),
        ("18", "GEN101", "Writing and Communication", 2, "General Education", 9.0, &[4]),
        ("19", "GEN102", "Critical Thinking", 2, "General Education", 11.0, &[4]),
        ("20", "GEN103", "English Conversation", 2, "General Education", 10.0, &[2]),
        ("21", "GEN104", "Understanding World Cultures", 3, "General Education", 13.0, &[1, 3]),
    ];

    let courses = rows
        .iter()
        .map(|&(id, code, name, credits, dept, start, days)| {
            let duration = if days.len() >= 2 { 1.5 } else { f64::from(credits) };
            let mut c = Course::new(id)
                .with_code(code)
                .with_name(name)
                .with_credits(credits)
                .with_department(dept);
            for &day in days {
                c = c.with_meeting(day, start, start + duration);
            }
            c
        })
        .collect();

    Catalog::new(courses).unwrap()
}

fn assert_valid_plan(plan: &Plan, preferences: &Preferences) {
    assert!(plan.len() <= MAX_COURSES);
    assert!(
        plan.total_credits() >= preferences.min_credits
            && plan.total_credits() <= preferences.max_credits,
        "{} credits outside [{}, {}]",
        plan.total_credits(),
        preferences.min_credits,
        preferences.max_credits
    );
    for (i, a) in plan.courses.iter().enumerate() {
        for b in &plan.courses[i + 1..] {
            assert!(
                !courses_conflict(a, b),
                "plan contains conflicting courses {} and {}",
                a.id,
                b.id
            );
        }
    }
}

#[test]
fn default_request_produces_valid_plan() {
    let catalog = sample_catalog();
    let request = PlanRequest::new();

    let result = Planner::new().generate(&catalog, &request);

    assert_eq!(result.status, SolveStatus::Optimal);
    assert!(!result.plan.is_empty());
    assert_valid_plan(&result.plan, &request.preferences);
}

#[test]
fn identical_requests_are_deterministic() {
    let catalog = sample_catalog();
    let planner = Planner::new();
    let request = PlanRequest::new()
        .with_selected_ids(["3", "9"])
        .with_seed(11);

    let first = planner.generate(&catalog, &request);
    let second = planner.generate(&catalog, &request);

    assert_eq!(first, second);
}

#[test]
fn seeds_diversify_plans() {
    let catalog = sample_catalog();
    let planner = Planner::new();

    let mut distinct: HashSet<Vec<String>> = HashSet::new();
    for seed in 0..20 {
        let request = PlanRequest::new().with_seed(seed);
        let result = planner.generate(&catalog, &request);

        assert!(!result.plan.is_empty(), "seed {seed} found no plan");
        assert_valid_plan(&result.plan, &request.preferences);
        distinct.insert(
            result
                .plan
                .courses
                .iter()
                .map(|c| c.id.clone())
                .collect(),
        );
    }

    assert!(
        distinct.len() > 1,
        "20 seeds all produced the same plan"
    );
}

#[test]
fn non_conflicting_selections_appear_in_plan() {
    let catalog = sample_catalog();
    // CS301 (Mon/Wed morning) and CS302 (Tue/Thu midday) are clear of
    // each other, and feasible supersets within 12-18 credits exist.
    let request = PlanRequest::new().with_selected_ids(["1", "2"]);

    let result = Planner::new().generate(&catalog, &request);

    assert!(result.plan.contains("1"));
    assert!(result.plan.contains("2"));
    assert_valid_plan(&result.plan, &request.preferences);
}

#[test]
fn earlier_selection_wins_conflict() {
    let catalog = sample_catalog();
    // CS301 and MGT301 overlap on Mon/Wed mornings; the earlier ID is
    // confirmed, the later one is not forced (and cannot coexist).
    let request = PlanRequest::new().with_selected_ids(["1", "6"]);

    let result = Planner::new().generate(&catalog, &request);

    assert!(result.plan.contains("1"));
    assert!(!result.plan.contains("6"));
}

#[test]
fn preference_flags_keep_plans_valid() {
    let catalog = sample_catalog();
    let planner = Planner::new();

    for (avoid_morning, avoid_evening, prefer_long_break) in
        [(true, false, false), (false, true, false), (false, false, true)]
    {
        let preferences = Preferences {
            avoid_morning,
            avoid_evening,
            prefer_long_break,
            ..Preferences::default()
        };
        let request = PlanRequest::new().with_preferences(preferences.clone());

        let result = planner.generate(&catalog, &request);
        assert!(!result.plan.is_empty());
        assert_valid_plan(&result.plan, &preferences);
    }
}

#[test]
fn unreachable_credit_floor_reports_infeasible() {
    let catalog = sample_catalog();
    // 7 courses cap × 3 credits max = 21 < 40.
    let request =
        PlanRequest::new().with_preferences(Preferences::with_credit_bounds(40, 60));

    let result = Planner::new().generate(&catalog, &request);

    assert_eq!(result.status, SolveStatus::Infeasible);
    assert!(result.into_plan().is_empty());
}

#[test]
fn unknown_selection_ids_are_ignored() {
    let catalog = sample_catalog();
    let request = PlanRequest::new().with_selected_ids(["999", "1", "nope"]);

    let result = Planner::new().generate(&catalog, &request);

    assert!(result.plan.contains("1"));
    assert_valid_plan(&result.plan, &request.preferences);
}

#[test]
fn request_contract_parses_camel_case_json() {
    let request: PlanRequest = serde_json::from_str(
        r#"{
            "selectedIds": ["1", "2"],
            "preferences": {"minCredits": 12, "maxCredits": 15, "avoidEvening": true},
            "seed": 3
        }"#,
    )
    .unwrap();

    assert_eq!(request.selected_ids, vec!["1", "2"]);
    assert_eq!(request.preferences.max_credits, 15);
    assert!(request.preferences.avoid_evening);
    assert_eq!(request.seed, 3);

    let result = Planner::new().generate(&sample_catalog(), &request);
    assert!(result.plan.contains("1"));
    assert!(result.plan.contains("2"));
    assert_valid_plan(&result.plan, &request.preferences);
}
