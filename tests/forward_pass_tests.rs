use aoa_network::{ActivityRecord, NetworkConfig, calculate_times};

fn records(rows: &[(&str, &str, i64)]) -> Vec<ActivityRecord> {
    rows.iter().map(|row| (*row).into()).collect()
}

#[test]
fn forward_pass_computes_early_times_across_network() {
    // a(20) -> {b(10) -> c(8), d(11)} -> e(7) -> {f(6), h(13)}; d -> g(12); {g, h} -> i(5)
    let schedule = calculate_times(
        &records(&[
            ("a", "-", 20),
            ("b", "a", 10),
            ("c", "b", 8),
            ("d", "a", 11),
            ("e", "c,d", 7),
            ("f", "e", 6),
            ("g", "d", 12),
            ("h", "e", 13),
            ("i", "g,h", 5),
        ]),
        &NetworkConfig::default(),
    )
    .unwrap();

    let earlies: Vec<(&str, i64, i64)> = schedule
        .activities
        .iter()
        .map(|t| (t.name.as_str(), t.early_start, t.early_finish))
        .collect();

    assert_eq!(
        earlies,
        vec![
            ("a", 0, 20),
            ("b", 20, 30),
            ("c", 30, 38),
            ("d", 20, 31),
            ("e", 38, 45),
            ("f", 45, 51),
            ("g", 31, 43),
            ("h", 45, 58),
            ("i", 58, 63),
        ]
    );
    assert_eq!(schedule.project_duration, 63);
}

#[test]
fn forward_pass_handles_input_listed_out_of_order() {
    let schedule = calculate_times(
        &records(&[("c", "a,b", 2), ("b", "-", 5), ("a", "-", 3)]),
        &NetworkConfig::default(),
    )
    .unwrap();

    let c = schedule.get("c").unwrap();
    assert_eq!((c.early_start, c.early_finish), (5, 7));
    assert_eq!(schedule.project_duration, 7);
}

#[test]
fn zero_duration_activities_pass_time_through() {
    let schedule = calculate_times(
        &records(&[("a", "-", 4), ("milestone", "a", 0), ("b", "milestone", 2)]),
        &NetworkConfig::default(),
    )
    .unwrap();

    let milestone = schedule.get("milestone").unwrap();
    assert_eq!((milestone.early_start, milestone.early_finish), (4, 4));
    assert_eq!(schedule.get("b").unwrap().early_finish, 6);
}
