use group_schedule_bot::schedule::{GroupMatcher, GroupSummary, MatchKind};

fn groups() -> Vec<GroupSummary> {
    [
        (1, "М8О-101БВ-24", "Computer Science"),
        (2, "М8О-207БВ-24", "Computer Science"),
        (3, "М3О-207Б-23", "Aerospace"),
        (4, "Т6О-310С-22", "Robotics"),
    ]
    .into_iter()
    .map(|(id, name, faculty)| GroupSummary {
        id,
        name: name.to_string(),
        faculty: faculty.to_string(),
    })
    .collect()
}

#[test]
fn test_exact_name_is_first() {
    let found = GroupMatcher::search("М8О-207БВ-24", &groups());

    assert_eq!(found[0].group_id, 2);
    assert_eq!(found[0].group_name, "М8О-207БВ-24");
    assert_eq!(found[0].faculty, "Computer Science");
    assert_eq!(found[0].kind, MatchKind::Exact);
}

#[test]
fn test_exact_match_ignores_case_and_outer_whitespace() {
    let found = GroupMatcher::search("  м8о-207бв-24 ", &groups());
    assert_eq!(found[0].group_id, 2);
    assert_eq!(found[0].kind, MatchKind::Exact);
}

#[test]
fn test_partial_code_finds_group() {
    let found = GroupMatcher::search("207БВ", &groups());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].group_id, 2);
    assert_eq!(found[0].kind, MatchKind::InputContainsGroup);
}

#[test]
fn test_spacing_variants_match_without_being_exact() {
    let found = GroupMatcher::search("м8о 207бв 24", &groups());

    assert!(!found.is_empty());
    assert_eq!(found[0].group_id, 2);
    assert!(found.iter().all(|c| c.kind != MatchKind::Exact));
}

#[test]
fn test_input_wrapping_a_group_name() {
    let found = GroupMatcher::search("моя группа Т6О-310С-22 спасибо", &groups());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].group_id, 4);
    assert_eq!(found[0].kind, MatchKind::GroupContainsInput);
}

#[test]
fn test_discovery_order_is_kept_for_partial_matches() {
    let found = GroupMatcher::search("207", &groups());
    let ids: Vec<i64> = found.iter().map(|c| c.group_id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_search_is_stable() {
    let groups = groups();
    let first = GroupMatcher::search("м8о", &groups);
    let second = GroupMatcher::search("м8о", &groups);
    assert_eq!(first, second);
    assert_eq!(first.iter().map(|c| c.group_id).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_unknown_or_empty_input() {
    assert!(GroupMatcher::search("XYZ-999", &groups()).is_empty());
    assert!(GroupMatcher::search("", &groups()).is_empty());
    // Punctuation alone would otherwise be a substring of every name.
    assert!(GroupMatcher::search("-", &groups()).is_empty());
    assert!(GroupMatcher::search(" - \t-", &groups()).is_empty());
    assert!(GroupMatcher::search("М8О-207БВ-24", &[]).is_empty());
}
