use serde::Serialize;

use super::GroupSummary;

/// How a candidate group name relates to the user's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Case-insensitive equality of the untouched strings.
    Exact,
    /// The normalized input was found inside the normalized group name.
    InputContainsGroup,
    /// The normalized group name was found inside the normalized input.
    GroupContainsInput,
}

/// A group suggested for the user's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchCandidate {
    /// Group identifier in storage.
    pub group_id: i64,
    /// Display name of the group.
    pub group_name: String,
    /// Faculty the group belongs to.
    pub faculty: String,
    /// Why this candidate was picked.
    pub kind: MatchKind,
}

impl MatchCandidate {
    fn new(group: &GroupSummary, kind: MatchKind) -> Self {
        Self {
            group_id: group.id,
            group_name: group.name.clone(),
            faculty: group.faculty.clone(),
            kind,
        }
    }
}

/// Greedy best-effort lookup of group names typed by users.
///
/// Group codes are typed in many shapes ("М8О-207БВ-24", "м8о 207бв 24",
/// "207БВ"), so both sides are compared with whitespace and hyphens removed.
/// The result is not scored: exact matches come first, everything else keeps
/// the order the groups were listed in.
pub struct GroupMatcher;

impl GroupMatcher {
    /// Ranks `groups` against `input`. The first entry is the best guess.
    pub fn search(input: &str, groups: &[GroupSummary]) -> Vec<MatchCandidate> {
        let input = input.trim();
        let normalized_input = normalize(input);
        if normalized_input.is_empty() {
            return Vec::new();
        }
        let lowered_input = input.to_lowercase();

        let (exact, partial): (Vec<MatchCandidate>, Vec<MatchCandidate>) = groups
            .iter()
            .flat_map(|group| classify(group, &lowered_input, &normalized_input))
            .partition(|candidate| candidate.kind == MatchKind::Exact);

        exact.into_iter().chain(partial).collect()
    }
}

fn classify(group: &GroupSummary, lowered_input: &str, normalized_input: &str) -> Vec<MatchCandidate> {
    if group.name.to_lowercase() == lowered_input {
        return vec![MatchCandidate::new(group, MatchKind::Exact)];
    }

    let normalized_name = normalize(&group.name);
    let mut found = Vec::new();
    if normalized_name.contains(normalized_input) {
        found.push(MatchCandidate::new(group, MatchKind::InputContainsGroup));
    }
    if !normalized_name.is_empty() && normalized_input.contains(normalized_name.as_str()) {
        found.push(MatchCandidate::new(group, MatchKind::GroupContainsInput));
    }
    found
}

/// Lower-cases `text` and strips whitespace and hyphens.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
