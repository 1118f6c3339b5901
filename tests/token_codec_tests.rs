use group_schedule_bot::error::ScheduleError;
use group_schedule_bot::schedule::render::navigation_tokens;
use group_schedule_bot::schedule::token::MAX_TOKEN_LEN;
use group_schedule_bot::schedule::{NavAction, NavigationToken};

const OFFSETS: [i32; 9] = [-100_000, -99_999, -10_000, -1, 0, 1, 10_000, 99_999, 100_000];

#[test]
fn test_navigation_tokens_round_trip_and_fit() {
    for action in [NavAction::Previous, NavAction::Current, NavAction::Next] {
        for target in OFFSETS {
            for origin in OFFSETS {
                let token = NavigationToken::Navigate { action, target, origin };
                let encoded = token.encode();

                assert!(encoded.len() <= MAX_TOKEN_LEN, "{encoded} is too long");
                assert!(encoded.is_ascii());
                assert_eq!(NavigationToken::decode(&encoded).unwrap(), token);
            }
        }
    }
}

#[test]
fn test_confirmation_tokens_round_trip_for_31_bit_ids() {
    for group_id in [0_i64, 1, 42, i64::from(i32::MAX)] {
        for token in [NavigationToken::Confirm { group_id }, NavigationToken::Cancel { group_id }] {
            let encoded = token.encode();
            assert!(encoded.len() <= MAX_TOKEN_LEN);
            assert_eq!(NavigationToken::decode(&encoded).unwrap(), token);
        }
    }
}

#[test]
fn test_generated_offsets_around_current_week() {
    for current in [-100, -1, 0, 1, 100] {
        let targets: Vec<i32> = navigation_tokens(current)
            .into_iter()
            .map(|token| match token {
                NavigationToken::Navigate { target, origin, .. } => {
                    assert_eq!(origin, current);
                    target
                }
                other => panic!("unexpected token {other:?}"),
            })
            .collect();

        assert_eq!(targets, vec![current - 1, 0, current + 1]);
    }
}

#[test]
fn test_structured_payloads_are_not_accepted() {
    let legacy = r#"schedule_{"action": "next", "offset": 1, "current_offset": 0}"#;
    assert!(matches!(
        NavigationToken::decode(legacy),
        Err(ScheduleError::MalformedToken(_))
    ));
}

#[test]
fn test_decoding_garbage_never_panics() {
    let inputs = [
        ":", "::", ":::", "nav_prev::", "grp_yes:", "grp_yes:-", "nav_next:1:2:",
        "NAV_NEXT:1:2", " nav_next:1:2", "nav_next: 1:2", "grp_no:1.5", "日本:1:2",
    ];
    for input in inputs {
        assert!(NavigationToken::decode(input).is_err(), "accepted {input:?}");
    }
}
