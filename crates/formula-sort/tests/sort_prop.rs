use chrono::{DateTime, Utc};
use formula_sort::{compare, is_sorted, sort_values, sort_values_by, ScalarValue, Sort};
use proptest::prelude::*;
use std::cmp::Ordering;

fn scalar() -> impl Strategy<Value = ScalarValue> {
    prop_oneof![
        Just(ScalarValue::Unset),
        prop_oneof![
            (-1_000i32..1_000).prop_map(|n| f64::from(n) / 4.0),
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(-0.0),
        ]
        .prop_map(ScalarValue::Number),
        prop_oneof![
            Just(None),
            (0i64..4_000_000_000).prop_map(|secs| DateTime::<Utc>::from_timestamp(secs, 0)),
        ]
        .prop_map(ScalarValue::Timestamp),
        "[a-cA-C]{0,3}".prop_map(ScalarValue::from),
    ]
}

/// Multiset of `Debug` renderings, which tell apart every distinct value (including NaN and
/// `-0.0`).
fn multiset(values: &[ScalarValue]) -> Vec<String> {
    let mut out: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
    out.sort();
    out
}

proptest! {
    #[test]
    fn sort_yields_an_ordered_permutation(input in prop::collection::vec(scalar(), 0..200)) {
        let mut values = input.clone();
        sort_values(&mut values);

        prop_assert_eq!(multiset(&values), multiset(&input));
        for pair in values.windows(2) {
            prop_assert_ne!(compare(&pair[0], &pair[1]), Ordering::Greater);
        }
        prop_assert!(is_sorted(&Sort::new(&mut values)));
    }

    #[test]
    fn sorting_twice_changes_nothing(input in prop::collection::vec(scalar(), 0..200)) {
        let mut once = input;
        sort_values(&mut once);
        let mut twice = once.clone();
        sort_values(&mut twice);

        let once: Vec<String> = once.iter().map(|v| format!("{v:?}")).collect();
        let twice: Vec<String> = twice.iter().map(|v| format!("{v:?}")).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_by_keeps_pairs_and_is_stable(input in prop::collection::vec(scalar(), 0..200)) {
        let mut keys = input.clone();
        let mut tags: Vec<usize> = (0..input.len()).collect();
        sort_values_by(&mut keys, &mut tags).unwrap();

        let mut seen = tags.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..input.len()).collect::<Vec<_>>());

        for (key, &tag) in keys.iter().zip(&tags) {
            prop_assert_eq!(format!("{key:?}"), format!("{:?}", input[tag]));
        }
        for i in 1..keys.len() {
            match compare(&keys[i - 1], &keys[i]) {
                Ordering::Less => {}
                Ordering::Equal => prop_assert!(tags[i - 1] < tags[i]),
                Ordering::Greater => prop_assert!(false, "keys out of order at {}", i),
            }
        }
    }

    #[test]
    fn matches_std_stable_sort(input in prop::collection::vec(scalar(), 0..200)) {
        let mut expected: Vec<(ScalarValue, usize)> = input.iter().cloned().zip(0..).collect();
        expected.sort_by(|a, b| compare(&a.0, &b.0));

        let mut keys = input;
        let mut tags: Vec<usize> = (0..keys.len()).collect();
        sort_values_by(&mut keys, &mut tags).unwrap();

        let expected_tags: Vec<usize> = expected.iter().map(|(_, tag)| *tag).collect();
        prop_assert_eq!(tags, expected_tags);
    }
}
