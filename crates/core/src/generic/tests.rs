use super::*;
use proptest::collection::vec;
use proptest::prelude::*;
use rstest::rstest;

const NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

#[test]
fn test_transform_to_string() {
    let strings = NUMBERS.transform(ToString::to_string);
    assert_eq!(strings, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_fold_sum() {
    assert_eq!(NUMBERS.fold(0, |acc, n| acc + n), 15);
}

#[test]
fn test_chained_transform_filter_transform() {
    let tripled = NUMBERS.transform(|n| n * 3);
    assert_eq!(tripled, vec![3, 6, 9, 12, 15]);

    let large = tripled.filter(|n| *n > 10);
    assert_eq!(large, vec![12, 15]);

    let labels = large.transform(|n| n.to_string());
    assert_eq!(labels, vec!["12", "15"]);
}

#[rstest]
#[case(0, vec![1, 2, 3, 4, 5])]
#[case(3, vec![4, 5])]
#[case(4, vec![5])]
#[case(5, vec![])]
fn test_filter_greater_than(#[case] threshold: i64, #[case] expected: Vec<i64>) {
    assert_eq!(NUMBERS.filter(|n| *n > threshold), expected);
}

#[test]
fn test_transform_calls_function_once_per_element_in_order() {
    let mut seen = Vec::new();
    let doubled = transform(&NUMBERS, |n| {
        seen.push(*n);
        n * 2
    });

    assert_eq!(seen, NUMBERS.to_vec());
    assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_filter_calls_predicate_once_per_element() {
    let mut calls = 0;
    let _ = filter(&NUMBERS, |_| {
        calls += 1;
        true
    });
    assert_eq!(calls, NUMBERS.len());
}

#[test]
fn test_fold_is_left_to_right() {
    let words = ["a", "b", "c"];
    let joined = words.fold(String::from(">"), |mut acc, word| {
        acc.push_str(word);
        acc
    });
    assert_eq!(joined, ">abc");

    // ((10 - 1) - 2) - 3, not 10 - (1 - (2 - 3))
    assert_eq!(fold(&[1, 2, 3], 10, |acc, n| acc - n), 4);
}

#[test]
fn test_empty_inputs() {
    let empty: Vec<i64> = Vec::new();

    assert!(empty.transform(|n| n + 1).is_empty());
    assert!(empty.filter(|_| true).is_empty());
    assert_eq!(empty.fold(42, |acc, n| acc + n), 42);
}

#[test]
fn test_input_is_left_untouched() {
    let input = vec![String::from("x"), String::from("y")];
    let upper = input.transform(|s| s.to_uppercase());
    let kept = input.filter(|s| s == "y");

    assert_eq!(input, vec!["x", "y"]);
    assert_eq!(upper, vec!["X", "Y"]);
    assert_eq!(kept, vec!["y"]);
}

#[test]
fn test_accumulator_may_differ_from_element_type() {
    let lengths = ["one", "three", "five"].fold(0usize, |acc, word| acc + word.len());
    assert_eq!(lengths, 12);
}

proptest! {
    #[test]
    fn transform_preserves_length_and_position(xs in vec(any::<i32>(), 0..64)) {
        let f = |n: &i32| i64::from(*n) * 2 + 1;
        let output = transform(&xs, f);

        prop_assert_eq!(output.len(), xs.len());
        for (i, x) in xs.iter().enumerate() {
            prop_assert_eq!(output[i], f(x));
        }
    }

    #[test]
    fn transform_matches_iterator_map(xs in vec(any::<i16>(), 0..64)) {
        let expected: Vec<String> = xs.iter().map(|n| format!("<{n}>")).collect();
        prop_assert_eq!(xs.transform(|n| format!("<{n}>")), expected);
    }

    #[test]
    fn filter_output_satisfies_predicate(xs in vec(any::<i32>(), 0..64), modulus in 1i32..10) {
        let keep = |n: &i32| n.rem_euclid(modulus) == 0;
        let output = filter(&xs, keep);

        prop_assert!(output.iter().all(keep));
        prop_assert_eq!(output.len(), xs.iter().filter(|n| keep(*n)).count());
    }

    #[test]
    fn filter_output_is_ordered_subsequence(xs in vec(0u8..20, 0..64), threshold in 0u8..20) {
        let output = xs.filter(|n| *n >= threshold);

        let mut remaining = xs.iter();
        for kept in &output {
            prop_assert!(remaining.any(|candidate| candidate == kept));
        }
    }

    #[test]
    fn fold_matches_left_accumulation(xs in vec(-1000i64..1000, 0..64), initial in -1000i64..1000) {
        // Subtraction is not associative, so this catches a wrong fold direction.
        let mut expected = initial;
        for x in &xs {
            expected = expected - x;
        }

        prop_assert_eq!(fold(&xs, initial, |acc, n| acc - n), expected);
        prop_assert_eq!(xs.fold(initial, |acc, n| acc - n), xs.iter().fold(initial, |acc, n| acc - n));
    }

    #[test]
    fn fold_of_empty_is_initial(initial in any::<i64>()) {
        let empty: [i64; 0] = [];
        prop_assert_eq!(fold(&empty, initial, |acc, n| acc.wrapping_add(*n)), initial);
    }
}
