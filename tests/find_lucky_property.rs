use drills::exercises::find_lucky::find_lucky;
use proptest::prelude::*;

fn frequency(values: &[u32], v: u32) -> usize {
    values.iter().filter(|&&x| x == v).count()
}

proptest! {
    #[test]
    fn result_is_lucky_and_largest(values in proptest::collection::vec(0u32..20, 0..60)) {
        match find_lucky(&values) {
            Some(v) => {
                prop_assert!(v >= 1);
                prop_assert!((v as usize) <= values.len());
                prop_assert_eq!(frequency(&values, v), v as usize);
                for w in (v as usize + 1)..=values.len() {
                    prop_assert_ne!(frequency(&values, w as u32), w);
                }
            }
            None => {
                for w in 1..=values.len() {
                    prop_assert_ne!(frequency(&values, w as u32), w);
                }
            }
        }
    }

    #[test]
    fn order_of_elements_is_irrelevant(mut values in proptest::collection::vec(0u32..10, 0..30)) {
        let forward = find_lucky(&values);
        values.reverse();
        prop_assert_eq!(find_lucky(&values), forward);
    }

    #[test]
    fn values_above_length_never_influence_the_result(values in proptest::collection::vec(1u32..8, 0..20)) {
        // A value can only be lucky if it occurs as often as itself, which
        // bounds it by the sequence length. Padding with values that stay
        // out of range therefore leaves the answer untouched.
        let baseline = find_lucky(&values);
        let mut padded = values.clone();
        padded.extend(std::iter::repeat(u32::MAX).take(3));
        prop_assert_eq!(find_lucky(&padded), baseline);
    }
}

#[test]
fn documented_examples() {
    assert_eq!(find_lucky(&[2, 2, 3, 4]), Some(2));
    assert_eq!(find_lucky(&[1, 2, 2, 3, 3, 3]), Some(3));
    assert_eq!(find_lucky(&[5]), None);
}
