use insta::assert_debug_snapshot;

use brook::{IntegerSequence, StringSequence};

#[test]
fn test_end_to_end_chain() {
    let result = IntegerSequence::new(vec![5, 6, -1, 1, 1, 1, 1, 1, 4, 2, 3])
        .distinct()
        .sorted()
        .skip(1)
        .limit(5)
        .collect();
    assert_eq!(result, vec![1, 2, 3, 4, 5]);
}

// Reusing an intermediate sequence in two chains, in either order, must
// give identical results: no stage may alias or mutate storage shared
// with an earlier stage.
#[test]
fn test_reused_intermediate_is_unaffected() {
    let descending = IntegerSequence::new(vec![1, 2, 3, 4, 5, 6]).sorted_by(|a, b| a > b);

    let first = descending.map_to_integer(|i| i * 2).collect();
    let second = descending.map_to_integer(|i| i * 2).collect();

    assert_eq!(first, vec![12, 10, 8, 6, 4, 2]);
    assert_eq!(second, first);
}

#[test]
fn test_sibling_chains_do_not_interfere() {
    let base = IntegerSequence::new(vec![3, 1, 2, 1]);

    let sorted = base.sorted();
    let distinct = base.distinct();
    let filtered = base.filter(|i| i != 1);

    assert_eq!(base.collect(), vec![3, 1, 2, 1]);
    assert_eq!(sorted.collect(), vec![1, 1, 2, 3]);
    assert_eq!(distinct.collect(), vec![3, 1, 2]);
    assert_eq!(filtered.collect(), vec![3, 2]);
}

#[test]
fn test_cross_type_chain() {
    let lengths: Vec<i64> = ["1", "22", "555", "66666"]
        .into_iter()
        .collect::<StringSequence>()
        .map_to_integer(|s| s.len() as i64)
        .collect();
    assert_eq!(lengths, vec![1, 2, 3, 5]);
}

#[test]
fn test_round_trip_between_types() {
    let result = IntegerSequence::new(vec![7, 42, 1000])
        .map_to_string(|i| i.to_string())
        .filter(|s| s.len() > 1)
        .map_to_integer(|s| s.parse().unwrap())
        .collect();
    assert_eq!(result, vec![42, 1000]);
}

#[test]
fn test_peek_slots_into_a_chain() {
    let mut observed = Vec::new();
    let result = IntegerSequence::new(vec![4, 2, 5, 1])
        .sorted()
        .peek(|i| observed.push(i))
        .limit(2)
        .collect();
    assert_eq!(observed, vec![1, 2, 4, 5]);
    assert_eq!(result, vec![1, 2]);
}

#[test]
fn test_empty_input_flows_through_every_stage() {
    let empty = IntegerSequence::empty();
    let result = empty
        .map_to_integer(|i| i * 2)
        .filter(|i| i > 0)
        .distinct()
        .sorted()
        .skip(3)
        .limit(3);
    assert!(result.is_empty());
    assert_eq!(result.count(), 0);
    assert_eq!(result.max(), 0);
    assert_eq!(result.min(), 0);
    assert_eq!(result.reduce(9, |acc, i| acc + i), 9);
}

#[test]
fn test_sorted_snapshot() {
    let sorted = IntegerSequence::new(vec![4, 2, 5, 1, 9, 0, -13])
        .sorted()
        .collect();
    assert_debug_snapshot!(sorted, @r###"
    [
        -13,
        0,
        1,
        2,
        4,
        5,
        9,
    ]
    "###);
}
