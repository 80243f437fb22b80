use std::collections::BTreeMap;

use rand::prelude::*;
use trailblazer::data_structures::{
    BinaryHeapQueue, BucketQueue, LinkedQueue, PriorityQueue, SortedArrayQueue,
    UnsortedArrayQueue,
};
use trailblazer::Error;

// Runs a generic check against all five queue representations
macro_rules! for_each_variant {
    ($check:ident $(, $arg:expr)*) => {{
        $check::<UnsortedArrayQueue<String, i32>>($($arg),*);
        $check::<SortedArrayQueue<String, i32>>($($arg),*);
        $check::<BucketQueue<String, i32>>($($arg),*);
        $check::<LinkedQueue<String, i32>>($($arg),*);
        $check::<BinaryHeapQueue<String, i32>>($($arg),*);
    }};
}

fn s(value: &str) -> String {
    value.to_string()
}

fn queue_of<Q: PriorityQueue<String, i32>>(pairs: &[(&str, i32)]) -> Q {
    Q::from_pairs(pairs.iter().map(|&(v, p)| (s(v), p))).unwrap()
}

fn drain<Q: PriorityQueue<String, i32>>(queue: &mut Q) -> Vec<String> {
    let mut out = Vec::new();
    while !queue.is_empty() {
        out.push(queue.dequeue().unwrap());
    }
    out
}

fn check_round_trip<Q: PriorityQueue<String, i32>>() {
    let mut queue: Q = queue_of(&[("t", 5), ("b", 3), ("x", 9), ("a", 3), ("m", -1), ("q", 5)]);
    assert_eq!(queue.len(), 6);
    assert_eq!(drain(&mut queue), vec!["m", "a", "b", "q", "t", "x"], "{}", queue.name());
    assert!(queue.is_empty());
}

#[test]
fn test_round_trip_is_sorted_by_priority_then_value() {
    for_each_variant!(check_round_trip);
}

fn check_empty_errors<Q: PriorityQueue<String, i32>>() {
    let mut queue = Q::default();
    assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
    assert_eq!(queue.peek(), Err(Error::EmptyQueue));
    assert_eq!(queue.peek_priority(), Err(Error::EmptyQueue));

    queue.enqueue(s("only"), 1).unwrap();
    queue.dequeue().unwrap();
    assert_eq!(queue.peek(), Err(Error::EmptyQueue));
}

#[test]
fn test_empty_queue_errors() {
    for_each_variant!(check_empty_errors);
}

fn check_peek<Q: PriorityQueue<String, i32>>() {
    let queue: Q = queue_of(&[("b", 2), ("c", 1), ("a", 2)]);
    assert_eq!(queue.peek().unwrap(), "c");
    assert_eq!(queue.peek_priority().unwrap(), 1);
    assert_eq!(queue.len(), 3, "peek must not remove");
}

#[test]
fn test_peek_observes_minimum() {
    for_each_variant!(check_peek);
}

fn check_change_priority<Q: PriorityQueue<String, i32>>() {
    let mut queue: Q = queue_of(&[("a", 1), ("b", 4), ("c", 6), ("d", 8)]);

    let err = queue.change_priority(&s("b"), 5).unwrap_err();
    assert!(matches!(err, Error::InvalidPriority { .. }), "{}", queue.name());

    assert_eq!(queue.change_priority(&s("zz"), 0), Err(Error::NotFound("\"zz\"".to_string())));

    // Equal priority is accepted and changes nothing
    queue.change_priority(&s("c"), 6).unwrap();
    // Moves "d" ahead of "b" and "c" but behind "a"
    queue.change_priority(&s("d"), 2).unwrap();
    // Ties with "a"; value order puts "c" second
    queue.change_priority(&s("c"), 1).unwrap();

    assert_eq!(queue.peek_priority().unwrap(), 1);
    assert_eq!(drain(&mut queue), vec!["a", "c", "d", "b"], "{}", queue.name());
}

#[test]
fn test_change_priority_only_decreases() {
    for_each_variant!(check_change_priority);
}

fn check_change_priority_of_front<Q: PriorityQueue<String, i32>>() {
    let mut queue: Q = queue_of(&[("a", 3), ("b", 4)]);
    queue.change_priority(&s("a"), 0).unwrap();
    assert_eq!(queue.peek_priority().unwrap(), 0);
    queue.change_priority(&s("b"), 0).unwrap();
    assert_eq!(drain(&mut queue), vec!["a", "b"]);
}

#[test]
fn test_change_priority_of_front_entry() {
    for_each_variant!(check_change_priority_of_front);
}

fn check_duplicates_rejected<Q: PriorityQueue<String, i32>>() {
    let mut queue: Q = queue_of(&[("a", 3), ("b", 4)]);
    assert_eq!(
        queue.enqueue(s("a"), 1),
        Err(Error::DuplicateKey("\"a\"".to_string())),
        "{}",
        queue.name()
    );
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.peek_priority().unwrap(), 3);

    // A dequeued value may be enqueued again
    queue.dequeue().unwrap();
    queue.enqueue(s("a"), 10).unwrap();
    assert_eq!(drain(&mut queue), vec!["b", "a"]);
}

#[test]
fn test_duplicate_values_rejected() {
    for_each_variant!(check_duplicates_rejected);
}

fn check_clear<Q: PriorityQueue<String, i32>>() {
    let mut queue: Q = queue_of(&[("a", 3), ("b", 4), ("c", 1)]);
    queue.clear();
    assert!(queue.is_empty());
    assert!(!queue.contains(&s("a")));
    assert!(queue.entries().is_empty());
    queue.enqueue(s("a"), 2).unwrap();
    assert_eq!(queue.dequeue().unwrap(), "a");
}

#[test]
fn test_clear_empties_queue() {
    for_each_variant!(check_clear);
}

fn check_merge<Q: PriorityQueue<String, i32>>() {
    let left = [("a", 5), ("c", 2), ("e", 7)];
    let right = [("b", 5), ("d", 2), ("f", 1), ("g", 9)];

    let mut merged: Q = queue_of(&left);
    let mut other: Q = queue_of(&right);
    merged.merge(&mut other).unwrap();
    assert!(other.is_empty(), "{}", merged.name());
    assert_eq!(merged.len(), 7);

    let mut expected: Q = queue_of(&left);
    for &(v, p) in &right {
        expected.enqueue(s(v), p).unwrap();
    }
    assert_eq!(drain(&mut merged), drain(&mut expected));
}

#[test]
fn test_merge_matches_individual_enqueues() {
    for_each_variant!(check_merge);
}

fn check_merge_into_empty<Q: PriorityQueue<String, i32>>() {
    let mut queue = Q::default();
    let mut other: Q = queue_of(&[("b", 1), ("a", 1)]);
    queue.merge(&mut other).unwrap();
    assert_eq!(drain(&mut queue), vec!["a", "b"]);

    let mut empty = Q::default();
    let mut queue: Q = queue_of(&[("z", 0)]);
    queue.merge(&mut empty).unwrap();
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_merge_with_empty_queues() {
    for_each_variant!(check_merge_into_empty);
}

fn check_merge_overlap<Q: PriorityQueue<String, i32>>() {
    let mut queue: Q = queue_of(&[("a", 1), ("b", 2)]);
    let mut other: Q = queue_of(&[("c", 1), ("b", 7)]);
    assert!(matches!(queue.merge(&mut other), Err(Error::DuplicateKey(_))));
    assert_eq!(queue.len(), 2);
    assert_eq!(other.len(), 2);
    assert_eq!(drain(&mut other), vec!["c", "b"]);
}

#[test]
fn test_merge_rejects_overlapping_values() {
    for_each_variant!(check_merge_overlap);
}

#[test]
fn test_display_format_matches_across_variants() {
    let pairs = [("t", 5), ("b", 3), ("a", 3), ("m", 1)];
    let expected = "{\"m\":1, \"a\":3, \"b\":3, \"t\":5}";

    assert_eq!(queue_of::<UnsortedArrayQueue<String, i32>>(&pairs).to_string(), expected);
    assert_eq!(queue_of::<SortedArrayQueue<String, i32>>(&pairs).to_string(), expected);
    assert_eq!(queue_of::<BucketQueue<String, i32>>(&pairs).to_string(), expected);
    assert_eq!(queue_of::<LinkedQueue<String, i32>>(&pairs).to_string(), expected);
    assert_eq!(queue_of::<BinaryHeapQueue<String, i32>>(&pairs).to_string(), expected);
    assert_eq!(BinaryHeapQueue::<String, i32>::new().to_string(), "{}");
}

fn oracle_min(model: &BTreeMap<String, i32>) -> Option<(String, i32)> {
    model
        .iter()
        .min_by_key(|&(value, priority)| (*priority, value.clone()))
        .map(|(value, priority)| (value.clone(), *priority))
}

/// Drives a queue with a seeded random script, checking every step against a
/// brute-force model. Returns the sequence of dequeued values.
fn run_script<Q: PriorityQueue<String, i32>>(seed: u64, steps: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut queue = Q::default();
    let mut model: BTreeMap<String, i32> = BTreeMap::new();
    let mut dequeued = Vec::new();

    for _ in 0..steps {
        match rng.gen_range(0..11) {
            0..=3 => {
                let value = format!("v{}", rng.gen_range(0..30));
                let priority = rng.gen_range(-20..20);
                let result = queue.enqueue(value.clone(), priority);
                if model.contains_key(&value) {
                    assert!(matches!(result, Err(Error::DuplicateKey(_))));
                } else {
                    result.unwrap();
                    model.insert(value, priority);
                }
            }
            4..=6 => {
                match oracle_min(&model) {
                    Some((expected, _)) => {
                        assert_eq!(queue.dequeue().unwrap(), expected, "{}", queue.name());
                        model.remove(&expected);
                        dequeued.push(expected);
                    }
                    None => assert_eq!(queue.dequeue(), Err(Error::EmptyQueue)),
                }
            }
            7..=9 => {
                if model.is_empty() {
                    continue;
                }
                let index = rng.gen_range(0..model.len());
                let (value, current) = model.iter().nth(index).map(|(v, p)| (v.clone(), *p)).unwrap();
                let requested = current + rng.gen_range(-8..3);
                let result = queue.change_priority(&value, requested);
                if requested > current {
                    assert!(matches!(result, Err(Error::InvalidPriority { .. })));
                } else {
                    result.unwrap();
                    model.insert(value, requested);
                }
            }
            _ => {
                let mut batch: BTreeMap<String, i32> = BTreeMap::new();
                for _ in 0..rng.gen_range(0..6) {
                    batch.insert(format!("v{}", rng.gen_range(0..30)), rng.gen_range(-20..20));
                }
                let mut other = Q::from_pairs(batch.clone()).unwrap();
                let overlaps = batch.keys().any(|value| model.contains_key(value));
                let result = queue.merge(&mut other);
                if overlaps {
                    assert!(matches!(result, Err(Error::DuplicateKey(_))), "{}", queue.name());
                    assert_eq!(other.len(), batch.len());
                } else {
                    result.unwrap();
                    assert!(other.is_empty());
                    model.extend(batch);
                }
            }
        }

        assert_eq!(queue.len(), model.len());
        if let Some((value, priority)) = oracle_min(&model) {
            assert_eq!(queue.peek().unwrap(), value, "{}", queue.name());
            assert_eq!(queue.peek_priority().unwrap(), priority);
        }
    }

    while let Ok(value) = queue.dequeue() {
        dequeued.push(value);
    }
    dequeued
}

#[test]
fn test_random_scripts_agree_with_oracle_and_each_other() {
    for seed in 0..50 {
        let reference = run_script::<UnsortedArrayQueue<String, i32>>(seed, 400);
        assert_eq!(run_script::<SortedArrayQueue<String, i32>>(seed, 400), reference);
        assert_eq!(run_script::<BucketQueue<String, i32>>(seed, 400), reference);
        assert_eq!(run_script::<LinkedQueue<String, i32>>(seed, 400), reference);
        assert_eq!(run_script::<BinaryHeapQueue<String, i32>>(seed, 400), reference);
    }
}

#[test]
fn test_linked_queue_back_links_stay_consistent() {
    let mut queue: LinkedQueue<String, i32> =
        queue_of(&[("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]);
    queue.change_priority(&s("e"), 2).unwrap();
    queue.dequeue().unwrap();
    queue.change_priority(&s("d"), 0).unwrap();

    let forward: Vec<String> = queue.iter().map(|e| e.value.clone()).collect();
    let mut backward: Vec<String> = queue.iter_rev().map(|e| e.value.clone()).collect();
    backward.reverse();
    assert_eq!(forward, vec!["d", "b", "e", "c"]);
    assert_eq!(forward, backward);
}

#[test]
fn test_heap_property_holds_after_mixed_operations() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut heap: BinaryHeapQueue<u32, u32> = BinaryHeapQueue::new();
    for value in 0..200u32 {
        heap.enqueue(value, rng.gen_range(0..1000)).unwrap();
    }
    for value in (0..200u32).step_by(7) {
        heap.change_priority(&value, 0).unwrap();
        assert!(heap.is_valid_heap());
    }
    for _ in 0..50 {
        heap.dequeue().unwrap();
        assert!(heap.is_valid_heap());
    }

    let mut other: BinaryHeapQueue<u32, u32> = BinaryHeapQueue::new();
    for value in 1000..1100u32 {
        other.enqueue(value, rng.gen_range(0..1000)).unwrap();
    }
    heap.merge(&mut other).unwrap();
    assert!(heap.is_valid_heap());
    assert_eq!(heap.len(), 250);
}

#[test]
fn test_bucket_queue_drops_empty_buckets() {
    let mut queue: BucketQueue<String, i32> = queue_of(&[("a", 1), ("b", 1), ("c", 4)]);
    assert_eq!(queue.bucket_count(), 2);
    queue.change_priority(&s("c"), 1).unwrap();
    assert_eq!(queue.bucket_count(), 1);
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    assert_eq!(queue.bucket_count(), 0);
}
