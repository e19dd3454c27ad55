use rand::prelude::StdRng;
use rand::{Rng, SeedableRng};
use rstest::*;

use nary_huffman::heap::{HeapError, PriorityQueue};

#[rstest]
#[case(0)]
#[case(1)]
#[case(42)]
#[case(1234)]
fn peek_always_reports_the_minimum(#[case] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut queue = PriorityQueue::new();
    let mut mirror: Vec<u32> = Vec::new();

    for _ in 0..5_000 {
        match rng.gen_range(0..10) {
            0..=4 => {
                let value = rng.gen_range(0..200);
                queue.push(value);
                mirror.push(value);
            }
            5..=7 => {
                let popped = queue.pop();
                match mirror.iter().enumerate().min_by_key(|(_, value)| **value) {
                    Some((position, value)) => {
                        assert_eq!(popped, Ok(*value));
                        mirror.swap_remove(position);
                    }
                    None => assert_eq!(popped, Err(HeapError::EmptyQueue)),
                }
            }
            _ => {
                let value = rng.gen_range(0..200);
                let removed = queue.remove(&value);
                match mirror.iter().position(|element| *element == value) {
                    Some(position) => {
                        assert_eq!(removed, Some(value));
                        mirror.swap_remove(position);
                    }
                    None => assert_eq!(removed, None),
                }
            }
        }

        assert_eq!(queue.len(), mirror.len());
        assert_eq!(queue.peek().ok(), mirror.iter().min());
        assert!(queue.is_valid());
    }
}

#[test]
fn heapify_sorts_like_the_standard_library() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut values = (0..1_000).map(|_| rng.gen::<i64>()).collect::<Vec<_>>();

    let mut queue = PriorityQueue::new();
    queue.heapify(values.clone());
    assert!(queue.is_valid());

    values.sort();
    assert_eq!(queue.into_sorted_vec(), values);
}

#[test]
fn equal_elements_are_told_apart_only_by_the_comparator() {
    // (priority, payload): the comparator only looks at the priority.
    let mut queue = PriorityQueue::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
    queue.heapify([(3, 'x'), (1, 'y'), (2, 'z')]);

    assert!(queue.contains(&(1, '?')));
    assert_eq!(queue.remove(&(2, '?')), Some((2, 'z')));
    assert_eq!(queue.pop(), Ok((1, 'y')));
    assert_eq!(queue.pop(), Ok((3, 'x')));
    assert!(queue.is_empty());
}
