#![allow(dead_code)]

use classic_structures::*;
use itertools::Itertools;
use rand::{self, Rng};
use std::collections::BTreeSet;

pub fn non_decreasing(values: &[f64]) -> bool {
    values.iter().tuple_windows().all(|(a, b)| a <= b)
}

pub fn non_increasing(values: &[f64]) -> bool {
    values.iter().tuple_windows().all(|(a, b)| a >= b)
}

/// Extracts until the heap is empty, checking the heap order after every step.
pub fn drain_heap(mut heap: Heap) -> Vec<f64> {
    let mut out = vec![];
    loop {
        let (next, root, message) = heap.extract().into_parts();
        match root {
            Some(root) => out.push(root),
            None => {
                assert!(message.is_error());
                return out;
            }
        }
        next.assert_correctness();
        heap = next;
    }
}

pub fn heap_from(values: &[f64], mode: HeapMode) -> Heap {
    values
        .iter()
        .fold(Heap::with_mode(mode), |heap, &x| heap.insert(x).state)
}

/// Something to perform in one round of the BST consistency test
#[derive(Clone, Copy, Debug)]
enum BstRound {
    Insert(f64),
    Remove(f64),
    Search(f64),
}

fn random_bst_round<R: Rng>(rng: &mut R, max: i32) -> BstRound {
    let value = rng.gen_range(0..max) as f64;
    match rng.gen_range(0..3) {
        0 => BstRound::Insert(value),
        1 => BstRound::Remove(value),
        _ => BstRound::Search(value),
    }
}

/// Runs random operations on a [`Bst`] and on a `BTreeSet`, and checks they agree.
pub fn check_bst_consistency(num_rounds: u32) {
    const MAX_VALUE: i32 = 60;
    let mut rng = rand::thread_rng();
    let mut tree = Bst::new();
    let mut model: BTreeSet<i64> = BTreeSet::new();

    for _ in 0..num_rounds {
        let round = random_bst_round(&mut rng, MAX_VALUE);
        let previous = tree.clone();
        match round {
            BstRound::Insert(x) => {
                let outcome = tree.insert(x);
                assert_eq!(outcome.is_ok(), model.insert(x as i64));
                tree = outcome.state;
            }
            BstRound::Remove(x) => {
                let outcome = tree.remove(x);
                assert_eq!(outcome.is_ok(), model.remove(&(x as i64)));
                tree = outcome.state;
            }
            BstRound::Search(x) => {
                let outcome = tree.search(x);
                assert_eq!(outcome.output, model.contains(&(x as i64)));
                assert_eq!(outcome.state, tree);
            }
        }
        tree.assert_correctness();
        // older states are never affected
        previous.assert_correctness();
        assert_eq!(
            tree.iter().collect::<Vec<_>>(),
            model.iter().map(|&x| x as f64).collect::<Vec<_>>()
        );
    }
}

/// Runs random removals and insertions on a [`LinkedList`] and on a `Vec`, and checks they agree.
pub fn check_linked_list_consistency(num_rounds: u32) {
    let mut rng = rand::thread_rng();
    let mut list = LinkedList::new();
    let mut model: Vec<Value> = vec![];

    for _ in 0..num_rounds {
        let value = Value::from(rng.gen_range(0..20i32));
        match rng.gen_range(0..4) {
            0 => {
                list = list.append(value.clone()).state;
                model.push(value);
            }
            1 => {
                list = list.prepend(value.clone()).state;
                model.insert(0, value);
            }
            2 => {
                let outcome = list.remove(value.clone());
                let position = model.iter().position(|v| *v == value);
                assert_eq!(outcome.output, position.is_some());
                if let Some(ix) = position {
                    model.remove(ix);
                }
                list = outcome.state;
            }
            _ => {
                let outcome = list.search(value.clone());
                assert_eq!(outcome.output, model.iter().position(|v| *v == value));
            }
        }
        assert_eq!(list.to_vec(), model);
    }
}
