//! Circular sequence invariant test helpers.
//!
//! These functions verify that a `CircularSeq` value satisfies the
//! invariants every reachable state must hold. Reused across the unit
//! tests and property tests of this crate.

use crate::cycle::CircularSeq;
use indexmap::IndexSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert `|right| <= |left| <= 1 + 2·|right|`.
pub fn assert_balanced<T>(c: &CircularSeq<T>) {
    let (left, right) = c.split_sizes();
    assert!(
        right <= left && left <= 1 + 2 * right,
        "balance violated: |left| = {left}, |right| = {right}"
    );
}

/// Assert `len() == 1 + |left| + |right|` and that both views yield `len()` items.
pub fn assert_len_consistent<T>(c: &CircularSeq<T>) {
    let (left, right) = c.split_sizes();
    assert_eq!(c.len(), 1 + left + right, "len() disagrees with the halves");
    assert_eq!(c.right_elements().count(), c.len());
    assert_eq!(c.left_elements().count(), c.len());
}

/// Assert the leftward view is the rightward view traversed backwards.
pub fn assert_views_mirror<T: Clone + PartialEq + Debug>(c: &CircularSeq<T>) {
    let right = c.to_vec();
    let mut expected = vec![right[0].clone()];
    expected.extend(right[1..].iter().rev().cloned());
    let left: Vec<T> = c.left_elements().cloned().collect();
    assert_eq!(left, expected, "left_elements is not the reversed cycle");
    assert_eq!(
        c.reverse_direction().to_vec(),
        left,
        "reverse_direction disagrees with left_elements"
    );
}

/// Assert `rotate_left` undoes `rotate_right` and vice versa.
pub fn assert_rotation_inverse<T: Clone + PartialEq + Debug>(c: &CircularSeq<T>) {
    assert_eq!(c.rotate_right().rotate_left().to_vec(), c.to_vec());
    assert_eq!(c.rotate_left().rotate_right().to_vec(), c.to_vec());
    assert_eq!(c.rotate_right().rotate_left().focus(), c.focus());
}

/// Assert `len()` single steps return to the start, passing balanced states.
pub fn assert_full_cycle<T: Clone + PartialEq + Debug>(c: &CircularSeq<T>) {
    let mut walked = c.clone();
    for _ in 0..c.len() {
        walked = walked.rotate_right();
        assert_balanced(&walked);
    }
    assert_eq!(walked.to_vec(), c.to_vec(), "full rightward cycle drifted");
    for _ in 0..c.len() {
        walked = walked.rotate_left();
        assert_balanced(&walked);
    }
    assert_eq!(walked.to_vec(), c.to_vec(), "full leftward cycle drifted");
}

/// Assert `rotate_right_by(k)` matches `k` single steps for every valid `k`,
/// and `rotate_left_by(k)` matches `rotate_right_by(len - k)`.
pub fn assert_rotate_by_consistent<T: Clone + PartialEq + Debug>(c: &CircularSeq<T>) {
    let len = c.len();
    let mut stepped = c.clone();
    for k in 0..len {
        let jumped = c.rotate_right_by(k).unwrap();
        assert_balanced(&jumped);
        assert_eq!(jumped.to_vec(), stepped.to_vec(), "rotate_right_by({k})");
        stepped = stepped.rotate_right();

        let back = c.rotate_left_by(k).unwrap();
        assert_balanced(&back);
        let forward = c.rotate_right_by((len - k) % len).unwrap();
        assert_eq!(back.to_vec(), forward.to_vec(), "rotate_left_by({k})");
    }
    assert!(c.rotate_right_by(len).is_err());
    assert!(c.rotate_left_by(len).is_err());
}

/// Assert `rotations()` produces every cyclic shift of the rightward order
/// exactly once, in order.
pub fn assert_rotations_complete<T: Clone + Eq + Hash + Debug>(c: &CircularSeq<T>) {
    let base = c.to_vec();
    let len = base.len();
    let expected: Vec<Vec<T>> = (0..len)
        .map(|k| base[k..].iter().chain(&base[..k]).cloned().collect())
        .collect();
    let produced: Vec<Vec<T>> = c.rotations().map(|r| r.to_vec()).collect();
    assert_eq!(produced, expected, "rotations out of order");

    let unique_expected: IndexSet<&Vec<T>> = expected.iter().collect();
    let unique_produced: IndexSet<&Vec<T>> = produced.iter().collect();
    assert_eq!(unique_expected, unique_produced);
    for rotation in c.rotations() {
        assert_balanced(&rotation);
        assert!(rotation.is_rotation_of(c));
    }
}

/// Run every check above on a cycle.
pub fn run_full_compliance<T: Clone + Eq + Hash + Debug>(c: &CircularSeq<T>) {
    assert_balanced(c);
    assert_len_consistent(c);
    assert_views_mirror(c);
    assert_rotation_inverse(c);
    assert_full_cycle(c);
    assert_rotate_by_consistent(c);
    assert_rotations_complete(c);
}
