//! Focus-directed search: enumerate rotations and rotate to a match.

use crate::cycle::CircularSeq;
use std::iter::FusedIterator;

/// Every rotation of a cycle, produced on demand.
///
/// The first item is the starting cycle itself; each later item is
/// [`rotate_right`](CircularSeq::rotate_right) of the one before. Exactly
/// `len()` items are produced, and a rotation is only computed when it is
/// asked for.
///
/// Returned by [`CircularSeq::rotations`].
pub struct Rotations<T> {
    current: CircularSeq<T>,
    emitted: usize,
    total: usize,
}

impl<T: Clone> Iterator for Rotations<T> {
    type Item = CircularSeq<T>;

    fn next(&mut self) -> Option<CircularSeq<T>> {
        if self.emitted == self.total {
            return None;
        }
        if self.emitted > 0 {
            self.current = self.current.rotate_right();
        }
        self.emitted += 1;
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.emitted;
        (left, Some(left))
    }
}

impl<T: Clone> ExactSizeIterator for Rotations<T> {}

impl<T: Clone> FusedIterator for Rotations<T> {}

impl<T: Clone> CircularSeq<T> {
    /// Lazily enumerate all `len()` rotations, starting with `self`.
    pub fn rotations(&self) -> Rotations<T> {
        Rotations {
            current: self.clone(),
            emitted: 0,
            total: self.len(),
        }
    }

    /// All rotations as a cycle of cycles, focused on `self`.
    ///
    /// Rotating the result rightward steps through the rotations in the
    /// same order as [`rotations`](Self::rotations).
    pub fn all_rotations(&self) -> CircularSeq<CircularSeq<T>> {
        CircularSeq::new(self.clone(), self.rotations().skip(1))
    }

    /// The first rotation, rightward from the current focus, whose focus
    /// satisfies `predicate`.
    ///
    /// The input itself is tried first. Stops at the first match, so no
    /// rotation beyond it is computed. Returns `None` if no element
    /// matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use whorl_cycle::CircularSeq;
    ///
    /// let cycle = CircularSeq::from_vec(vec![1, 2, 3, 4, 5]).unwrap();
    /// let even = cycle.find_rotate_to(|x| x % 2 == 0).unwrap();
    /// assert_eq!(even.to_vec(), vec![2, 3, 4, 5, 1]);
    /// assert!(cycle.find_rotate_to(|x| *x > 10).is_none());
    /// ```
    pub fn find_rotate_to<P>(&self, mut predicate: P) -> Option<Self>
    where
        P: FnMut(&T) -> bool,
    {
        self.rotations().find(|rotation| predicate(rotation.focus()))
    }

    /// The first rotation whose focus equals `value`, or `None`.
    pub fn rotate_to(&self, value: &T) -> Option<Self>
    where
        T: PartialEq,
    {
        self.find_rotate_to(|x| x == value)
    }
}

impl<T: PartialEq> CircularSeq<T> {
    /// Returns `true` if `other` is some rotation of `self`: same length,
    /// and reading `other` rightward from one of its elements gives the
    /// rightward order of `self`.
    ///
    /// Unlike `==` this ignores how the elements are split internally.
    pub fn is_rotation_of(&self, other: &Self) -> bool {
        let len = self.len();
        if len != other.len() {
            return false;
        }
        (0..len).any(|offset| {
            self.right_elements()
                .enumerate()
                .all(|(i, x)| other.get(offset + i) == x)
        })
    }
}
