//! Linear views of a [`CircularSeq`]: the cycle read in either direction.
//!
//! Both views are lazy and borrow the sequence. They are single-pass, but
//! calling [`CircularSeq::right_elements`] or
//! [`CircularSeq::left_elements`] again starts a fresh pass.

use crate::cycle::CircularSeq;
use std::iter::{Chain, FusedIterator, Once, Rev};
use whorl_seq::Iter;

/// The cycle read rightward: focus, then the right half, then the left half.
///
/// Returned by [`CircularSeq::right_elements`].
pub struct RightElements<'a, T> {
    inner: Chain<Chain<Once<&'a T>, Iter<'a, T>>, Iter<'a, T>>,
}

/// The cycle read leftward: focus, then the left half reversed, then the
/// right half reversed.
///
/// Returned by [`CircularSeq::left_elements`].
pub struct LeftElements<'a, T> {
    inner: Chain<Chain<Once<&'a T>, Rev<Iter<'a, T>>>, Rev<Iter<'a, T>>>,
}

impl<T> CircularSeq<T> {
    /// Every element in rightward order, starting at the focus.
    ///
    /// Yields exactly [`len`](Self::len) items.
    pub fn right_elements(&self) -> RightElements<'_, T> {
        RightElements {
            inner: std::iter::once(&self.focus)
                .chain(self.right.iter())
                .chain(self.left.iter()),
        }
    }

    /// Every element in leftward order, starting at the focus.
    ///
    /// Same cycle as [`right_elements`](Self::right_elements), traversed
    /// the other way round.
    pub fn left_elements(&self) -> LeftElements<'_, T> {
        LeftElements {
            inner: std::iter::once(&self.focus)
                .chain(self.left.iter().rev())
                .chain(self.right.iter().rev()),
        }
    }

    /// Alias for [`right_elements`](Self::right_elements).
    pub fn iter(&self) -> RightElements<'_, T> {
        self.right_elements()
    }
}

impl<'a, T> Iterator for RightElements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for RightElements<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for RightElements<'_, T> {}

impl<T> FusedIterator for RightElements<'_, T> {}

impl<'a, T> Iterator for LeftElements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for LeftElements<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for LeftElements<'_, T> {}

impl<T> FusedIterator for LeftElements<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularSeq<T> {
    type Item = &'a T;
    type IntoIter = RightElements<'a, T>;

    fn into_iter(self) -> RightElements<'a, T> {
        self.right_elements()
    }
}

#[cfg(test)]
mod tests {
    use crate::CircularSeq;

    #[test]
    fn views_report_exact_len() {
        let c = CircularSeq::from_vec((0..9).collect::<Vec<u8>>()).unwrap();
        assert_eq!(c.right_elements().len(), 9);
        assert_eq!(c.left_elements().len(), 9);
        let mut it = c.right_elements();
        it.next();
        assert_eq!(it.len(), 8);
    }

    #[test]
    fn views_restart_on_each_call() {
        let c = CircularSeq::from_vec(vec!['a', 'b', 'c']).unwrap();
        let first: String = c.right_elements().collect();
        let second: String = c.iter().collect();
        assert_eq!(first, "abc");
        assert_eq!(first, second);
    }

    #[test]
    fn left_is_right_of_reversed() {
        let c = CircularSeq::from_vec((1..=6).collect::<Vec<i32>>())
            .unwrap()
            .rotate_right_by(2)
            .unwrap();
        let left: Vec<i32> = c.left_elements().copied().collect();
        assert_eq!(left, c.reverse_direction().to_vec());
        assert_eq!(left, vec![3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn views_run_backwards() {
        let c = CircularSeq::from_vec((1..=5).collect::<Vec<i32>>())
            .unwrap()
            .rotate_right();
        let right_rev: Vec<i32> = c.right_elements().rev().copied().collect();
        assert_eq!(right_rev, vec![1, 5, 4, 3, 2]);
        let left_rev: Vec<i32> = c.left_elements().rev().copied().collect();
        assert_eq!(left_rev, vec![3, 4, 5, 1, 2]);

        let mut it = c.right_elements();
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&1));
        assert_eq!(it.len(), 3);
        assert_eq!(it.copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn for_loop_over_reference() {
        let c = CircularSeq::new(1, [2, 3]);
        let mut sum = 0;
        for x in &c {
            sum += x;
        }
        assert_eq!(sum, 6);
    }
}
