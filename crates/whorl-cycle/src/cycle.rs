//! The [`CircularSeq`] type: construction, access, rotation and reversal.

use crate::error::CycleError;
use std::fmt;
use whorl_seq::Seq;

/// An immutable, non-empty, cyclically ordered sequence with a focus.
///
/// Stored as a triple `(left, focus, right)`. `right` holds the elements
/// that follow the focus going rightward; `left` holds the elements that
/// precede it, also in rightward order, so its last element is the focus's
/// left neighbour. Reading rightward from the focus therefore gives
/// `focus, right.., left..`.
///
/// The two halves are kept balanced: `|right| <= |left| <= 1 + 2·|right|`.
/// A single step pops one end of a half and pushes onto an end of the
/// other, both amortized O(1) on [`Seq`]. A step that would break the
/// balance redistributes both halves around the focus in O(log n), leaving
/// Θ(n) steps of slack in either direction before the next one. Single-step
/// rotation is therefore amortized O(1) both ways.
///
/// Every operation returns a new value. Equality and hashing are
/// structural on the internal split: two rotations of the same cycle with
/// the same focus can still compare unequal if they were reached along
/// different paths. Use [`is_rotation_of`](Self::is_rotation_of) or compare
/// [`right_elements`](Self::right_elements) to test cyclic content.
///
/// # Examples
///
/// ```
/// use whorl_cycle::CircularSeq;
///
/// let cycle = CircularSeq::from_vec(vec![3, 4, 5, 1, 2]).unwrap();
/// let next = cycle.rotate_right();
/// assert_eq!(*next.focus(), 4);
/// assert_eq!(next.to_vec(), vec![4, 5, 1, 2, 3]);
///
/// let prev = cycle.rotate_left();
/// assert_eq!(prev.to_vec(), vec![2, 3, 4, 5, 1]);
///
/// // `cycle` itself never changes.
/// assert_eq!(*cycle.focus(), 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CircularSeq<T> {
    pub(crate) left: Seq<T>,
    pub(crate) focus: T,
    pub(crate) right: Seq<T>,
}

impl<T> CircularSeq<T> {
    /// The one-element cycle.
    pub fn singleton(focus: T) -> Self {
        Self {
            left: Seq::new(),
            focus,
            right: Seq::new(),
        }
    }

    /// The focused element. O(1).
    pub fn focus(&self) -> &T {
        &self.focus
    }

    /// Number of elements, always at least one.
    pub fn len(&self) -> usize {
        1 + self.left.len() + self.right.len()
    }

    /// Always returns `false`: a circular sequence cannot be empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The element `offset` steps rightward of the focus.
    ///
    /// `offset` is taken modulo [`len`](Self::len), so `get(0)` and
    /// `get(len())` both return the focus. O(log n).
    pub fn get(&self, offset: usize) -> &T {
        let Some(index) = (offset % self.len()).checked_sub(1) else {
            return &self.focus;
        };
        let right_len = self.right.len();
        let found = if index < right_len {
            self.right.get(index)
        } else {
            self.left.get(index - right_len)
        };
        debug_assert!(found.is_some(), "offset {offset} missed both halves");
        found.unwrap_or(&self.focus)
    }

    /// Fold over every element in rightward order, starting at the focus.
    pub fn fold<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.right_elements().fold(init, f)
    }

    /// Apply `f` to every element, keeping the focus position and the
    /// internal split.
    ///
    /// `f` sees the elements in rightward order from the focus.
    pub fn map<U, F>(&self, mut f: F) -> CircularSeq<U>
    where
        F: FnMut(&T) -> U,
    {
        let focus = f(&self.focus);
        let right = self.right.iter().map(&mut f).collect();
        let left = self.left.iter().map(&mut f).collect();
        CircularSeq { left, focus, right }
    }

    #[cfg(test)]
    pub(crate) fn split_sizes(&self) -> (usize, usize) {
        (self.left.len(), self.right.len())
    }
}

impl<T: Clone> CircularSeq<T> {
    /// Build a cycle with `focus` followed rightward by `rest`.
    pub fn new<I>(focus: T, rest: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_focus(focus, rest.into_iter().collect())
    }

    /// Build a cycle with `focus` followed rightward by the elements of `rest`.
    ///
    /// `rest` is split at its midpoint: the first half becomes the
    /// right-hand side, the second half the left-hand side. O(log n).
    pub fn with_focus(focus: T, rest: Seq<T>) -> Self {
        let (right, left) = rest.split_at(rest.len() / 2);
        Self { left, focus, right }
    }

    /// Build a cycle from a sequence; its first element becomes the focus.
    ///
    /// Returns `Err(CycleError::EmptyInput)` if `seq` is empty.
    pub fn from_seq(seq: Seq<T>) -> Result<Self, CycleError> {
        let (focus, rest) = seq.pop_front().ok_or(CycleError::EmptyInput)?;
        Ok(Self::with_focus(focus, rest))
    }

    /// Build a cycle from a vector; its first element becomes the focus.
    ///
    /// Returns `Err(CycleError::EmptyInput)` if `items` is empty.
    pub fn from_vec(items: Vec<T>) -> Result<Self, CycleError> {
        Self::try_from_iter(items)
    }

    /// Build a cycle from any iterator; its first item becomes the focus.
    ///
    /// Returns `Err(CycleError::EmptyInput)` if the iterator yields nothing.
    pub fn try_from_iter<I>(items: I) -> Result<Self, CycleError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter();
        let focus = items.next().ok_or(CycleError::EmptyInput)?;
        Ok(Self::new(focus, items))
    }

    /// Keep `(left, focus, right)` if balanced, otherwise redistribute
    /// `right ++ left` around the focus.
    ///
    /// The redistribution puts `|right|` near the middle of its allowed
    /// range `(m - 1) / 3 ..= m / 2` for `m` elements besides the focus, so
    /// about `m / 12` steps either way stay balanced afterwards.
    pub(crate) fn balanced(left: Seq<T>, focus: T, right: Seq<T>) -> Self {
        let (l, r) = (left.len(), right.len());
        if r <= l && l <= 1 + 2 * r {
            return Self { left, focus, right };
        }
        let rest = right.concat(&left);
        let (right, left) = rest.split_at(resplit_point(rest.len()));
        Self { left, focus, right }
    }

    /// Move the focus one step rightward.
    ///
    /// A one-element cycle is returned unchanged.
    pub fn rotate_right(&self) -> Self {
        if let Some((next, rest)) = self.right.pop_front() {
            Self::balanced(self.left.push_back(self.focus.clone()), next, rest)
        } else if let Some((next, rest)) = self.left.pop_front() {
            // Two elements: |left| <= 1 + 2·|right| = 1.
            Self::balanced(Seq::singleton(self.focus.clone()), next, rest)
        } else {
            self.clone()
        }
    }

    /// Move the focus one step leftward.
    ///
    /// A one-element cycle is returned unchanged.
    pub fn rotate_left(&self) -> Self {
        let Some((rest, prev)) = self.left.pop_back() else {
            // |right| <= |left| = 0
            debug_assert!(self.right.is_empty());
            return self.clone();
        };
        Self::balanced(rest, prev, self.right.push_front(self.focus.clone()))
    }

    /// Move the focus `steps` positions rightward in one go.
    ///
    /// Flattens to rightward order, splits at `steps` and reassembles the
    /// halves around the new focus. O(log n).
    ///
    /// Returns `Err(CycleError::StepOutOfRange)` unless `steps < len()`.
    pub fn rotate_right_by(&self, steps: usize) -> Result<Self, CycleError> {
        let len = self.len();
        if steps >= len {
            return Err(CycleError::StepOutOfRange { steps, len });
        }
        if steps == 0 {
            return Ok(self.clone());
        }
        let (passed, ahead) = self.to_seq().split_at(steps);
        let (focus, rest) = ahead
            .pop_front()
            .ok_or(CycleError::StepOutOfRange { steps, len })?;
        Ok(Self::balanced(passed, focus, rest))
    }

    /// Move the focus `steps` positions leftward in one go.
    ///
    /// Returns `Err(CycleError::StepOutOfRange)` unless `steps < len()`.
    pub fn rotate_left_by(&self, steps: usize) -> Result<Self, CycleError> {
        let len = self.len();
        if steps >= len {
            return Err(CycleError::StepOutOfRange { steps, len });
        }
        if steps == 0 {
            return Ok(self.clone());
        }
        self.rotate_right_by(len - steps)
    }

    /// Swap the meaning of rightward and leftward, keeping the focus. O(n).
    pub fn reverse_direction(&self) -> Self {
        Self::balanced(
            self.right.reversed(),
            self.focus.clone(),
            self.left.reversed(),
        )
    }

    /// The rightward order from the focus as a [`Seq`]. O(log n).
    pub fn to_seq(&self) -> Seq<T> {
        self.right.push_front(self.focus.clone()).concat(&self.left)
    }

    /// The rightward order from the focus, collected into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.right_elements().cloned().collect()
    }

    /// Replace the element `offset` steps rightward of the focus with
    /// `f(old)`. `offset` is taken modulo [`len`](Self::len).
    pub fn adjust<F>(&self, offset: usize, f: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        let Some(index) = (offset % self.len()).checked_sub(1) else {
            return Self {
                left: self.left.clone(),
                focus: f(&self.focus),
                right: self.right.clone(),
            };
        };
        let right_len = self.right.len();
        let (left, right) = if index < right_len {
            let right = self.right.update(index, f);
            (self.left.clone(), right.unwrap_or_else(|| self.right.clone()))
        } else {
            let left = self.left.update(index - right_len, f);
            (left.unwrap_or_else(|| self.left.clone()), self.right.clone())
        };
        Self {
            left,
            focus: self.focus.clone(),
            right,
        }
    }

    /// Combine two cycles element by element in rightward order, starting
    /// from both foci. The result is as long as the shorter input.
    pub fn zip_with<U, V, F>(&self, other: &CircularSeq<U>, mut f: F) -> CircularSeq<V>
    where
        V: Clone,
        F: FnMut(&T, &U) -> V,
    {
        let focus = f(&self.focus, &other.focus);
        let rest = self
            .right_elements()
            .skip(1)
            .zip(other.right_elements().skip(1))
            .map(|(a, b)| f(a, b))
            .collect();
        CircularSeq::with_focus(focus, rest)
    }
}

/// Size of the right half when `m` elements are redistributed.
fn resplit_point(m: usize) -> usize {
    (5 * m + 6) / 12
}

impl<T: Clone> TryFrom<Vec<T>> for CircularSeq<T> {
    type Error = CycleError;

    fn try_from(items: Vec<T>) -> Result<Self, CycleError> {
        Self::from_vec(items)
    }
}

impl<T: Clone> TryFrom<Seq<T>> for CircularSeq<T> {
    type Error = CycleError;

    fn try_from(seq: Seq<T>) -> Result<Self, CycleError> {
        Self::from_seq(seq)
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CircularSeq ")?;
        f.debug_list().entries(self.right_elements()).finish()
    }
}
