//! The persistent [`Seq`] type.

use crate::digit::{self, Digit};
use crate::iter::Iter;
use crate::tree::{self, Link};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable, structurally shared sequence.
///
/// Cloning is O(1): clones share every node. Operations that "modify" the
/// sequence return a new `Seq` and leave `self` untouched.
///
/// A `Seq` is a balanced tree with a small persistent stack buffering each
/// end. Pushes and pops work on the buffers; only when a buffer runs dry
/// or fills up does a chunk of at least tree-height elements move to or
/// from the tree. Over any chain of end operations that makes them
/// amortized O(1), while split, concatenation and indexing stay
/// O(log n).
///
/// Equality, hashing and `Debug` depend only on the elements in order,
/// never on the internal shape.
///
/// # Examples
///
/// ```
/// use whorl_seq::Seq;
///
/// let seq: Seq<i32> = (1..=5).collect();
/// let (front, back) = seq.split_at(2);
/// assert_eq!(front.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(back.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
///
/// // The original is unchanged.
/// assert_eq!(seq.len(), 5);
/// assert_eq!(back.concat(&front).first(), Some(&3));
/// ```
pub struct Seq<T> {
    front: Digit<T>,
    root: Link<T>,
    back: Digit<T>,
}

impl<T> Seq<T> {
    /// Create an empty sequence.
    pub const fn new() -> Self {
        Self {
            front: Digit::new(),
            root: None,
            back: Digit::new(),
        }
    }

    /// Number of elements. O(1).
    pub fn len(&self) -> usize {
        self.front.len() + tree::len(&self.root) + self.back.len()
    }

    /// Returns `true` if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first element, or `None` if empty.
    pub fn first(&self) -> Option<&T> {
        self.front
            .peek()
            .or_else(|| tree::first(&self.root))
            .or_else(|| self.back.bottom())
    }

    /// The last element, or `None` if empty.
    pub fn last(&self) -> Option<&T> {
        self.back
            .peek()
            .or_else(|| tree::last(&self.root))
            .or_else(|| self.front.bottom())
    }

    /// The element at `index`, or `None` if `index >= len()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        let front_len = self.front.len();
        if index < front_len {
            return self.front.get(index);
        }
        let index = index - front_len;
        let tree_len = tree::len(&self.root);
        if index < tree_len {
            return tree::get(&self.root, index);
        }
        let depth = self.back.len().checked_sub(index - tree_len + 1)?;
        self.back.get(depth)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.front, &self.root, &self.back)
    }

    /// Same buffers, different tree.
    fn with_root(&self, root: Link<T>) -> Self {
        Self {
            front: self.front.clone(),
            root,
            back: self.back.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn check(&self) -> Result<(), String> {
        tree::check(&self.root)?;
        for (end, digit) in [("front", &self.front), ("back", &self.back)] {
            let counted = digit.iter().count();
            if counted != digit.len() {
                return Err(format!("{end} buffer holds {counted}, claims {}", digit.len()));
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn shares_tree_with(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Some(a), Some(b)) => std::sync::Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Clone> Seq<T> {
    /// A one-element sequence.
    pub fn singleton(value: T) -> Self {
        Self {
            front: Digit::new().push(value),
            root: None,
            back: Digit::new(),
        }
    }

    /// A new sequence with `value` prepended. Amortized O(1).
    pub fn push_front(&self, value: T) -> Self {
        let chunk = digit::chunk(tree::height(&self.root));
        if self.front.len() < 2 * chunk {
            return Self {
                front: self.front.push(value),
                ..self.clone()
            };
        }
        // Keep the outermost chunk buffered, move the rest into the tree.
        let mut kept = self.front.to_vec();
        let spilled = tree::from_vec(kept.split_off(chunk));
        Self {
            front: Digit::stacked(kept.into_iter().rev()).push(value),
            root: tree::concat(spilled, self.root.clone()),
            back: self.back.clone(),
        }
    }

    /// A new sequence with `value` appended. Amortized O(1).
    pub fn push_back(&self, value: T) -> Self {
        let chunk = digit::chunk(tree::height(&self.root));
        if self.back.len() < 2 * chunk {
            return Self {
                back: self.back.push(value),
                ..self.clone()
            };
        }
        let mut kept = self.back.to_vec();
        let mut spilled = kept.split_off(chunk);
        spilled.reverse();
        Self {
            front: self.front.clone(),
            root: tree::concat(self.root.clone(), tree::from_vec(spilled)),
            back: Digit::stacked(kept.into_iter().rev()).push(value),
        }
    }

    /// Split off the first element. Amortized O(1).
    ///
    /// Returns `None` if the sequence is empty.
    pub fn pop_front(&self) -> Option<(T, Self)> {
        let seq = if self.front.is_empty() {
            self.refill_front()?
        } else {
            self.clone()
        };
        let (first, front) = seq.front.pop()?;
        Some((first, Self { front, ..seq }))
    }

    /// Split off the last element. Amortized O(1).
    ///
    /// Returns `None` if the sequence is empty.
    pub fn pop_back(&self) -> Option<(Self, T)> {
        let seq = if self.back.is_empty() {
            self.refill_back()?
        } else {
            self.clone()
        };
        let (last, back) = seq.back.pop()?;
        Some((Self { back, ..seq }, last))
    }

    /// Restock an empty front buffer from the tree, or from the older half
    /// of the back buffer once the tree is gone.
    fn refill_front(&self) -> Option<Self> {
        if self.root.is_some() {
            let chunk = digit::chunk(tree::height(&self.root));
            let (taken, root) = tree::split(self.root.clone(), chunk);
            let mut items = Vec::with_capacity(chunk);
            tree::append_to(&taken, &mut items);
            return Some(Self {
                front: Digit::stacked(items.into_iter().rev()),
                root,
                back: self.back.clone(),
            });
        }
        if self.back.is_empty() {
            return None;
        }
        let mut kept = self.back.to_vec();
        let moved = kept.split_off(kept.len() / 2);
        Some(Self {
            front: Digit::stacked(moved),
            root: None,
            back: Digit::stacked(kept.into_iter().rev()),
        })
    }

    fn refill_back(&self) -> Option<Self> {
        if self.root.is_some() {
            let chunk = digit::chunk(tree::height(&self.root));
            let tree_len = tree::len(&self.root);
            let (root, taken) = tree::split(self.root.clone(), tree_len.saturating_sub(chunk));
            let mut items = Vec::with_capacity(chunk);
            tree::append_to(&taken, &mut items);
            return Some(Self {
                front: self.front.clone(),
                root,
                back: Digit::stacked(items),
            });
        }
        if self.front.is_empty() {
            return None;
        }
        let mut kept = self.front.to_vec();
        let moved = kept.split_off(kept.len() / 2);
        Some(Self {
            front: Digit::stacked(kept.into_iter().rev()),
            root: None,
            back: Digit::stacked(moved),
        })
    }

    /// `self` followed by `other`. O(log n).
    ///
    /// The facing buffers are folded into the middle of the new tree; the
    /// outer ones are kept as they are.
    pub fn concat(&self, other: &Self) -> Self {
        let mut middle = self.back.to_vec();
        middle.reverse();
        middle.extend(other.front.iter().cloned());
        let root = tree::concat(self.root.clone(), tree::from_vec(middle));
        Self {
            front: self.front.clone(),
            root: tree::concat(root, other.root.clone()),
            back: other.back.clone(),
        }
    }

    /// Split into the first `index` elements and the rest. O(log n).
    ///
    /// An `index` past the end is clamped, so `split_at(len())` and
    /// anything larger return `(self, empty)`.
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        if index == 0 {
            return (Self::new(), self.clone());
        }
        if index >= self.len() {
            return (self.clone(), Self::new());
        }
        let front_len = self.front.len();
        let tree_len = tree::len(&self.root);
        if index <= front_len {
            let mut before = self.front.to_vec();
            let after = before.split_off(index);
            let head = Self {
                front: Digit::stacked(before.into_iter().rev()),
                ..Self::new()
            };
            let tail = Self {
                front: Digit::stacked(after.into_iter().rev()),
                ..self.clone()
            };
            (head, tail)
        } else if index <= front_len + tree_len {
            let (before, after) = tree::split(self.root.clone(), index - front_len);
            let head = Self {
                front: self.front.clone(),
                root: before,
                back: Digit::new(),
            };
            let tail = Self {
                front: Digit::new(),
                root: after,
                back: self.back.clone(),
            };
            (head, tail)
        } else {
            let mut before = self.back.to_vec();
            before.reverse();
            let after = before.split_off(index - front_len - tree_len);
            let head = Self {
                back: Digit::stacked(before),
                ..self.clone()
            };
            let tail = Self {
                back: Digit::stacked(after),
                ..Self::new()
            };
            (head, tail)
        }
    }

    /// A new sequence with the element at `index` replaced by `f(old)`.
    /// O(log n).
    ///
    /// Returns `None` if `index >= len()`.
    pub fn update<F>(&self, index: usize, f: F) -> Option<Self>
    where
        F: FnOnce(&T) -> T,
    {
        if index >= self.len() {
            return None;
        }
        let front_len = self.front.len();
        let tree_len = tree::len(&self.root);
        if index < front_len {
            let mut items = self.front.to_vec();
            items[index] = f(&items[index]);
            return Some(Self {
                front: Digit::stacked(items.into_iter().rev()),
                ..self.clone()
            });
        }
        if index < front_len + tree_len {
            return Some(self.with_root(tree::update(&self.root, index - front_len, f)));
        }
        let depth = self.len() - 1 - index;
        let mut items = self.back.to_vec();
        items[depth] = f(&items[depth]);
        Some(Self {
            back: Digit::stacked(items.into_iter().rev()),
            ..self.clone()
        })
    }

    /// The elements in reverse order. O(n).
    pub fn reversed(&self) -> Self {
        self.iter().rev().cloned().collect()
    }
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            root: self.root.clone(),
            back: self.back.clone(),
        }
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            root: tree::from_vec(items),
            ..Self::new()
        }
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: Hash> Hash for Seq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
