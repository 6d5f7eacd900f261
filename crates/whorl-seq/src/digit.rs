//! Persistent stacks buffering the two ends of a [`Seq`](crate::Seq).
//!
//! A digit is a singly linked stack of `Arc` cells, so pushing or popping
//! its top is O(1) and shares every cell below. The front digit of a `Seq`
//! keeps its first element on top; the back digit keeps its last element
//! on top. Elements move between a digit and the tree in chunks of at
//! least the tree height, which spreads each O(log n) tree operation over
//! as many O(1) end operations.

use std::sync::Arc;

/// Smallest chunk moved between a digit and the tree.
const MIN_CHUNK: usize = 16;

/// Chunk size for a tree of the given height.
pub(crate) fn chunk(height: u8) -> usize {
    MIN_CHUNK.max(usize::from(height))
}

struct Cell<T> {
    value: T,
    below: Option<Arc<Cell<T>>>,
}

pub(crate) struct Digit<T> {
    top: Option<Arc<Cell<T>>>,
    len: usize,
}

impl<T> Digit<T> {
    pub(crate) const fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|cell| &cell.value)
    }

    pub(crate) fn push(&self, value: T) -> Self {
        Self {
            top: Some(Arc::new(Cell {
                value,
                below: self.top.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Push every item in turn; the last one ends up on top.
    pub(crate) fn stacked<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items
            .into_iter()
            .fold(Self::new(), |digit, value| digit.push(value))
    }

    /// Elements from the top down.
    pub(crate) fn iter(&self) -> Cells<'_, T> {
        Cells {
            next: self.top.as_deref(),
        }
    }

    /// The element `depth` cells below the top.
    pub(crate) fn get(&self, depth: usize) -> Option<&T> {
        self.iter().nth(depth)
    }

    pub(crate) fn bottom(&self) -> Option<&T> {
        self.iter().last()
    }
}

impl<T: Clone> Digit<T> {
    pub(crate) fn pop(&self) -> Option<(T, Self)> {
        let cell = self.top.as_ref()?;
        Some((
            cell.value.clone(),
            Self {
                top: cell.below.clone(),
                len: self.len - 1,
            },
        ))
    }

    /// Elements from the top down, cloned.
    pub(crate) fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for Digit<T> {
    fn clone(&self) -> Self {
        Self {
            top: self.top.clone(),
            len: self.len,
        }
    }
}

pub(crate) struct Cells<'a, T> {
    next: Option<&'a Cell<T>>,
}

impl<'a, T> Iterator for Cells<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let cell = self.next?;
        self.next = cell.below.as_deref();
        Some(&cell.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_puts_last_item_on_top() {
        let digit = Digit::stacked([1, 2, 3]);
        assert_eq!(digit.len(), 3);
        assert_eq!(digit.peek(), Some(&3));
        assert_eq!(digit.bottom(), Some(&1));
        assert_eq!(digit.to_vec(), vec![3, 2, 1]);
        assert_eq!(digit.get(1), Some(&2));
        assert_eq!(digit.get(3), None);
    }

    #[test]
    fn pop_shares_the_cells_below() {
        let digit = Digit::stacked(['a', 'b']);
        let (top, rest) = digit.pop().unwrap();
        assert_eq!(top, 'b');
        assert_eq!(rest.len(), 1);
        assert!(std::ptr::eq(
            rest.top.as_deref().unwrap(),
            digit.top.as_ref().unwrap().below.as_deref().unwrap(),
        ));
        assert_eq!(digit.len(), 2);
    }

    #[test]
    fn empty_digit() {
        let digit: Digit<u8> = Digit::new();
        assert!(digit.is_empty());
        assert!(digit.pop().is_none());
        assert_eq!(digit.peek(), None);
        assert_eq!(digit.bottom(), None);
    }

    #[test]
    fn chunk_tracks_height() {
        assert_eq!(chunk(0), MIN_CHUNK);
        assert_eq!(chunk(40), 40);
    }
}
