//! Borrowing in-order iteration over a [`Seq`](crate::Seq).

use crate::digit::Digit;
use crate::tree::{self, Link, Node};
use smallvec::SmallVec;
use std::iter::FusedIterator;

/// Inline stack depth. An AVL tree of height 32 holds millions of
/// elements, so the stacks practically never spill to the heap.
const STACK_INLINE: usize = 32;

type Stack<'a, T> = SmallVec<[&'a Node<T>; STACK_INLINE]>;

type Buffered<'a, T> = smallvec::IntoIter<[&'a T; STACK_INLINE]>;

/// Double-ended iterator over the elements of a [`Seq`](crate::Seq).
///
/// Yields the front buffer, then the tree in order, then the back buffer.
pub struct Iter<'a, T> {
    front: Buffered<'a, T>,
    nodes: Nodes<'a, T>,
    back: Buffered<'a, T>,
}

/// In-order walk of the tree. The front and back cursors move
/// independently; `remaining` stops them from crossing.
struct Nodes<'a, T> {
    front: Stack<'a, T>,
    back: Stack<'a, T>,
    remaining: usize,
}

fn descend_left<'a, T>(stack: &mut Stack<'a, T>, mut link: &'a Link<T>) {
    while let Some(node) = link {
        stack.push(node.as_ref());
        link = &node.left;
    }
}

fn descend_right<'a, T>(stack: &mut Stack<'a, T>, mut link: &'a Link<T>) {
    while let Some(node) = link {
        stack.push(node.as_ref());
        link = &node.right;
    }
}

impl<'a, T> Nodes<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        let mut front = Stack::new();
        let mut back = Stack::new();
        descend_left(&mut front, root);
        descend_right(&mut back, root);
        Self {
            front,
            back,
            remaining: tree::len(root),
        }
    }

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front.pop()?;
        descend_left(&mut self.front, &node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back.pop()?;
        descend_right(&mut self.back, &node.left);
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(front: &'a Digit<T>, root: &'a Link<T>, back: &'a Digit<T>) -> Self {
        let front: SmallVec<[&'a T; STACK_INLINE]> = front.iter().collect();
        let mut back: SmallVec<[&'a T; STACK_INLINE]> = back.iter().collect();
        back.reverse();
        Self {
            front: front.into_iter(),
            nodes: Nodes::new(root),
            back: back.into_iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.front
            .next()
            .or_else(|| self.nodes.next())
            .or_else(|| self.back.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.front.len() + self.nodes.remaining + self.back.len();
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.back
            .next_back()
            .or_else(|| self.nodes.next_back())
            .or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            nodes: Nodes {
                front: self.nodes.front.clone(),
                back: self.nodes.back.clone(),
                remaining: self.nodes.remaining,
            },
            back: self.back.clone(),
        }
    }
}
