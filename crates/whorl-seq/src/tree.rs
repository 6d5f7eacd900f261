//! Join-based AVL tree internals behind [`Seq`](crate::Seq).
//!
//! The tree holds everything between the two end digits. Elements live in
//! the nodes themselves and are ordered by in-order position. Each node
//! caches its subtree height and length, which is all that positional
//! split and concatenation need.
//!
//! Everything here is built on [`join`]: given two trees and a middle
//! value, produce one balanced tree holding `left ++ [value] ++ right`.
//! `join` walks down the spine of the taller side only, so it costs
//! O(|h(left) - h(right)| + 1). Split and concatenation are expressed as
//! O(log n) sequences of joins.

use std::cmp::Ordering;
use std::sync::Arc;

/// A possibly-empty subtree.
pub(crate) type Link<T> = Option<Arc<Node<T>>>;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) left: Link<T>,
    pub(crate) value: T,
    pub(crate) right: Link<T>,
    height: u8,
    len: usize,
}

pub(crate) fn height<T>(link: &Link<T>) -> u8 {
    link.as_ref().map_or(0, |node| node.height)
}

pub(crate) fn len<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.len)
}

/// Allocate a node, recomputing its cached height and length.
fn node<T>(left: Link<T>, value: T, right: Link<T>) -> Link<T> {
    let height = 1 + height(&left).max(height(&right));
    let len = 1 + len(&left) + len(&right);
    Some(Arc::new(Node {
        left,
        value,
        right,
        height,
        len,
    }))
}

/// Take a node apart, cloning only if another version still shares it.
fn expose<T: Clone>(node: Arc<Node<T>>) -> (Link<T>, T, Link<T>) {
    let Node {
        left, value, right, ..
    } = Arc::unwrap_or_clone(node);
    (left, value, right)
}

// (a, x, (b, y, c)) => ((a, x, b), y, c)
fn rotate_left<T: Clone>(link: Link<T>) -> Link<T> {
    let (a, x, right) = expose(link?);
    match right {
        Some(right) => {
            let (b, y, c) = expose(right);
            node(node(a, x, b), y, c)
        }
        None => node(a, x, None),
    }
}

// ((a, x, b), y, c) => (a, x, (b, y, c))
fn rotate_right<T: Clone>(link: Link<T>) -> Link<T> {
    let (left, y, c) = expose(link?);
    match left {
        Some(left) => {
            let (a, x, b) = expose(left);
            node(a, x, node(b, y, c))
        }
        None => node(None, y, c),
    }
}

/// `left` is taller than `right` by more than one.
fn join_right<T: Clone>(left: Link<T>, value: T, right: Link<T>) -> Link<T> {
    let Some(left) = left else {
        return node(None, value, right);
    };
    let (ll, lv, lr) = expose(left);
    if height(&lr) <= height(&right) + 1 {
        let joined = node(lr, value, right);
        if height(&joined) <= height(&ll) + 1 {
            node(ll, lv, joined)
        } else {
            rotate_left(node(ll, lv, rotate_right(joined)))
        }
    } else {
        let joined = join_right(lr, value, right);
        let fits = height(&joined) <= height(&ll) + 1;
        let parent = node(ll, lv, joined);
        if fits {
            parent
        } else {
            rotate_left(parent)
        }
    }
}

/// `right` is taller than `left` by more than one.
fn join_left<T: Clone>(left: Link<T>, value: T, right: Link<T>) -> Link<T> {
    let Some(right) = right else {
        return node(left, value, None);
    };
    let (rl, rv, rr) = expose(right);
    if height(&rl) <= height(&left) + 1 {
        let joined = node(left, value, rl);
        if height(&joined) <= height(&rr) + 1 {
            node(joined, rv, rr)
        } else {
            rotate_right(node(rotate_left(joined), rv, rr))
        }
    } else {
        let joined = join_left(left, value, rl);
        let fits = height(&joined) <= height(&rr) + 1;
        let parent = node(joined, rv, rr);
        if fits {
            parent
        } else {
            rotate_right(parent)
        }
    }
}

/// Balanced tree holding `left ++ [value] ++ right`, for any two heights.
pub(crate) fn join<T: Clone>(left: Link<T>, value: T, right: Link<T>) -> Link<T> {
    let (hl, hr) = (height(&left), height(&right));
    if hl > hr + 1 {
        join_right(left, value, right)
    } else if hr > hl + 1 {
        join_left(left, value, right)
    } else {
        node(left, value, right)
    }
}

/// Split off the first `index` elements. `index` past the end keeps everything left.
pub(crate) fn split<T: Clone>(link: Link<T>, index: usize) -> (Link<T>, Link<T>) {
    let Some(root) = link else {
        return (None, None);
    };
    if index == 0 {
        return (None, Some(root));
    }
    if index >= root.len {
        return (Some(root), None);
    }
    let (left, value, right) = expose(root);
    let left_len = len(&left);
    if index <= left_len {
        let (before, after) = split(left, index);
        (before, join(after, value, right))
    } else {
        let (before, after) = split(right, index - left_len - 1);
        (join(left, value, before), after)
    }
}

pub(crate) fn split_last<T: Clone>(root: Arc<Node<T>>) -> (Link<T>, T) {
    let (left, value, right) = expose(root);
    match right {
        None => (left, value),
        Some(right) => {
            let (rest, last) = split_last(right);
            (join(left, value, rest), last)
        }
    }
}

pub(crate) fn concat<T: Clone>(left: Link<T>, right: Link<T>) -> Link<T> {
    match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (Some(left), right) => {
            let (rest, last) = split_last(left);
            join(rest, last, right)
        }
    }
}

/// Build a perfectly size-balanced tree from exactly `count` items.
pub(crate) fn build<T, I>(items: &mut I, count: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if count == 0 {
        return None;
    }
    let left_count = count / 2;
    let left = build(items, left_count);
    let value = items.next()?;
    let right = build(items, count - left_count - 1);
    node(left, value, right)
}

pub(crate) fn from_vec<T>(items: Vec<T>) -> Link<T> {
    let count = items.len();
    build(&mut items.into_iter(), count)
}

/// Clone the elements of `link` onto the end of `out`, in order.
pub(crate) fn append_to<T: Clone>(link: &Link<T>, out: &mut Vec<T>) {
    if let Some(node) = link {
        append_to(&node.left, out);
        out.push(node.value.clone());
        append_to(&node.right, out);
    }
}

pub(crate) fn get<T>(mut link: &Link<T>, mut index: usize) -> Option<&T> {
    while let Some(node) = link {
        let left_len = len(&node.left);
        match index.cmp(&left_len) {
            Ordering::Less => link = &node.left,
            Ordering::Equal => return Some(&node.value),
            Ordering::Greater => {
                index -= left_len + 1;
                link = &node.right;
            }
        }
    }
    None
}

pub(crate) fn first<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_ref()?;
    while let Some(left) = &node.left {
        node = left;
    }
    Some(&node.value)
}

pub(crate) fn last<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_ref()?;
    while let Some(right) = &node.right {
        node = right;
    }
    Some(&node.value)
}

/// Path-copying replacement of the element at `index`. Caller bounds-checks.
pub(crate) fn update<T, F>(link: &Link<T>, index: usize, f: F) -> Link<T>
where
    T: Clone,
    F: FnOnce(&T) -> T,
{
    let node = link.as_ref()?;
    let left_len = len(&node.left);
    let (left, value, right) = match index.cmp(&left_len) {
        Ordering::Less => (
            update(&node.left, index, f),
            node.value.clone(),
            node.right.clone(),
        ),
        Ordering::Equal => (node.left.clone(), f(&node.value), node.right.clone()),
        Ordering::Greater => (
            node.left.clone(),
            node.value.clone(),
            update(&node.right, index - left_len - 1, f),
        ),
    };
    Some(Arc::new(Node {
        left,
        value,
        right,
        height: node.height,
        len: node.len,
    }))
}

/// Verify cached heights/lengths and the AVL balance rule.
///
/// Returns `(height, len)` of the subtree on success.
#[cfg(test)]
pub(crate) fn check<T>(link: &Link<T>) -> Result<(u8, usize), String> {
    let Some(node) = link else {
        return Ok((0, 0));
    };
    let (hl, ll) = check(&node.left)?;
    let (hr, lr) = check(&node.right)?;
    if hl.abs_diff(hr) > 1 {
        return Err(format!("unbalanced node: left height {hl}, right height {hr}"));
    }
    let height = 1 + hl.max(hr);
    let len = 1 + ll + lr;
    if node.height != height {
        return Err(format!("cached height {} != {height}", node.height));
    }
    if node.len != len {
        return Err(format!("cached len {} != {len}", node.len));
    }
    Ok((height, len))
}
