//! Persistent, order-preserving sequences for Whorl.
//!
//! This is the leaf crate with zero internal dependencies. It provides
//! [`Seq`], an immutable positional sequence: a height-balanced (AVL) tree
//! with `Arc`-shared nodes, plus a small persistent stack buffering each
//! end. Every operation returns a new sequence; older versions stay valid
//! and share structure with newer ones.
//!
//! # Costs
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `len`, `is_empty` | O(1) |
//! | `push_front`, `push_back` | amortized O(1) |
//! | `pop_front`, `pop_back` | amortized O(1) |
//! | `first`, `last` | O(1) when that end is buffered, O(log n) otherwise |
//! | `get`, `update` | O(log n) |
//! | `concat`, `split_at` | O(log n) |
//! | `reversed`, `FromIterator` | O(n) |
//!
//! End operations touch only the buffers until one runs dry or fills up.
//! Then a chunk of at least tree-height elements moves between buffer and
//! tree in one O(log n) step, so the tree work per end operation is O(1)
//! on average over any chain of operations. Starting many chains from the
//! same old version can repeat a transfer; each repeat still costs only
//! O(log n).
//!
//! Split and concatenation are built on a single `join` primitive that
//! rebalances along one spine only, so neither ever touches more than
//! O(log n) nodes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod digit;
pub mod iter;
pub mod seq;
mod tree;

pub use iter::Iter;
pub use seq::Seq;
