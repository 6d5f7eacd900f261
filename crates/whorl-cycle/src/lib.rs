//! Immutable balanced circular sequences for Whorl.
//!
//! This crate defines [`CircularSeq`], a non-empty cyclic sequence with a
//! distinguished focus element. Every operation returns a new value and
//! leaves its input untouched, so a `CircularSeq` can be shared freely,
//! including across threads.
//!
//! # Operations
//!
//! | Group | Methods | Cost |
//! |-------|---------|------|
//! | Construction | [`singleton`](CircularSeq::singleton), [`new`](CircularSeq::new), [`from_vec`](CircularSeq::from_vec), [`from_seq`](CircularSeq::from_seq) | O(n) / O(log n) |
//! | Access | [`focus`](CircularSeq::focus), [`get`](CircularSeq::get) | O(1) / O(log n) |
//! | Rotation | [`rotate_right`](CircularSeq::rotate_right), [`rotate_left`](CircularSeq::rotate_left) | amortized O(1) per step, either direction |
//! | Jumps | [`rotate_right_by`](CircularSeq::rotate_right_by), [`rotate_left_by`](CircularSeq::rotate_left_by) | O(log n) |
//! | Views | [`right_elements`](CircularSeq::right_elements), [`left_elements`](CircularSeq::left_elements), [`to_seq`](CircularSeq::to_seq) | lazy / O(log n) |
//! | Reversal | [`reverse_direction`](CircularSeq::reverse_direction) | O(n) |
//! | Search | [`find_rotate_to`](CircularSeq::find_rotate_to), [`rotate_to`](CircularSeq::rotate_to), [`rotations`](CircularSeq::rotations) | lazy, at most `len()` rotations |
//!
//! Constructing from an empty input and rotating by `k >= len()` steps are
//! precondition violations reported as [`CycleError`]. A search that finds
//! nothing returns `None`.
//!
//! # Representation
//!
//! Internally the sequence is a `(left, focus, right)` triple over
//! [`whorl_seq::Seq`], balanced so that the left half is never shorter
//! than the right half and never longer than twice it plus one. A step
//! touches only the ends of the two halves, which `Seq` buffers, so it does
//! no tree work at all between buffer transfers. When a step breaks the
//! balance, the halves are rejoined and split again in O(log n) near the
//! middle of the allowed range, and the next Θ(n) steps in either
//! direction need no rebalance.
//!
//! A jump by `k` flattens the cycle and splits it once, which costs
//! O(log n) whatever `k` is.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cycle;
pub mod error;
pub mod search;
pub mod views;

#[cfg(test)]
pub(crate) mod compliance;

pub use cycle::CircularSeq;
pub use error::CycleError;
pub use search::Rotations;
pub use views::{LeftElements, RightElements};
pub use whorl_seq::Seq;
