//! Whorl: immutable balanced circular sequences.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Whorl sub-crates. For most users, adding `whorl` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use whorl::prelude::*;
//!
//! // A cycle of five elements focused on 1.
//! let cycle = CircularSeq::from_vec(vec![1, 2, 3, 4, 5]).unwrap();
//! assert_eq!(*cycle.focus(), 1);
//!
//! // Rotations return new values; `cycle` is unchanged.
//! let jumped = cycle.rotate_right_by(4).unwrap();
//! assert_eq!(jumped.to_vec(), vec![5, 1, 2, 3, 4]);
//!
//! // Reading the other way round.
//! assert_eq!(cycle.reverse_direction().to_vec(), vec![1, 5, 4, 3, 2]);
//!
//! // Search rotates to the first match, or reports absence.
//! let at_three = cycle.rotate_to(&3).unwrap();
//! assert_eq!(at_three.to_vec(), vec![3, 4, 5, 1, 2]);
//! assert!(cycle.rotate_to(&7).is_none());
//!
//! // Preconditions are checked.
//! assert_eq!(
//!     CircularSeq::<i32>::from_vec(vec![]),
//!     Err(CycleError::EmptyInput)
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`seq`] | `whorl-seq` | Persistent balanced sequence `Seq` |
//! | [`cycle`] | `whorl-cycle` | `CircularSeq`, views, search, `CycleError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Persistent balanced sequences (`whorl-seq`).
///
/// [`seq::Seq`] is the building block behind every circular sequence and
/// is also useful on its own when O(log n) split and concatenation are
/// needed.
pub use whorl_seq as seq;

/// Circular sequences (`whorl-cycle`).
///
/// Contains [`cycle::CircularSeq`], its lazy views
/// ([`cycle::RightElements`], [`cycle::LeftElements`]), the
/// [`cycle::Rotations`] enumerator and [`cycle::CycleError`].
pub use whorl_cycle as cycle;

/// Common imports for typical usage.
///
/// ```rust
/// use whorl::prelude::*;
/// ```
pub mod prelude {
    pub use whorl_cycle::{CircularSeq, CycleError};
    pub use whorl_seq::Seq;
}
