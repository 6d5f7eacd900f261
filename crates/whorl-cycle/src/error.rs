//! Error types for circular sequence operations.

use std::error::Error;
use std::fmt;

/// Precondition violations when building or rotating a
/// [`CircularSeq`](crate::CircularSeq).
///
/// A search that finds nothing is not an error; it returns `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleError {
    /// Attempted to build a circular sequence from zero elements.
    EmptyInput,
    /// A multi-step rotation asked for `steps >= len`.
    StepOutOfRange {
        /// The requested number of steps.
        steps: usize,
        /// Length of the sequence being rotated.
        len: usize,
    },
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "cannot build a circular sequence from an empty input")
            }
            Self::StepOutOfRange { steps, len } => {
                write!(
                    f,
                    "rotation by {steps} steps out of range for length {len} (expected 0..{len})"
                )
            }
        }
    }
}

impl Error for CycleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_input() {
        assert_eq!(
            CycleError::EmptyInput.to_string(),
            "cannot build a circular sequence from an empty input"
        );
    }

    #[test]
    fn display_step_out_of_range_names_values() {
        let msg = CycleError::StepOutOfRange { steps: 7, len: 5 }.to_string();
        assert!(msg.contains('7'), "{msg}");
        assert!(msg.contains("0..5"), "{msg}");
    }
}
