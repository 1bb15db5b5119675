use thiserror::Error;

use super::feedback::{FeedbackAction, FeedbackLabel};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors decoding stored embedding bytes.
pub enum EmbeddingCodecError {
    /// Byte length is not a whole number of f16 values.
    #[error("invalid embedding byte length: {len} is not a multiple of 2")]
    OddByteLength {
        /// Received byte length.
        len: usize,
    },

    /// Decoded dimension differs from the expected one.
    #[error("invalid embedding byte length: expected {expected} bytes, got {actual}")]
    UnexpectedLength {
        /// Expected byte length.
        expected: usize,
        /// Received byte length.
        actual: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Rejected feedback label transitions.
pub enum FeedbackError {
    #[error("cannot {action} a chunk already labeled {current}")]
    AlreadyLabeled {
        current: FeedbackLabel,
        action: FeedbackAction,
    },

    #[error("nothing to undo: chunk is unlabeled")]
    NothingToUndo,
}
