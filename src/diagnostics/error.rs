use thiserror::Error;

use crate::preference::PreferenceError;
use crate::vector::VectorError;

#[derive(Debug, Clone, PartialEq, Error)]
/// Errors computing validation diagnostics.
///
/// An empty saved set is not an error; it yields
/// [`ValidationReport::NoSavedChunks`](super::ValidationReport::NoSavedChunks).
pub enum DiagnosticsError {
    #[error("vector error: {0}")]
    Vector(#[from] VectorError),

    #[error("preference error: {0}")]
    Preference(#[from] PreferenceError),
}

pub type DiagnosticsResult<T> = Result<T, DiagnosticsError>;
