//! Failure taxonomy shared by every handle.

use thiserror::Error;

/// Misuse of a handle: the operation has no frame to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AccessError {
    /// The handle holds no frame: never constructed, moved out of, or
    /// already consumed.
    #[error("accessing an empty coroutine handle")]
    Empty,

    /// An iterator already at the end of its sequence was advanced.
    #[error("advancing an iterator that is already at the end")]
    InvalidIncrement,
}

/// Failure observed when consuming a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<E> {
    #[error(transparent)]
    Access(#[from] AccessError),

    /// The body itself failed; `E` is exactly what it returned.
    #[error("computation failed: {0}")]
    Failed(E),
}

impl<E> Error<E> {
    /// The body's own error, if this is one.
    pub fn into_failed(self) -> Option<E> {
        match self {
            Error::Failed(e) => Some(e),
            Error::Access(_) => None,
        }
    }

    /// Whether the handle had no frame to act on.
    pub fn is_empty_access(&self) -> bool {
        matches!(self, Error::Access(AccessError::Empty))
    }
}
