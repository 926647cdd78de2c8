use thiserror::Error;

/// Failures reported by cursor operations.
///
/// Combinators never surface these to callers: a cursor that cannot produce a
/// token simply makes the consuming combinator fail to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// Attempted to read a token while positioned at the end of the input
    #[error("cannot read a token at end of input (position {position})")]
    EndOfInput { position: usize },
}

impl CursorError {
    /// Returns the position where this error occurred
    pub fn position(&self) -> usize {
        match self {
            CursorError::EndOfInput { position } => *position,
        }
    }
}
