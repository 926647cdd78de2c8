use crate::error::CursorError;
use std::fmt::Debug;

/// Generic cursor trait for parser combinators
///
/// A cursor is an immutable position in an already materialized token stream.
/// Cursors are values: advancing produces a new cursor and leaves the old one
/// untouched, so any saved copy stays valid as a point to resume from. This is
/// what lets ordered choice retry alternatives from the same starting point
/// without any explicit rollback.
pub trait Cursor<'code>: Copy + Eq + Debug {
    /// The type of tokens this cursor iterates over
    type Element: Clone;

    /// Get the token at the current cursor position
    ///
    /// Returns an error if the cursor is positioned at the end of the input
    fn value(&self) -> Result<Self::Element, CursorError>;

    /// Advance the cursor to the next token
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Get the current position in the token stream
    ///
    /// For end-of-input cursors this is the length of the stream
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the input
    fn eos(&self) -> bool {
        self.value().is_err()
    }

    /// Get the underlying token stream
    fn source(&self) -> &'code [Self::Element];
}
