use crate::cursor::Cursor;
use crate::error::CursorError;
use std::fmt;

/// Cursor over an in-memory slice of tokens
pub enum TokenCursor<'code, T> {
    /// Cursor pointing at a readable token
    Valid {
        data: &'code [T],
        /// Token position in the data slice (0-based index)
        position: usize,
    },
    /// Cursor past the last token
    EndOfInput { data: &'code [T] },
}

/// Cursor over raw bytes
pub type ByteCursor<'code> = TokenCursor<'code, u8>;

impl<'code, T> TokenCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            return TokenCursor::EndOfInput { data };
        }
        TokenCursor::Valid { data, position: 0 }
    }

    fn data(&self) -> &'code [T] {
        match self {
            TokenCursor::Valid { data, .. } => data,
            TokenCursor::EndOfInput { data } => data,
        }
    }

    fn offset(&self) -> usize {
        match self {
            TokenCursor::Valid { position, .. } => *position,
            TokenCursor::EndOfInput { data } => data.len(),
        }
    }
}

// Manual impls so that cursors stay `Copy` and comparable for any token type.
impl<T> Clone for TokenCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TokenCursor<'_, T> {}

/// Two cursors are equal when they point at the same position of the same
/// token stream. Token contents are never compared.
impl<T> PartialEq for TokenCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.data(), other.data()) && self.offset() == other.offset()
    }
}

impl<T> Eq for TokenCursor<'_, T> {}

impl<T> fmt::Debug for TokenCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenCursor::Valid { data, position } => f
                .debug_struct("Valid")
                .field("position", position)
                .field("len", &data.len())
                .finish(),
            TokenCursor::EndOfInput { data } => f
                .debug_struct("EndOfInput")
                .field("len", &data.len())
                .finish(),
        }
    }
}

impl<'code, T: Clone> Cursor<'code> for TokenCursor<'code, T> {
    type Element = T;

    fn value(&self) -> Result<Self::Element, CursorError> {
        match self {
            TokenCursor::Valid { data, position } => data
                .get(*position)
                .cloned()
                .ok_or(CursorError::EndOfInput {
                    position: *position,
                }),
            TokenCursor::EndOfInput { data } => Err(CursorError::EndOfInput {
                position: data.len(),
            }),
        }
    }

    fn next(self) -> Self {
        match self {
            TokenCursor::Valid { data, position } => match position.checked_add(1) {
                Some(next) if next < data.len() => TokenCursor::Valid {
                    data,
                    position: next,
                },
                _ => TokenCursor::EndOfInput { data },
            },
            TokenCursor::EndOfInput { data } => TokenCursor::EndOfInput { data },
        }
    }

    fn position(&self) -> usize {
        self.offset()
    }

    fn source(&self) -> &'code [Self::Element] {
        self.data()
    }
}
