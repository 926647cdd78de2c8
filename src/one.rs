use crate::cursor::Cursor;
use crate::parser::{Match, Parser};
use std::marker::PhantomData;

/// Parser that consumes and returns a single token
///
/// At end of input there is no token to return, so the parser fails to match
/// instead of reading past the stream.
#[derive(Debug, Clone, Copy)]
pub struct ConsumeOne<C> {
    _phantom: PhantomData<C>,
}

impl<C> ConsumeOne<C> {
    pub fn new() -> Self {
        ConsumeOne {
            _phantom: PhantomData,
        }
    }
}

impl<C> Default for ConsumeOne<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, C> Parser<'code> for ConsumeOne<C>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = (C::Element,);

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        match cursor.value() {
            Ok(token) => Some(((token,), cursor.next())),
            Err(err) => {
                tracing::trace!(position = err.position(), "no token left to consume");
                None
            }
        }
    }
}

/// Convenience function to create a ConsumeOne parser
pub fn one<'code, C>() -> ConsumeOne<C>
where
    C: Cursor<'code>,
{
    ConsumeOne::new()
}
