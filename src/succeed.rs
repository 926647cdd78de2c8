use crate::cursor::Cursor;
use crate::parser::{Match, Parser};
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and produces the empty
/// value group
///
/// This is the identity element of sequencing: `seq(succeed(), p)` behaves
/// exactly like `p`.
#[derive(Debug, Clone, Copy)]
pub struct Succeed<C> {
    _phantom: PhantomData<C>,
}

impl<C> Succeed<C> {
    pub fn new() -> Self {
        Succeed {
            _phantom: PhantomData,
        }
    }
}

impl<C> Default for Succeed<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, C> Parser<'code> for Succeed<C>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = ();

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        Some(((), cursor))
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<'code, C>() -> Succeed<C>
where
    C: Cursor<'code>,
{
    Succeed::new()
}
