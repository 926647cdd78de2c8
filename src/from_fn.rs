use crate::cursor::Cursor;
use crate::group::Group;
use crate::parser::{Match, Parser};
use std::fmt;
use std::marker::PhantomData;

/// Parser backed by a plain function from a cursor to a [`Match`]
///
/// This is how hand-written recognizers join the algebra. The function must
/// uphold the same contract as any parser: return a new cursor on success,
/// return `None` on failure, and never depend on hidden mutable state.
pub struct FromFn<F, C, G> {
    function: F,
    _phantom: PhantomData<fn(C) -> G>,
}

impl<F, C, G> FromFn<F, C, G> {
    pub fn new(function: F) -> Self {
        FromFn {
            function,
            _phantom: PhantomData,
        }
    }
}

impl<F: Clone, C, G> Clone for FromFn<F, C, G> {
    fn clone(&self) -> Self {
        FromFn::new(self.function.clone())
    }
}

impl<F, C, G> fmt::Debug for FromFn<F, C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("function", &std::any::type_name::<F>())
            .finish()
    }
}

impl<'code, F, C, G> Parser<'code> for FromFn<F, C, G>
where
    C: Cursor<'code>,
    G: Group,
    F: Fn(C) -> Match<G, C>,
{
    type Cursor = C;
    type Output = G;

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        (self.function)(cursor)
    }
}

/// Convenience function to wrap a function as a parser
pub fn from_fn<'code, C, G, F>(function: F) -> FromFn<F, C, G>
where
    C: Cursor<'code>,
    G: Group,
    F: Fn(C) -> Match<G, C>,
{
    FromFn::new(function)
}
