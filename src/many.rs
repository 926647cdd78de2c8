use crate::group::Group;
use crate::parser::{Match, Parser};
use std::fmt;
use std::marker::PhantomData;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Values are appended, in order, to a collection `C` (a `Vec` by default).
/// Always succeeds; the returned cursor is the one after the last successful
/// match. An inner parser that succeeds without consuming input makes this
/// loop forever, so callers must not repeat such parsers.
pub struct Many<P, C> {
    parser: P,
    _collection: PhantomData<fn() -> C>,
}

impl<P, C> Many<P, C> {
    pub fn new(parser: P) -> Self {
        Many {
            parser,
            _collection: PhantomData,
        }
    }
}

impl<P: Clone, C> Clone for Many<P, C> {
    fn clone(&self) -> Self {
        Many::new(self.parser.clone())
    }
}

impl<P: fmt::Debug, C> fmt::Debug for Many<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Many").field("parser", &self.parser).finish()
    }
}

/// Runs `parser` until it fails, collecting into `C`. Returns the number of
/// matches alongside the collection so callers need not inspect `C`.
pub(crate) fn repeat<'code, P, C>(parser: &P, mut cursor: P::Cursor) -> (C, usize, P::Cursor)
where
    P: Parser<'code>,
    C: Default + Extend<<P::Output as Group>::Flat>,
{
    let mut results = C::default();
    let mut count = 0;

    while let Some((value, next_cursor)) = parser.parse(cursor) {
        results.extend(std::iter::once(value));
        count += 1;
        cursor = next_cursor;
    }

    tracing::trace!(count, ?cursor, "repetition stopped");
    (results, count, cursor)
}

impl<'code, P, C> Parser<'code> for Many<P, C>
where
    P: Parser<'code>,
    C: Default + Extend<<P::Output as Group>::Flat>,
{
    type Cursor = P::Cursor;
    type Output = (C,);

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        let (results, _, cursor) = repeat(&self.parser, cursor);
        Some(((results,), cursor))
    }
}

/// Convenience function to create a Many parser collecting into a `Vec`
pub fn many<'code, P>(parser: P) -> Many<P, Vec<<P::Output as Group>::Flat>>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Convenience function to create a Many parser collecting into `C`
pub fn many_into<'code, C, P>(parser: P) -> Many<P, C>
where
    P: Parser<'code>,
    C: Default + Extend<<P::Output as Group>::Flat>,
{
    Many::new(parser)
}

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Behaves like [`Many`] but fails when the inner parser does not match even
/// once.
pub struct Many1<P, C> {
    parser: P,
    _collection: PhantomData<fn() -> C>,
}

impl<P, C> Many1<P, C> {
    pub fn new(parser: P) -> Self {
        Many1 {
            parser,
            _collection: PhantomData,
        }
    }
}

impl<P: Clone, C> Clone for Many1<P, C> {
    fn clone(&self) -> Self {
        Many1::new(self.parser.clone())
    }
}

impl<P: fmt::Debug, C> fmt::Debug for Many1<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Many1").field("parser", &self.parser).finish()
    }
}

impl<'code, P, C> Parser<'code> for Many1<P, C>
where
    P: Parser<'code>,
    C: Default + Extend<<P::Output as Group>::Flat>,
{
    type Cursor = P::Cursor;
    type Output = (C,);

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        match repeat(&self.parser, cursor) {
            (_, 0, _) => None,
            (results, _, cursor) => Some(((results,), cursor)),
        }
    }
}

/// Convenience function to create a Many1 parser collecting into a `Vec`
pub fn many1<'code, P>(parser: P) -> Many1<P, Vec<<P::Output as Group>::Flat>>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

/// Convenience function to create a Many1 parser collecting into `C`
pub fn many1_into<'code, C, P>(parser: P) -> Many1<P, C>
where
    P: Parser<'code>,
    C: Default + Extend<<P::Output as Group>::Flat>,
{
    Many1::new(parser)
}

/// Extension trait to add .many() and .many1() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self, Vec<<Self::Output as Group>::Flat>> {
        Many::new(self)
    }

    fn many1(self) -> Many1<Self, Vec<<Self::Output as Group>::Flat>> {
        Many1::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
