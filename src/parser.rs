use crate::cursor::Cursor;
use crate::group::Group;

/// Outcome of applying a combinator: the produced value and the cursor after
/// the match, or `None` when nothing matched.
///
/// A failed match carries no cursor. There is no partial progress to report;
/// the caller simply tries something else from the position it already holds.
pub type Match<T, C> = Option<(T, C)>;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to a [`Match`]. Parsers are built
/// once and may be invoked any number of times; invoking one never mutates it
/// or the cursor it was given.
pub trait Parser<'code> {
    /// The cursor type this parser reads from
    type Cursor: Cursor<'code>;

    /// The value group produced on success
    type Output: Group;

    /// Attempt to match at the given cursor position, producing the full value
    /// group. Composite combinators work on groups so that sequencing can
    /// flatten them.
    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor>;

    /// Attempt to match at the given cursor position
    ///
    /// Returns the user-facing view of the value group, where a group of one
    /// value is just that value.
    fn parse(
        &self,
        cursor: Self::Cursor,
    ) -> Match<<Self::Output as Group>::Flat, Self::Cursor> {
        self.parse_group(cursor)
            .map(|(group, cursor)| (group.into_flat(), cursor))
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        (**self).parse_group(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        (**self).parse_group(cursor)
    }
}

/// A type-erased parser
///
/// Useful for naming the type of a grammar rule, in particular for recursive
/// rules that refer to themselves through [`lazy`](crate::lazy::lazy).
pub type BoxedParser<'code, C, G> = Box<dyn Parser<'code, Cursor = C, Output = G> + 'code>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Cursor, Self::Output> {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::ByteCursor;
    use crate::one::one;
    use crate::seq::seq;

    #[test]
    fn test_parse_unwraps_single_value() {
        let data = b"ab";
        let cursor = ByteCursor::new(data);

        let (group, _) = one().parse_group(cursor).unwrap();
        assert_eq!(group, (b'a',));

        let (value, _) = one().parse(cursor).unwrap();
        assert_eq!(value, b'a');
    }

    #[test]
    fn test_reference_and_box_delegate() {
        let data = b"ab";
        let cursor = ByteCursor::new(data);
        let parser = seq(one(), one());

        let by_ref = (&parser).parse(cursor);
        let boxed = parser.boxed();
        assert_eq!(by_ref, boxed.parse(cursor));
        assert_eq!(by_ref.unwrap().0, (b'a', b'b'));
    }
}
