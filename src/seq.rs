use crate::group::Concat;
use crate::parser::{Match, Parser};

/// Parser combinator that sequences two parsers and concatenates their value
/// groups
///
/// Unlike a plain pair, sequencing flattens: chaining several parsers yields
/// one flat tuple `(a, b, c, d)` rather than nested pairs `(((a, b), c), d)`.
/// Because of this, grouping does not matter: `seq(seq(a, b), c)` and
/// `seq(a, seq(b, c))` produce the same value and cursor.
///
/// Example:
/// ```
/// use tokcomb::cursors::ByteCursor;
/// use tokcomb::one::one;
/// use tokcomb::seq::SeqExt;
/// use tokcomb::parser::Parser;
///
/// let data = b"xyz";
/// let cursor = ByteCursor::new(data);
/// let ((x, y, z), cursor) = one().then(one()).then(one()).parse(cursor).unwrap();
/// assert_eq!((x, y, z), (b'x', b'y', b'z'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Seq<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Seq<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Seq { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Seq<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
    P1::Output: Concat<P2::Output>,
{
    type Cursor = P1::Cursor;
    type Output = <P1::Output as Concat<P2::Output>>::Output;

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        let (first, cursor) = self.parser1.parse_group(cursor)?;
        let (second, cursor) = self.parser2.parse_group(cursor)?;
        Some((first.concat(second), cursor))
    }
}

/// Convenience function to create a Seq parser
pub fn seq<'code, P1, P2>(parser1: P1, parser2: P2) -> Seq<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    Seq::new(parser1, parser2)
}

/// Extension trait to add .then() method support for parsers
pub trait SeqExt<'code>: Parser<'code> + Sized {
    fn then<P>(self, other: P) -> Seq<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        Seq::new(self, other)
    }
}

/// Implement SeqExt for all parsers
impl<'code, P> SeqExt<'code> for P where P: Parser<'code> {}

/// Sequences any number of parsers into one flat value group
///
/// `seq!()` is [`succeed`](crate::succeed::succeed), `seq!(p)` is `p` itself,
/// and longer lists nest [`Seq`] to the right.
#[macro_export]
macro_rules! seq {
    () => {
        $crate::succeed::succeed()
    };
    ($parser:expr $(,)?) => {
        $parser
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::seq::Seq::new($first, $crate::seq!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::{ByteCursor, TokenCursor};
    use crate::one::one;
    use crate::optional::optional;
    use crate::succeed::succeed;

    #[test]
    fn test_seq_both_succeed() {
        let data = b"A5xyz";
        let cursor = ByteCursor::new(data);
        let parser = seq(one(), one());

        let ((first, second), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(first, b'A');
        assert_eq!(second, b'5');
        assert_eq!(cursor.value().unwrap(), b'x');
    }

    #[test]
    fn test_seq_second_fails() {
        let data = b"A";
        let cursor = ByteCursor::new(data);
        let parser = seq(one(), one());

        assert!(parser.parse(cursor).is_none());
    }

    #[test]
    fn test_seq_nesting_flattens() {
        let data = [1, 2, 3, 4];
        let cursor = TokenCursor::new(&data);

        let left = seq(seq(one(), one()), seq(one(), one()));
        let ((a, b, c, d), end) = left.parse(cursor).unwrap();
        assert_eq!((a, b, c, d), (1, 2, 3, 4));
        assert!(end.eos());
    }

    #[test]
    fn test_seq_with_succeed_is_identity() {
        let data = b"q";
        let cursor = ByteCursor::new(data);

        let plain = one().parse(cursor);
        assert_eq!(seq(succeed(), one()).parse(cursor), plain);
        assert_eq!(seq(one(), succeed()).parse(cursor), plain);
    }

    #[test]
    fn test_seq_keeps_optional_as_one_value() {
        let data = b"ab";
        let cursor = ByteCursor::new(data);

        let ((a, missing), _) = seq(one(), optional(seq(one(), one())))
            .parse(cursor)
            .unwrap();
        assert_eq!(a, b'a');
        assert_eq!(missing, None);
    }

    #[test]
    fn test_seq_macro() {
        let data = b"abc";
        let cursor = ByteCursor::new(data);

        let ((), same) = seq!().parse(cursor).unwrap();
        assert_eq!(same, cursor);

        let (single, _) = seq!(one()).parse(cursor).unwrap();
        assert_eq!(single, b'a');

        let ((a, b, c), end) = seq!(one(), one(), one()).parse(cursor).unwrap();
        assert_eq!((a, b, c), (b'a', b'b', b'c'));
        assert!(end.eos());
    }

    #[test]
    fn test_then_method_chain() {
        let data = b"A5B";
        let cursor = ByteCursor::new(data);
        let parser = one().then(one()).then(one());

        let ((a, five, b), cursor) = parser.parse(cursor).unwrap();
        assert_eq!((a, five, b), (b'A', b'5', b'B'));
        assert!(matches!(cursor, TokenCursor::EndOfInput { .. }));
    }
}
