use crate::parser::{Match, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the
/// second parser from the same starting position
///
/// This is ordered choice: when the first parser matches, its result is taken
/// even if the second parser would also have matched.
#[derive(Debug, Clone, Copy)]
pub struct Alt<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Alt<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Alt { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Alt<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        match self.parser1.parse_group(cursor) {
            Some(result) => Some(result),
            None => {
                tracing::trace!(?cursor, "first alternative failed, trying next");
                self.parser2.parse_group(cursor)
            }
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait AltExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Alt<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output>,
    {
        Alt::new(self, other)
    }
}

/// Implement AltExt for all parsers
impl<'code, P> AltExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Alt parser
pub fn alt<'code, P1, P2>(parser1: P1, parser2: P2) -> Alt<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    Alt::new(parser1, parser2)
}

/// Ordered choice over any number of parsers
///
/// `alt!(a, b, c)` tries `a`, then `b`, then `c`, each from the original
/// position, and nests [`Alt`] to the right.
#[macro_export]
macro_rules! alt {
    ($parser:expr $(,)?) => {
        $parser
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::alt::Alt::new($first, $crate::alt!($($rest),+))
    };
}
