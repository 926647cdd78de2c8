use crate::group::Group;
use crate::parser::{Match, Parser};

/// Parser combinator that makes its inner parser optional
///
/// Always succeeds. Produces `Some(value)` and the advanced cursor when the
/// inner parser matches, and `None` with the cursor unchanged when it does not.
///
/// Example:
/// ```
/// use tokcomb::cursors::ByteCursor;
/// use tokcomb::one::one;
/// use tokcomb::optional::OptionalExt;
/// use tokcomb::parser::Parser;
///
/// let data = b"a";
/// let cursor = ByteCursor::new(data);
/// let (value, cursor) = one().opt().parse(cursor).unwrap();
/// assert_eq!(value, Some(b'a'));
///
/// let (value, _) = one().opt().parse(cursor).unwrap();
/// assert_eq!(value, None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = (Option<<P::Output as Group>::Flat>,);

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        match self.parser.parse(cursor) {
            Some((value, next_cursor)) => Some(((Some(value),), next_cursor)),
            None => Some(((None,), cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .opt() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn opt(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::{ByteCursor, TokenCursor};
    use crate::one::one;
    use crate::seq::seq;

    #[test]
    fn test_optional_present() {
        let data = b"ab";
        let cursor = ByteCursor::new(data);

        let (value, remaining) = optional(one()).parse(cursor).unwrap();
        assert_eq!(value, Some(b'a'));
        assert_eq!(remaining.value().unwrap(), b'b');
    }

    #[test]
    fn test_optional_absent_keeps_cursor() {
        let data = b"a";
        let cursor = ByteCursor::new(data);

        // two tokens needed, only one available
        let (value, remaining) = optional(seq(one(), one())).parse(cursor).unwrap();
        assert_eq!(value, None);
        assert_eq!(remaining, cursor);
    }

    #[test]
    fn test_optional_of_group_wraps_whole_group() {
        let data = [1, 2, 3];
        let cursor = TokenCursor::new(&data);

        let (value, remaining) = seq(one(), one()).opt().parse(cursor).unwrap();
        assert_eq!(value, Some((1, 2)));
        assert_eq!(remaining.value().unwrap(), 3);
    }

    #[test]
    fn test_optional_on_empty_input() {
        let data: [char; 0] = [];
        let cursor = TokenCursor::new(&data);

        let (value, remaining) = one().opt().parse(cursor).unwrap();
        assert_eq!(value, None);
        assert!(remaining.eos());
    }
}
