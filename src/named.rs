use crate::cursor::Cursor;
use crate::parser::{Match, Parser};
use std::borrow::Cow;

/// Parser combinator that labels a sub-parse for tracing
///
/// Each invocation runs inside a `trace`-level span carrying the rule name and
/// start position, and records whether the rule matched and where it ended.
/// Matching behavior is exactly that of the inner parser.
#[derive(Debug, Clone)]
pub struct Named<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Named<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Named {
            parser,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<'code, P> Parser<'code> for Named<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        let span = tracing::trace_span!("rule", name = self.name(), start = cursor.position());
        let _entered = span.enter();

        let result = self.parser.parse_group(cursor);
        match &result {
            Some((_, end)) => tracing::trace!(end = end.position(), "matched"),
            None => tracing::trace!("no match"),
        }
        result
    }
}

/// Convenience function to create a Named parser
pub fn named<'code, P>(parser: P, name: impl Into<Cow<'static, str>>) -> Named<P>
where
    P: Parser<'code>,
{
    Named::new(parser, name)
}

/// Extension trait to add .named() method support for parsers
pub trait NamedExt<'code>: Parser<'code> + Sized {
    fn named(self, name: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(self, name)
    }
}

/// Implement NamedExt for all parsers
impl<'code, P> NamedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::ByteCursor;
    use crate::one::one;
    use crate::seq::seq;

    #[test]
    fn test_named_is_transparent() {
        let data = b"ab";
        let cursor = ByteCursor::new(data);
        let pair = seq(one(), one());

        let labelled = named(seq(one(), one()), "pair");
        assert_eq!(labelled.name(), "pair");
        assert_eq!(labelled.parse(cursor), pair.parse(cursor));
    }

    #[test]
    fn test_named_failure() {
        let data = b"a";
        let cursor = ByteCursor::new(data);

        let triple = seq(seq(one(), one()), one()).named("triple");
        assert!(triple.parse(cursor).is_none());
    }

    #[test]
    fn test_named_with_runtime_name() {
        let data = b"ab";
        let cursor = ByteCursor::new(data);
        let rules = ["first", "second"];

        let labelled: Vec<_> = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| one().named(format!("{rule}#{index}")))
            .collect();
        assert_eq!(labelled[1].name(), "second#1");
        assert_eq!(labelled[0].parse(cursor).unwrap().0, b'a');
    }
}
