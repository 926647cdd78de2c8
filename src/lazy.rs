use crate::parser::{Match, Parser};

/// A lazy parser that defers the construction of the actual parser until parse
/// time. This is useful for breaking recursion between grammar rules, since a
/// rule cannot contain itself by value.
#[derive(Debug, Clone, Copy)]
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        let parser = (self.factory)();
        parser.parse_group(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
