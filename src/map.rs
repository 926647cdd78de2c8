use crate::group::Group;
use crate::parser::{Match, Parser};
use crate::transform::{Fallible, Partial, PartialGroup, Total, TotalGroup, Transform};

/// Parser combinator that transforms the value group of a successful match
///
/// Whether the transform can turn a match into a failure is fixed by its type:
/// [`map`] takes functions returning a plain value and never fails on its own,
/// [`try_map`] takes functions returning [`Fallible`] and fails when they
/// decline, even though the inner parser matched and advanced.
///
/// [`map`] and [`try_map`] always produce a single value, even when that value
/// is a tuple. [`map_group`] and [`try_map_group`] instead treat the returned
/// tuple as a value group, so it flattens into surrounding sequences.
#[derive(Debug, Clone, Copy)]
pub struct Map<P, T> {
    parser: P,
    transform: T,
}

impl<P, T> Map<P, T> {
    pub fn new(parser: P, transform: T) -> Self {
        Map { parser, transform }
    }
}

impl<'code, P, T> Parser<'code> for Map<P, T>
where
    P: Parser<'code>,
    T: Transform<P::Output>,
{
    type Cursor = P::Cursor;
    type Output = T::Output;

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        let (group, next_cursor) = self.parser.parse_group(cursor)?;
        match self.transform.transform(group) {
            Fallible::Value(output) => Some((output, next_cursor)),
            Fallible::Declined => {
                tracing::trace!(?cursor, "transform declined a successful match");
                None
            }
        }
    }
}

/// Convenience function to create a Map parser with a total function
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, Total<F>>
where
    P: Parser<'code>,
    F: Fn(<P::Output as Group>::Flat) -> U,
{
    Map::new(parser, Total(mapper))
}

/// Convenience function to create a Map parser with a fallible function
pub fn try_map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, Partial<F>>
where
    P: Parser<'code>,
    F: Fn(<P::Output as Group>::Flat) -> Fallible<U>,
{
    Map::new(parser, Partial(mapper))
}

/// Convenience function to create a Map parser whose function returns a
/// whole value group
pub fn map_group<'code, P, F, R>(parser: P, mapper: F) -> Map<P, TotalGroup<F>>
where
    P: Parser<'code>,
    R: Group,
    F: Fn(<P::Output as Group>::Flat) -> R,
{
    Map::new(parser, TotalGroup(mapper))
}

/// Convenience function to create a Map parser whose fallible function
/// returns a whole value group
pub fn try_map_group<'code, P, F, R>(parser: P, mapper: F) -> Map<P, PartialGroup<F>>
where
    P: Parser<'code>,
    R: Group,
    F: Fn(<P::Output as Group>::Flat) -> Fallible<R>,
{
    Map::new(parser, PartialGroup(mapper))
}

/// Convenience function to create a Map parser from any [`Transform`]
pub fn apply<'code, P, T>(parser: P, transform: T) -> Map<P, T>
where
    P: Parser<'code>,
    T: Transform<P::Output>,
{
    Map::new(parser, transform)
}

/// Extension trait to add .map(), .try_map() and .apply() method support for
/// parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, Total<F>>
    where
        F: Fn(<Self::Output as Group>::Flat) -> U,
    {
        Map::new(self, Total(mapper))
    }

    fn try_map<F, U>(self, mapper: F) -> Map<Self, Partial<F>>
    where
        F: Fn(<Self::Output as Group>::Flat) -> Fallible<U>,
    {
        Map::new(self, Partial(mapper))
    }

    fn map_group<F, R>(self, mapper: F) -> Map<Self, TotalGroup<F>>
    where
        R: Group,
        F: Fn(<Self::Output as Group>::Flat) -> R,
    {
        Map::new(self, TotalGroup(mapper))
    }

    fn try_map_group<F, R>(self, mapper: F) -> Map<Self, PartialGroup<F>>
    where
        R: Group,
        F: Fn(<Self::Output as Group>::Flat) -> Fallible<R>,
    {
        Map::new(self, PartialGroup(mapper))
    }

    fn apply<T>(self, transform: T) -> Map<Self, T>
    where
        T: Transform<Self::Output>,
    {
        Map::new(self, transform)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
