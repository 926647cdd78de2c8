use crate::cursor::Cursor;
use crate::group::Group;
use crate::map::Map;
use crate::one::ConsumeOne;
use crate::transform::{Fallible, Transform};
use std::fmt;
use std::marker::PhantomData;

/// Transform that keeps a value group only if a predicate holds over it
///
/// The group passes through unchanged, so a filtered multi-value group keeps
/// flattening into surrounding sequences. Use it with
/// [`apply`](crate::map::apply) or [`MapExt::apply`](crate::map::MapExt::apply).
pub struct Filter<F, T> {
    predicate: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<F, T> Filter<F, T>
where
    F: Fn(&T) -> bool,
{
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            _phantom: PhantomData,
        }
    }
}

impl<F: Clone, T> Clone for Filter<F, T> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            _phantom: PhantomData,
        }
    }
}

// Predicates are usually closures, which have no `Debug` of their own.
impl<F, T> fmt::Debug for Filter<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").finish_non_exhaustive()
    }
}

impl<G, T, F> Transform<G> for Filter<F, T>
where
    G: Group<Flat = T>,
    F: Fn(&T) -> bool,
{
    type Output = G;

    fn transform(&self, group: G) -> Fallible<Self::Output> {
        let flat = group.into_flat();
        if (self.predicate)(&flat) {
            Fallible::Value(G::from_flat(flat))
        } else {
            Fallible::Declined
        }
    }
}

/// Convenience function to create a Filter transform
pub fn filter<T, F>(predicate: F) -> Filter<F, T>
where
    F: Fn(&T) -> bool,
{
    Filter::new(predicate)
}

/// Parser that consumes a single token equal to `expected`
pub fn is<'code, C>(expected: C::Element) -> Map<ConsumeOne<C>, Filter<impl Fn(&C::Element) -> bool, C::Element>>
where
    C: Cursor<'code>,
    C::Element: PartialEq,
{
    Map::new(ConsumeOne::new(), filter(move |token: &C::Element| *token == expected))
}
