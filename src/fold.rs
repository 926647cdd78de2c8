use crate::transform::{Fallible, Transform};

/// Left fold over a `(seed, collection)` group
///
/// Computes `combine(combine(combine(seed, e1), e2), e3)`, walking the
/// collection front to back. Typically applied after a sequence such as
/// `seq(operand, many(seq(operator, operand)))` to build left-associative
/// structures.
#[derive(Debug, Clone, Copy)]
pub struct FoldLeft<F> {
    combine: F,
}

impl<F> FoldLeft<F> {
    pub fn new(combine: F) -> Self {
        FoldLeft { combine }
    }
}

impl<S, C, F> Transform<(S, C)> for FoldLeft<F>
where
    C: IntoIterator,
    F: Fn(S, C::Item) -> S,
{
    type Output = (S,);

    fn transform(&self, (seed, elements): (S, C)) -> Fallible<Self::Output> {
        let folded = elements
            .into_iter()
            .fold(seed, |acc, element| (self.combine)(acc, element));
        Fallible::Value((folded,))
    }
}

/// Right fold over a `(seed, collection)` group
///
/// Computes `combine(e1, combine(e2, combine(e3, seed)))`: the collection is
/// walked back to front and the seed is the innermost, rightmost accumulator.
#[derive(Debug, Clone, Copy)]
pub struct FoldRight<F> {
    combine: F,
}

impl<F> FoldRight<F> {
    pub fn new(combine: F) -> Self {
        FoldRight { combine }
    }
}

impl<S, C, F> Transform<(S, C)> for FoldRight<F>
where
    C: IntoIterator,
    C::IntoIter: DoubleEndedIterator,
    F: Fn(C::Item, S) -> S,
{
    type Output = (S,);

    fn transform(&self, (seed, elements): (S, C)) -> Fallible<Self::Output> {
        let folded = elements
            .into_iter()
            .rev()
            .fold(seed, |acc, element| (self.combine)(element, acc));
        Fallible::Value((folded,))
    }
}

/// Convenience function to create a FoldLeft transform
pub fn fold_left<F>(combine: F) -> FoldLeft<F> {
    FoldLeft::new(combine)
}

/// Convenience function to create a FoldRight transform
pub fn fold_right<F>(combine: F) -> FoldRight<F> {
    FoldRight::new(combine)
}
