use crate::group::Group;

/// Outcome of a fallible transformation
///
/// This is deliberately not `Option`: a transform whose *result value* happens
/// to be an `Option` is still a successful transform, while `Declined` turns an
/// otherwise successful match into a failed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallible<T> {
    /// The transform produced a value
    Value(T),
    /// The transform declined; the enclosing combinator fails to match
    Declined,
}

impl<T> Fallible<T> {
    pub fn is_value(&self) -> bool {
        matches!(self, Fallible::Value(_))
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, Fallible::Declined)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fallible<U> {
        match self {
            Fallible::Value(value) => Fallible::Value(f(value)),
            Fallible::Declined => Fallible::Declined,
        }
    }

    /// Convert into an `Option`, forgetting the distinction between the two
    pub fn into_option(self) -> Option<T> {
        match self {
            Fallible::Value(value) => Some(value),
            Fallible::Declined => None,
        }
    }
}

/// A transformation applied to the value group of a successful match
///
/// Implemented by [`Total`], [`Partial`], [`TotalGroup`] and [`PartialGroup`]
/// (wrapping user functions) and by the library transforms [`Filter`](crate::filter::Filter),
/// [`Select`](crate::select::Select), [`FoldLeft`](crate::fold::FoldLeft) and
/// [`FoldRight`](crate::fold::FoldRight).
pub trait Transform<G: Group> {
    /// The value group produced by the transform
    type Output: Group;

    fn transform(&self, group: G) -> Fallible<Self::Output>;
}

/// A user function that always produces a value
///
/// The function receives the flat view of the group, so a single matched value
/// arrives bare and several arrive as one tuple.
#[derive(Debug, Clone, Copy)]
pub struct Total<F>(pub F);

impl<G, F, U> Transform<G> for Total<F>
where
    G: Group,
    F: Fn(G::Flat) -> U,
{
    type Output = (U,);

    fn transform(&self, group: G) -> Fallible<Self::Output> {
        Fallible::Value(((self.0)(group.into_flat()),))
    }
}

/// A user function that may decline to produce a value
#[derive(Debug, Clone, Copy)]
pub struct Partial<F>(pub F);

impl<G, F, U> Transform<G> for Partial<F>
where
    G: Group,
    F: Fn(G::Flat) -> Fallible<U>,
{
    type Output = (U,);

    fn transform(&self, group: G) -> Fallible<Self::Output> {
        (self.0)(group.into_flat()).map(|value| (value,))
    }
}

/// A user function that always produces a whole value group
///
/// Unlike [`Total`], the result is taken as a group rather than wrapped as a
/// single value: returning `(a, b)` yields two values that later sequencing
/// flattens, and returning `(a,)` is the same as returning `a` bare.
#[derive(Debug, Clone, Copy)]
pub struct TotalGroup<F>(pub F);

impl<G, F, R> Transform<G> for TotalGroup<F>
where
    G: Group,
    R: Group,
    F: Fn(G::Flat) -> R,
{
    type Output = R;

    fn transform(&self, group: G) -> Fallible<Self::Output> {
        Fallible::Value((self.0)(group.into_flat()))
    }
}

/// A user function that may decline, and otherwise produces a whole value group
#[derive(Debug, Clone, Copy)]
pub struct PartialGroup<F>(pub F);

impl<G, F, R> Transform<G> for PartialGroup<F>
where
    G: Group,
    R: Group,
    F: Fn(G::Flat) -> Fallible<R>,
{
    type Output = R;

    fn transform(&self, group: G) -> Fallible<Self::Output> {
        (self.0)(group.into_flat())
    }
}
