//! Projection of value groups.
//!
//! [`Select`] keeps chosen positions of a group, in the order given, and drops
//! the rest. Positions are checked at compile time: selecting index 3 of a
//! pair does not build.
//!
//! ```
//! use tokcomb::cursors::ByteCursor;
//! use tokcomb::map::MapExt;
//! use tokcomb::parser::Parser;
//! use tokcomb::{one, select, seq};
//!
//! let data = b"(x)";
//! let cursor = ByteCursor::new(data);
//! let inner = seq!(one(), one(), one()).apply(select![1]);
//! let (value, _) = inner.parse(cursor).unwrap();
//! assert_eq!(value, b'x');
//! ```

use crate::group::Group;
use crate::transform::{Fallible, Transform};
use std::fmt;
use std::marker::PhantomData;

/// Marker for a position within a value group
#[derive(Debug, Clone, Copy, Default)]
pub struct Index<const N: usize>;

/// Access to the value at position `N` of a group
pub trait Pick<const N: usize> {
    type Item;

    fn pick(&self) -> &Self::Item;
}

macro_rules! impl_pick {
    ($tys:tt; $($idx:tt $item:ident),+) => {
        $( impl_pick!(@one $tys $idx $item); )+
    };
    (@one [$($t:ident),+] $idx:tt $item:ident) => {
        impl<$($t),+> Pick<$idx> for ($($t,)+) {
            type Item = $item;

            fn pick(&self) -> &Self::Item {
                &self.$idx
            }
        }
    };
}

impl_pick!([T0]; 0 T0);
impl_pick!([T0, T1]; 0 T0, 1 T1);
impl_pick!([T0, T1, T2]; 0 T0, 1 T1, 2 T2);
impl_pick!([T0, T1, T2, T3]; 0 T0, 1 T1, 2 T2, 3 T3);
impl_pick!([T0, T1, T2, T3, T4]; 0 T0, 1 T1, 2 T2, 3 T3, 4 T4);
impl_pick!([T0, T1, T2, T3, T4, T5]; 0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5);
impl_pick!([T0, T1, T2, T3, T4, T5, T6]; 0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6);
impl_pick!([T0, T1, T2, T3, T4, T5, T6, T7]; 0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7);
impl_pick!(
    [T0, T1, T2, T3, T4, T5, T6, T7, T8];
    0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7, 8 T8
);
impl_pick!(
    [T0, T1, T2, T3, T4, T5, T6, T7, T8, T9];
    0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7, 8 T8, 9 T9
);
impl_pick!(
    [T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10];
    0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7, 8 T8, 9 T9, 10 T10
);
impl_pick!(
    [T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11];
    0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7, 8 T8, 9 T9, 10 T10, 11 T11
);

/// A list of [`Index`] markers that can project a group `G`
pub trait Selection<G> {
    type Output: Group;

    fn select(group: &G) -> Self::Output;
}

macro_rules! impl_selection {
    ($($i:ident),+) => {
        impl<G, $(const $i: usize),+> Selection<G> for ($(Index<$i>,)+)
        where
            G: Group $(+ Pick<$i>)+,
            $(<G as Pick<$i>>::Item: Clone,)+
        {
            type Output = ($(<G as Pick<$i>>::Item,)+);

            fn select(group: &G) -> Self::Output {
                ($(<G as Pick<$i>>::pick(group).clone(),)+)
            }
        }
    };
}

impl_selection!(I0);
impl_selection!(I0, I1);
impl_selection!(I0, I1, I2);
impl_selection!(I0, I1, I2, I3);
impl_selection!(I0, I1, I2, I3, I4);
impl_selection!(I0, I1, I2, I3, I4, I5);
impl_selection!(I0, I1, I2, I3, I4, I5, I6);
impl_selection!(I0, I1, I2, I3, I4, I5, I6, I7);

/// Transform that projects chosen positions of a value group into a new group
///
/// Selected values are cloned, so the same position may be selected more than
/// once. Selecting a single position yields that value bare.
pub struct Select<S> {
    _selection: PhantomData<fn() -> S>,
}

impl<S> Select<S> {
    pub fn new() -> Self {
        Select {
            _selection: PhantomData,
        }
    }
}

impl<S> Default for Select<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for Select<S> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for Select<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("indices", &std::any::type_name::<S>())
            .finish()
    }
}

impl<S> Copy for Select<S> {}

impl<G, S> Transform<G> for Select<S>
where
    G: Group,
    S: Selection<G>,
{
    type Output = S::Output;

    fn transform(&self, group: G) -> Fallible<Self::Output> {
        Fallible::Value(S::select(&group))
    }
}

/// Builds a [`Select`] transform from a list of positions
///
/// `select![2, 0]` keeps the third and first values of a group, in that order.
#[macro_export]
macro_rules! select {
    ($($index:expr),+ $(,)?) => {
        $crate::select::Select::<($($crate::select::Index<{ $index }>,)+)>::new()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::TokenCursor;
    use crate::map::{MapExt, apply};
    use crate::one::one;
    use crate::parser::Parser;
    use crate::seq::seq;

    #[test]
    fn test_select_reorders() {
        let group = (1, 'b', "c");
        let selected = Select::<(Index<2>, Index<0>)>::new().transform(group);
        assert_eq!(selected, Fallible::Value(("c", 1)));
    }

    #[test]
    fn test_select_single_unwraps() {
        let data = ['(', 'x', ')'];
        let cursor = TokenCursor::new(&data);

        let parser = apply(crate::seq!(one(), one(), one()), select![1]);
        let (inner, rest) = parser.parse(cursor).unwrap();
        assert_eq!(inner, 'x');
        assert!(rest.eos());
    }

    #[test]
    fn test_select_repeated_index() {
        let data = [String::from("a"), String::from("b")];
        let cursor = TokenCursor::new(&data);

        let parser = seq(one(), one()).apply(select![0, 0, 1]);
        let ((first, again, second), _) = parser.parse(cursor).unwrap();
        assert_eq!(first, "a");
        assert_eq!(again, "a");
        assert_eq!(second, "b");
    }

    #[test]
    fn test_selected_group_flattens_in_sequence() {
        let data = [1, 2, 3, 4];
        let cursor = TokenCursor::new(&data);

        let ends = seq(seq(one(), one()), one()).apply(select![0, 2]);
        let ((a, c, d), _) = seq(ends, one()).parse(cursor).unwrap();
        assert_eq!((a, c, d), (1, 3, 4));
    }

    #[test]
    fn test_debug_names_indices() {
        let selection = select![2, 0];
        let rendered = format!("{selection:?}");
        assert!(rendered.starts_with("Select"));
        assert!(rendered.contains("Index<2>"));
        assert!(rendered.contains("Index<0>"));
    }
}
