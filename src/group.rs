//! Value groups and their normalization rules.
//!
//! Every combinator produces a *value group*: a flat tuple of the values it
//! matched. Two rules keep compositions shallow no matter how deeply they nest:
//!
//! - **Flattening**: sequencing concatenates groups, so `(a, b)` followed by
//!   `(c,)` yields `(a, b, c)`, never `((a, b), c)`. See [`Concat`].
//! - **Unwrapping**: a group of arity one is presented as its bare element
//!   wherever a plain value is expected. See [`Group::Flat`].
//!
//! Groups are plain tuples of arity 0 through 16. Concatenation is available
//! for any two groups of arity at most 8 each.

/// An ordered, fixed-arity group of matched values
pub trait Group: Sized {
    /// The user-facing view of the group: the bare element for arity one,
    /// the tuple itself otherwise
    type Flat;

    /// Number of values in the group
    const ARITY: usize;

    /// Unwrap the group into its user-facing view
    fn into_flat(self) -> Self::Flat;

    /// Rebuild the group from its user-facing view
    fn from_flat(flat: Self::Flat) -> Self;
}

/// Flat concatenation of two value groups
pub trait Concat<Rhs: Group>: Group {
    type Output: Group;

    fn concat(self, rhs: Rhs) -> Self::Output;
}

impl Group for () {
    type Flat = ();
    const ARITY: usize = 0;

    fn into_flat(self) -> Self::Flat {}

    fn from_flat(_: Self::Flat) -> Self {}
}

impl<A> Group for (A,) {
    type Flat = A;
    const ARITY: usize = 1;

    fn into_flat(self) -> Self::Flat {
        self.0
    }

    fn from_flat(flat: Self::Flat) -> Self {
        (flat,)
    }
}

macro_rules! impl_group {
    ($arity:expr; $($t:ident),+) => {
        impl<$($t),+> Group for ($($t,)+) {
            type Flat = Self;
            const ARITY: usize = $arity;

            fn into_flat(self) -> Self::Flat {
                self
            }

            fn from_flat(flat: Self::Flat) -> Self {
                flat
            }
        }
    };
}

impl_group!(2; A1, A2);
impl_group!(3; A1, A2, A3);
impl_group!(4; A1, A2, A3, A4);
impl_group!(5; A1, A2, A3, A4, A5);
impl_group!(6; A1, A2, A3, A4, A5, A6);
impl_group!(7; A1, A2, A3, A4, A5, A6, A7);
impl_group!(8; A1, A2, A3, A4, A5, A6, A7, A8);
impl_group!(9; A1, A2, A3, A4, A5, A6, A7, A8, B1);
impl_group!(10; A1, A2, A3, A4, A5, A6, A7, A8, B1, B2);
impl_group!(11; A1, A2, A3, A4, A5, A6, A7, A8, B1, B2, B3);
impl_group!(12; A1, A2, A3, A4, A5, A6, A7, A8, B1, B2, B3, B4);
impl_group!(13; A1, A2, A3, A4, A5, A6, A7, A8, B1, B2, B3, B4, B5);
impl_group!(14; A1, A2, A3, A4, A5, A6, A7, A8, B1, B2, B3, B4, B5, B6);
impl_group!(15; A1, A2, A3, A4, A5, A6, A7, A8, B1, B2, B3, B4, B5, B6, B7);
impl_group!(16; A1, A2, A3, A4, A5, A6, A7, A8, B1, B2, B3, B4, B5, B6, B7, B8);

macro_rules! impl_concat {
    ([$($a:ident),*] [$($b:ident),*]) => {
        #[allow(non_snake_case, clippy::unused_unit)]
        impl<$($a,)* $($b),*> Concat<($($b,)*)> for ($($a,)*) {
            type Output = ($($a,)* $($b,)*);

            fn concat(self, rhs: ($($b,)*)) -> Self::Output {
                let ($($a,)*) = self;
                let ($($b,)*) = rhs;
                ($($a,)* $($b,)*)
            }
        }
    };
}

// Generates `Concat` for one left-hand arity against every right-hand arity 0..=8.
macro_rules! impl_concat_rhs {
    ([$($a:ident),*]) => {
        impl_concat_rhs!(@step [$($a),*] [] [B1, B2, B3, B4, B5, B6, B7, B8]);
    };
    (@step [$($a:ident),*] [$($b:ident),*] []) => {
        impl_concat!([$($a),*] [$($b),*]);
    };
    (@step [$($a:ident),*] [$($b:ident),*] [$next:ident $(, $rest:ident)*]) => {
        impl_concat!([$($a),*] [$($b),*]);
        impl_concat_rhs!(@step [$($a),*] [$($b,)* $next] [$($rest),*]);
    };
}

impl_concat_rhs!([]);
impl_concat_rhs!([A1]);
impl_concat_rhs!([A1, A2]);
impl_concat_rhs!([A1, A2, A3]);
impl_concat_rhs!([A1, A2, A3, A4]);
impl_concat_rhs!([A1, A2, A3, A4, A5]);
impl_concat_rhs!([A1, A2, A3, A4, A5, A6]);
impl_concat_rhs!([A1, A2, A3, A4, A5, A6, A7]);
impl_concat_rhs!([A1, A2, A3, A4, A5, A6, A7, A8]);
