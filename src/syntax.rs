//! Operator spelling of the composite combinators.
//!
//! | Operator | Meaning                         |
//! |----------|---------------------------------|
//! | `!p`     | [`Optional`] of `p`             |
//! | `a & b`  | [`Seq`] of `a` then `b`         |
//! | `a \| b` | [`Alt`]: `a`, or else `b`       |
//!
//! `&` binds tighter than `|`, so `a & b | c` reads as `(a & b) | c`. The
//! operators are available on every combinator of this crate. Other parsers
//! (boxed rules, references, user types) join in through [`Rule`].
//!
//! Both operands must read the same cursor type, and ordered choice also needs
//! the same value group on both sides. Mismatches are rejected when the
//! expression is built, by the trait bounds on the operator impls.
//!
//! ```
//! use tokcomb::cursors::ByteCursor;
//! use tokcomb::filter::is;
//! use tokcomb::parser::Parser;
//!
//! let data = b"ab";
//! let cursor = ByteCursor::new(data);
//! let ab_or_a = is(b'a') & !is(b'b');
//! let ((a, b), _) = ab_or_a.parse(cursor).unwrap();
//! assert_eq!((a, b), (b'a', Some(b'b')));
//! ```

use crate::alt::Alt;
use crate::from_fn::FromFn;
use crate::lazy::Lazy;
use crate::many::{Many, Many1};
use crate::map::Map;
use crate::named::Named;
use crate::one::ConsumeOne;
use crate::optional::Optional;
use crate::parser::{Match, Parser};
use crate::seq::Seq;
use crate::succeed::Succeed;
use std::ops::{BitAnd, BitOr, Not};

/// Wrapper giving any parser the operator syntax
#[derive(Debug, Clone, Copy)]
pub struct Rule<P>(pub P);

impl<P> Rule<P> {
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<'code, P> Parser<'code> for Rule<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse_group(&self, cursor: Self::Cursor) -> Match<Self::Output, Self::Cursor> {
        self.0.parse_group(cursor)
    }
}

/// Convenience function to wrap a parser in a Rule
pub fn rule<'code, P>(parser: P) -> Rule<P>
where
    P: Parser<'code>,
{
    Rule(parser)
}

macro_rules! impl_operators {
    ($ty:ty; $($g:ident),*) => {
        impl<'code, $($g,)* Rhs> BitAnd<Rhs> for $ty
        where
            $ty: Parser<'code>,
            Rhs: Parser<'code, Cursor = <$ty as Parser<'code>>::Cursor>,
        {
            type Output = Seq<Self, Rhs>;

            fn bitand(self, rhs: Rhs) -> Self::Output {
                Seq::new(self, rhs)
            }
        }

        impl<'code, $($g,)* Rhs> BitOr<Rhs> for $ty
        where
            $ty: Parser<'code>,
            Rhs: Parser<
                'code,
                Cursor = <$ty as Parser<'code>>::Cursor,
                Output = <$ty as Parser<'code>>::Output,
            >,
        {
            type Output = Alt<Self, Rhs>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                Alt::new(self, rhs)
            }
        }

        impl<'code, $($g),*> Not for $ty
        where
            $ty: Parser<'code>,
        {
            type Output = Optional<Self>;

            fn not(self) -> Self::Output {
                Optional::new(self)
            }
        }
    };
}

impl_operators!(Rule<P>; P);
impl_operators!(Succeed<C>; C);
impl_operators!(ConsumeOne<C>; C);
impl_operators!(Optional<P>; P);
impl_operators!(Seq<P1, P2>; P1, P2);
impl_operators!(Alt<P1, P2>; P1, P2);
impl_operators!(Many<P, C>; P, C);
impl_operators!(Many1<P, C>; P, C);
impl_operators!(Map<P, T>; P, T);
impl_operators!(Lazy<F>; F);
impl_operators!(FromFn<F, C, G>; F, C, G);
impl_operators!(Named<P>; P);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::{ByteCursor, TokenCursor};
    use crate::filter::is;
    use crate::map::MapExt;
    use crate::one::one;
    use crate::parser::BoxedExt;

    #[test]
    fn test_and_is_sequence() {
        let data = b"xyz";
        let cursor = ByteCursor::new(data);

        let ((x, y, z), rest) = (one() & one() & one()).parse(cursor).unwrap();
        assert_eq!((x, y, z), (b'x', b'y', b'z'));
        assert!(rest.eos());
    }

    #[test]
    fn test_or_is_ordered_choice() {
        let data = [5u8];
        let cursor = TokenCursor::new(&data);

        let parser = (one() & one()).map(|(a, _): (u8, u8)| a) | one();
        let (value, rest) = parser.parse(cursor).unwrap();
        assert_eq!(value, 5);
        assert!(rest.eos());
    }

    #[test]
    fn test_not_is_optional() {
        let data = b"";
        let cursor = ByteCursor::new(data);

        let (value, rest) = (!one()).parse(cursor).unwrap();
        assert_eq!(value, None);
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_precedence() {
        let data = b"c";
        let cursor = ByteCursor::new(data);

        // (a & !b) | (c & !d)
        let parser = is(b'a') & !is(b'b') | is(b'c') & !is(b'd');
        let ((c, d), _) = parser.parse(cursor).unwrap();
        assert_eq!((c, d), (b'c', None));

        assert!(parser.parse(ByteCursor::new(b"x")).is_none());
    }

    #[test]
    fn test_rule_wraps_foreign_parsers() {
        let data = b"ab";
        let cursor = ByteCursor::new(data);

        let boxed = rule(one::<ByteCursor>().boxed());
        let ((a, b), _) = (boxed & one()).parse(cursor).unwrap();
        assert_eq!((a, b), (b'a', b'b'));
        assert_eq!(Rule(one::<ByteCursor>()).into_inner().parse(cursor).unwrap().0, b'a');
    }
}
