//! Algebraic laws of the combinators, checked over random token streams.

use proptest::prelude::*;
use tokcomb::{
    Cursor, Fallible, MapExt, OptionalExt, Parser, TokenCursor, alt, is, many, many1, one, seq,
    succeed,
};

fn tokens() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..4, 0..16)
}

proptest! {
    #[test]
    fn sequence_with_identity_is_unchanged(data in tokens(), start in 0usize..4) {
        let mut cursor = TokenCursor::new(&data);
        for _ in 0..start {
            cursor = cursor.next();
        }
        let p = seq(is(0u8), one());

        let plain = p.parse(cursor);
        prop_assert_eq!(seq(succeed(), seq(is(0u8), one())).parse(cursor), plain.clone());
        prop_assert_eq!(seq(seq(is(0u8), one()), succeed()).parse(cursor), plain.clone());
        prop_assert_eq!(tokcomb::seq!(seq(is(0u8), one())).parse(cursor), plain);
    }

    #[test]
    fn sequence_is_associative(data in tokens()) {
        let cursor = TokenCursor::new(&data);

        let left = seq(seq(one(), is(1u8)), many(is(2u8)));
        let right = seq(one(), seq(is(1u8), many(is(2u8))));
        let flat = tokcomb::seq!(one(), is(1u8), many(is(2u8)));

        let expected = left.parse(cursor);
        prop_assert_eq!(right.parse(cursor), expected.clone());
        prop_assert_eq!(flat.parse(cursor), expected);
    }

    #[test]
    fn ordered_choice_prefers_first_success(data in tokens()) {
        let cursor = TokenCursor::new(&data);
        let first = seq(one(), one()).map(|(a, b): (u8, u8)| a + b);
        let second = one();

        let chosen = alt(&first, &second).parse(cursor);
        match first.parse(cursor) {
            Some(result) => prop_assert_eq!(chosen, Some(result)),
            None => prop_assert_eq!(chosen, second.parse(cursor)),
        }
    }

    #[test]
    fn optional_never_fails(data in tokens()) {
        let cursor = TokenCursor::new(&data);

        let (value, rest) = seq(is(3u8), one()).opt().parse(cursor).unwrap();
        if value.is_none() {
            prop_assert_eq!(rest, cursor);
        }
    }

    #[test]
    fn repetition_totality(data in tokens()) {
        let cursor = TokenCursor::new(&data);

        let zero_or_more = many(is(0u8)).parse(cursor);
        prop_assert!(zero_or_more.is_some());

        let one_or_more = many1(is(0u8)).parse(cursor);
        prop_assert_eq!(one_or_more.is_none(), is(0u8).parse(cursor).is_none());
        if let Some(result) = one_or_more {
            prop_assert_eq!(Some(result), zero_or_more);
        }
    }

    #[test]
    fn declined_transform_overrides_match(data in tokens()) {
        let cursor = TokenCursor::new(&data);
        let never = one().try_map(|_: u8| Fallible::<u8>::Declined);

        prop_assert!(never.parse(cursor).is_none());
    }

    #[test]
    fn parsing_leaves_input_untouched(data in tokens()) {
        let cursor = TokenCursor::new(&data);
        let before = cursor;

        let _ = many(one()).parse(cursor);
        prop_assert_eq!(cursor, before);
        prop_assert_eq!(cursor.position(), 0);
    }
}
