//! # TokComb - Token Stream Parser Combinators
//!
//! A parser combinator library for recognizers over arbitrary token streams.
//!
//! Grammars are assembled from two primitives, [`succeed`] and [`one`], and a
//! small algebra of combinators: sequencing ([`seq`], `&`), ordered choice
//! ([`alt`], `|`), optionality ([`optional`], `!`), repetition ([`many`],
//! [`many1`]) and transformation ([`map`], [`try_map`], [`map_group`], [`apply`]).
//!
//! - **No partial failures**: a parser either matches, producing a value and a
//!   new cursor, or it does not match at all
//! - **Flat values**: sequencing concatenates value groups, so however a
//!   sequence is nested, it yields one flat tuple
//! - **Pure**: parsers and cursors are immutable values; a parser can be reused
//!   and shared freely
//! - **Generic**: any `Copy + Eq` position type implementing [`Cursor`] can
//!   drive a grammar; [`TokenCursor`] covers in-memory slices
//!
//! ```
//! use tokcomb::cursors::TokenCursor;
//! use tokcomb::{Parser, one, seq};
//!
//! let tokens = ['a', 'b', 'c'];
//! let cursor = TokenCursor::new(&tokens);
//! let ((a, b, c), end) = seq!(one(), one(), one()).parse(cursor).unwrap();
//! assert_eq!((a, b, c), ('a', 'b', 'c'));
//! assert!(tokcomb::Cursor::eos(&end));
//! ```

pub mod alt;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod filter;
pub mod fold;
pub mod from_fn;
pub mod group;
pub mod lazy;
pub mod many;
pub mod map;
pub mod named;
pub mod one;
pub mod optional;
pub mod parser;
pub mod select;
pub mod seq;
pub mod succeed;
pub mod syntax;
pub mod transform;

pub use alt::{Alt, AltExt, alt};
pub use cursor::Cursor;
pub use cursors::{ByteCursor, TokenCursor};
pub use error::CursorError;
pub use filter::{Filter, filter, is};
pub use fold::{FoldLeft, FoldRight, fold_left, fold_right};
pub use from_fn::{FromFn, from_fn};
pub use group::{Concat, Group};
pub use lazy::{Lazy, lazy};
pub use many::{Many, Many1, ManyExt, many, many_into, many1, many1_into};
pub use map::{Map, MapExt, apply, map, map_group, try_map, try_map_group};
pub use named::{Named, NamedExt, named};
pub use one::{ConsumeOne, one};
pub use optional::{Optional, OptionalExt, optional};
pub use parser::{BoxedExt, BoxedParser, Match, Parser};
pub use select::{Index, Select};
pub use seq::{Seq, SeqExt, seq};
pub use succeed::{Succeed, succeed};
pub use syntax::{Rule, rule};
pub use transform::{Fallible, Partial, PartialGroup, Total, TotalGroup, Transform};
