pub mod token;

pub use token::{ByteCursor, TokenCursor};
