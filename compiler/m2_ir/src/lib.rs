//! M2 IR - Alphabets of the Modula-2 front end
//!
//! This crate contains the closed enumerations the predictive parser is
//! keyed on:
//! - `Token`: the terminal alphabet produced by the lexer
//! - `Production`: the grammar rules the recursive-descent parser recognizes
//!
//! Both are `#[repr(u8)]` with fixed ordinals. Generated FIRST/FOLLOW tables
//! are addressed by these ordinals, so reordering variants invalidates every
//! table literal built against them.

mod production;
mod token;

pub use production::{OptionDependency, Production};
pub use token::Token;
