//! Predictive-parsing support for the Modula-2 front end.
//!
//! Provides the pieces a recursive-descent parser consults to decide which
//! production to enter and how to recover from syntax errors:
//! - `TokenSet`: fixed-size bit-vector sets over the token alphabet
//! - `grammar`: precomputed FIRST/FOLLOW tables, with alternate rows
//!   selected by the dialect options
//! - `recovery`: resynchronization sets and `synchronize`
//!
//! All tables are immutable statics built at compile time and safe to share
//! across threads.

mod cursor;
mod dialect;
mod error;
mod grammar;
mod recovery;
mod token_set;

pub use cursor::Cursor;
pub use dialect::{DialectFlags, DialectOptions};
pub use error::TokenSetError;
pub use grammar::{
    count, first, first_row, follow, follow_row, name_for_production, row_index, uses_alternate,
    GrammarTable, Table, TABLE_LEN,
};
pub use recovery::{resync, synchronize, ResyncPoint};
pub use token_set::{TokenSet, TokenSetIter, CAPACITY, LITERAL_LEN, SEGMENT_BITS, SEGMENT_COUNT};

pub use recovery::rows as resync_rows;
