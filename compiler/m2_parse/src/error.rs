//! Token set construction errors.
//!
//! Every variant describes literal or list data that would produce an
//! inconsistent set. Construction refuses such input instead of repairing it.

use thiserror::Error;

/// Why a `TokenSet` could not be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TokenSetError {
    /// The literal does not hold exactly one word per segment plus a counter.
    #[error("token set literal has {found} segment words, expected {expected}")]
    SegmentCount { expected: usize, found: usize },

    /// The declared counter is larger than the number of bits available.
    #[error("declared element count {declared} exceeds capacity {capacity}")]
    CounterOverflow { declared: u32, capacity: usize },

    /// The declared counter disagrees with the number of bits actually set.
    #[error("declared element count {declared} does not match the {actual} bits set")]
    CountMismatch { declared: u32, actual: u32 },

    /// A segment sets the `Unknown` bit or bits past `EndOfFile`.
    #[error("segment {segment} sets bits {bits:#010x} outside the token alphabet")]
    StrayBits { segment: usize, bits: u32 },

    /// A token ordinal is not a valid set element.
    #[error("token ordinal {ordinal} is outside 1..={max}")]
    OrdinalOutOfRange { ordinal: u32, max: u8 },

    /// A union was requested over no sets at all.
    #[error("union of an empty list of token sets")]
    EmptyUnion,

    /// A word of a textual literal is not a hexadecimal segment or decimal counter.
    #[error("word {position} of token set literal is malformed")]
    MalformedWord { position: usize },
}
