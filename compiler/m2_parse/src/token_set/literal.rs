//! Textual literal form of a token set.
//!
//! The table generator emits sets as fixed-width hexadecimal segment words
//! followed by a decimal element counter:
//!
//! ```text
//! 0x10801048, 0x00000050, 0x00000000, 7
//! ```
//!
//! `Display` renders exactly this shape and `FromStr` reads it back, so a
//! set survives a save/reload round trip unchanged.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::{TokenSet, LITERAL_LEN, SEGMENT_COUNT};
use crate::error::TokenSetError;

impl TokenSet {
    /// Render in the literal table format.
    pub fn to_literal(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments() {
            write!(f, "{segment:#010x}, ")?;
        }
        write!(f, "{}", self.count())
    }
}

impl FromStr for TokenSet {
    type Err = TokenSetError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = text
            .trim()
            .trim_end_matches(',')
            .split(',')
            .map(str::trim)
            .collect();

        if words.len() != LITERAL_LEN {
            debug!(words = words.len(), literal = text, "rejected token set literal");
            return Err(TokenSetError::SegmentCount {
                expected: SEGMENT_COUNT,
                found: words.len().saturating_sub(1),
            });
        }

        let mut raw = [0u32; LITERAL_LEN];
        for (position, word) in words.iter().enumerate() {
            let parsed = if position < SEGMENT_COUNT {
                parse_segment(word)
            } else {
                word.parse::<u32>().ok()
            };
            raw[position] = parsed.ok_or(TokenSetError::MalformedWord { position })?;
        }

        TokenSet::from_raw(&raw).inspect_err(|error| {
            debug!(%error, literal = text, "rejected token set literal");
        })
    }
}

fn parse_segment(word: &str) -> Option<u32> {
    let digits = word
        .strip_prefix("0x")
        .or_else(|| word.strip_prefix("0X"))?;
    u32::from_str_radix(digits, 16).ok()
}
