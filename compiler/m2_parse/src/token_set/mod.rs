//! Dense bit-vector sets over the token alphabet.
//!
//! A `TokenSet` stores one bit per `Token` ordinal in `SEGMENT_COUNT` 32-bit
//! segments, plus a redundant element counter. Bit `n` of segment `k` is the
//! token with ordinal `32 * k + n`.
//!
//! # Invariants
//! - The counter equals the number of bits set across all segments.
//! - The `Unknown` bit and bits past `EndOfFile` are never set.
//!
//! Sets are immutable once built. Every operation is O(`SEGMENT_COUNT`),
//! independent of how many elements a set holds.

mod literal;

use m2_ir::Token;

use crate::error::TokenSetError;

/// Bits per segment.
pub const SEGMENT_BITS: usize = 32;

/// Segments needed to cover the token alphabet.
pub const SEGMENT_COUNT: usize = Token::COUNT.div_ceil(SEGMENT_BITS);

/// Total number of bits across all segments.
pub const CAPACITY: usize = SEGMENT_COUNT * SEGMENT_BITS;

/// Words in a raw literal: one per segment, then the element counter.
pub const LITERAL_LEN: usize = SEGMENT_COUNT + 1;

// Bits that may legally be set: `And` through `EndOfFile`.
const VALID_MASK: [u32; SEGMENT_COUNT] = valid_mask();

const fn valid_mask() -> [u32; SEGMENT_COUNT] {
    let mut mask = [0u32; SEGMENT_COUNT];
    let mut ordinal = Token::MIN_ELEMENT as usize;
    while ordinal <= Token::MAX_ORDINAL as usize {
        mask[ordinal / SEGMENT_BITS] |= 1 << (ordinal % SEGMENT_BITS);
        ordinal += 1;
    }
    mask
}

const fn popcount(segments: &[u32; SEGMENT_COUNT]) -> u32 {
    let mut count = 0;
    let mut index = 0;
    while index < SEGMENT_COUNT {
        count += segments[index].count_ones();
        index += 1;
    }
    count
}

/// Build a `TokenSet` from generated literal words.
///
/// Accepts the table generator's output verbatim: segment words followed by
/// the element counter. An inconsistent literal in a `static` or `const`
/// initializer fails the build.
///
/// ```
/// use m2_parse::token_set;
///
/// static BLOCK_START: m2_parse::TokenSet =
///     token_set![0x10801048, 0x00000050, 0x00000000, 7];
/// assert_eq!(BLOCK_START.count(), 7);
/// ```
#[macro_export]
macro_rules! token_set {
    ($($word:expr),+ $(,)?) => {
        $crate::TokenSet::literal(&[$($word),+])
    };
}

/// An immutable set of tokens, used for FIRST, FOLLOW and resync lookups.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenSet {
    segments: [u32; SEGMENT_COUNT],
    count: u32,
}

impl TokenSet {
    /// The empty set.
    pub const EMPTY: TokenSet = TokenSet {
        segments: [0; SEGMENT_COUNT],
        count: 0,
    };

    /// Construct from raw literal words: `SEGMENT_COUNT` segments, then the
    /// declared element count.
    ///
    /// Fails rather than correcting the counter when it disagrees with the
    /// bits actually set.
    pub const fn from_raw(raw: &[u32]) -> Result<TokenSet, TokenSetError> {
        if raw.len() != LITERAL_LEN {
            return Err(TokenSetError::SegmentCount {
                expected: SEGMENT_COUNT,
                found: raw.len().saturating_sub(1),
            });
        }

        let declared = raw[SEGMENT_COUNT];
        if declared as usize > CAPACITY {
            return Err(TokenSetError::CounterOverflow {
                declared,
                capacity: CAPACITY,
            });
        }

        let mut segments = [0u32; SEGMENT_COUNT];
        let mut index = 0;
        while index < SEGMENT_COUNT {
            segments[index] = raw[index];
            index += 1;
        }

        let actual = popcount(&segments);
        if actual != declared {
            return Err(TokenSetError::CountMismatch { declared, actual });
        }

        let mut segment = 0;
        while segment < SEGMENT_COUNT {
            let bits = segments[segment] & !VALID_MASK[segment];
            if bits != 0 {
                return Err(TokenSetError::StrayBits { segment, bits });
            }
            segment += 1;
        }

        Ok(TokenSet {
            segments,
            count: actual,
        })
    }

    /// Construct from a generated table literal.
    ///
    /// # Panics
    /// Panics if the literal is malformed. In const context this is a
    /// compile error, which is how static tables are checked.
    pub const fn literal(raw: &[u32]) -> TokenSet {
        match Self::from_raw(raw) {
            Ok(set) => set,
            Err(_) => panic!("malformed token set literal"),
        }
    }

    /// Construct from an explicit token list. `Token::Unknown` is skipped.
    pub const fn from_tokens(tokens: &[Token]) -> TokenSet {
        let mut segments = [0u32; SEGMENT_COUNT];
        let mut index = 0;
        while index < tokens.len() {
            let ordinal = tokens[index] as usize;
            if ordinal >= Token::MIN_ELEMENT as usize {
                segments[ordinal / SEGMENT_BITS] |= 1 << (ordinal % SEGMENT_BITS);
            }
            index += 1;
        }
        Self::from_segments(segments)
    }

    /// Construct from token ordinals, rejecting any outside `1..=EndOfFile`.
    pub fn from_ordinals(ordinals: &[u32]) -> Result<TokenSet, TokenSetError> {
        let mut segments = [0u32; SEGMENT_COUNT];
        for &ordinal in ordinals {
            if ordinal < u32::from(Token::MIN_ELEMENT) || ordinal > u32::from(Token::MAX_ORDINAL) {
                return Err(TokenSetError::OrdinalOutOfRange {
                    ordinal,
                    max: Token::MAX_ORDINAL,
                });
            }
            let ordinal = ordinal as usize;
            segments[ordinal / SEGMENT_BITS] |= 1 << (ordinal % SEGMENT_BITS);
        }
        Ok(Self::from_segments(segments))
    }

    const fn from_segments(segments: [u32; SEGMENT_COUNT]) -> TokenSet {
        TokenSet {
            count: popcount(&segments),
            segments,
        }
    }

    /// Union of two sets. The counter is recomputed, not summed.
    #[must_use]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        let mut segments = [0u32; SEGMENT_COUNT];
        let mut index = 0;
        while index < SEGMENT_COUNT {
            segments[index] = self.segments[index] | other.segments[index];
            index += 1;
        }
        Self::from_segments(segments)
    }

    /// Union of a non-empty list of sets.
    pub fn union_of<'a, I>(sets: I) -> Result<TokenSet, TokenSetError>
    where
        I: IntoIterator<Item = &'a TokenSet>,
    {
        let mut sets = sets.into_iter();
        let first = sets.next().ok_or(TokenSetError::EmptyUnion)?;
        Ok(sets.fold(*first, |acc, set| acc.union(*set)))
    }

    /// Number of tokens in the set.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.count
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check whether `token` is a member. `Token::Unknown` never is.
    #[inline]
    pub const fn is_element(&self, token: Token) -> bool {
        self.is_element_ordinal(token as u32)
    }

    /// Check membership by ordinal. Ordinals outside the alphabet are not
    /// members; this never fails.
    #[inline]
    pub const fn is_element_ordinal(&self, ordinal: u32) -> bool {
        if ordinal < Token::MIN_ELEMENT as u32 || ordinal > Token::MAX_ORDINAL as u32 {
            return false;
        }
        let ordinal = ordinal as usize;
        self.segments[ordinal / SEGMENT_BITS] & (1 << (ordinal % SEGMENT_BITS)) != 0
    }

    /// Check whether every token in `self` is also in `other`.
    pub const fn is_subset(&self, other: &TokenSet) -> bool {
        let mut index = 0;
        while index < SEGMENT_COUNT {
            let mine = self.segments[index];
            if (other.segments[index] & mine) ^ mine != 0 {
                return false;
            }
            index += 1;
        }
        true
    }

    /// Check whether every token in `other` is also in `self`.
    #[inline]
    pub const fn is_superset(&self, other: &TokenSet) -> bool {
        other.is_subset(self)
    }

    /// Check whether the two sets share no token.
    pub const fn is_disjoint(&self, other: &TokenSet) -> bool {
        let mut index = 0;
        while index < SEGMENT_COUNT {
            if self.segments[index] & other.segments[index] != 0 {
                return false;
            }
            index += 1;
        }
        true
    }

    /// The raw segments, segment 0 first.
    #[inline]
    pub const fn segments(&self) -> &[u32; SEGMENT_COUNT] {
        &self.segments
    }

    /// Iterate over members in ascending ordinal order.
    pub fn iter(&self) -> TokenSetIter {
        TokenSetIter {
            segments: self.segments,
            segment: 0,
        }
    }

    /// Members in ascending ordinal order.
    pub fn element_list(&self) -> Vec<Token> {
        self.iter().collect()
    }

    /// Format this set as a human-readable list for error messages.
    ///
    /// Returns a string like "`;`, `END`, or `ELSE`" for several tokens,
    /// "`)`" for one, or "nothing" for the empty set.
    pub fn format_expected(&self) -> String {
        let names: Vec<&'static str> = self.iter().map(Token::name).collect();

        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => format!("`{single}`"),
            [first, second] => format!("`{first}` or `{second}`"),
            [rest @ .., last] => {
                let rest_str = rest
                    .iter()
                    .map(|n| format!("`{n}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{rest_str}, or `{last}`")
            }
        }
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = Token;
    type IntoIter = TokenSetIter;

    fn into_iter(self) -> TokenSetIter {
        self.iter()
    }
}

/// Iterator over the members of a `TokenSet`, lowest ordinal first.
pub struct TokenSetIter {
    segments: [u32; SEGMENT_COUNT],
    segment: usize,
}

impl Iterator for TokenSetIter {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.segment < SEGMENT_COUNT {
            let bits = self.segments[self.segment];
            if bits == 0 {
                self.segment += 1;
                continue;
            }
            let bit = bits.trailing_zeros() as usize;
            self.segments[self.segment] &= bits - 1; // Clear the lowest set bit
            let ordinal = self.segment * SEGMENT_BITS + bit;
            // Stray bits are rejected at construction, so every ordinal maps.
            return u8::try_from(ordinal).ok().and_then(Token::from_ordinal);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = popcount(&self.segments) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TokenSetIter {}
