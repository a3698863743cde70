//! Lookahead cursor over a lexed token stream.
//!
//! The lexer terminates every stream with `EndOfFile`; the cursor also
//! reports `EndOfFile` once it runs past the slice, so it can never advance
//! beyond the end.

use m2_ir::Token;
use tracing::trace;

use crate::TokenSet;

/// Cursor for navigating tokens.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current token index.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The lookahead token.
    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(Token::EndOfFile)
    }

    /// Check if at end of input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current() == Token::EndOfFile
    }

    /// Check if the lookahead token is in `set`.
    #[inline]
    pub fn at(&self, set: &TokenSet) -> bool {
        set.is_element(self.current())
    }

    /// Consume the lookahead token and return it. Stays put at end of input.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if token != Token::EndOfFile {
            trace!(pos = self.pos, token = token.name(), "advance");
            self.pos += 1;
        }
        token
    }
}
