//! Terminal alphabet for the Modula-2 lexer.
//!
//! `Token` values index the bits of a `TokenSet`, so ordinals are part of
//! the generated table format and must stay stable.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Terminal symbol category produced by the lexer.
///
/// Ordinals are laid out in contiguous categories:
///
/// | Range | Category              |
/// |-------|-----------------------|
/// | 0     | Unknown (sentinel)    |
/// | 1-40  | Reserved words        |
/// | 41    | Identifier            |
/// | 42-45 | Literals              |
/// | 46-49 | Malformed literals    |
/// | 50    | Pragma                |
/// | 51-76 | Special symbols       |
/// | 77    | End of file           |
///
/// # Invariant
///
/// `Unknown` is the minimum and never a member of any token set.
/// `EndOfFile` is the maximum valid ordinal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Token {
    Unknown = 0,

    // === Reserved words (1-40) ===
    And = 1,
    Array = 2,
    Begin = 3,
    By = 4,
    Case = 5,
    Const = 6,
    Definition = 7,
    Div = 8,
    Do = 9,
    Else = 10,
    Elsif = 11,
    End = 12,
    Exit = 13,
    Export = 14,
    For = 15,
    From = 16,
    If = 17,
    Implementation = 18,
    Import = 19,
    In = 20,
    Loop = 21,
    Mod = 22,
    Module = 23,
    Not = 24,
    Of = 25,
    Or = 26,
    Pointer = 27,
    Procedure = 28,
    Qualified = 29,
    Record = 30,
    Repeat = 31,
    Return = 32,
    Set = 33,
    Then = 34,
    To = 35,
    Type = 36,
    Until = 37,
    Var = 38,
    While = 39,
    With = 40,

    // === Identifiers (41) ===
    Identifier = 41,

    // === Literals (42-45) ===
    String = 42,
    Integer = 43,
    Real = 44,
    Char = 45,

    // === Malformed literals (46-49) ===
    MalformedString = 46,
    MalformedInteger = 47,
    MalformedReal = 48,
    MalformedChar = 49,

    // === Pragma (50) ===
    Pragma = 50,

    // === Special symbols (51-76) ===
    Equal = 51,        // =
    NotEqual = 52,     // #
    Less = 53,         // <
    LessEqual = 54,    // <=
    Greater = 55,      // >
    GreaterEqual = 56, // >=
    Plus = 57,         // +
    Minus = 58,        // -
    Asterisk = 59,     // *
    Solidus = 60,      // /
    Ampersand = 61,    // &
    Tilde = 62,        // ~
    Assign = 63,       // :=
    Comma = 64,        // ,
    Period = 65,       // .
    Colon = 66,        // :
    Semicolon = 67,    // ;
    Range = 68,        // ..
    Deref = 69,        // ^
    Bar = 70,          // |
    LeftParen = 71,    // (
    RightParen = 72,   // )
    LeftBracket = 73,  // [
    RightBracket = 74, // ]
    LeftBrace = 75,    // {
    RightBrace = 76,   // }

    // === End of file (77) ===
    EndOfFile = 77,
}

impl Token {
    /// Number of tokens in the alphabet, including the `Unknown` sentinel.
    pub const COUNT: usize = Self::EndOfFile as usize + 1;

    /// Every token in ordinal order. `ALL[t as usize] == t` for all `t`.
    pub const ALL: [Token; Self::COUNT] = [
        Self::Unknown,
        Self::And,
        Self::Array,
        Self::Begin,
        Self::By,
        Self::Case,
        Self::Const,
        Self::Definition,
        Self::Div,
        Self::Do,
        Self::Else,
        Self::Elsif,
        Self::End,
        Self::Exit,
        Self::Export,
        Self::For,
        Self::From,
        Self::If,
        Self::Implementation,
        Self::Import,
        Self::In,
        Self::Loop,
        Self::Mod,
        Self::Module,
        Self::Not,
        Self::Of,
        Self::Or,
        Self::Pointer,
        Self::Procedure,
        Self::Qualified,
        Self::Record,
        Self::Repeat,
        Self::Return,
        Self::Set,
        Self::Then,
        Self::To,
        Self::Type,
        Self::Until,
        Self::Var,
        Self::While,
        Self::With,
        Self::Identifier,
        Self::String,
        Self::Integer,
        Self::Real,
        Self::Char,
        Self::MalformedString,
        Self::MalformedInteger,
        Self::MalformedReal,
        Self::MalformedChar,
        Self::Pragma,
        Self::Equal,
        Self::NotEqual,
        Self::Less,
        Self::LessEqual,
        Self::Greater,
        Self::GreaterEqual,
        Self::Plus,
        Self::Minus,
        Self::Asterisk,
        Self::Solidus,
        Self::Ampersand,
        Self::Tilde,
        Self::Assign,
        Self::Comma,
        Self::Period,
        Self::Colon,
        Self::Semicolon,
        Self::Range,
        Self::Deref,
        Self::Bar,
        Self::LeftParen,
        Self::RightParen,
        Self::LeftBracket,
        Self::RightBracket,
        Self::LeftBrace,
        Self::RightBrace,
        Self::EndOfFile,
    ];

    /// Smallest ordinal that may appear in a token set.
    pub const MIN_ELEMENT: u8 = Self::And as u8;

    /// Largest valid ordinal.
    pub const MAX_ORDINAL: u8 = Self::EndOfFile as u8;

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a token by ordinal. Returns `None` past `EndOfFile`.
    #[inline]
    pub const fn from_ordinal(ordinal: u8) -> Option<Token> {
        if ordinal as usize >= Self::COUNT {
            return None;
        }
        Some(Self::ALL[ordinal as usize])
    }

    /// Whether this token is a reserved word.
    #[inline]
    pub const fn is_reserved_word(self) -> bool {
        matches!(self as u8, 1..=40)
    }

    /// Whether this token is a well-formed literal.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(self as u8, 42..=45)
    }

    /// Whether this token is a literal the lexer could not scan completely.
    #[inline]
    pub const fn is_malformed_literal(self) -> bool {
        matches!(self as u8, 46..=49)
    }

    /// Whether this token is punctuation or an operator symbol.
    #[inline]
    pub const fn is_special_symbol(self) -> bool {
        matches!(self as u8, 51..=76)
    }

    /// Source spelling of this token, for reserved words and special symbols.
    ///
    /// Tokens whose spelling varies (identifiers, literals, pragmas) and the
    /// sentinels have no lexeme.
    pub const fn lexeme(self) -> Option<&'static str> {
        let lexeme = match self {
            Self::And => "AND",
            Self::Array => "ARRAY",
            Self::Begin => "BEGIN",
            Self::By => "BY",
            Self::Case => "CASE",
            Self::Const => "CONST",
            Self::Definition => "DEFINITION",
            Self::Div => "DIV",
            Self::Do => "DO",
            Self::Else => "ELSE",
            Self::Elsif => "ELSIF",
            Self::End => "END",
            Self::Exit => "EXIT",
            Self::Export => "EXPORT",
            Self::For => "FOR",
            Self::From => "FROM",
            Self::If => "IF",
            Self::Implementation => "IMPLEMENTATION",
            Self::Import => "IMPORT",
            Self::In => "IN",
            Self::Loop => "LOOP",
            Self::Mod => "MOD",
            Self::Module => "MODULE",
            Self::Not => "NOT",
            Self::Of => "OF",
            Self::Or => "OR",
            Self::Pointer => "POINTER",
            Self::Procedure => "PROCEDURE",
            Self::Qualified => "QUALIFIED",
            Self::Record => "RECORD",
            Self::Repeat => "REPEAT",
            Self::Return => "RETURN",
            Self::Set => "SET",
            Self::Then => "THEN",
            Self::To => "TO",
            Self::Type => "TYPE",
            Self::Until => "UNTIL",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::With => "WITH",
            Self::Equal => "=",
            Self::NotEqual => "#",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Solidus => "/",
            Self::Ampersand => "&",
            Self::Tilde => "~",
            Self::Assign => ":=",
            Self::Comma => ",",
            Self::Period => ".",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Range => "..",
            Self::Deref => "^",
            Self::Bar => "|",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Unknown
            | Self::Identifier
            | Self::String
            | Self::Integer
            | Self::Real
            | Self::Char
            | Self::MalformedString
            | Self::MalformedInteger
            | Self::MalformedReal
            | Self::MalformedChar
            | Self::Pragma
            | Self::EndOfFile => return None,
        };
        Some(lexeme)
    }

    /// Human-readable name for diagnostics.
    ///
    /// Reserved words and symbols are named by their spelling; the remaining
    /// categories get a descriptive phrase.
    pub const fn name(self) -> &'static str {
        if let Some(lexeme) = self.lexeme() {
            return lexeme;
        }
        match self {
            Self::Identifier => "identifier",
            Self::String => "string literal",
            Self::Integer => "integer literal",
            Self::Real => "real literal",
            Self::Char => "character literal",
            Self::MalformedString => "malformed string",
            Self::MalformedInteger => "malformed integer",
            Self::MalformedReal => "malformed real",
            Self::MalformedChar => "malformed character",
            Self::Pragma => "pragma",
            Self::EndOfFile => "end of file",
            _ => "unknown",
        }
    }

    /// Reverse lexeme lookup, e.g. `"BEGIN"` → `Token::Begin`, `":="` → `Token::Assign`.
    ///
    /// Reserved words are matched case-sensitively, as Modula-2 requires.
    pub fn from_lexeme(lexeme: &str) -> Option<Token> {
        lexeme_map().get(lexeme).copied()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Global lexeme index, built on first lookup
static LEXEME_MAP: OnceLock<FxHashMap<&'static str, Token>> = OnceLock::new();

fn lexeme_map() -> &'static FxHashMap<&'static str, Token> {
    LEXEME_MAP.get_or_init(|| {
        Token::ALL
            .iter()
            .filter_map(|&token| token.lexeme().map(|lexeme| (lexeme, token)))
            .collect()
    })
}

#[cfg(test)]
mod tests;
