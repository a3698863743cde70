//! Error recovery for the parser.
//!
//! Provides resynchronization (skip) sets and synchronization for continuing
//! parsing after a syntax error. Resync sets are stored like the grammar
//! tables: a flat array of precomputed literals, indexed by recovery point.

use tracing::debug;

use crate::cursor::Cursor;
use crate::{token_set, TokenSet};

/// A point in the grammar where the parser recovers from a syntax error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResyncPoint {
    /// Module header: skip to the next import, definition, or `END`.
    ImportOrDefinitionOrEnd = 0,
    /// Definition module body: skip to the next definition or `END`.
    DefinitionOrEnd = 1,
    /// Program module header: skip to the next import or the block.
    ImportOrBlock = 2,
    /// Block: skip to the next declaration, `BEGIN`, or `END`.
    DeclarationOrBody = 3,
    /// Inside a definition list: skip to the next name or separator.
    IdentOrSemicolon = 4,
    /// Statement sequence: skip to the next statement or its terminator.
    StatementOrTerminator = 5,
    /// `IF` statement branches.
    ElsifOrElseOrEnd = 6,
    /// `CASE` statement branches.
    CaseOrElseOrEnd = 7,
    /// Argument and formal type lists.
    CommaOrRightParen = 8,
    /// Formal parameter sections.
    SemicolonOrRightParen = 9,
    /// Record field lists.
    FieldListOrEnd = 10,
}

impl ResyncPoint {
    pub const COUNT: usize = Self::FieldListOrEnd as usize + 1;

    pub const ALL: [ResyncPoint; Self::COUNT] = [
        Self::ImportOrDefinitionOrEnd,
        Self::DefinitionOrEnd,
        Self::ImportOrBlock,
        Self::DeclarationOrBody,
        Self::IdentOrSemicolon,
        Self::StatementOrTerminator,
        Self::ElsifOrElseOrEnd,
        Self::CaseOrElseOrEnd,
        Self::CommaOrRightParen,
        Self::SemicolonOrRightParen,
        Self::FieldListOrEnd,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::ImportOrDefinitionOrEnd => "importOrDefinitionOrEnd",
            Self::DefinitionOrEnd => "definitionOrEnd",
            Self::ImportOrBlock => "importOrBlock",
            Self::DeclarationOrBody => "declarationOrBody",
            Self::IdentOrSemicolon => "identOrSemicolon",
            Self::StatementOrTerminator => "statementOrTerminator",
            Self::ElsifOrElseOrEnd => "elsifOrElseOrEnd",
            Self::CaseOrElseOrEnd => "caseOrElseOrEnd",
            Self::CommaOrRightParen => "commaOrRightParen",
            Self::SemicolonOrRightParen => "semicolonOrRightParen",
            Self::FieldListOrEnd => "fieldListOrEnd",
        }
    }
}

static RESYNC: [TokenSet; ResyncPoint::COUNT] = [
    // importOrDefinitionOrEnd
    token_set![0x10091040, 0x00000050, 0x00000000, 7],
    // definitionOrEnd
    token_set![0x10001040, 0x00000050, 0x00000000, 5],
    // importOrBlock
    token_set![0x10891048, 0x00000050, 0x00000000, 9],
    // declarationOrBody
    token_set![0x10801048, 0x00000050, 0x00000000, 7],
    // identOrSemicolon
    token_set![0x00000000, 0x00000200, 0x00000008, 2],
    // statementOrTerminator
    token_set![0x8022bc20, 0x000003a1, 0x00000048, 16],
    // elsifOrElseOrEnd
    token_set![0x00001c00, 0x00000000, 0x00000000, 3],
    // caseOrElseOrEnd
    token_set![0x00001400, 0x00000000, 0x00000040, 3],
    // commaOrRightParen
    token_set![0x00000000, 0x00000000, 0x00000101, 2],
    // semicolonOrRightParen
    token_set![0x00000000, 0x00000000, 0x00000108, 2],
    // fieldListOrEnd
    token_set![0x00001020, 0x00000200, 0x00000008, 4],
];

/// The resync set for `point`.
#[inline]
pub fn resync(point: ResyncPoint) -> &'static TokenSet {
    &RESYNC[point as usize]
}

/// All resync rows, in `ResyncPoint` order.
pub fn rows() -> &'static [TokenSet; ResyncPoint::COUNT] {
    &RESYNC
}

/// Advance the cursor until reaching a token in the recovery set or EOF.
///
/// Returns `true` if a recovery token was found, `false` if EOF was reached.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: &TokenSet) -> bool {
    let start = cursor.position();
    while !cursor.is_at_end() {
        if recovery.is_element(cursor.current()) {
            debug!(
                skipped = cursor.position() - start,
                at = cursor.current().name(),
                "resynchronized"
            );
            return true;
        }
        cursor.advance();
    }
    debug!(skipped = cursor.position() - start, "resync reached end of file");
    false
}

#[cfg(test)]
mod tests;
