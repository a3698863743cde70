//! FIRST/FOLLOW grammar tables with option-dependent selection.
//!
//! Each table holds one canonical row per `Production`, followed by one
//! alternate row per option-dependent production at
//! `Production::ALTERNATE_OFFSET` past its canonical row.
//!
//! # Selection
//!
//! | Dependency        | FIRST uses alternate        | FOLLOW uses alternate        |
//! |-------------------|-----------------------------|------------------------------|
//! | independent       | never                       | never                        |
//! | const parameters  | always                      | always                       |
//! | variant records   | when variant records are on | when variant records are off |
//!
//! The variant-record polarity differs between the tables: canonical FIRST
//! rows describe extensible records, canonical FOLLOW rows variant records.

mod first;
mod follow;

use m2_ir::{OptionDependency, Production};
use tracing::trace;

use crate::dialect::DialectOptions;
use crate::recovery::{resync, ResyncPoint};
use crate::TokenSet;

use first::FIRST;
use follow::FOLLOW;

/// Rows per table: canonical rows plus alternate rows.
pub const TABLE_LEN: usize = Production::COUNT + Production::ALTERNATE_OFFSET;

/// Which of the two grammar tables a lookup addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    First,
    Follow,
}

impl Table {
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "FIRST",
            Self::Follow => "FOLLOW",
        }
    }

    /// All rows of this table, canonical rows first.
    pub fn rows(self) -> &'static [TokenSet; TABLE_LEN] {
        match self {
            Self::First => &FIRST,
            Self::Follow => &FOLLOW,
        }
    }
}

/// Whether `production` resolves to its alternate row in `table`.
pub const fn uses_alternate(table: Table, production: Production, variant_records: bool) -> bool {
    match production.dependency() {
        OptionDependency::Independent => false,
        OptionDependency::ConstParameters => true,
        OptionDependency::VariantRecords => match table {
            Table::First => variant_records,
            Table::Follow => !variant_records,
        },
    }
}

/// Row index `production` resolves to in `table` under `options`.
pub fn row_index<O>(table: Table, production: Production, options: &O) -> usize
where
    O: DialectOptions + ?Sized,
{
    let canonical = production as usize;
    if uses_alternate(table, production, options.variant_records()) {
        canonical + Production::ALTERNATE_OFFSET
    } else {
        canonical
    }
}

/// Row index of FIRST(`production`).
#[inline]
pub fn first_row<O: DialectOptions + ?Sized>(production: Production, options: &O) -> usize {
    row_index(Table::First, production, options)
}

/// Row index of FOLLOW(`production`).
#[inline]
pub fn follow_row<O: DialectOptions + ?Sized>(production: Production, options: &O) -> usize {
    row_index(Table::Follow, production, options)
}

fn lookup<O>(table: Table, production: Production, options: &O) -> &'static TokenSet
where
    O: DialectOptions + ?Sized,
{
    let row = row_index(table, production, options);
    trace!(
        table = table.name(),
        production = production.name(),
        row,
        alternate = row != production as usize,
        "grammar lookup"
    );
    // Panics only if the alphabet and the tables disagree.
    &table.rows()[row]
}

/// The set of tokens that can begin `production`.
pub fn first<O: DialectOptions + ?Sized>(production: Production, options: &O) -> &'static TokenSet {
    lookup(Table::First, production, options)
}

/// The set of tokens that can immediately follow `production`.
pub fn follow<O: DialectOptions + ?Sized>(production: Production, options: &O) -> &'static TokenSet {
    lookup(Table::Follow, production, options)
}

/// Number of productions the tables cover.
#[inline]
pub const fn count() -> usize {
    Production::COUNT
}

/// Stable diagnostic name of `production`.
#[inline]
pub const fn name_for_production(production: Production) -> &'static str {
    production.name()
}

/// Grammar tables bound to one parsing session's dialect.
///
/// Each session owns its view, so sessions with different dialects can run
/// side by side.
#[derive(Clone, Debug)]
pub struct GrammarTable<O> {
    options: O,
}

impl<O: DialectOptions> GrammarTable<O> {
    pub fn new(options: O) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &O {
        &self.options
    }

    #[inline]
    pub fn first(&self, production: Production) -> &'static TokenSet {
        first(production, &self.options)
    }

    #[inline]
    pub fn follow(&self, production: Production) -> &'static TokenSet {
        follow(production, &self.options)
    }

    /// Resynchronization set for error recovery. Independent of the dialect.
    #[inline]
    pub fn resync(&self, point: ResyncPoint) -> &'static TokenSet {
        resync(point)
    }

    #[inline]
    pub const fn count(&self) -> usize {
        count()
    }
}
