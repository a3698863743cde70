//! Dialect options consulted by the grammar tables.
//!
//! The front end fixes the dialect before parsing starts. Table lookups take
//! the options as an explicit argument (or through a `GrammarTable` view),
//! so sessions with different dialects never share mutable state.

use bitflags::bitflags;

/// Dialect queries the FIRST/FOLLOW selection policy depends on.
pub trait DialectOptions {
    /// Whether formal parameters may carry the `CONST` attribute.
    ///
    /// The tables accept `CONST` regardless; semantic analysis consults this.
    fn const_parameters(&self) -> bool;

    /// Whether `RECORD` types may have variant parts (`CASE` field lists).
    ///
    /// When disabled, records are extensible instead: `RECORD (Base) ... END`.
    fn variant_records(&self) -> bool;
}

impl<T: DialectOptions + ?Sized> DialectOptions for &T {
    #[inline]
    fn const_parameters(&self) -> bool {
        (**self).const_parameters()
    }

    #[inline]
    fn variant_records(&self) -> bool {
        (**self).variant_records()
    }
}

bitflags! {
    /// Language variant switches set by the command-line front end.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct DialectFlags: u8 {
        /// Formal parameters may be declared `CONST`.
        ///
        /// The grammar tables always accept the `CONST` attribute; this flag
        /// is carried for semantic analysis, which rejects it when unset.
        const CONST_PARAMETERS = 1 << 0;
        /// Records may have variant parts instead of being extensible.
        const VARIANT_RECORDS = 1 << 1;
    }
}

impl DialectFlags {
    /// Classic PIM Modula-2: variant records, no `CONST` parameters.
    pub const PIM: DialectFlags = DialectFlags::VARIANT_RECORDS;

    /// Names of the enabled options, in flag order, for diagnostics.
    pub fn enabled_names(self) -> Vec<&'static str> {
        self.iter_names()
            .map(|(name, _)| match name {
                "CONST_PARAMETERS" => "const-parameters",
                "VARIANT_RECORDS" => "variant-records",
                other => other,
            })
            .collect()
    }
}

impl Default for DialectFlags {
    fn default() -> Self {
        Self::PIM
    }
}

impl DialectOptions for DialectFlags {
    #[inline]
    fn const_parameters(&self) -> bool {
        self.contains(DialectFlags::CONST_PARAMETERS)
    }

    #[inline]
    fn variant_records(&self) -> bool {
        self.contains(DialectFlags::VARIANT_RECORDS)
    }
}
