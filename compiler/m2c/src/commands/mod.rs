//! Command handlers for the `m2c` CLI.
//!
//! Each submodule implements one command and returns its output as a
//! `String`; printing and exit codes are left to the binary.

use m2_ir::Production;
use m2_parse::{DialectFlags, TokenSetError};
use tracing::debug;

mod check;
mod dump;
mod show;

pub use check::check_literal;
pub use dump::{dump_table, DumpTarget};
pub use show::{list_productions, show_production};

/// Errors reported by driver commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("invalid token set literal: {0}")]
    Literal(#[from] TokenSetError),

    #[error("unknown production `{0}` (run `m2c productions` for the list)")]
    UnknownProduction(String),

    #[error("unknown table `{0}`; expected `first`, `follow`, or `resync`")]
    UnknownTable(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Resolve a production by its rule name (`statementSequence`).
pub fn parse_production(name: &str) -> Result<Production, CommandError> {
    Production::from_name(name).ok_or_else(|| CommandError::UnknownProduction(name.to_owned()))
}

/// Apply dialect flags from the command line on top of `DialectFlags::PIM`.
///
/// Later flags override earlier ones.
pub fn parse_dialect_flags<S: AsRef<str>>(args: &[S]) -> Result<DialectFlags, CommandError> {
    let mut flags = DialectFlags::PIM;
    for arg in args {
        match arg.as_ref() {
            "--variant-records" => flags.insert(DialectFlags::VARIANT_RECORDS),
            "--no-variant-records" => flags.remove(DialectFlags::VARIANT_RECORDS),
            "--const-parameters" => flags.insert(DialectFlags::CONST_PARAMETERS),
            "--no-const-parameters" => flags.remove(DialectFlags::CONST_PARAMETERS),
            other => return Err(CommandError::UnknownOption(other.to_owned())),
        }
    }
    debug!(dialect = ?flags.enabled_names(), "dialect flags");
    Ok(flags)
}
