//! The `dump` command: print a table in the literal table format.
//!
//! Output can be pasted into a table source file as is: each row is a
//! `token_set![...]` invocation preceded by a `// name` label.

use std::fmt::Write;
use std::str::FromStr;

use m2_ir::Production;
use m2_parse::{resync_rows, ResyncPoint, Table, TokenSet};

use super::CommandError;

/// Which table `dump` prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DumpTarget {
    Grammar(Table),
    Resync,
}

impl FromStr for DumpTarget {
    type Err = CommandError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "first" => Ok(Self::Grammar(Table::First)),
            "follow" => Ok(Self::Grammar(Table::Follow)),
            "resync" => Ok(Self::Resync),
            other => Err(CommandError::UnknownTable(other.to_owned())),
        }
    }
}

/// Render every row of `target`.
pub fn dump_table(target: DumpTarget) -> String {
    let mut out = String::new();
    match target {
        DumpTarget::Grammar(table) => {
            let rows = table.rows();
            out.push_str("// --- canonical rows ---\n");
            for (production, row) in Production::ALL.iter().zip(rows) {
                push_row(&mut out, production.name(), row);
            }
            out.push_str("// --- alternate rows ---\n");
            let dependent = Production::ALL
                .iter()
                .filter(|production| production.is_option_dependent());
            for (production, row) in dependent.zip(&rows[Production::COUNT..]) {
                push_row(&mut out, production.name(), row);
            }
        }
        DumpTarget::Resync => {
            for (point, row) in ResyncPoint::ALL.iter().zip(resync_rows()) {
                push_row(&mut out, point.name(), row);
            }
        }
    }
    out
}

fn push_row(out: &mut String, label: &str, row: &TokenSet) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "// {label}\ntoken_set![{row}],");
}
