//! The `show` and `productions` commands.

use std::fmt::Write;

use m2_ir::{OptionDependency, Production, Token};
use m2_parse::{first, first_row, follow, follow_row, DialectFlags, TokenSet};

/// FIRST and FOLLOW of `production` under `flags`.
pub fn show_production(production: Production, flags: DialectFlags) -> String {
    let mut out = String::new();
    let dialect = flags.enabled_names();
    let _ = writeln!(
        out,
        "{production} ({}; dialect: {})",
        dependency_name(production.dependency()),
        if dialect.is_empty() { "none".to_owned() } else { dialect.join(", ") }
    );
    push_set(&mut out, "FIRST", first_row(production, &flags), first(production, &flags));
    push_set(&mut out, "FOLLOW", follow_row(production, &flags), follow(production, &flags));
    out
}

fn push_set(out: &mut String, table: &str, row: usize, set: &TokenSet) {
    let elements: Vec<&str> = set.iter().map(Token::name).collect();
    let _ = writeln!(
        out,
        "  {table:<6} row {row:>2}: {{{}}} ({} elements)",
        elements.join(", "),
        set.count()
    );
}

/// One line per production: ordinal, name, and option dependency.
pub fn list_productions() -> String {
    let mut out = String::new();
    for production in Production::ALL {
        let _ = writeln!(
            out,
            "{:>2}  {:<24} {}",
            production.ordinal(),
            production.name(),
            dependency_name(production.dependency())
        );
    }
    out
}

fn dependency_name(dependency: OptionDependency) -> &'static str {
    match dependency {
        OptionDependency::Independent => "independent",
        OptionDependency::ConstParameters => "const-parameters",
        OptionDependency::VariantRecords => "variant-records",
    }
}
