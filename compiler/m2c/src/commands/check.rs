//! The `check` command: validate a token set literal.

use m2_parse::TokenSet;

use super::CommandError;

/// Parse `text` as a token set literal and list its elements.
///
/// Accepts the bare word list or a whole `token_set![...]` row as printed by
/// `dump`.
pub fn check_literal(text: &str) -> Result<String, CommandError> {
    let words = text.trim().trim_end_matches(',');
    let words = words
        .strip_prefix("token_set![")
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(words);
    let set: TokenSet = words.parse()?;
    Ok(format!("{} elements: {}\n", set.count(), set.format_expected()))
}
