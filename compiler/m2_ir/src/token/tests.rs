use super::*;
use pretty_assertions::assert_eq;

#[test]
fn all_is_in_ordinal_order() {
    for (index, token) in Token::ALL.iter().enumerate() {
        assert_eq!(usize::from(token.ordinal()), index, "{token:?} out of place");
    }
}

#[test]
fn ordinal_ranges() {
    assert_eq!(Token::Unknown as u8, 0);
    assert_eq!(Token::And as u8, 1);
    assert_eq!(Token::With as u8, 40);
    assert_eq!(Token::Identifier as u8, 41);
    assert_eq!(Token::Char as u8, 45);
    assert_eq!(Token::MalformedChar as u8, 49);
    assert_eq!(Token::Pragma as u8, 50);
    assert_eq!(Token::Equal as u8, 51);
    assert_eq!(Token::RightBrace as u8, 76);
    assert_eq!(Token::EndOfFile as u8, 77);
    assert_eq!(Token::COUNT, 78);
    assert_eq!(Token::MAX_ORDINAL, 77);
}

#[test]
fn from_ordinal_round_trip() {
    for token in Token::ALL {
        assert_eq!(Token::from_ordinal(token.ordinal()), Some(token));
    }
    assert_eq!(Token::from_ordinal(78), None);
    assert_eq!(Token::from_ordinal(u8::MAX), None);
}

#[test]
fn categories_partition_the_alphabet() {
    for token in Token::ALL {
        let categories = [
            token.is_reserved_word(),
            token.is_literal(),
            token.is_malformed_literal(),
            token.is_special_symbol(),
        ];
        let hits = categories.iter().filter(|&&hit| hit).count();
        let uncategorized = matches!(
            token,
            Token::Unknown | Token::Identifier | Token::Pragma | Token::EndOfFile
        );
        assert_eq!(hits, usize::from(!uncategorized), "{token:?}");
    }
}

#[test]
fn reserved_words_are_alphabetical() {
    let words: Vec<&str> = Token::ALL
        .iter()
        .filter(|token| token.is_reserved_word())
        .filter_map(|token| token.lexeme())
        .collect();
    let mut sorted = words.clone();
    sorted.sort_unstable();
    assert_eq!(words.len(), 40);
    assert_eq!(words, sorted);
}

#[test]
fn lexemes_only_for_fixed_spellings() {
    assert_eq!(Token::Begin.lexeme(), Some("BEGIN"));
    assert_eq!(Token::Assign.lexeme(), Some(":="));
    assert_eq!(Token::NotEqual.lexeme(), Some("#"));
    assert_eq!(Token::Identifier.lexeme(), None);
    assert_eq!(Token::Integer.lexeme(), None);
    assert_eq!(Token::Pragma.lexeme(), None);
    assert_eq!(Token::Unknown.lexeme(), None);
    assert_eq!(Token::EndOfFile.lexeme(), None);
}

#[test]
fn names() {
    assert_eq!(Token::Procedure.name(), "PROCEDURE");
    assert_eq!(Token::Range.name(), "..");
    assert_eq!(Token::Identifier.name(), "identifier");
    assert_eq!(Token::MalformedReal.name(), "malformed real");
    assert_eq!(Token::EndOfFile.name(), "end of file");
    assert_eq!(Token::Unknown.name(), "unknown");
    assert_eq!(Token::Char.to_string(), "character literal");
}

#[test]
fn from_lexeme_lookup() {
    assert_eq!(Token::from_lexeme("MODULE"), Some(Token::Module));
    assert_eq!(Token::from_lexeme("<="), Some(Token::LessEqual));
    assert_eq!(Token::from_lexeme(".."), Some(Token::Range));
    assert_eq!(Token::from_lexeme("module"), None);
    assert_eq!(Token::from_lexeme("identifier"), None);
    assert_eq!(Token::from_lexeme(""), None);
}

#[test]
fn every_lexeme_resolves_to_its_token() {
    for token in Token::ALL {
        if let Some(lexeme) = token.lexeme() {
            assert_eq!(Token::from_lexeme(lexeme), Some(token));
        }
    }
}
