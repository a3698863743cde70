use super::*;
use crate::grammar::first;
use crate::grammar::follow;
use crate::DialectFlags;
use m2_ir::{Production, Token};
use pretty_assertions::assert_eq;

#[test]
fn points_are_dense() {
    for (index, point) in ResyncPoint::ALL.iter().enumerate() {
        assert_eq!(*point as usize, index);
    }
    assert_eq!(rows().len(), ResyncPoint::COUNT);
}

#[test]
fn names_are_lower_camel_case() {
    assert_eq!(
        ResyncPoint::StatementOrTerminator.name(),
        "statementOrTerminator"
    );
    for point in ResyncPoint::ALL {
        let first = point.name().chars().next();
        assert!(first.is_some_and(|c| c.is_ascii_lowercase()), "{point:?}");
    }
}

#[test]
fn import_or_definition_or_end() {
    assert_eq!(
        resync(ResyncPoint::ImportOrDefinitionOrEnd).element_list(),
        vec![
            Token::Const,
            Token::End,
            Token::From,
            Token::Import,
            Token::Procedure,
            Token::Type,
            Token::Var,
        ]
    );
}

#[test]
fn import_sets_extend_declaration_sets() {
    let import = TokenSet::from_tokens(&[Token::From, Token::Import]);
    assert_eq!(
        *resync(ResyncPoint::ImportOrDefinitionOrEnd),
        resync(ResyncPoint::DefinitionOrEnd).union(import)
    );
    assert_eq!(
        *resync(ResyncPoint::ImportOrBlock),
        resync(ResyncPoint::DeclarationOrBody).union(import)
    );
}

#[test]
fn statement_recovery_covers_statement_first_and_follow() {
    let flags = DialectFlags::PIM;
    let expected = first(Production::Statement, &flags).union(*follow(Production::Statement, &flags));
    assert_eq!(*resync(ResyncPoint::StatementOrTerminator), expected);
    assert_eq!(resync(ResyncPoint::StatementOrTerminator).count(), 16);
}

#[test]
fn small_points() {
    assert_eq!(
        resync(ResyncPoint::ElsifOrElseOrEnd).element_list(),
        vec![Token::Else, Token::Elsif, Token::End]
    );
    assert_eq!(
        resync(ResyncPoint::CaseOrElseOrEnd).element_list(),
        vec![Token::Else, Token::End, Token::Bar]
    );
    assert_eq!(
        resync(ResyncPoint::CommaOrRightParen).element_list(),
        vec![Token::Comma, Token::RightParen]
    );
    assert_eq!(
        resync(ResyncPoint::SemicolonOrRightParen).element_list(),
        vec![Token::Semicolon, Token::RightParen]
    );
    assert_eq!(
        resync(ResyncPoint::IdentOrSemicolon).element_list(),
        vec![Token::Identifier, Token::Semicolon]
    );
    assert_eq!(
        resync(ResyncPoint::FieldListOrEnd).element_list(),
        vec![Token::Case, Token::End, Token::Identifier, Token::Semicolon]
    );
}

#[test]
fn no_row_contains_unknown_or_end_of_file() {
    for point in ResyncPoint::ALL {
        let set = resync(point);
        assert!(!set.is_element(Token::Unknown), "{point:?}");
        assert!(!set.is_element(Token::EndOfFile), "{point:?}");
        assert!(!set.is_empty(), "{point:?}");
    }
}

#[test]
fn synchronize_stops_at_recovery_token() {
    let tokens = [
        Token::Plus,
        Token::Integer,
        Token::RightParen,
        Token::Semicolon,
        Token::Identifier,
        Token::EndOfFile,
    ];
    let mut cursor = Cursor::new(&tokens);
    assert!(synchronize(
        &mut cursor,
        resync(ResyncPoint::StatementOrTerminator)
    ));
    assert_eq!(cursor.current(), Token::Semicolon);
    assert_eq!(cursor.position(), 3);
}

#[test]
fn synchronize_does_not_move_when_already_synchronized() {
    let tokens = [Token::End, Token::EndOfFile];
    let mut cursor = Cursor::new(&tokens);
    assert!(synchronize(&mut cursor, resync(ResyncPoint::ElsifOrElseOrEnd)));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn synchronize_reports_end_of_file() {
    let tokens = [Token::Plus, Token::Minus, Token::EndOfFile];
    let mut cursor = Cursor::new(&tokens);
    assert!(!synchronize(&mut cursor, resync(ResyncPoint::CommaOrRightParen)));
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 2);
}

#[test]
fn synchronize_with_empty_set_skips_to_end() {
    let tokens = [Token::Begin, Token::End];
    let mut cursor = Cursor::new(&tokens);
    assert!(!synchronize(&mut cursor, &TokenSet::EMPTY));
    assert_eq!(cursor.position(), 2);
}
