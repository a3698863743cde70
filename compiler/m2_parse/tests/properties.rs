//! Property-based tests for `TokenSet`.
//!
//! Random sets are built from arbitrary ordinal lists and checked against a
//! plain `Vec<Token>` model of the same elements.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use m2_ir::Token;
use m2_parse::{TokenSet, SEGMENT_COUNT};
use proptest::prelude::*;

// -- Strategies --

/// Ordinals of real elements: `And` through `EndOfFile`.
fn ordinal_strategy() -> impl Strategy<Value = u32> {
    u32::from(Token::MIN_ELEMENT)..=u32::from(Token::MAX_ORDINAL)
}

fn token_set_strategy() -> impl Strategy<Value = TokenSet> {
    prop::collection::vec(ordinal_strategy(), 0..40)
        .prop_map(|ordinals| TokenSet::from_ordinals(&ordinals).unwrap())
}

/// Sorted, deduplicated model of a set.
fn model(ordinals: &[u32]) -> Vec<Token> {
    let mut tokens: Vec<Token> = ordinals
        .iter()
        .map(|&ordinal| Token::from_ordinal(u8::try_from(ordinal).unwrap()).unwrap())
        .collect();
    tokens.sort();
    tokens.dedup();
    tokens
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_elements_match_model(ordinals in prop::collection::vec(ordinal_strategy(), 0..40)) {
        let set = TokenSet::from_ordinals(&ordinals).unwrap();
        let expected = model(&ordinals);
        prop_assert_eq!(set.count() as usize, expected.len());
        prop_assert_eq!(set.element_list(), expected.clone());
        for token in Token::ALL {
            prop_assert_eq!(set.is_element(token), expected.contains(&token));
        }
    }

    #[test]
    fn prop_literal_round_trip(set in token_set_strategy()) {
        let parsed: TokenSet = set.to_literal().parse().unwrap();
        prop_assert_eq!(parsed, set);

        let mut raw = set.segments().to_vec();
        raw.push(set.count());
        prop_assert_eq!(raw.len(), SEGMENT_COUNT + 1);
        prop_assert_eq!(TokenSet::from_raw(&raw), Ok(set));
    }

    #[test]
    fn prop_union_laws(a in token_set_strategy(), b in token_set_strategy(), c in token_set_strategy()) {
        prop_assert_eq!(a.union(b), b.union(a));
        prop_assert_eq!(a.union(b).union(c), a.union(b.union(c)));
        prop_assert_eq!(a.union(a), a);
        prop_assert_eq!(a.union(TokenSet::EMPTY), a);
        prop_assert_eq!(TokenSet::union_of([&a, &b, &c]).unwrap(), a.union(b).union(c));
    }

    #[test]
    fn prop_union_count(a in token_set_strategy(), b in token_set_strategy()) {
        let union = a.union(b);
        let shared = a.iter().filter(|&token| b.is_element(token)).count() as u32;
        prop_assert_eq!(union.count(), a.count() + b.count() - shared);
    }

    #[test]
    fn prop_subset_agrees_with_elements(a in token_set_strategy(), b in token_set_strategy()) {
        let by_elements = a.iter().all(|token| b.is_element(token));
        prop_assert_eq!(a.is_subset(&b), by_elements);
        prop_assert_eq!(b.is_superset(&a), by_elements);
        prop_assert!(a.is_subset(&a.union(b)));
        prop_assert!(TokenSet::EMPTY.is_subset(&a));
    }

    #[test]
    fn prop_disjoint_agrees_with_elements(a in token_set_strategy(), b in token_set_strategy()) {
        let by_elements = !a.iter().any(|token| b.is_element(token));
        prop_assert_eq!(a.is_disjoint(&b), by_elements);
        prop_assert_eq!(a.is_disjoint(&b), b.is_disjoint(&a));
    }

    #[test]
    fn prop_unknown_never_member(ordinals in prop::collection::vec(ordinal_strategy(), 0..40)) {
        let set = TokenSet::from_ordinals(&ordinals).unwrap();
        prop_assert!(!set.is_element(Token::Unknown));
        prop_assert!(!set.is_element_ordinal(0));
    }
}
