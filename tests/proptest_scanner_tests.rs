//! Property-based tests for the scanner
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. Inputs built only from accepted characters always tokenize
//! 2. Digit and letter runs are consumed maximally
//! 3. Extra whitespace never changes the token sequence
//! 4. Keywords always win over generic identifiers
//! 5. Token values reproduce the source minus whitespace

use proptest::prelude::*;
use toylex::{
    tokenize, Error, IdentifierPolicy, ScannerConfig, Token, TokenKind, BIT_MACHINE, EXPRESSION,
};

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate one expression-grammar token's text
fn expression_piece() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just("=".to_string()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("let".to_string()),
        "[0-9]{1,6}",
        "[a-zA-Z]{1,8}",
    ]
}

/// Generate one bit-machine-grammar token's text
fn bit_machine_piece() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(",".to_string()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("bit".to_string()),
        Just("pointer".to_string()),
        Just("state".to_string()),
        "[0-9]{1,3}",
        "[a-z]{1,6}",
    ]
}

/// Generate a non-empty run of skippable whitespace
fn whitespace_run() -> impl Strategy<Value = String> {
    "[ \t\n]{1,4}"
}

/// Pieces joined by single spaces, plus the same pieces joined by random whitespace
fn spaced_and_padded(
    piece: impl Strategy<Value = String>,
) -> impl Strategy<Value = (String, String)> {
    prop::collection::vec((piece, whitespace_run()), 0..40).prop_map(|parts| {
        let spaced = parts
            .iter()
            .map(|(p, _)| p.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let padded: String = parts
            .iter()
            .map(|(p, ws)| format!("{}{}", ws, p))
            .collect();
        (spaced, padded)
    })
}

fn pairs(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    tokens.iter().map(|t| (t.kind, t.value.clone())).collect()
}

fn is_word_kind(kind: TokenKind) -> bool {
    kind == TokenKind::Identifier || kind.is_keyword()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn accepted_alphabet_never_fails(
        pieces in prop::collection::vec((expression_piece(), whitespace_run()), 0..60)
    ) {
        let source: String = pieces.iter().map(|(p, ws)| format!("{}{}", p, ws)).collect();
        prop_assert!(tokenize(&source, &EXPRESSION).is_ok());
    }

    #[test]
    fn runs_are_maximal(pieces in prop::collection::vec(expression_piece(), 0..60)) {
        let source = pieces.concat();
        let tokens = tokenize(&source, &EXPRESSION).unwrap();

        for pair in tokens.windows(2) {
            prop_assert!(
                !(pair[0].kind == TokenKind::Number && pair[1].kind == TokenKind::Number),
                "adjacent numbers in {:?}", source
            );
            prop_assert!(
                !(is_word_kind(pair[0].kind) && is_word_kind(pair[1].kind)),
                "adjacent words in {:?}", source
            );
        }
    }

    #[test]
    fn whitespace_is_invariant((spaced, padded) in spaced_and_padded(expression_piece())) {
        let a = tokenize(&spaced, &EXPRESSION).unwrap();
        let b = tokenize(&padded, &EXPRESSION).unwrap();
        prop_assert_eq!(pairs(&a), pairs(&b));
    }

    #[test]
    fn bit_machine_whitespace_is_invariant(
        (spaced, padded) in spaced_and_padded(bit_machine_piece())
    ) {
        let a = tokenize(&spaced, &BIT_MACHINE).unwrap();
        let b = tokenize(&padded, &BIT_MACHINE).unwrap();
        prop_assert_eq!(pairs(&a), pairs(&b));
    }

    #[test]
    fn values_reconstruct_source(
        pieces in prop::collection::vec((expression_piece(), whitespace_run()), 0..60)
    ) {
        let source: String = pieces.iter().map(|(p, ws)| format!("{}{}", ws, p)).collect();
        let tokens = tokenize(&source, &EXPRESSION).unwrap();

        let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
        let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(rebuilt, stripped);
    }

    #[test]
    fn keywords_beat_identifiers(
        before in "[a-z]{1,6}",
        after in "[a-z]{1,6}",
        keyword in prop_oneof![Just("bit"), Just("pointer"), Just("state")],
    ) {
        let config = ScannerConfig::new("emitting")
            .symbol(',', TokenKind::Comma)
            .keyword("bit", TokenKind::Bit)
            .keyword("pointer", TokenKind::Pointer)
            .keyword("state", TokenKind::State)
            .identifiers(IdentifierPolicy::Emit);

        let source = format!("{} {} {}", before, keyword, after);
        let tokens = tokenize(&source, &config).unwrap();

        prop_assert_eq!(tokens.len(), 3);
        prop_assert!(tokens[1].kind.is_keyword());
        prop_assert_eq!(tokens[1].value.as_str(), keyword);
    }

    #[test]
    fn bit_machine_ends_with_one_marker(
        pieces in prop::collection::vec((bit_machine_piece(), whitespace_run()), 0..40)
    ) {
        let source: String = pieces.iter().map(|(p, ws)| format!("{}{}", p, ws)).collect();
        let tokens = tokenize(&source, &BIT_MACHINE).unwrap();

        let markers = tokens.iter().filter(|t| t.is_end()).count();
        prop_assert_eq!(markers, 1);
        prop_assert!(tokens.last().unwrap().is_end());
        prop_assert!(tokens.iter().all(|t| t.kind != TokenKind::Identifier));
    }

    #[test]
    fn arbitrary_input_never_panics(source in r"[\x00-\x7F]{0,200}") {
        match tokenize(&source, &EXPRESSION) {
            Ok(_) => {}
            Err(Error::UnrecognizedCharacter { character, offset, .. }) => {
                prop_assert_eq!(source.chars().nth(offset), Some(character));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
