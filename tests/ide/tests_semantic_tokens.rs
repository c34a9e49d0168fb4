//! Highlight classes for parsed lines.

use eressea::ide::{TokenType, semantic_tokens};

use crate::helpers::fixtures::german;

fn classes(line: &str) -> Vec<(&str, TokenType)> {
    let result = german().parse(line);
    semantic_tokens(&result)
        .into_iter()
        .map(|t| (&line[t.range], t.token_type))
        .collect()
}

#[test]
fn test_give_with_each() {
    assert_eq!(
        classes("GIB abc JE 5 Silber"),
        vec![
            ("GIB", TokenType::Keyword),
            ("abc", TokenType::Variable),
            ("JE", TokenType::Keyword),
            ("5", TokenType::Number),
            ("Silber", TokenType::String),
        ]
    );
}

#[test]
fn test_quoted_spell_name() {
    let found = classes("ZAUBERE STUFE 2 \"Segen der Ernte\"");
    assert_eq!(
        found,
        vec![
            ("ZAUBERE", TokenType::Keyword),
            ("STUFE", TokenType::Keyword),
            ("2", TokenType::Number),
            ("\"", TokenType::String),
            ("Segen der Ernte", TokenType::String),
            ("\"", TokenType::String),
        ]
    );
}

#[test]
fn test_coordinates_are_numbers() {
    let found = classes("URSPRUNG -3 4");
    assert_eq!(found[1], ("-3", TokenType::Number));
    assert_eq!(found[2], ("4", TokenType::Number));
}

#[test]
fn test_trailing_comment() {
    let found = classes("ARBEITE ; morgen");
    assert_eq!(found.last(), Some(&("; morgen", TokenType::Comment)));
}

#[test]
fn test_failed_token_is_skipped() {
    let found = classes("GIB abc 5 Gold");
    assert_eq!(found.len(), 3);
    assert!(found.iter().all(|(text, _)| *text != "Gold"));
}

#[test]
fn test_ranges_are_in_source_order() {
    let result = german().parse("@NACH O PAUSE W ; rast");
    let tokens = semantic_tokens(&result);
    assert!(tokens.windows(2).all(|w| w[0].range.end() <= w[1].range.start()));
    assert_eq!(tokens[0].token_type, TokenType::Operator);
}
