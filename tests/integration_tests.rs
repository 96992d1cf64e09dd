//! Integration tests for end-to-end validation.
//!
//! These tests verify that the complete pipeline works correctly from
//! source text through tokenization, recognition and layout rendering.

use cvalidator::{
    errors::errors::Error,
    lexer::lexer::tokenize,
    lexer::tokens::TokenKind,
    parser::parser::validate,
};

fn validate_source(source: &str) -> (String, Result<(), Error>) {
    let tokens = tokenize(source.to_string(), Some("test.c".to_string())).unwrap();
    validate(tokens)
}

#[test]
fn test_validate_minimal_program() {
    let source = "int main() { }".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Datatype);
    assert_eq!(tokens[1].kind, TokenKind::Keyword);
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[3].kind, TokenKind::CloseParen);
    assert_eq!(tokens[4].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[5].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[6].kind, TokenKind::EOF);

    let (_, result) = validate(tokens);
    assert!(result.is_ok());
}

#[test]
fn test_validate_full_program() {
    let source = r#"
        int main() {
            int x, y;
            int total;
            scanf("%d", &x);
            scanf("%d", &y);
            total = x + y;
            while (total > 10) {
                total = total - 1;
            }
            if (total == 10) {
                printf("%d", total);
            }
        }
    "#;
    let (_, result) = validate_source(source);

    assert!(result.is_ok());
}

#[test]
fn test_tokenization_always_ends_with_eof() {
    let sources = ["", "int main() { }", "x = 1 + 2;", "// only a comment"];

    for source in sources {
        let tokens = tokenize(source.to_string(), Some("test.c".to_string())).unwrap();
        assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::EOF).count(),
            1
        );
    }
}

#[test]
fn test_invalid_statement_start_fails() {
    let (_, result) = validate_source("int main() { int x 3; }");

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().get_error_name(), "UnexpectedToken");
}

#[test]
fn test_declarations_must_precede_statements() {
    let (_, result) = validate_source("int main() { x = 1; int y; }");

    assert!(result.is_err());
}

#[test]
fn test_comments_are_transparent() {
    let (_, plain) = validate_source("int main() { }");
    let (_, commented) = validate_source("int main() { // comment\n }");

    assert_eq!(plain.is_ok(), commented.is_ok());
}

#[test]
fn test_bare_bang_is_a_lex_error() {
    let source = "int main() { x = 1!2; }".to_string();
    let result = tokenize(source, Some("test.c".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidCharacter");
}

#[test]
fn test_expression_operator_limit() {
    let (_, result) = validate_source("int main() { int x; x = 1 + 2 + 3; }");

    assert!(result.is_err());
}

#[test]
fn test_layout_revalidates_to_same_verdict() {
    // Re-tokenizing the rendered layout of a valid program and revalidating
    // yields the same verdict as the original input.
    let source = "int main() { int x; x = 1; if (x < 10) { printf(\"%d\", x); } }";
    let (layout, result) = validate_source(source);
    assert!(result.is_ok());

    let (_, revalidated) = validate_source(&layout);
    assert!(revalidated.is_ok());
}

#[test]
fn test_layout_rendered_for_both_verdicts() {
    let (valid_layout, valid) = validate_source("int main() { int x; }");
    let (invalid_layout, invalid) = validate_source("int main() { int x 3; }");

    assert!(valid.is_ok());
    assert!(invalid.is_err());
    assert!(!valid_layout.is_empty());
    assert!(!invalid_layout.is_empty());
}
