//! Parser state and the validation entry point.
//!
//! The parser owns the token sequence and a single cursor into it. Grammar
//! productions (see `grammar`) consume tokens strictly left to right with at
//! most one token of lookahead, used only to tell an assignment from an
//! invalid statement start.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{grammar::parse_program, layout::render_layout};

/// The recognizer's only mutable state: the token sequence plus a cursor.
///
/// The cursor is monotonically non-decreasing. The sequence is expected to
/// be EOF-terminated (the lexer guarantees this); reads clamp to the final
/// token, so walking past the end yields EOF rather than a panic.
pub struct Parser {
    /// The list of tokens to validate
    tokens: Vec<Token>,
    /// Current position in the token sequence
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.token_at(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_kind(&self) -> TokenKind {
        self.token_at(self.pos + 1).kind
    }

    /// Returns the cursor's index into the token sequence.
    pub fn current_index(&self) -> usize {
        self.pos
    }

    fn token_at(&self, index: usize) -> &Token {
        let clamped = index.min(self.tokens.len() - 1);
        &self.tokens[clamped]
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        self.token_at(self.pos - 1)
    }

    /// Expects a token of the specified kind.
    ///
    /// Returns Ok(Token) and advances if the current token matches,
    /// otherwise returns an UnexpectedToken error citing the expected kind,
    /// the actual token and the cursor index.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: token.value.clone(),
                    index: self.pos,
                },
                token.position.clone(),
            ))
        } else {
            Ok(self.advance().clone())
        }
    }
}

/// Validates a token sequence against the grammar.
///
/// Returns the rendered token layout (always produced, from the full
/// sequence, regardless of how far validation got) together with the
/// validity result. The first structural mismatch aborts validation.
pub fn validate(tokens: Vec<Token>) -> (String, Result<(), Error>) {
    let layout = render_layout(&tokens);
    let mut parser = Parser::new(tokens);

    let result = parse_program(&mut parser).and_then(|_| {
        let token = parser.current_token();
        if token.kind != TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::TrailingTokens {
                    token: token.value.clone(),
                    index: parser.current_index(),
                },
                token.position.clone(),
            ));
        }
        Ok(())
    });

    (layout, result)
}
