use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedComparisonOperator { .. } => "ExpectedComparisonOperator",
            ErrorImpl::InvalidStatement { .. } => "InvalidStatement",
            ErrorImpl::TrailingTokens { .. } => "TrailingTokens",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken {
                expected,
                found,
                index,
            } => ErrorTip::Suggestion(format!(
                "expected {}, got `{}` at token index {}",
                expected, found, index
            )),
            ErrorImpl::ExpectedComparisonOperator { found, index } => ErrorTip::Suggestion(
                format!("expected comparison operator, got `{}` at token index {}", found, index),
            ),
            ErrorImpl::InvalidStatement { token, index } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a statement (token index {})",
                token, index
            )),
            ErrorImpl::TrailingTokens { token, index } => ErrorTip::Suggestion(format!(
                "unexpected `{}` after program end at token index {}",
                token, index
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected {expected}, got {found:?} at token index {index}")]
    UnexpectedToken {
        expected: TokenKind,
        found: String,
        index: usize,
    },
    #[error("expected comparison operator, got {found:?} at token index {index}")]
    ExpectedComparisonOperator { found: String, index: usize },
    #[error("invalid statement at token index {index}: {token:?}")]
    InvalidStatement { token: String, index: usize },
    #[error("unexpected tokens after program end at token index {index}: {token:?}")]
    TrailingTokens { token: String, index: usize },
}
