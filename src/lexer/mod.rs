//! Lexical analysis module for the validator.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a flat sequence of tokens for recognition. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of data types, keywords, identifiers, numbers and operators
//! - Line/column tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
