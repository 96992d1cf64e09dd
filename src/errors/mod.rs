//! Error types and error handling for the validator.
//!
//! This module defines the error types used by the lexer and the
//! recognizer. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical and structural failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
