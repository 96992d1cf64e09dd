//! Recognizer module for validating the token sequence.
//!
//! This module contains the recursive-descent recognizer that walks the
//! token sequence against the grammar, one function per production. It
//! handles:
//!
//! - Program structure (declarations followed by statements)
//! - Statement recognition (assignment, scanf, printf, if, while)
//! - Conditions and single-operation expressions
//! - The diagnostic token-layout rendering
//!
//! No AST is built: each production either consumes exactly the tokens it
//! owns or fails with the first structural error. There is no backtracking
//! and no recovery.

pub mod grammar;
pub mod layout;
pub mod parser;
