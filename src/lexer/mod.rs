//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer that turns program text into tokens on
//! demand. It handles:
//!
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line tracking for diagnostics
//! - Comments and whitespace handling
//! - Marking unrecognised input with an error token

pub mod lexer;
pub mod tokens;
