//! Lexical analysis module for the compiler front end.
//!
//! This module contains the tokenizer that converts source text into a
//! stream of typed tokens for the formatter and parser. It handles:
//!
//! - Greedy longest-match classification against a fixed matcher table
//! - Priority tie-breaking between kinds that accept the same fragment
//! - Keywords, operators, punctuation, and all literal forms
//! - Eager token position tracking for error reporting
//!
//! Whitespace and comments are emitted as ordinary tokens; the formatter
//! disposes of them when building statement groups.

pub mod lexer;
pub mod tokens;
