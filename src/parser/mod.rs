//! Parser module for building the syntax tree.
//!
//! Consumes the formatter's token trees, one statement group at a time.
//! A leading keyword dispatches to the matching declaration builder
//! (`fn`, `import`, `type`, `const`); anything else is a value expression.
//!
//! Expressions use ranked multi-candidate matching: every candidate shape
//! (call, operation, member chain, static path, lambda, map literal) is
//! tried against the same token tree, and the highest-ranked survivor
//! wins. Candidates reject with an explicit non-match instead of raising,
//! so only the final absence of any candidate becomes an error.

pub mod stmt;
pub mod util;
pub mod value;

#[cfg(test)]
mod tests;
