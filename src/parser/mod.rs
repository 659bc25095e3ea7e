//! Parser module that interprets the program while recognising it.
//!
//! This is a recursive-descent parser with no intermediate tree: each
//! production checks its piece of the grammar and immediately carries out
//! what it means. It handles:
//!
//! - Program structure and statement lists
//! - Declarations, assignments, conditionals and PRINT
//! - An expression ladder with one function per precedence level
//! - Skipping the untaken branch of a conditional
//!
//! Every production reports its own diagnostic and gives up on failure;
//! there is no error recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod stream;

#[cfg(test)]
mod tests;
