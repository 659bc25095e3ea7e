//! Program-wide variable state.
//!
//! One flat scope for the whole run: the declared type of every variable,
//! the name of the program itself, and the current value of each variable
//! that has been assigned.

pub mod environment;

#[cfg(test)]
mod tests;
