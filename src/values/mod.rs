//! Value model for the interpreter.
//!
//! Defines the tagged runtime `Value`, the declared static `ValueType`,
//! and the assignment coercion between them.

pub mod value;
