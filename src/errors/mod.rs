//! Diagnostics for the interpreter.
//!
//! Every failure the parser can detect is an `ErrorImpl` variant carrying
//! its exact message text. An `Error` pairs it with the line it was
//! reported on and renders as `<line>: <message>`.

pub mod errors;
