//! Parser state and the program entry point.
//!
//! There is no syntax tree: every production both checks the grammar and
//! carries out its meaning as it goes. The `Parser` struct is the context
//! threaded through all of them and holds:
//! - the token stream with its one-token pushback slot
//! - the variable environment
//! - the program output and diagnostic sinks
//! - every error reported during the run
//! - lookup tables for statement and operator dispatch

use std::{collections::HashMap, io::Write};

use crate::{
    environment::environment::Environment,
    errors::errors::{Error, ErrorImpl, Operation},
    lexer::{lexer::TokenSource, tokens::{Token, TokenKind}},
};

use super::{
    lookups::{
        create_token_lookups, BinaryLookup, BinaryOperator, BindingPower, StmtHandler, StmtLookup,
        ValueOperator,
    },
    stmt::parse_program,
    stream::TokenStream,
};

pub struct Parser<'a> {
    stream: TokenStream,
    environment: Environment,
    /// Where PRINT statements write
    output: Box<dyn Write + 'a>,
    /// Where each reported error is written as `<line>: <message>`
    diagnostics: Box<dyn Write + 'a>,
    errors: Vec<Error>,
    stmt_lookup: StmtLookup,
    binary_lookup: BinaryLookup,
}

impl<'a> Parser<'a> {
    pub fn new(
        source: Box<dyn TokenSource>,
        output: impl Write + 'a,
        diagnostics: impl Write + 'a,
    ) -> Self {
        Parser {
            stream: TokenStream::new(source),
            environment: Environment::new(),
            output: Box::new(output),
            diagnostics: Box::new(diagnostics),
            errors: vec![],
            stmt_lookup: HashMap::new(),
            binary_lookup: HashMap::new(),
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.stream.next_token()
    }

    pub fn push_back(&mut self, token: Token) {
        self.stream.push_back(token);
    }

    pub fn get_line(&self) -> u32 {
        self.stream.get_line()
    }

    /// Records an error at the current line and writes it to the diagnostic
    /// sink. The returned error is what the failing production propagates.
    pub fn report_error(&mut self, error_impl: ErrorImpl) -> Error {
        let error = Error::new(error_impl, self.get_line());
        let _ = writeln!(self.diagnostics, "{}", error);
        self.errors.push(error.clone());
        error
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn get_environment(&self) -> &Environment {
        &self.environment
    }

    pub fn get_environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub fn get_output(&mut self) -> &mut dyn Write {
        &mut self.output
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_binary_lookup(&self) -> &BinaryLookup {
        &self.binary_lookup
    }

    /// Registers an infix operator at the given precedence level.
    pub fn binary(
        &mut self,
        kind: TokenKind,
        binding_power: BindingPower,
        operation: Operation,
        apply: ValueOperator,
    ) {
        self.binary_lookup.insert(
            kind,
            BinaryOperator {
                binding_power,
                operation,
                apply,
            },
        );
    }

    /// Registers the handler for statements starting with `kind`.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses and runs a whole program.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding the environment and every reported error
/// - Ok if the program entry production succeeded, otherwise the error
///   that ended the run
pub fn interpret<'a>(
    source: Box<dyn TokenSource>,
    output: impl Write + 'a,
    diagnostics: impl Write + 'a,
) -> (Parser<'a>, Result<(), Error>) {
    let mut parser = Parser::new(source, output, diagnostics);
    create_token_lookups(&mut parser);

    let result = parse_program(&mut parser);
    if result.is_ok() {
        if let Err(io_error) = parser.get_output().flush() {
            let error = parser.report_error(ErrorImpl::OutputFailure {
                message: io_error.to_string(),
            });
            return (parser, Err(error));
        }
    }

    (parser, result)
}
