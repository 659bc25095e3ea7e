//! Single-token pushback over a token source.

use crate::lexer::{lexer::TokenSource, tokens::Token};

/// Wraps a [`TokenSource`] with room to un-read exactly one token.
///
/// The grammar never needs more than one token of lookahead, so pushing
/// back while a token is already buffered is a bug in the parser itself
/// and panics.
pub struct TokenStream {
    source: Box<dyn TokenSource>,
    pushed_back: Option<Token>,
    line: u32,
}

impl TokenStream {
    pub fn new(source: Box<dyn TokenSource>) -> Self {
        TokenStream {
            source,
            pushed_back: None,
            line: 1,
        }
    }

    /// Returns the buffered token if there is one, otherwise reads a fresh
    /// token from the source.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.pushed_back.take() {
            return token;
        }

        let token = self.source.next_token();
        self.line = self.line.max(token.line);
        token
    }

    pub fn push_back(&mut self, token: Token) {
        if let Some(buffered) = &self.pushed_back {
            panic!(
                "pushback slot already holds {} while pushing back {}",
                buffered, token
            );
        }
        self.pushed_back = Some(token);
    }

    pub fn has_pushed_back(&self) -> bool {
        self.pushed_back.is_some()
    }

    /// Line of the furthest token read from the source so far.
    pub fn get_line(&self) -> u32 {
        self.line
    }
}
