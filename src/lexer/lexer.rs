use lazy_static::lazy_static;
use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Handles a pattern match at the current position. Returns `None` when the
/// matched text produces no token (whitespace, comments).
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("invalid lexer pattern"),
        handler,
    }
}

lazy_static! {
    // Order matters: longer operators must come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern(r"^\s+", whitespace_handler),
        pattern(r"^//[^\n]*", skip_handler),
        pattern(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern(r"^[0-9]+\.[0-9]+", real_handler),
        pattern(r"^[0-9]+", integer_handler),
        pattern(r#"^"(\\.|[^"\\\n])*""#, string_handler),
        pattern(r#"^"[^\n]*"#, unterminated_string_handler),
        pattern(r"^==", MK_DEFAULT_HANDLER!(TokenKind::Equal, "==")),
        pattern(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Assop, "=")),
        pattern(r"^&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        pattern(r"^\|\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        pattern(r"^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern(r"^>", MK_DEFAULT_HANDLER!(TokenKind::GThan, ">")),
        pattern(r"^<", MK_DEFAULT_HANDLER!(TokenKind::LThan, "<")),
        pattern(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern(r"^-", MK_DEFAULT_HANDLER!(TokenKind::Minus, "-")),
        pattern(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Mult, "*")),
        pattern(r"^/", MK_DEFAULT_HANDLER!(TokenKind::Div, "/")),
        pattern(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Semicol, ";")),
        pattern(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::LParen, "(")),
        pattern(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::RParen, ")")),
    ];
}

/// Anything that can hand out tokens one at a time.
///
/// Once the input is exhausted, implementations keep returning a `Done`
/// token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// On-demand tokenizer over a program's text.
pub struct Lexer {
    source: String,
    pos: usize,
    pub line: u32,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        while !self.at_eof() {
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|found| (pattern.handler, found.as_str().to_string()))
            });

            match matched {
                Some((handler, text)) => {
                    if let Some(token) = handler(self, &text) {
                        return token;
                    }
                }
                None => {
                    // Nothing matched: emit the offending character on its own.
                    let ch = self.remainder().chars().next().unwrap_or_default();
                    let token = MK_TOKEN!(TokenKind::Err, ch.to_string(), self.line);
                    self.advance_n(ch.len_utf8());
                    return token;
                }
            }
        }

        MK_TOKEN!(TokenKind::Done, String::new(), self.line)
    }
}

impl TokenSource for std::vec::IntoIter<Token> {
    fn next_token(&mut self) -> Token {
        self.next()
            .unwrap_or_else(|| MK_TOKEN!(TokenKind::Done, String::new(), 0))
    }
}

fn whitespace_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.line += matched.matches('\n').count() as u32;
    lexer.advance_n(matched.len());
    None
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    None
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let kind = RESERVED_LOOKUP
        .get(matched.to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or(TokenKind::Ident);

    // Keywords are normalised so that `true` and `TRUE` read the same later on.
    let value = if kind == TokenKind::Ident {
        matched.to_string()
    } else {
        matched.to_ascii_uppercase()
    };

    let token = MK_TOKEN!(kind, value, lexer.line);
    lexer.advance_n(matched.len());
    Some(token)
}

fn integer_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let token = MK_TOKEN!(TokenKind::IConst, matched.to_string(), lexer.line);
    lexer.advance_n(matched.len());
    Some(token)
}

fn real_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let token = MK_TOKEN!(TokenKind::RConst, matched.to_string(), lexer.line);
    lexer.advance_n(matched.len());
    Some(token)
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let string_literal = &matched[1..matched.len() - 1];

    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            _ => {
                result.push(ch); // Keep the backslash
                continue;
            }
        }
        chars.next();
    }

    let token = MK_TOKEN!(TokenKind::SConst, result, lexer.line);
    lexer.advance_n(matched.len());
    Some(token)
}

fn unterminated_string_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let token = MK_TOKEN!(TokenKind::Err, matched.to_string(), lexer.line);
    lexer.advance_n(matched.len());
    Some(token)
}

/// Runs the lexer to completion, returning every token up to and including
/// the final `Done`.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Done;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
