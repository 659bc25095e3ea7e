use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl, Operation},
    lexer::tokens::TokenKind,
    values::value::Value,
};

use super::{parser::Parser, stmt::*};

/// Expression precedence, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Or,
    And,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Primary,
}

impl BindingPower {
    /// The level whose expressions form the operands of this one.
    pub fn next(&self) -> BindingPower {
        match self {
            BindingPower::Or => BindingPower::And,
            BindingPower::And => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Relational,
            BindingPower::Relational => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative => BindingPower::Unary,
            BindingPower::Unary | BindingPower::Primary => BindingPower::Primary,
        }
    }

    /// Comparison tiers reject `a == b == c` and `a < b < c`; the error
    /// reported when a second operator of the tier follows the first.
    pub fn chaining_error(&self) -> Option<ErrorImpl> {
        match self {
            BindingPower::Equality => Some(ErrorImpl::IllegalEquality),
            BindingPower::Relational => Some(ErrorImpl::IllegalRelational),
            _ => None,
        }
    }
}

pub type ValueOperator = fn(&Value, &Value) -> Value;

#[derive(Clone, Copy)]
pub struct BinaryOperator {
    pub binding_power: BindingPower,
    pub operation: Operation,
    pub apply: ValueOperator,
}

pub type StmtHandler = fn(&mut Parser) -> Result<(), Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.binary(TokenKind::Or, BindingPower::Or, Operation::Or, Value::or);
    parser.binary(TokenKind::And, BindingPower::And, Operation::And, Value::and);

    // Comparison
    parser.binary(TokenKind::Equal, BindingPower::Equality, Operation::Equal, Value::equal);
    parser.binary(TokenKind::GThan, BindingPower::Relational, Operation::GreaterThan, Value::greater);
    parser.binary(TokenKind::LThan, BindingPower::Relational, Operation::LessThan, Value::less);

    // Additive and multiplicative
    parser.binary(TokenKind::Plus, BindingPower::Additive, Operation::Add, Value::add);
    parser.binary(TokenKind::Minus, BindingPower::Additive, Operation::Minus, Value::sub);
    parser.binary(TokenKind::Mult, BindingPower::Multiplicative, Operation::Mult, Value::mul);
    parser.binary(TokenKind::Div, BindingPower::Multiplicative, Operation::Div, Value::div);

    // Statements
    parser.stmt(TokenKind::Int, parse_decl_stmt);
    parser.stmt(TokenKind::Float, parse_decl_stmt);
    parser.stmt(TokenKind::Bool, parse_decl_stmt);
    parser.stmt(TokenKind::Ident, parse_control_stmt);
    parser.stmt(TokenKind::If, parse_control_stmt);
    parser.stmt(TokenKind::Print, parse_control_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BinaryLookup = HashMap<TokenKind, BinaryOperator>;
