use crate::{
    errors::errors::{Error, ErrorImpl, Operation},
    lexer::tokens::{Token, TokenKind},
    values::value::Value,
};

use super::{
    lookups::{BinaryOperator, BindingPower},
    parser::Parser,
};

/// Parses and evaluates a full expression.
pub fn parse_expr(parser: &mut Parser) -> Result<Value, Error> {
    parse_level(parser, BindingPower::Or)
}

pub fn parse_level(parser: &mut Parser, bp: BindingPower) -> Result<Value, Error> {
    match bp {
        BindingPower::Unary => parse_unary_expr(parser),
        BindingPower::Primary => parse_primary_expr(parser),
        _ => parse_binary_expr(parser, bp),
    }
}

/// Reads the token following an operand, failing on an error token.
fn next_operator(parser: &mut Parser) -> Result<Token, Error> {
    let token = parser.next_token();
    if token.kind == TokenKind::Err {
        return Err(parser.report_error(ErrorImpl::UnrecognizedInput {
            lexeme: token.value,
        }));
    }
    Ok(token)
}

/// One left-associative level of the ladder: an operand from the next level,
/// then any number of `operator operand` pairs folded left to right.
///
/// The comparison levels do not chain: a second operator of the same level
/// after the first comparison is an error rather than a further fold.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Value, Error> {
    let mut result = parse_level(parser, bp.next())?;

    loop {
        let token = next_operator(parser)?;
        let Some(operator) = operator_at(parser, &token, bp) else {
            parser.push_back(token);
            return Ok(result);
        };

        let rhs = parse_level(parser, bp.next())
            .map_err(|_| parser.report_error(ErrorImpl::MissingOperand))?;

        if let Some(error) = bp.chaining_error() {
            let lookahead = next_operator(parser)?;
            let chained = operator_at(parser, &lookahead, bp).is_some();
            parser.push_back(lookahead);
            if chained {
                return Err(parser.report_error(error));
            }
        }

        if operator.operation == Operation::Div && rhs.is_zero() {
            return Err(parser.report_error(ErrorImpl::DivisionByZero));
        }

        result = (operator.apply)(&result, &rhs);
        if result.is_err() {
            return Err(parser.report_error(ErrorImpl::IllegalOperation {
                operation: operator.operation,
            }));
        }
    }
}

/// The operator `token` denotes on level `bp`, if any.
fn operator_at(parser: &Parser, token: &Token, bp: BindingPower) -> Option<BinaryOperator> {
    parser
        .get_binary_lookup()
        .get(&token.kind)
        .copied()
        .filter(|operator| operator.binding_power == bp)
}

/// `[ - | + | ! ] Primary`
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Value, Error> {
    let token = parser.next_token();
    let sign = match token.kind {
        TokenKind::Minus | TokenKind::Plus | TokenKind::Not => Some(token.kind),
        _ => {
            parser.push_back(token);
            None
        }
    };

    let value = parse_primary_expr(parser)?;

    match sign {
        Some(TokenKind::Minus) => {
            let negated = value.negate();
            if negated.is_err() {
                return Err(parser.report_error(ErrorImpl::IllegalSignOperand));
            }
            Ok(negated)
        }
        Some(TokenKind::Plus) if !value.is_numeric() => {
            Err(parser.report_error(ErrorImpl::IllegalSignOperand))
        }
        Some(TokenKind::Not) => {
            let inverted = value.not();
            if inverted.is_err() {
                return Err(parser.report_error(ErrorImpl::IllegalNotOperand));
            }
            Ok(inverted)
        }
        _ => Ok(value),
    }
}

/// Literals, variable references and parenthesised expressions.
///
/// A token that cannot start an operand is left unread and yields
/// `Value::Err`, which the enclosing construct reports.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Value, Error> {
    let token = parser.next_token();

    match token.kind {
        TokenKind::BConst => Ok(Value::Bool(token.value == "TRUE")),
        TokenKind::SConst => Ok(Value::Str(token.value)),
        TokenKind::IConst => match token.value.parse::<i32>() {
            Ok(number) => Ok(Value::Int(number)),
            Err(_) => Err(parser.report_error(ErrorImpl::InvalidNumber {
                lexeme: token.value,
            })),
        },
        TokenKind::RConst => match token.value.parse::<f64>() {
            Ok(number) => Ok(Value::Real(number)),
            Err(_) => Err(parser.report_error(ErrorImpl::InvalidNumber {
                lexeme: token.value,
            })),
        },
        TokenKind::Ident => {
            if parser.get_environment().is_program_name(&token.value) {
                return Err(parser.report_error(ErrorImpl::ProgramNameAsVariable));
            }
            if !parser.get_environment().is_declared(&token.value) {
                return Err(parser.report_error(ErrorImpl::UndeclaredVariable));
            }
            Ok(parser.get_environment().get_value(&token.value))
        }
        TokenKind::LParen => {
            let value =
                parse_expr(parser).map_err(|_| parser.report_error(ErrorImpl::MissingExpression))?;

            let close = parser.next_token();
            if close.kind != TokenKind::RParen {
                return Err(parser.report_error(ErrorImpl::MissingRightParen));
            }
            Ok(value)
        }
        TokenKind::Err => Err(parser.report_error(ErrorImpl::UnrecognizedInput {
            lexeme: token.value,
        })),
        _ => {
            parser.push_back(token);
            Ok(Value::Err)
        }
    }
}
