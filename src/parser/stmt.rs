use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    values::value::{Value, ValueType},
};

use super::{expr::parse_expr, parser::Parser};

/// Reads the next token and fails with `error` unless it is of `kind`.
fn expect(parser: &mut Parser, kind: TokenKind, error: ErrorImpl) -> Result<(), Error> {
    let token = parser.next_token();
    if token.kind != kind {
        return Err(parser.report_error(error));
    }
    Ok(())
}

/// `PROGRAM ident StmtList PROGRAM`, where the statement list consumes the
/// `END` in front of the closing keyword.
pub fn parse_program(parser: &mut Parser) -> Result<(), Error> {
    let token = parser.next_token();
    if token.kind != TokenKind::Program {
        return Err(parser.report_error(ErrorImpl::MissingProgram));
    }

    let name = parser.next_token();
    if name.kind != TokenKind::Ident {
        return Err(parser.report_error(ErrorImpl::MissingProgramName));
    }
    parser.get_environment_mut().declare_program(name.value);

    let status = parse_stmt_list(parser);

    let token = parser.next_token();
    if token.kind != TokenKind::Program || status.is_err() {
        return Err(parser.report_error(ErrorImpl::IncorrectProgramBody));
    }

    Ok(())
}

/// Runs statements until `END` (consumed) or a token that cannot start a
/// statement (left for the caller).
pub fn parse_stmt_list(parser: &mut Parser) -> Result<(), Error> {
    loop {
        let token = parser.next_token();
        match token.kind {
            TokenKind::End => return Ok(()),
            TokenKind::Program | TokenKind::Done => {
                // Input or program ended without closing the block
                parser.push_back(token);
                return Err(parser.report_error(ErrorImpl::SyntacticErrorInBody));
            }
            TokenKind::Err => {
                return Err(parser.report_error(ErrorImpl::UnrecognizedInput {
                    lexeme: token.value,
                }));
            }
            _ => parser.push_back(token),
        }

        if !parse_stmt(parser)? {
            return Ok(());
        }
    }
}

/// Parses one statement and its terminating `;`.
///
/// Returns `Ok(false)` without consuming anything when the next token does
/// not start a statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<bool, Error> {
    let token = parser.next_token();
    let handler = parser.get_stmt_lookup().get(&token.kind).copied();
    parser.push_back(token);

    let Some(handler) = handler else {
        return Ok(false);
    };
    handler(parser)?;

    let terminator = parser.next_token();
    if terminator.kind != TokenKind::Semicol {
        return Err(parser.report_error(ErrorImpl::MissingSemicolon));
    }

    Ok(true)
}

pub fn parse_decl_stmt(parser: &mut Parser) -> Result<(), Error> {
    let type_token = parser.next_token();
    let Some(variable_type) = ValueType::from_token_kind(type_token.kind) else {
        return Err(parser.report_error(ErrorImpl::IncorrectDeclaration));
    };

    parse_var_list(parser, variable_type)
        .map_err(|_| parser.report_error(ErrorImpl::IncorrectDeclaration))
}

/// `Var { , Var }`, registering each variable under `variable_type`.
fn parse_var_list(parser: &mut Parser, variable_type: ValueType) -> Result<(), Error> {
    loop {
        parse_var(parser, variable_type)
            .map_err(|_| parser.report_error(ErrorImpl::IncorrectDeclarationVariable))?;

        let token = parser.next_token();
        match token.kind {
            TokenKind::Comma => continue,
            TokenKind::Ident => return Err(parser.report_error(ErrorImpl::MissingComma)),
            _ => {
                parser.push_back(token);
                return Ok(());
            }
        }
    }
}

fn parse_var(parser: &mut Parser, variable_type: ValueType) -> Result<(), Error> {
    let token = parser.next_token();
    if token.kind != TokenKind::Ident {
        return Err(parser.report_error(ErrorImpl::InvalidVariable));
    }

    if parser.get_environment().is_program_name(&token.value) {
        return Err(parser.report_error(ErrorImpl::VariableRedefinition));
    }

    parser
        .get_environment_mut()
        .declare_variable(token.value, variable_type)
        .map_err(|error| parser.report_error(error))
}

pub fn parse_control_stmt(parser: &mut Parser) -> Result<(), Error> {
    let token = parser.next_token();
    let status = match token.kind {
        TokenKind::Print => parse_print_stmt(parser),
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::Ident => {
            parser.push_back(token);
            parse_assign_stmt(parser)
        }
        _ => {
            parser.push_back(token);
            return Err(parser.report_error(ErrorImpl::IncorrectControlStatement));
        }
    };

    status.map_err(|_| parser.report_error(ErrorImpl::IncorrectControlStatement))
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<(), Error> {
    let variable = parser.next_token();
    if !parser.get_environment().is_declared(&variable.value) {
        return Err(parser.report_error(ErrorImpl::UndeclaredVariable));
    }

    expect(parser, TokenKind::Assop, ErrorImpl::MissingAssignmentOperator)?;

    let value = parse_expr(parser)?;
    if value.is_err() {
        return Err(parser.report_error(ErrorImpl::MissingAssignmentExpression));
    }

    parser
        .get_environment_mut()
        .assign(&variable.value, value)
        .map_err(|error| parser.report_error(error))
}

/// `IF ( Expr ) THEN StmtList [ ELSE StmtList ] END IF`
///
/// Only the branch selected by the condition runs; the other is skipped
/// token by token.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<(), Error> {
    expect(parser, TokenKind::LParen, ErrorImpl::MissingLeftParen)?;

    let condition =
        parse_expr(parser).map_err(|_| parser.report_error(ErrorImpl::MissingIfCondition))?;

    expect(parser, TokenKind::RParen, ErrorImpl::MissingRightParen)?;
    expect(parser, TokenKind::Then, ErrorImpl::MissingThen)?;

    let Value::Bool(condition) = condition else {
        return Err(parser.report_error(ErrorImpl::NonBooleanIfCondition));
    };

    if condition {
        parse_stmt_list(parser).map_err(|_| parser.report_error(ErrorImpl::MissingThenPart))?;
    } else {
        skip_branch(parser, true);
    }

    let token = parser.next_token();
    if token.kind == TokenKind::Else {
        if condition {
            skip_branch(parser, false);
        } else {
            parse_stmt_list(parser).map_err(|_| parser.report_error(ErrorImpl::MissingElsePart))?;
        }
    } else {
        parser.push_back(token);
    }

    parse_if_close(parser)
}

/// Accepts `END IF`, `ENDIF`, or a bare `IF` when the branch's statement
/// list already consumed the `END`.
fn parse_if_close(parser: &mut Parser) -> Result<(), Error> {
    let mut token = parser.next_token();
    if token.kind == TokenKind::EndIf {
        return Ok(());
    }
    if token.kind == TokenKind::End {
        token = parser.next_token();
    }
    if token.kind != TokenKind::If {
        return Err(parser.report_error(ErrorImpl::MissingIfClose));
    }
    Ok(())
}

/// Discards the tokens of an untaken branch.
///
/// Stops in front of `END`/`ENDIF` (and `ELSE` when `stop_at_else`) that
/// belong to this conditional, leaving the stop token unread. Conditionals
/// nested inside the branch are skipped whole, and so is unrecognised input.
/// Also stops at end of input or `PROGRAM`, so the close check can report it.
pub fn skip_branch(parser: &mut Parser, stop_at_else: bool) {
    let mut depth = 0usize;

    loop {
        let token = parser.next_token();
        match token.kind {
            TokenKind::Done | TokenKind::Program => {
                parser.push_back(token);
                return;
            }
            TokenKind::If => depth += 1,
            TokenKind::EndIf if depth > 0 => depth -= 1,
            TokenKind::End if depth > 0 => {
                let next = parser.next_token();
                if next.kind == TokenKind::If {
                    depth -= 1;
                } else {
                    parser.push_back(next);
                }
            }
            TokenKind::End | TokenKind::EndIf => {
                parser.push_back(token);
                return;
            }
            TokenKind::Else if depth == 0 && stop_at_else => {
                parser.push_back(token);
                return;
            }
            _ => {}
        }
    }
}

/// `PRINT ( ExprList )`
///
/// Every expression is evaluated before anything is written, so a failing
/// statement produces no output at all.
pub fn parse_print_stmt(parser: &mut Parser) -> Result<(), Error> {
    expect(parser, TokenKind::LParen, ErrorImpl::MissingLeftParen)?;

    let mut values = vec![];
    parse_expr_list(parser, &mut values)
        .map_err(|_| parser.report_error(ErrorImpl::MissingPrintList))?;

    expect(parser, TokenKind::RParen, ErrorImpl::MissingRightParen)?;

    if values.iter().any(Value::is_err) {
        return Err(parser.report_error(ErrorImpl::UndefinedVariable));
    }

    let mut line = String::new();
    for value in &values {
        line.push_str(&value.to_string());
    }

    writeln!(parser.get_output(), "{}", line).map_err(|io_error| {
        parser.report_error(ErrorImpl::OutputFailure {
            message: io_error.to_string(),
        })
    })
}

/// `Expr { , Expr }`, collecting each value in order.
fn parse_expr_list(parser: &mut Parser, values: &mut Vec<Value>) -> Result<(), Error> {
    loop {
        let value =
            parse_expr(parser).map_err(|_| parser.report_error(ErrorImpl::MissingExpression))?;
        values.push(value);

        let token = parser.next_token();
        if token.kind != TokenKind::Comma {
            parser.push_back(token);
            return Ok(());
        }
    }
}
