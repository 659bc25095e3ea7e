use std::fmt::Display;

use thiserror::Error;

/// A diagnostic tagged with the line it was reported on.
///
/// Displays as `<line>: <message>`, the format written to the diagnostic sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MissingProgram => "MissingProgram",
            ErrorImpl::MissingProgramName => "MissingProgramName",
            ErrorImpl::IncorrectProgramBody => "IncorrectProgramBody",
            ErrorImpl::SyntacticErrorInBody => "SyntacticErrorInBody",
            ErrorImpl::IncorrectDeclaration => "IncorrectDeclaration",
            ErrorImpl::IncorrectControlStatement => "IncorrectControlStatement",
            ErrorImpl::MissingSemicolon => "MissingSemicolon",
            ErrorImpl::IncorrectDeclarationVariable => "IncorrectDeclarationVariable",
            ErrorImpl::MissingComma => "MissingComma",
            ErrorImpl::InvalidVariable => "InvalidVariable",
            ErrorImpl::VariableRedefinition => "VariableRedefinition",
            ErrorImpl::UndeclaredVariable => "UndeclaredVariable",
            ErrorImpl::UndefinedVariable => "UndefinedVariable",
            ErrorImpl::MissingAssignmentOperator => "MissingAssignmentOperator",
            ErrorImpl::MissingAssignmentExpression => "MissingAssignmentExpression",
            ErrorImpl::IllegalAssignment => "IllegalAssignment",
            ErrorImpl::MissingLeftParen => "MissingLeftParen",
            ErrorImpl::MissingRightParen => "MissingRightParen",
            ErrorImpl::MissingIfCondition => "MissingIfCondition",
            ErrorImpl::MissingThen => "MissingThen",
            ErrorImpl::NonBooleanIfCondition => "NonBooleanIfCondition",
            ErrorImpl::MissingThenPart => "MissingThenPart",
            ErrorImpl::MissingElsePart => "MissingElsePart",
            ErrorImpl::MissingIfClose => "MissingIfClose",
            ErrorImpl::MissingPrintList => "MissingPrintList",
            ErrorImpl::MissingExpression => "MissingExpression",
            ErrorImpl::MissingOperand => "MissingOperand",
            ErrorImpl::UnrecognizedInput { .. } => "UnrecognizedInput",
            ErrorImpl::IllegalOperation { .. } => "IllegalOperation",
            ErrorImpl::IllegalEquality => "IllegalEquality",
            ErrorImpl::IllegalRelational => "IllegalRelational",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::IllegalSignOperand => "IllegalSignOperand",
            ErrorImpl::IllegalNotOperand => "IllegalNotOperand",
            ErrorImpl::ProgramNameAsVariable => "ProgramNameAsVariable",
            ErrorImpl::InvalidNumber { .. } => "InvalidNumber",
            ErrorImpl::OutputFailure { .. } => "OutputFailure",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MissingSemicolon => {
                ErrorTip::Suggestion(String::from("every statement must end with `;`"))
            }
            ErrorImpl::VariableRedefinition => ErrorTip::Suggestion(String::from(
                "a variable can only be declared once per program",
            )),
            ErrorImpl::UndeclaredVariable => ErrorTip::Suggestion(String::from(
                "declare the variable with INT, FLOAT or BOOL first",
            )),
            ErrorImpl::UndefinedVariable => ErrorTip::Suggestion(String::from(
                "the variable is declared but has not been assigned a value",
            )),
            ErrorImpl::IllegalAssignment => ErrorTip::Suggestion(String::from(
                "numeric values only convert between INT and FLOAT; BOOL takes only booleans",
            )),
            ErrorImpl::NonBooleanIfCondition => {
                ErrorTip::Suggestion(String::from("the condition must evaluate to a boolean"))
            }
            ErrorImpl::MissingIfClose => {
                ErrorTip::Suggestion(String::from("close the statement with `END IF`"))
            }
            ErrorImpl::UnrecognizedInput { lexeme } => {
                ErrorTip::Suggestion(format!("unrecognized input: `{}`", lexeme))
            }
            ErrorImpl::InvalidNumber { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                lexeme
            )),
            ErrorImpl::IllegalEquality | ErrorImpl::IllegalRelational => ErrorTip::Suggestion(
                String::from("comparisons cannot be chained; combine them with && or ||"),
            ),
            _ => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// The operator an illegal-operation diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Or,
    And,
    Equal,
    GreaterThan,
    LessThan,
    Add,
    Minus,
    Mult,
    Div,
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Or => write!(f, "Illegal OR operation."),
            Operation::And => write!(f, "Illegal AND operation."),
            Operation::Equal => write!(f, "Illegal EQUAL operation."),
            Operation::GreaterThan => write!(f, "Illegal Greater Than operation."),
            Operation::LessThan => write!(f, "Illegal Less Than operation"),
            Operation::Add => write!(f, "Illegal ADD operation."),
            Operation::Minus => write!(f, "Illegal MINUS operation"),
            Operation::Mult => write!(f, "Illegal MULT operation."),
            Operation::Div => write!(f, "Illegal DIV operation"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Missing PROGRAM.")]
    MissingProgram,
    #[error("Missing Program Name.")]
    MissingProgramName,
    #[error("Incorrect Program Body.")]
    IncorrectProgramBody,
    #[error("Syntactic error in Program Body.")]
    SyntacticErrorInBody,
    #[error("Incorrect Declaration Statement.")]
    IncorrectDeclaration,
    #[error("Incorrect control Statement.")]
    IncorrectControlStatement,
    #[error("Missing semicolon at end of Statement.")]
    MissingSemicolon,
    #[error("Incorrect variable in Declaration Statement.")]
    IncorrectDeclarationVariable,
    #[error("Missing comma in declaration statement.")]
    MissingComma,
    #[error("Invalid Variable.")]
    InvalidVariable,
    #[error("Variable Redefinition")]
    VariableRedefinition,
    #[error("Undeclared Variable")]
    UndeclaredVariable,
    #[error("Undefined Variable")]
    UndefinedVariable,
    #[error("Missing assignment operator")]
    MissingAssignmentOperator,
    #[error("Missing Expression in Assignment Statement")]
    MissingAssignmentExpression,
    #[error("Illegal Assignment Operation")]
    IllegalAssignment,
    #[error("Missing Left Parenthesis")]
    MissingLeftParen,
    #[error("Missing Right Parenthesis")]
    MissingRightParen,
    #[error("Missing if statement Logic Expression")]
    MissingIfCondition,
    #[error("Missing THEN in If statement")]
    MissingThen,
    #[error("Illegal Type for If statement Logic Expression")]
    NonBooleanIfCondition,
    #[error("Missing Statement for If-Stmt Then-Part")]
    MissingThenPart,
    #[error("Missing expression list after Else")]
    MissingElsePart,
    #[error("Missing closing keywords of IF statement.")]
    MissingIfClose,
    #[error("Missing expression list after Print")]
    MissingPrintList,
    #[error("Missing Expression")]
    MissingExpression,
    #[error("Missing operand after operator")]
    MissingOperand,
    #[error("Unrecognized Input Pattern")]
    UnrecognizedInput { lexeme: String },
    #[error("{operation}")]
    IllegalOperation { operation: Operation },
    #[error("Illegal Equality Expression.")]
    IllegalEquality,
    #[error("Illegal Relational Expression.")]
    IllegalRelational,
    #[error("Run-Time Error-Illegal Division by Zero")]
    DivisionByZero,
    #[error("Illegal Operand Type for Sign Operator")]
    IllegalSignOperand,
    #[error("Illegal Operand Type for NOT Operator")]
    IllegalNotOperand,
    #[error("Illegal use of program name as a variable")]
    ProgramNameAsVariable,
    #[error("Invalid numeric literal")]
    InvalidNumber { lexeme: String },
    #[error("Error writing program output: {message}")]
    OutputFailure { message: String },
}
