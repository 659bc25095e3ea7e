//! Unit tests for the parser module.
//!
//! This module contains tests for interpreting language constructs including:
//! - The pushback stream
//! - Declarations and assignments with coercion
//! - Conditionals and branch skipping
//! - PRINT statements
//! - Expression precedence and operator errors

use super::{parser::interpret, stream::TokenStream};
use crate::{
    lexer::lexer::{tokenize, Lexer},
    values::value::Value,
};

struct Outcome {
    success: bool,
    output: String,
    diagnostics: Vec<String>,
}

impl Outcome {
    fn reported(&self, message: &str) -> bool {
        self.diagnostics.iter().any(|line| line.contains(message))
    }
}

fn run_program(source: &str) -> Outcome {
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();

    let success = {
        let (parser, result) =
            interpret(Box::new(Lexer::new(source)), &mut output, &mut diagnostics);
        result.is_ok() && parser.error_count() == 0
    };

    Outcome {
        success,
        output: String::from_utf8(output).unwrap(),
        diagnostics: String::from_utf8(diagnostics)
            .unwrap()
            .lines()
            .map(String::from)
            .collect(),
    }
}

fn wrap(body: &str) -> String {
    format!("PROGRAM test\n{}\nEND PROGRAM\n", body)
}

#[test]
fn test_pushback_returns_same_token() {
    let mut stream = TokenStream::new(Box::new(tokenize("x y").into_iter()));

    let first = stream.next_token();
    stream.push_back(first.clone());
    assert!(stream.has_pushed_back());

    let again = stream.next_token();
    assert_eq!(again, first);
    assert!(!stream.has_pushed_back());
    assert_eq!(stream.next_token().value, "y");
}

#[test]
#[should_panic]
fn test_double_pushback_panics() {
    let mut stream = TokenStream::new(Box::new(Lexer::new("x y")));

    let first = stream.next_token();
    let second = stream.next_token();
    stream.push_back(second);
    stream.push_back(first);
}

#[test]
fn test_well_formed_program() {
    let outcome = run_program(&wrap(
        "INT r, a;
         FLOAT p;
         BOOL big;
         r = 3;
         p = 3.14;
         a = p * r * r;
         big = a > 20;
         PRINT(\"area: \", a);
         PRINT(big);",
    ));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "area: 28\ntrue\n");
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn test_empty_program() {
    let outcome = run_program("PROGRAM empty END PROGRAM");

    assert!(outcome.success);
    assert_eq!(outcome.output, "");
}

#[test]
fn test_bindings_after_run() {
    let mut output = Vec::new();
    let (parser, result) = interpret(
        Box::new(Lexer::new(wrap("INT i; FLOAT f; i = 2; f = i;"))),
        &mut output,
        std::io::sink(),
    );

    assert!(result.is_ok());
    assert_eq!(parser.get_environment().get_value("i"), Value::Int(2));
    assert_eq!(parser.get_environment().get_value("f"), Value::Real(2.0));
}

#[test]
fn test_missing_program_keyword() {
    let outcome = run_program("INT x;");

    assert!(!outcome.success);
    assert_eq!(outcome.diagnostics, vec!["1: Missing PROGRAM."]);
}

#[test]
fn test_missing_program_name() {
    let outcome = run_program("PROGRAM ; END PROGRAM");

    assert!(!outcome.success);
    assert!(outcome.reported("Missing Program Name."));
}

#[test]
fn test_missing_end() {
    let outcome = run_program("PROGRAM p INT x; PROGRAM");

    assert!(!outcome.success);
    assert!(outcome.reported("Syntactic error in Program Body."));
    assert!(outcome.reported("Incorrect Program Body."));
}

#[test]
fn test_redeclaration_reported_once() {
    let outcome = run_program("PROGRAM p\nINT x;\nFLOAT x;\nEND PROGRAM");

    assert!(!outcome.success);
    let redefinitions: Vec<&String> = outcome
        .diagnostics
        .iter()
        .filter(|line| line.contains("Variable Redefinition"))
        .collect();
    assert_eq!(redefinitions, vec!["3: Variable Redefinition"]);
}

#[test]
fn test_redeclaration_within_one_list() {
    let outcome = run_program(&wrap("INT a, b, a;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Variable Redefinition"));
}

#[test]
fn test_missing_comma_in_declaration() {
    let outcome = run_program(&wrap("INT a b;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Missing comma in declaration statement."));
}

#[test]
fn test_invalid_variable_in_declaration() {
    let outcome = run_program(&wrap("INT 5;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Invalid Variable."));
}

#[test]
fn test_real_truncated_into_integer() {
    let outcome = run_program(&wrap("INT i; i = 7.0 / 2; PRINT(i);"));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "3\n");
}

#[test]
fn test_real_too_large_for_integer() {
    let outcome = run_program(&wrap("INT x; x = 3000000000.0; PRINT(x);"));

    assert!(!outcome.success);
    assert!(outcome.reported("Illegal Assignment Operation"));
    assert_eq!(outcome.output, "");
}

#[test]
fn test_smallest_integer_from_real() {
    let outcome = run_program(&wrap("INT x; x = -2147483648.75; PRINT(x);"));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "-2147483648\n");
}

#[test]
fn test_integer_promoted_into_real() {
    let outcome = run_program(&wrap("FLOAT f; f = 7; PRINT(f / 2);"));

    assert!(outcome.success);
    assert_eq!(outcome.output, "3.5\n");
}

#[test]
fn test_illegal_assignment() {
    let outcome = run_program(&wrap("BOOL b; b = 1;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Illegal Assignment Operation"));
}

#[test]
fn test_undeclared_assignment() {
    let outcome = run_program(&wrap("y = 1;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Undeclared Variable"));
}

#[test]
fn test_missing_assignment_operator() {
    let outcome = run_program(&wrap("INT x; x 1;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Missing assignment operator"));
}

#[test]
fn test_missing_assignment_expression() {
    let outcome = run_program(&wrap("INT x; x = ;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Missing Expression in Assignment Statement"));
}

#[test]
fn test_division_by_zero() {
    for divisor in ["0", "0.0", "(1 - 1)"] {
        let outcome = run_program(&wrap(&format!("INT i; i = 5 / {}; PRINT(i);", divisor)));

        assert!(!outcome.success);
        assert!(outcome.reported("Illegal Division by Zero"));
        assert_eq!(outcome.output, "");
    }
}

#[test]
fn test_if_true_runs_then_branch_only() {
    let outcome = run_program(&wrap("IF (TRUE) THEN PRINT(1); ELSE PRINT(2); ENDIF;"));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "1\n");
}

#[test]
fn test_if_false_runs_else_branch_only() {
    let outcome = run_program(&wrap("IF (FALSE) THEN PRINT(1); ELSE PRINT(2); ENDIF;"));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "2\n");
}

#[test]
fn test_if_with_two_token_close() {
    let cases = [
        ("IF (TRUE) THEN PRINT(1); END IF;", "1\n"),
        ("IF (FALSE) THEN PRINT(1); END IF;", ""),
        ("IF (TRUE) THEN PRINT(1); ELSE PRINT(2); END IF;", "1\n"),
        ("IF (FALSE) THEN PRINT(1); ELSE PRINT(2); END IF;", "2\n"),
    ];

    for (body, expected) in cases {
        let outcome = run_program(&wrap(body));
        assert!(outcome.success, "{}: {:?}", body, outcome.diagnostics);
        assert_eq!(outcome.output, expected, "{}", body);
    }
}

#[test]
fn test_skipped_branch_has_no_effect() {
    let outcome = run_program(&wrap(
        "INT x;
         x = 1;
         IF (x > 5) THEN
             INT y;
             x = 100;
             PRINT(\"skipped\");
         END IF;
         INT y;
         y = x + 1;
         PRINT(y);",
    ));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "2\n");
}

#[test]
fn test_nested_conditional_in_skipped_branch() {
    let outcome = run_program(&wrap(
        "IF (FALSE) THEN
             IF (TRUE) THEN PRINT(\"inner\"); END IF;
             PRINT(\"skipped\");
         ELSE
             PRINT(\"outer else\");
         END IF;",
    ));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "outer else\n");
}

#[test]
fn test_unrecognized_input_in_skipped_branch() {
    let outcome = run_program(&wrap(
        "IF (FALSE) THEN
             PRINT(1 @ 2);
         END IF;
         PRINT(9);",
    ));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "9\n");
}

#[test]
fn test_unrecognized_input_in_taken_branch() {
    let outcome = run_program(&wrap("IF (TRUE) THEN PRINT(1 @ 2); END IF;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Unrecognized Input Pattern"));
    assert_eq!(outcome.output, "");
}

#[test]
fn test_real_output_precision() {
    let outcome = run_program(&wrap("FLOAT f; f = 0.1 + 0.2; PRINT(f, \" \", 10.0 / 3);"));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "0.3 3.33333\n");
}

#[test]
fn test_nested_conditional_in_taken_branch() {
    let outcome = run_program(&wrap(
        "INT n;
         n = 4;
         IF (n > 2) THEN
             IF (n > 3) THEN PRINT(\"big\"); ELSE PRINT(\"medium\"); ENDIF;
         ELSE
             IF (n > 0) THEN PRINT(\"small\"); ENDIF;
         END IF;",
    ));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "big\n");
}

#[test]
fn test_non_boolean_condition() {
    let outcome = run_program(&wrap("IF (1) THEN PRINT(1); END IF;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Illegal Type for If statement Logic Expression"));
    assert_eq!(outcome.output, "");
}

#[test]
fn test_missing_if_close() {
    let outcome = run_program("PROGRAM p IF (TRUE) THEN PRINT(1); END PROGRAM");

    assert!(!outcome.success);
    assert!(outcome.reported("Missing closing keywords of IF statement."));
}

#[test]
fn test_missing_then() {
    let outcome = run_program(&wrap("IF (TRUE) PRINT(1); END IF;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Missing THEN in If statement"));
}

#[test]
fn test_print_expression_list() {
    let outcome = run_program(&wrap("PRINT(1+2, 3*4);"));

    assert!(outcome.success);
    assert_eq!(outcome.output, "312\n");
}

#[test]
fn test_print_failure_produces_no_output() {
    let outcome = run_program(&wrap("PRINT(1, TRUE + 1);"));

    assert!(!outcome.success);
    assert!(outcome.reported("Illegal ADD operation."));
    assert_eq!(outcome.output, "");
}

#[test]
fn test_print_unassigned_variable() {
    let outcome = run_program(&wrap("INT x; PRINT(\"x = \", x);"));

    assert!(!outcome.success);
    assert!(outcome.reported("Undefined Variable"));
    assert_eq!(outcome.output, "");
}

#[test]
fn test_print_missing_right_paren() {
    let outcome = run_program(&wrap("PRINT(1, 2;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Missing Right Parenthesis"));
    assert_eq!(outcome.output, "");
}

#[test]
fn test_missing_semicolon() {
    let outcome = run_program("PROGRAM p\nPRINT(1)\nPRINT(2);\nEND PROGRAM");

    assert!(!outcome.success);
    assert!(outcome.reported("3: Missing semicolon at end of Statement."));
}

#[test]
fn test_chained_equality_rejected() {
    for operands in ["1 == 1 == 1", "TRUE == FALSE == TRUE", "a == a == a"] {
        let outcome = run_program(&wrap(&format!("BOOL b; INT a; a = 1; b = {};", operands)));

        assert!(!outcome.success, "{}", operands);
        assert!(outcome.reported("Illegal Equality Expression"), "{}", operands);
    }
}

#[test]
fn test_chained_relational_rejected() {
    let outcome = run_program(&wrap("BOOL b; b = 1 < 2 > 0;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Illegal Relational Expression"));
}

#[test]
fn test_comparison_inside_equality() {
    let outcome = run_program(&wrap("BOOL b; b = 1 < 2 == TRUE; PRINT(b);"));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "true\n");
}

#[test]
fn test_precedence() {
    let outcome = run_program(&wrap(
        "FLOAT f; INT i;
         f = 1 + 2 * 3 - 4 / 2;
         i = (1 + 2) * 3;
         PRINT(f, \" \", i);",
    ));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "5 9\n");
}

#[test]
fn test_logical_operators() {
    let outcome = run_program(&wrap(
        "BOOL b; b = TRUE && FALSE || TRUE; PRINT(b, \" \", !b, \" \", !(1 > 2));",
    ));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "true false true\n");
}

#[test]
fn test_illegal_logical_operation() {
    let outcome = run_program(&wrap("BOOL b; b = TRUE && 1;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Illegal AND operation."));
}

#[test]
fn test_sign_operators() {
    let outcome = run_program(&wrap("INT x; x = -(2 + 3); PRINT(x, \" \", +x, \" \", -2.5);"));

    assert!(outcome.success, "{:?}", outcome.diagnostics);
    assert_eq!(outcome.output, "-5 -5 -2.5\n");
}

#[test]
fn test_illegal_sign_operand() {
    let outcome = run_program(&wrap("BOOL b; b = -TRUE;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Illegal Operand Type for Sign Operator"));
}

#[test]
fn test_illegal_not_operand() {
    let outcome = run_program(&wrap("BOOL b; b = !3;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Illegal Operand Type for NOT Operator"));
}

#[test]
fn test_unrecognized_input() {
    let outcome = run_program(&wrap("INT x; x = 1 @ 2;"));

    assert!(!outcome.success);
    assert!(outcome.reported("Unrecognized Input Pattern"));
}

#[test]
fn test_program_name_as_variable() {
    let outcome = run_program("PROGRAM p INT x; x = p; END PROGRAM");

    assert!(!outcome.success);
    assert!(outcome.reported("Illegal use of program name as a variable"));
}

#[test]
fn test_undeclared_variable_in_expression() {
    let outcome = run_program(&wrap("PRINT(nope);"));

    assert!(!outcome.success);
    assert!(outcome.reported("Undeclared Variable"));
}

#[test]
fn test_error_stops_execution() {
    let outcome = run_program(&wrap("PRINT(1); INT x; x = TRUE; PRINT(2);"));

    assert!(!outcome.success);
    assert_eq!(outcome.output, "1\n");
}

#[test]
fn test_error_lines_follow_source() {
    let source = "PROGRAM p\nINT x;\n\nx = 1 + TRUE;\nEND PROGRAM";
    let outcome = run_program(source);

    assert!(!outcome.success);
    assert_eq!(outcome.diagnostics[0], "4: Illegal ADD operation.");
}
