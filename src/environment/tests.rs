//! Unit tests for the variable environment.

use super::environment::Environment;
use crate::{
    errors::errors::ErrorImpl,
    values::value::{Value, ValueType},
};

#[test]
fn test_declare_variable() {
    let mut env = Environment::new();

    assert!(env.declare_variable("x".to_string(), ValueType::Int).is_ok());
    assert!(env.is_declared("x"));
    assert_eq!(env.get_type("x"), Some(ValueType::Int));
    assert!(!env.is_declared("y"));
}

#[test]
fn test_redeclaration_is_rejected() {
    let mut env = Environment::new();
    env.declare_variable("x".to_string(), ValueType::Int).unwrap();

    let result = env.declare_variable("x".to_string(), ValueType::Bool);

    assert_eq!(result, Err(ErrorImpl::VariableRedefinition));
    assert_eq!(env.get_type("x"), Some(ValueType::Int));
}

#[test]
fn test_unassigned_variable_is_err() {
    let mut env = Environment::new();
    env.declare_variable("x".to_string(), ValueType::Real).unwrap();

    assert!(env.get_value("x").is_err());
}

#[test]
fn test_assign_coerces() {
    let mut env = Environment::new();
    env.declare_variable("i".to_string(), ValueType::Int).unwrap();
    env.declare_variable("r".to_string(), ValueType::Real).unwrap();

    env.assign("i", Value::Real(3.5)).unwrap();
    env.assign("r", Value::Int(2)).unwrap();

    assert_eq!(env.get_value("i"), Value::Int(3));
    assert_eq!(env.get_value("r"), Value::Real(2.0));
    assert_eq!(env.get_bindings().len(), 2);
}

#[test]
fn test_illegal_assignment() {
    let mut env = Environment::new();
    env.declare_variable("b".to_string(), ValueType::Bool).unwrap();

    assert_eq!(env.assign("b", Value::Int(1)), Err(ErrorImpl::IllegalAssignment));
    assert!(env.get_value("b").is_err());
}

#[test]
fn test_assign_undeclared() {
    let mut env = Environment::new();

    assert_eq!(env.assign("z", Value::Int(1)), Err(ErrorImpl::UndeclaredVariable));
}

#[test]
fn test_program_name() {
    let mut env = Environment::new();
    env.declare_program("circle".to_string());

    assert!(env.is_program_name("circle"));
    assert!(!env.is_program_name("x"));
    assert!(!env.is_declared("circle"));
}
