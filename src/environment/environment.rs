use std::collections::{HashMap, HashSet};

use crate::{
    errors::errors::ErrorImpl,
    values::value::{Value, ValueType},
};

#[derive(Debug, Default)]
pub struct Environment {
    pub program_name: Option<String>,
    /// Declared-set, kept apart from the type lookup so redeclaration can be
    /// detected without touching types.
    declared: HashSet<String>,
    variable_lookup: HashMap<String, ValueType>,
    bindings: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn declare_program(&mut self, name: String) {
        self.program_name = Some(name);
    }

    pub fn is_program_name(&self, name: &str) -> bool {
        self.program_name.as_deref() == Some(name)
    }

    pub fn declare_variable(
        &mut self,
        variable_name: String,
        variable_type: ValueType,
    ) -> Result<(), ErrorImpl> {
        if !self.declared.insert(variable_name.clone()) {
            return Err(ErrorImpl::VariableRedefinition);
        }
        self.variable_lookup.insert(variable_name, variable_type);
        Ok(())
    }

    pub fn is_declared(&self, variable_name: &str) -> bool {
        self.declared.contains(variable_name)
    }

    pub fn get_type(&self, variable_name: &str) -> Option<ValueType> {
        self.variable_lookup.get(variable_name).copied()
    }

    /// Coerces `value` to the variable's declared type and stores it.
    pub fn assign(&mut self, variable_name: &str, value: Value) -> Result<(), ErrorImpl> {
        let variable_type = self
            .get_type(variable_name)
            .ok_or(ErrorImpl::UndeclaredVariable)?;
        let value = variable_type
            .coerce(value)
            .ok_or(ErrorImpl::IllegalAssignment)?;

        self.bindings.insert(variable_name.to_string(), value);
        Ok(())
    }

    /// Current value of a declared variable; `Value::Err` until it is
    /// first assigned.
    pub fn get_value(&self, variable_name: &str) -> Value {
        self.bindings.get(variable_name).cloned().unwrap_or_default()
    }

    pub fn get_bindings(&self) -> &HashMap<String, Value> {
        &self.bindings
    }
}
