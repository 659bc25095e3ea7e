//! Runtime values and the operators defined over them.
//!
//! Every operator is total: an operand combination the language does not
//! allow produces [`Value::Err`] instead of failing, and the parser turns
//! that into a diagnostic naming the operator.

use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Int(i32),
    Real(f64),
    Bool(bool),
    Str(String),
    #[default]
    Err,
}

/// The static type a variable is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Int,
    Real,
    Bool,
}

impl ValueType {
    /// Maps a declaration keyword onto the type it declares.
    pub fn from_token_kind(kind: TokenKind) -> Option<ValueType> {
        match kind {
            TokenKind::Int => Some(ValueType::Int),
            TokenKind::Float => Some(ValueType::Real),
            TokenKind::Bool => Some(ValueType::Bool),
            _ => None,
        }
    }

    /// Converts `value` for storage in a variable of this type.
    ///
    /// Reals stored into an `Int` keep only their integer part and integers
    /// stored into a `Real` are promoted. Returns `None` for any other
    /// mismatch, and for reals whose integer part does not fit an `Int`.
    pub fn coerce(&self, value: Value) -> Option<Value> {
        match (self, value) {
            (ValueType::Int, Value::Int(n)) => Some(Value::Int(n)),
            (ValueType::Int, Value::Real(r)) => {
                let truncated = r.trunc();
                if !truncated.is_finite()
                    || truncated < i32::MIN as f64
                    || truncated > i32::MAX as f64
                {
                    return None;
                }
                Some(Value::Int(truncated as i32))
            }
            (ValueType::Real, Value::Real(r)) => Some(Value::Real(r)),
            (ValueType::Real, Value::Int(n)) => Some(Value::Real(n as f64)),
            (ValueType::Bool, Value::Bool(b)) => Some(Value::Bool(b)),
            _ => None,
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Int => write!(f, "INT"),
            ValueType::Real => write!(f, "FLOAT"),
            ValueType::Bool => write!(f, "BOOL"),
        }
    }
}

impl Value {
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    pub fn is_numeric(&self) -> bool {
        self.is_int() || self.is_real()
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Value::Err)
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric payload widened to a real, for mixed-mode arithmetic.
    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// True for an integer or real zero. Checked before dividing.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Int(n) => *n == 0,
            Value::Real(r) => *r == 0.0,
            _ => false,
        }
    }

    fn arithmetic(
        &self,
        other: &Value,
        int_op: fn(i32, i32) -> Option<i32>,
        real_op: fn(f64, f64) -> f64,
    ) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => int_op(*a, *b).map_or(Value::Err, Value::Int),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => Value::Real(real_op(a, b)),
                _ => Value::Err,
            },
        }
    }

    pub fn add(&self, other: &Value) -> Value {
        self.arithmetic(other, i32::checked_add, |a, b| a + b)
    }

    pub fn sub(&self, other: &Value) -> Value {
        self.arithmetic(other, i32::checked_sub, |a, b| a - b)
    }

    pub fn mul(&self, other: &Value) -> Value {
        self.arithmetic(other, i32::checked_mul, |a, b| a * b)
    }

    pub fn div(&self, other: &Value) -> Value {
        if other.is_zero() {
            return Value::Err;
        }
        self.arithmetic(other, i32::checked_div, |a, b| a / b)
    }

    pub fn equal(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Value::Bool(a == b),
            (Value::Bool(a), Value::Bool(b)) => Value::Bool(a == b),
            (Value::Str(a), Value::Str(b)) => Value::Bool(a == b),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => Value::Bool(a == b),
                _ => Value::Err,
            },
        }
    }

    pub fn greater(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Value::Bool(a > b),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => Value::Bool(a > b),
                _ => Value::Err,
            },
        }
    }

    pub fn less(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Value::Bool(a < b),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => Value::Bool(a < b),
                _ => Value::Err,
            },
        }
    }

    pub fn and(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Value::Bool(*a && *b),
            _ => Value::Err,
        }
    }

    pub fn or(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Value::Bool(*a || *b),
            _ => Value::Err,
        }
    }

    pub fn negate(&self) -> Value {
        match self {
            Value::Int(n) => n.checked_neg().map_or(Value::Err, Value::Int),
            Value::Real(r) => Value::Real(-r),
            _ => Value::Err,
        }
    }

    pub fn not(&self) -> Value {
        match self {
            Value::Bool(b) => Value::Bool(!b),
            _ => Value::Err,
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Real(r) => write!(f, "{}", format_real(*r)),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{}", s),
            Value::Err => write!(f, "ERROR"),
        }
    }
}

/// Six significant digits, switching to an exponent below `1e-4` and from
/// `1e6` upwards. Trailing zeros are dropped, so `3.0` prints as `3`.
fn format_real(r: f64) -> String {
    if !r.is_finite() {
        return r.to_string();
    }

    let scientific = format!("{:.5e}", r);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if !(-4..6).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs());
    }

    let decimals = (5 - exponent) as usize;
    trim_fraction(&format!("{:.*}", decimals, r)).to_string()
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
