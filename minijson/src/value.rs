// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::ParseError;

/// The type tag of a parsed [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ValueType::Null => "null",
            ValueType::False => "false",
            ValueType::True => "true",
            ValueType::Number => "number",
        };
        f.write_str(name)
    }
}

/// A parsed JSON value.
///
/// A value starts out as [`Value::Null`] and only takes another variant once
/// that variant has been parsed successfully.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    False,
    True,
    Number(f64),
}

impl Value {
    /// Get the type tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::False => ValueType::False,
            Value::True => ValueType::True,
            Value::Number(_) => ValueType::Number,
        }
    }

    /// Get the numeric payload.
    ///
    /// # Panics
    /// Panics if the value is not a [`Value::Number`]. Use [`Value::as_f64`]
    /// when the type is not known in advance.
    pub fn number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("Value::number called on a {} value", other.value_type()),
        }
    }

    /// Get the number as an f64, or None for any other type.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean for `true` / `false`, or None for any other type.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
