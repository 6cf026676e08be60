// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during JSON parsing
///
/// A failed parse never yields a partial value: the result is either a complete
/// [`Value`](crate::Value) or exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// A value was started but is not a valid literal or number.
    InvalidValue,
    /// A value was parsed but content follows it: anything other than whitespace
    /// after a literal, or any byte at all directly after a number.
    RootNotSingular,
    /// A number is too large in magnitude to be represented as an `f64`.
    NumberTooBig,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "unexpected content after the root value",
            ParseError::NumberTooBig => "number too big",
        };
        f.write_str(msg)
    }
}
