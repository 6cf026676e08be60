// SPDX-License-Identifier: Apache-2.0

use crate::cursor::Cursor;
use crate::literal::parse_literal;
use crate::number_parser::parse_number;
use crate::{ParseError, Value};

/// Parses a complete JSON document containing a single literal or number.
///
/// Leading whitespace is allowed, and so is trailing whitespace after a
/// literal. A number must extend to the end of the input; any byte after it,
/// whitespace included, is `RootNotSingular`.
///
/// # Example
/// ```
/// use minijson::{parse, ParseError, Value};
/// assert_eq!(parse(" true "), Ok(Value::True));
/// assert_eq!(parse("-1.5E-3"), Ok(Value::Number(-1.5e-3)));
/// assert_eq!(parse("  "), Err(ParseError::ExpectValue));
/// ```
pub fn parse(json: &str) -> Result<Value, ParseError> {
    parse_slice(json.as_bytes())
}

/// Parses a JSON document from a byte slice.
///
/// The input does not have to be UTF-8; any byte outside the JSON grammar is
/// reported like any other malformed input.
pub fn parse_slice(json: &[u8]) -> Result<Value, ParseError> {
    let mut cursor = Cursor::new(json);
    cursor.skip_whitespace();
    let value = parse_value(&mut cursor)?;
    cursor.skip_whitespace();
    if !cursor.is_at_end() {
        log::debug!("trailing content at {} after root value", cursor.current_pos());
        return Err(ParseError::RootNotSingular);
    }
    Ok(value)
}

/// Parses `json` into caller-provided storage.
///
/// `value` is reset to [`Value::Null`] before parsing and stays `Null` if
/// parsing fails, so a failed parse never leaves a partially typed value.
///
/// # Example
/// ```
/// use minijson::{parse_into, ParseError, Value};
/// let mut value = Value::True;
/// assert_eq!(parse_into(&mut value, "1e400"), Err(ParseError::NumberTooBig));
/// assert_eq!(value, Value::Null);
/// ```
pub fn parse_into(value: &mut Value, json: &str) -> Result<(), ParseError> {
    *value = Value::Null;
    *value = parse(json)?;
    Ok(())
}

fn parse_value(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    log::trace!("dispatching on {:?} at {}", cursor.peek(), cursor.current_pos());
    match cursor.peek() {
        Some(b't') => parse_literal(cursor, b"true", Value::True),
        Some(b'f') => parse_literal(cursor, b"false", Value::False),
        Some(b'n') => parse_literal(cursor, b"null", Value::Null),
        Some(_) => parse_number(cursor),
        None => {
            log::debug!("no value found");
            Err(ParseError::ExpectValue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueType;
    use test_log::test;

    #[test]
    fn test_parse_literals() {
        assert_eq!(parse("null"), Ok(Value::Null));
        assert_eq!(parse("true"), Ok(Value::True));
        assert_eq!(parse("false"), Ok(Value::False));
    }

    #[test]
    fn test_whitespace_around_value() {
        assert_eq!(parse("  true  "), parse("true"));
        assert_eq!(parse("\t\r\nnull\n"), Ok(Value::Null));
        assert_eq!(parse(" 0"), Ok(Value::Number(0.0)));
    }

    #[test]
    fn test_number_followed_by_whitespace() {
        for input in ["1 ", " 0 ", "3.14\n", "-2\t", "1e400 "] {
            assert_eq!(
                parse(input),
                Err(ParseError::RootNotSingular),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_expect_value() {
        assert_eq!(parse(""), Err(ParseError::ExpectValue));
        assert_eq!(parse(" \t\n\r"), Err(ParseError::ExpectValue));
    }

    #[test]
    fn test_invalid_value() {
        for input in ["nul", "?", "tru", "fals", "+0", ".123", "1.", "INF", "NAN"] {
            assert_eq!(parse(input), Err(ParseError::InvalidValue), "input: {input:?}");
        }
    }

    #[test]
    fn test_root_not_singular() {
        for input in ["null x", "true x", "1 2", "0123", "0x0", "falsey"] {
            assert_eq!(
                parse(input),
                Err(ParseError::RootNotSingular),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_number_too_big() {
        assert_eq!(parse("1e400"), Err(ParseError::NumberTooBig));
        assert_eq!(parse("-1e309"), Err(ParseError::NumberTooBig));
    }

    #[test]
    fn test_parse_slice_non_utf8() {
        assert_eq!(parse_slice(&[0xC3, 0x28]), Err(ParseError::InvalidValue));
        assert_eq!(parse_slice(b"true\xFF"), Err(ParseError::RootNotSingular));
    }

    #[test]
    fn test_parse_into_resets_on_failure() {
        let mut value = Value::Number(1.0);
        assert_eq!(parse_into(&mut value, "tru"), Err(ParseError::InvalidValue));
        assert_eq!(value.value_type(), ValueType::Null);

        assert_eq!(parse_into(&mut value, "false"), Ok(()));
        assert_eq!(value, Value::False);

        assert_eq!(parse_into(&mut value, "false x"), Err(ParseError::RootNotSingular));
        assert!(value.is_null());
    }
}
