// SPDX-License-Identifier: Apache-2.0

use crate::cursor::Cursor;
use crate::{ParseError, Value};

/// Matches the keyword `literal` at the cursor and produces `value`.
///
/// The caller has already dispatched on the first byte, so it must match the
/// keyword's first byte. On a mismatch the cursor stays at the start of the
/// literal and `InvalidValue` is returned.
pub fn parse_literal(
    cursor: &mut Cursor<'_>,
    literal: &'static [u8],
    value: Value,
) -> Result<Value, ParseError> {
    debug_assert_eq!(
        cursor.peek(),
        literal.first().copied(),
        "literal dispatched on a mismatching byte"
    );

    for (offset, &expected) in literal.iter().enumerate() {
        if cursor.peek_at(offset) != Some(expected) {
            log::debug!(
                "literal mismatch at offset {} of {:?}",
                cursor.current_pos() + offset,
                core::str::from_utf8(literal).unwrap_or("?")
            );
            return Err(ParseError::InvalidValue);
        }
    }

    cursor.advance(literal.len());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_literal_match_advances() {
        let mut cursor = Cursor::new(b"true ");
        assert_eq!(
            parse_literal(&mut cursor, b"true", Value::True),
            Ok(Value::True)
        );
        assert_eq!(cursor.current_pos(), 4);
    }

    #[test]
    fn test_literal_mismatch() {
        let mut cursor = Cursor::new(b"fals3");
        assert_eq!(
            parse_literal(&mut cursor, b"false", Value::False),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(cursor.current_pos(), 0);
    }

    #[test]
    fn test_literal_truncated() {
        let mut cursor = Cursor::new(b"nul");
        assert_eq!(
            parse_literal(&mut cursor, b"null", Value::Null),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_literal_prefix_only_is_matched() {
        // Trailing bytes are the dispatcher's concern, not the matcher's
        let mut cursor = Cursor::new(b"nullx");
        assert_eq!(
            parse_literal(&mut cursor, b"null", Value::Null),
            Ok(Value::Null)
        );
        assert_eq!(cursor.peek(), Some(b'x'));
    }
}
