// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::cursor::Cursor;
use crate::{ParseError, Value};

/// Validates the JSON number grammar ahead of the cursor without consuming it.
///
/// Returns the length of the leading bytes that form a complete number and can
/// be handed to the float conversion. With the lenient exponent grammar an
/// exponent marker without digits (`1e`, `1E+`) is scanned but not part of that
/// length, leaving it in the input for the caller to reject as trailing content.
///
/// The scan must end at end of input. Any byte left after the token, including
/// whitespace, makes the document `RootNotSingular`, so `0123`, `0x0` and `1 `
/// are reported that way rather than as invalid numbers.
pub fn scan_number(cursor: &Cursor<'_>) -> Result<usize, ParseError> {
    let mut len = 0;

    if cursor.peek_at(len) == Some(b'-') {
        len += 1;
    }

    // Integer part: a single 0, or 1-9 followed by any digits
    match cursor.peek_at(len) {
        Some(b'0') => len += 1,
        Some(b'1'..=b'9') => len = skip_digits(cursor, len + 1),
        _ => {
            log::debug!("number without integer part at {}", cursor.current_pos());
            return Err(ParseError::InvalidValue);
        }
    }

    // Fraction part: a dot followed by at least one digit
    if cursor.peek_at(len) == Some(b'.') {
        len += 1;
        if !is_digit(cursor.peek_at(len)) {
            log::debug!("fraction without digits at {}", cursor.current_pos() + len);
            return Err(ParseError::InvalidValue);
        }
        len = skip_digits(cursor, len);
    }

    let mut convertible = len;

    if let Some(b'e' | b'E') = cursor.peek_at(len) {
        len += 1;
        if let Some(b'+' | b'-') = cursor.peek_at(len) {
            len += 1;
        }
        let digits_start = len;
        len = skip_digits(cursor, len);
        if len > digits_start {
            convertible = len;
        } else if cfg!(feature = "exponent-strict") {
            log::debug!("exponent without digits at {}", cursor.current_pos() + len);
            return Err(ParseError::InvalidValue);
        }
    }

    match cursor.peek_at(len) {
        None => Ok(convertible),
        Some(other) => {
            log::debug!(
                "unexpected byte {:#04x} after number at {}",
                other,
                cursor.current_pos() + len
            );
            Err(ParseError::RootNotSingular)
        }
    }
}

/// Scans, converts and consumes a number at the cursor.
pub fn parse_number(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let convertible = scan_number(cursor)?;
    let number_bytes = match cursor.remaining().get(..convertible) {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Err(ParseError::InvalidValue),
    };

    let n = parse_float(number_bytes)?;
    cursor.advance(number_bytes.len());
    Ok(Value::Number(n))
}

/// Converts a grammar-checked number to f64, independent of any locale.
///
/// Underflow rounds to zero or a subnormal and is accepted; overflow to
/// infinity is `NumberTooBig`.
pub fn parse_float(bytes: &[u8]) -> Result<f64, ParseError> {
    // The scan admits ASCII only, so this cannot fail for scanned input
    let s = core::str::from_utf8(bytes).map_err(|_| ParseError::InvalidValue)?;
    let n = f64::from_str(s).map_err(|_| ParseError::InvalidValue)?;
    if n.is_infinite() {
        log::debug!("number {s} overflows f64");
        return Err(ParseError::NumberTooBig);
    }
    Ok(n)
}

fn is_digit(byte: Option<u8>) -> bool {
    matches!(byte, Some(b'0'..=b'9'))
}

fn skip_digits(cursor: &Cursor<'_>, mut offset: usize) -> usize {
    while is_digit(cursor.peek_at(offset)) {
        offset += 1;
    }
    offset
}
