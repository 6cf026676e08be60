// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), no_std)]

//! A small JSON value parser for `null`, `true`, `false` and numbers.
//!
//! Parsing is a single synchronous pass over a borrowed input with no
//! allocation. The result is either a complete [`Value`] or a [`ParseError`].
//!
//! ```
//! use minijson::{parse, ParseError, ValueType};
//!
//! let value = parse(" 3.25").unwrap();
//! assert_eq!(value.value_type(), ValueType::Number);
//! assert_eq!(value.number(), 3.25);
//!
//! assert_eq!(parse("true x"), Err(ParseError::RootNotSingular));
//! // A number must run to the end of the input
//! assert_eq!(parse("3.25 "), Err(ParseError::RootNotSingular));
//! ```

// Compile-time configuration validation
mod config_check;

mod cursor;

mod literal;

mod number_parser;

mod parse_error;
pub use parse_error::ParseError;

mod parser;
pub use parser::{parse, parse_into, parse_slice};

mod value;
pub use value::{Value, ValueType};
