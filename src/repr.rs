//! Render [`Value`]s as Vim script literals.
//!
//! The output is meant to be pasted into `:let`/`eval()`:
//!
//! ```
//! use vimkit::{repr::vim_repr, value::Value};
//!
//! let value = Value::from(vec![Value::from(1), Value::from("it's"), Value::from(2.5)]);
//! assert_eq!(vim_repr(&value), "[1, 'it''s', 2.5]");
//! ```

use std::fmt::{self, Write};

use serde::Serialize;

use crate::error::Result;
use crate::value::{Dict, Key, Value};

/// Render `value` as a Vim script literal.
pub fn vim_repr(value: &Value) -> String {
    value.to_string()
}

/// Convert any serializable value and render it.
///
/// # Errors
/// Returns [`crate::Error::UnsupportedType`] for booleans, null/unit and
/// `None` anywhere inside `value`.
pub fn repr_of<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Value::from_serialize(value).map(|v| vim_repr(&v))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write_float(f, *x),
            Self::Str(s) => write_string(f, s),
            Self::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Self::Dict(dict) => write_dict(f, dict),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => write_string(f, s),
        }
    }
}

// Vim single-quoted strings take everything literally except `'`, which is
// written twice.
fn write_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('\'')?;
    for (i, part) in s.split('\'').enumerate() {
        if i > 0 {
            f.write_str("''")?;
        }
        f.write_str(part)?;
    }
    f.write_char('\'')
}

// Every entry is followed by ", ", including the last one. Vim accepts the
// trailing separator.
fn write_dict(f: &mut fmt::Formatter<'_>, dict: &Dict) -> fmt::Result {
    f.write_char('{')?;
    for (key, value) in dict.iter() {
        write!(f, "{key}: {value}, ")?;
    }
    f.write_char('}')
}

// A Vim Float literal needs a `.` before any exponent, otherwise `1e20`
// parses as the Number 1 followed by garbage.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("str2float('nan')");
    }
    if x.is_infinite() {
        let sign = if x.is_sign_negative() { "-" } else { "" };
        return write!(f, "str2float('{sign}inf')");
    }
    let text = format!("{x:?}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !mantissa.contains('.') => write!(f, "{mantissa}.0e{exp}"),
        _ => f.write_str(&text),
    }
}
