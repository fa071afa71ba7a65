//! Compact JSON serialization
//!
//! Deterministic tree walk with no inserted whitespace. Both value
//! representations implement [`Display`](std::fmt::Display), so
//! `value.to_string()` works on either; [`to_string`] is the free-function
//! form for owned trees.
//!
//! Rendering notes: floats use Rust's shortest round-trip formatting
//! (`3.14`, never `3.140000`), with a `.0` suffix on integral values so the
//! float variant survives a reparse; non-finite floats cannot come out of
//! the parser and render as `null`. Object member order is implementation
//! defined.

use std::fmt::{self, Write};

use crate::value::{ArenaValue, JsonValue};

/// Serialize an owned value tree to compact JSON text
pub fn to_string(value: &JsonValue) -> String {
    value.to_string()
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_owned(f, self)
    }
}

impl fmt::Display for ArenaValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_arena(f, self)
    }
}

fn write_owned<W: Write>(out: &mut W, value: &JsonValue) -> fmt::Result {
    match value {
        JsonValue::Null => out.write_str("null"),
        JsonValue::Bool(true) => out.write_str("true"),
        JsonValue::Bool(false) => out.write_str("false"),
        JsonValue::Integer(i) => write!(out, "{i}"),
        JsonValue::Float(f) => write_float(out, *f),
        JsonValue::String(s) => write_escaped(out, s),
        JsonValue::Array(items) => {
            out.write_char('[')?;
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.write_char(',')?;
                }
                write_owned(out, item)?;
            }
            out.write_char(']')
        }
        JsonValue::Object(members) => {
            out.write_char('{')?;
            for (index, (key, member)) in members.iter().enumerate() {
                if index > 0 {
                    out.write_char(',')?;
                }
                write_escaped(out, key)?;
                out.write_char(':')?;
                write_owned(out, member)?;
            }
            out.write_char('}')
        }
    }
}

fn write_arena<W: Write>(out: &mut W, value: &ArenaValue<'_>) -> fmt::Result {
    match value {
        ArenaValue::Null => out.write_str("null"),
        ArenaValue::Bool(true) => out.write_str("true"),
        ArenaValue::Bool(false) => out.write_str("false"),
        ArenaValue::Integer(i) => write!(out, "{i}"),
        ArenaValue::Float(f) => write_float(out, *f),
        ArenaValue::String(s) => write_escaped(out, s),
        ArenaValue::Array(items) => {
            out.write_char('[')?;
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.write_char(',')?;
                }
                write_arena(out, item)?;
            }
            out.write_char(']')
        }
        ArenaValue::Object(members) => {
            out.write_char('{')?;
            for (index, (key, member)) in members.iter().enumerate() {
                if index > 0 {
                    out.write_char(',')?;
                }
                write_escaped(out, key)?;
                out.write_char(':')?;
                write_arena(out, member)?;
            }
            out.write_char('}')
        }
    }
}

/// `{}` on f64 is the shortest decimal that round-trips to the same value.
/// Integral floats get a `.0` suffix so the text stays classified as a float
/// on reparse; without it, a magnitude beyond `i64` would not reparse at all.
fn write_float<W: Write>(out: &mut W, value: f64) -> fmt::Result {
    if !value.is_finite() {
        return out.write_str("null");
    }
    let text = value.to_string();
    out.write_str(&text)?;
    if !text.contains(['.', 'e', 'E']) {
        out.write_str(".0")?;
    }
    Ok(())
}

fn write_escaped<W: Write>(out: &mut W, text: &str) -> fmt::Result {
    out.write_char('"')?;
    for ch in text.chars() {
        match ch {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\u{0008}' => out.write_str("\\b")?,
            '\u{000C}' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            ch if (ch as u32) < 0x20 => write!(out, "\\u{:04x}", ch as u32)?,
            ch => out.write_char(ch)?,
        }
    }
    out.write_char('"')
}
