//! Textual rendering of JSON values for report cells
//!
//! A value that is absent from the actual document is passed around as
//! `None` and rendered as [`UNDEFINED`], which keeps it distinguishable from
//! a JSON `null`.

use serde_json::{Number, Value};

/// Rendering of a value that does not exist
pub const UNDEFINED: &str = "undefined";

/// Render a value for display in a report cell
///
/// Scalars render as plain text (strings without quotes), structured values as
/// compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Render a possibly absent value
pub fn render_slot(value: Option<&Value>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), render_value)
}

/// Render a number in its canonical textual form
///
/// Integral floats drop their fractional part (`1.0` renders as `1`), and
/// magnitudes at or above `1e21` or below `1e-6` use exponent notation
/// (`1e+21`, `1.5e-7`).
pub fn render_number(number: &Number) -> String {
    if let Some(i) = number.as_i64() {
        return i.to_string();
    }
    if let Some(u) = number.as_u64() {
        return u.to_string();
    }
    match number.as_f64() {
        Some(f) => render_float(f),
        None => number.to_string(),
    }
}

fn render_float(f: f64) -> String {
    if f == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }

    let magnitude = f.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{f:e}");
        if formatted.contains("e-") {
            formatted
        } else {
            formatted.replacen('e', "e+", 1)
        }
    } else {
        format!("{f}")
    }
}

/// Name of a value's type, as shown when an expected array meets something else
///
/// `null` reports as `object`.
pub fn type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => UNDEFINED,
        Some(Value::Null) | Some(Value::Object(_)) | Some(Value::Array(_)) => "object",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
    }
}
