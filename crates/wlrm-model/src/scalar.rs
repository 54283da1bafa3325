//! String form of JSON identifier values.

use serde_json::Value;

/// Render an identifier value the way it should appear in import ids.
///
/// Strings are used verbatim and integers in decimal. Floats follow the
/// number-to-string rules of the exporting tooling: integral values drop their
/// fraction (`7.0` renders as `7`), magnitudes from `1e21` up or below `1e-6`
/// use exponent form (`1e+21`, `1.5e-7`). Arrays and objects fall back to
/// compact JSON.
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                int.to_string()
            } else if let Some(uint) = number.as_u64() {
                uint.to_string()
            } else {
                number
                    .as_f64()
                    .map_or_else(|| number.to_string(), format_float)
            }
        }
        Value::Bool(flag) => flag.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn format_float(float: f64) -> String {
    if float == 0.0 {
        return "0".to_string();
    }
    let magnitude = float.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{float}");
    }
    let exponent_form = format!("{float:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponent_form,
    }
}
