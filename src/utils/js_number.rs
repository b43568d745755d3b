//! Renders `f64` values the way a JavaScript runtime prints numbers.
//!
//! Log consumers of this service expect `5` rather than `5.0` and `Infinity`
//! instead of `inf`. [`serialize`] applies the same rule to JSON bodies.

use std::fmt;

use serde::Serializer;

/// Largest integer an `f64` holds exactly (`Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Magnitude at and above which JavaScript switches to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which JavaScript switches to exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Display wrapper printing a number in JavaScript `String(number)` form.
///
/// # Examples
///
/// ```
/// use calculator_service::utils::JsNumber;
///
/// assert_eq!(JsNumber(5.0).to_string(), "5");
/// assert_eq!(JsNumber(2.5).to_string(), "2.5");
/// assert_eq!(JsNumber(f64::NAN).to_string(), "NaN");
/// assert_eq!(JsNumber(f64::NEG_INFINITY).to_string(), "-Infinity");
/// assert_eq!(JsNumber(1e21).to_string(), "1e+21");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsNumber(pub f64);

impl fmt::Display for JsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        // -0 prints as 0
        if value == 0.0 {
            return f.write_str("0");
        }

        let magnitude = value.abs();
        if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
            return write!(f, "{value}");
        }

        let exponent_form = format!("{value:e}");
        match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&exponent_form),
        }
    }
}

/// Serde `serialize_with` helper writing an `f64` as `JSON.stringify` does.
///
/// Integral values within the safe-integer range are written without a
/// fractional part, other finite values as floats and `NaN`/`Infinity` as
/// `null`.
///
/// ```
/// #[derive(serde::Serialize)]
/// struct Body {
///     #[serde(serialize_with = "calculator_service::utils::js_number::serialize")]
///     value: f64,
/// }
///
/// let json = serde_json::to_string(&Body { value: 5.0 }).unwrap();
/// assert_eq!(json, r#"{"value":5}"#);
/// ```
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = *value;
    if !value.is_finite() {
        serializer.serialize_none()
    } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_have_no_fraction() {
        assert_eq!(JsNumber(5.0).to_string(), "5");
        assert_eq!(JsNumber(-12.0).to_string(), "-12");
        assert_eq!(JsNumber(-0.0).to_string(), "0");
    }

    #[test]
    fn test_fractions_use_shortest_representation() {
        assert_eq!(JsNumber(2.5).to_string(), "2.5");
        assert_eq!(JsNumber(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(JsNumber(0.000001).to_string(), "0.000001");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(JsNumber(f64::NAN).to_string(), "NaN");
        assert_eq!(JsNumber(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(JsNumber(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_exponent_notation_at_extremes() {
        assert_eq!(JsNumber(1e21).to_string(), "1e+21");
        assert_eq!(JsNumber(-2.5e30).to_string(), "-2.5e+30");
        assert_eq!(JsNumber(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(JsNumber(1e20).to_string(), "100000000000000000000");
    }

    #[derive(serde::Serialize)]
    struct Wrapped {
        #[serde(serialize_with = "serialize")]
        value: f64,
    }

    fn to_json(value: f64) -> String {
        serde_json::to_string(&Wrapped { value }).unwrap()
    }

    #[test]
    fn test_serialize_writes_integers_without_fraction() {
        assert_eq!(to_json(5.0), r#"{"value":5}"#);
        assert_eq!(to_json(-6.0), r#"{"value":-6}"#);
        assert_eq!(to_json(-0.0), r#"{"value":0}"#);
        assert_eq!(to_json(MAX_SAFE_INTEGER), r#"{"value":9007199254740991}"#);
    }

    #[test]
    fn test_serialize_keeps_fractions_and_nulls_non_finite() {
        assert_eq!(to_json(2.5), r#"{"value":2.5}"#);
        assert_eq!(to_json(0.1 + 0.2), r#"{"value":0.30000000000000004}"#);
        assert_eq!(to_json(f64::INFINITY), r#"{"value":null}"#);
        assert_eq!(to_json(f64::NAN), r#"{"value":null}"#);
    }
}
