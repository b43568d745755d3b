//! Operand parsing and validation.
//!
//! Turns the raw `num1`/`num2` query values into a [`Operands`] pair or a
//! [`ValidationError`]. Validation is pure; logging the failure is left to
//! the caller.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::utils::JsNumber;

/// Longest decimal literal accepted at the start of an operand.
///
/// Digits are ASCII only (`\d` would match any Unicode digit).
static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap()
});

/// How much of an operand string has to be numeric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberParsing {
    /// Accepts a numeric prefix and ignores the rest (`"5abc"` parses as 5).
    #[default]
    Lenient,
    /// The whole value, apart from surrounding whitespace, must be numeric.
    Strict,
}

impl NumberParsing {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl FromStr for NumberParsing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("lenient") {
            Ok(Self::Lenient)
        } else if s.eq_ignore_ascii_case("strict") {
            Ok(Self::Strict)
        } else {
            Err(format!(
                "number parsing must be 'lenient' or 'strict', got '{s}'"
            ))
        }
    }
}

/// Operand values exactly as they arrived in the query string.
///
/// `None` means the parameter was absent; `Some("")` means it was present
/// but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOperands {
    pub num1: Option<String>,
    pub num2: Option<String>,
}

impl RawOperands {
    pub fn new(num1: Option<String>, num2: Option<String>) -> Self {
        Self { num1, num2 }
    }
}

/// Two validated, finite operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub num1: f64,
    pub num2: f64,
}

/// Why a raw operand pair was rejected.
///
/// The `Display` text is the message written to the error log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// One or both values were absent or empty. Fields hold the raw values,
    /// with `undefined` standing in for an absent parameter.
    #[error("Missing parameters: num1={num1}, num2={num2}")]
    MissingParameters { num1: String, num2: String },

    /// One or both values did not parse to a finite number. Fields hold the
    /// parsed values.
    #[error("Invalid number input: num1={num1}, num2={num2}")]
    InvalidNumber { num1: JsNumber, num2: JsNumber },

    /// The query string itself could not be decoded.
    #[error("Malformed query string: {reason}")]
    MalformedQuery { reason: String },
}

impl Operands {
    /// Validates a raw operand pair.
    ///
    /// The presence check runs before any parsing, so `num1=abc` with `num2`
    /// absent is a [`ValidationError::MissingParameters`].
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingParameters`] if either value is absent or empty
    /// - [`ValidationError::InvalidNumber`] if either value is not a finite number
    pub fn parse(raw: &RawOperands, mode: NumberParsing) -> Result<Self, ValidationError> {
        let (Some(raw1), Some(raw2)) = (non_empty(&raw.num1), non_empty(&raw.num2)) else {
            return Err(missing(raw));
        };

        let num1 = parse_number(raw1, mode);
        let num2 = parse_number(raw2, mode);

        if !num1.is_finite() || !num2.is_finite() {
            return Err(ValidationError::InvalidNumber {
                num1: JsNumber(num1),
                num2: JsNumber(num2),
            });
        }

        Ok(Self { num1, num2 })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn missing(raw: &RawOperands) -> ValidationError {
    let render = |value: &Option<String>| value.clone().unwrap_or_else(|| "undefined".to_string());
    ValidationError::MissingParameters {
        num1: render(&raw.num1),
        num2: render(&raw.num2),
    }
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Parses a decimal number from the start of `input`.
///
/// Returns `NaN` when no number can be read. Leading whitespace is always
/// skipped; in [`NumberParsing::Strict`] mode anything after the literal
/// other than whitespace also yields `NaN`.
///
/// # Examples
///
/// ```
/// use calculator_service::domain::operands::{NumberParsing, parse_number};
///
/// assert_eq!(parse_number("5abc", NumberParsing::Lenient), 5.0);
/// assert!(parse_number("5abc", NumberParsing::Strict).is_nan());
/// assert!(parse_number("abc", NumberParsing::Lenient).is_nan());
/// ```
pub fn parse_number(input: &str, mode: NumberParsing) -> f64 {
    let trimmed = input.trim_start_matches(is_js_whitespace);

    let Some(literal) = DECIMAL_LITERAL.find(trimmed) else {
        return f64::NAN;
    };

    if mode == NumberParsing::Strict
        && literal.end() != trimmed.trim_end_matches(is_js_whitespace).len()
    {
        return f64::NAN;
    }

    let literal = literal.as_str();
    if literal.ends_with("Infinity") {
        return if literal.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    literal.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(num1: Option<&str>, num2: Option<&str>) -> RawOperands {
        RawOperands::new(num1.map(String::from), num2.map(String::from))
    }

    #[test]
    fn test_parse_valid_pair() {
        let operands = Operands::parse(&raw(Some("2"), Some("3.5")), NumberParsing::Lenient).unwrap();
        assert_eq!(operands, Operands { num1: 2.0, num2: 3.5 });
    }

    #[test]
    fn test_absent_parameter_is_missing() {
        let err = Operands::parse(&raw(Some("2"), None), NumberParsing::Lenient).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingParameters {
                num1: "2".to_string(),
                num2: "undefined".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Missing parameters: num1=2, num2=undefined");
    }

    #[test]
    fn test_empty_parameter_is_missing() {
        let err = Operands::parse(&raw(Some(""), Some("4")), NumberParsing::Lenient).unwrap_err();
        assert_eq!(err.to_string(), "Missing parameters: num1=, num2=4");
    }

    #[test]
    fn test_presence_check_precedes_parsing() {
        let err = Operands::parse(&raw(Some("abc"), None), NumberParsing::Lenient).unwrap_err();
        assert!(matches!(err, ValidationError::MissingParameters { .. }));
    }

    #[test]
    fn test_non_numeric_is_invalid() {
        let err = Operands::parse(&raw(Some("foo"), Some("3")), NumberParsing::Lenient).unwrap_err();
        assert_eq!(err.to_string(), "Invalid number input: num1=NaN, num2=3");
    }

    #[test]
    fn test_whitespace_only_is_invalid_not_missing() {
        let err = Operands::parse(&raw(Some(" "), Some("3")), NumberParsing::Lenient).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidNumber { .. }));
    }

    #[test]
    fn test_non_finite_values_are_invalid() {
        let err =
            Operands::parse(&raw(Some("Infinity"), Some("1")), NumberParsing::Lenient).unwrap_err();
        assert_eq!(err.to_string(), "Invalid number input: num1=Infinity, num2=1");

        let err = Operands::parse(&raw(Some("1"), Some("1e999")), NumberParsing::Lenient).unwrap_err();
        assert_eq!(err.to_string(), "Invalid number input: num1=1, num2=Infinity");
    }

    #[test]
    fn test_lenient_accepts_numeric_prefix() {
        assert_eq!(parse_number("5abc", NumberParsing::Lenient), 5.0);
        assert_eq!(parse_number("  -2.5e2xyz", NumberParsing::Lenient), -250.0);
        assert_eq!(parse_number("1e", NumberParsing::Lenient), 1.0);
        assert_eq!(parse_number("3.", NumberParsing::Lenient), 3.0);
        assert_eq!(parse_number(".5", NumberParsing::Lenient), 0.5);
        assert_eq!(parse_number("+7", NumberParsing::Lenient), 7.0);
        assert_eq!(parse_number("0x10", NumberParsing::Lenient), 0.0);
    }

    #[test]
    fn test_lenient_rejects_non_numeric_start() {
        assert!(parse_number("abc", NumberParsing::Lenient).is_nan());
        assert!(parse_number(".", NumberParsing::Lenient).is_nan());
        assert!(parse_number("-", NumberParsing::Lenient).is_nan());
        assert!(parse_number("infinity", NumberParsing::Lenient).is_nan());
        assert!(parse_number("١٢", NumberParsing::Lenient).is_nan());
    }

    #[test]
    fn test_strict_requires_whole_value() {
        assert_eq!(parse_number(" 42 ", NumberParsing::Strict), 42.0);
        assert_eq!(parse_number("-1.25e-1", NumberParsing::Strict), -0.125);
        assert!(parse_number("5abc", NumberParsing::Strict).is_nan());
        assert!(parse_number("1e", NumberParsing::Strict).is_nan());
        assert!(parse_number("4 2", NumberParsing::Strict).is_nan());
    }

    #[test]
    fn test_number_parsing_from_str() {
        assert_eq!("strict".parse::<NumberParsing>().unwrap(), NumberParsing::Strict);
        assert_eq!("LENIENT".parse::<NumberParsing>().unwrap(), NumberParsing::Lenient);
        assert!("loose".parse::<NumberParsing>().is_err());
    }
}
