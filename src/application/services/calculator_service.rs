//! The validate-compute-log pipeline shared by every arithmetic route.

use std::fmt::Display;
use std::sync::Arc;

use crate::domain::{
    Calculation, EventSink, NumberParsing, Operands, Operation, RawOperands, ValidationError,
};
use crate::error::AppError;

/// Runs one arithmetic request from raw query values to a result.
///
/// Every call logs exactly one event through the injected [`EventSink`]:
/// an info line on success, an error line on any failure. The service keeps
/// no per-request state, so one instance serves all requests concurrently.
pub struct CalculatorService {
    sink: Arc<dyn EventSink>,
    number_parsing: NumberParsing,
}

impl CalculatorService {
    /// Creates a new calculator service.
    pub fn new(sink: Arc<dyn EventSink>, number_parsing: NumberParsing) -> Self {
        Self {
            sink,
            number_parsing,
        }
    }

    /// Validates `raw`, applies `operation` and logs the outcome.
    ///
    /// # Pipeline
    ///
    /// 1. Presence check, then number parsing ([`Operands::parse`])
    /// 2. Zero-divisor check for [`Operation::Divide`]
    /// 3. Compute and log `"<Name> operation: a <op> b = result"`
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingParameters`] if `num1` or `num2` is absent or empty
    /// - [`AppError::InvalidNumber`] if either value is not a finite number
    /// - [`AppError::DivisionByZero`] when dividing by zero
    pub fn calculate(
        &self,
        operation: Operation,
        raw: &RawOperands,
    ) -> Result<Calculation, AppError> {
        let operands = Operands::parse(raw, self.number_parsing).map_err(|e| self.reject(e))?;
        let result = operation.apply(operands).map_err(|e| self.reject(e))?;

        let calculation = Calculation {
            operation,
            operands,
            result,
        };
        self.sink.info(&calculation.to_string());

        Ok(calculation)
    }

    /// Logs and converts a query string that could not be decoded.
    pub fn reject_query(&self, reason: impl Into<String>) -> AppError {
        self.reject(ValidationError::MalformedQuery {
            reason: reason.into(),
        })
    }

    /// Logs an unexpected failure and returns the error to send to the caller.
    pub fn internal_error(&self, details: impl Display) -> AppError {
        self.sink.error(&format!("Internal server error: {details}"));
        AppError::internal(details.to_string())
    }

    fn reject<E>(&self, err: E) -> AppError
    where
        E: Display + Into<AppError>,
    {
        self.sink.error(&err.to_string());
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockEventSink;

    fn raw(num1: Option<&str>, num2: Option<&str>) -> RawOperands {
        RawOperands::new(num1.map(String::from), num2.map(String::from))
    }

    fn expect_info(sink: &mut MockEventSink, expected: &'static str) {
        sink.expect_info()
            .withf(move |message| message.to_string() == expected)
            .times(1)
            .return_const(());
        sink.expect_error().never();
    }

    fn expect_error(sink: &mut MockEventSink, expected: &'static str) {
        sink.expect_error()
            .withf(move |message| message.to_string() == expected)
            .times(1)
            .return_const(());
        sink.expect_info().never();
    }

    fn service(sink: MockEventSink) -> CalculatorService {
        CalculatorService::new(Arc::new(sink), NumberParsing::Lenient)
    }

    #[test]
    fn test_addition_logs_result() {
        let mut sink = MockEventSink::new();
        expect_info(&mut sink, "Addition operation: 2 + 3 = 5");

        let calculation = service(sink)
            .calculate(Operation::Add, &raw(Some("2"), Some("3")))
            .unwrap();

        assert_eq!(calculation.result, 5.0);
        assert_eq!(calculation.operation, Operation::Add);
    }

    #[test]
    fn test_division_logs_result() {
        let mut sink = MockEventSink::new();
        expect_info(&mut sink, "Divide operation: 9 / 3 = 3");

        let calculation = service(sink)
            .calculate(Operation::Divide, &raw(Some("9"), Some("3")))
            .unwrap();

        assert_eq!(calculation.result, 3.0);
    }

    #[test]
    fn test_missing_parameter_logs_raw_values() {
        let mut sink = MockEventSink::new();
        expect_error(&mut sink, "Missing parameters: num1=undefined, num2=4");

        let err = service(sink)
            .calculate(Operation::Multiply, &raw(None, Some("4")))
            .unwrap_err();

        assert!(matches!(err, AppError::MissingParameters));
    }

    #[test]
    fn test_invalid_number_logs_parsed_values() {
        let mut sink = MockEventSink::new();
        expect_error(&mut sink, "Invalid number input: num1=NaN, num2=3");

        let err = service(sink)
            .calculate(Operation::Add, &raw(Some("foo"), Some("3")))
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidNumber));
    }

    #[test]
    fn test_division_by_zero_logs_operands() {
        let mut sink = MockEventSink::new();
        expect_error(&mut sink, "Division by zero: num1=10, num2=0");

        let err = service(sink)
            .calculate(Operation::Divide, &raw(Some("10"), Some("0")))
            .unwrap_err();

        assert!(matches!(err, AppError::DivisionByZero));
    }

    #[test]
    fn test_multiply_by_zero_is_allowed() {
        let mut sink = MockEventSink::new();
        expect_info(&mut sink, "Multiply operation: 4 * 0 = 0");

        let calculation = service(sink)
            .calculate(Operation::Multiply, &raw(Some("4"), Some("0")))
            .unwrap();

        assert_eq!(calculation.result, 0.0);
    }

    #[test]
    fn test_strict_parsing_rejects_trailing_text() {
        let mut sink = MockEventSink::new();
        expect_error(&mut sink, "Invalid number input: num1=NaN, num2=2");

        let service = CalculatorService::new(Arc::new(sink), NumberParsing::Strict);
        let err = service
            .calculate(Operation::Subtract, &raw(Some("5abc"), Some("2")))
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidNumber));
    }

    #[test]
    fn test_lenient_parsing_accepts_numeric_prefix() {
        let mut sink = MockEventSink::new();
        expect_info(&mut sink, "Subtraction operation: 5 - 2 = 3");

        let calculation = service(sink)
            .calculate(Operation::Subtract, &raw(Some("5abc"), Some("2")))
            .unwrap();

        assert_eq!(calculation.result, 3.0);
    }

    #[test]
    fn test_reject_query_logs_reason() {
        let mut sink = MockEventSink::new();
        expect_error(&mut sink, "Malformed query string: invalid percent-encoding");

        let err = service(sink).reject_query("invalid percent-encoding");

        assert!(matches!(err, AppError::InvalidNumber));
    }

    #[test]
    fn test_internal_error_is_logged() {
        let mut sink = MockEventSink::new();
        expect_error(&mut sink, "Internal server error: formatter failed");

        let err = service(sink).internal_error("formatter failed");

        assert!(matches!(err, AppError::Internal { ref details } if details == "formatter failed"));
    }

    #[test]
    fn test_repeated_requests_yield_same_result() {
        let mut sink = MockEventSink::new();
        sink.expect_info().times(3).return_const(());

        let service = service(sink);
        let results: Vec<_> = (0..3)
            .map(|_| {
                service
                    .calculate(Operation::Divide, &raw(Some("1"), Some("3")))
                    .unwrap()
            })
            .collect();

        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
