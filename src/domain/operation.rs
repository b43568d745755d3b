//! Arithmetic operations and their results.

use std::fmt;

use thiserror::Error;

use super::operands::Operands;
use crate::utils::JsNumber;

/// One of the four supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Failure while applying an operation to validated operands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("Division by zero: num1={num1}, num2={num2}")]
    DivisionByZero { num1: JsNumber, num2: JsNumber },
}

impl Operation {
    pub const ALL: [Operation; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Route path serving this operation.
    pub fn path(self) -> &'static str {
        match self {
            Self::Add => "/add",
            Self::Subtract => "/subtract",
            Self::Multiply => "/multiply",
            Self::Divide => "/divide",
        }
    }

    /// Name used in the success log line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Whether a zero second operand must be rejected before computing.
    pub fn rejects_zero_divisor(self) -> bool {
        matches!(self, Self::Divide)
    }

    /// Applies the operation.
    ///
    /// The result may be non-finite on overflow (`1e308 * 10`); only a zero
    /// divisor is treated as an error.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::DivisionByZero`] for [`Operation::Divide`]
    /// when `num2` is `0` or `-0`.
    pub fn apply(self, operands: Operands) -> Result<f64, CalculationError> {
        let Operands { num1, num2 } = operands;

        if self.rejects_zero_divisor() && num2 == 0.0 {
            return Err(CalculationError::DivisionByZero {
                num1: JsNumber(num1),
                num2: JsNumber(num2),
            });
        }

        Ok(match self {
            Self::Add => num1 + num2,
            Self::Subtract => num1 - num2,
            Self::Multiply => num1 * num2,
            Self::Divide => num1 / num2,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A completed computation.
///
/// Displays as the info log line, e.g. `Addition operation: 2 + 3 = 5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub operation: Operation,
    pub operands: Operands,
    pub result: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} operation: {} {} {} = {}",
            self.operation.name(),
            JsNumber(self.operands.num1),
            self.operation.symbol(),
            JsNumber(self.operands.num2),
            JsNumber(self.result),
        )
    }
}
