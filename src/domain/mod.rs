//! Domain layer: operands, operations and the event sink contract.
//!
//! Nothing in here touches HTTP or the logging backend.
//!
//! - [`operands`] - Raw query values, validation and number parsing
//! - [`operation`] - The four arithmetic operations and their outcomes
//! - [`event_sink`] - Trait through which request outcomes are logged

pub mod event_sink;
pub mod operands;
pub mod operation;

pub use event_sink::EventSink;
pub use operands::{NumberParsing, Operands, RawOperands, ValidationError};
pub use operation::{Calculation, CalculationError, Operation};

#[cfg(test)]
pub use event_sink::MockEventSink;
