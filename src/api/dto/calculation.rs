//! DTOs for the arithmetic endpoints.

use serde::Serialize;

use crate::domain::{Calculation, RawOperands};
use crate::utils::js_number;

/// Query parameters accepted by `/add`, `/subtract`, `/multiply` and `/divide`.
///
/// Both values stay strings until the calculator validates them, so an
/// absent parameter and an empty one can be told apart.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CalculationQuery {
    pub num1: Option<String>,
    pub num2: Option<String>,
}

impl CalculationQuery {
    /// Collects `num1` and `num2` from decoded query pairs.
    ///
    /// A repeated parameter is joined with commas, so `num1=1&num1=2` reads
    /// as `"1,2"`: lenient parsing takes `1`, strict parsing rejects it.
    /// Other keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "num1" => &mut query.num1,
                "num2" => &mut query.num2,
                _ => continue,
            };
            if let Some(existing) = slot.as_mut() {
                existing.push(',');
                existing.push_str(&value);
            } else {
                *slot = Some(value);
            }
        }

        query
    }
}

impl From<CalculationQuery> for RawOperands {
    fn from(query: CalculationQuery) -> Self {
        RawOperands::new(query.num1, query.num2)
    }
}

/// Successful calculation envelope.
///
/// ```json
/// { "statuscode": 200, "Result": 5 }
/// ```
///
/// A result that overflowed to infinity is encoded as `null`.
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub statuscode: u16,
    #[serde(rename = "Result", serialize_with = "js_number::serialize")]
    pub result: f64,
}

impl From<Calculation> for CalculationResponse {
    fn from(calculation: Calculation) -> Self {
        Self {
            statuscode: 200,
            result: calculation.result,
        }
    }
}
