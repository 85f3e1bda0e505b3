use serde::{Deserialize, Serialize, Serializer};

use crate::domain::CHARGE_DECISION;

/// Largest integer an IEEE-754 double represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Body of the POST sent to the prediction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(serialize_with = "serialize_number")]
    pub battery_capacity: f64,
    #[serde(serialize_with = "serialize_number")]
    pub hourly_consumption: f64,
    #[serde(serialize_with = "serialize_number")]
    pub current_charge: f64,
}

/// Integral values go out as JSON integers (`310`, not `310.0`) and
/// non-finite values as `null`, matching what browser clients of the
/// endpoint send.
fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !value.is_finite() {
        return serializer.serialize_none();
    }
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        return serializer.serialize_i64(*value as i64);
    }
    serializer.serialize_f64(*value)
}

/// Recommendation returned by the prediction endpoint.
///
/// Only `decision` and `message` are read. A body missing either field still
/// decodes, with the field left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub decision: String,
    #[serde(default)]
    pub message: String,
}

impl PredictionResult {
    pub fn new(decision: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            decision: decision.into(),
            message: message.into(),
        }
    }

    pub fn is_charge(&self) -> bool {
        self.decision == CHARGE_DECISION
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
