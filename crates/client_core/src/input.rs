//! Keystroke-gated decimal inputs for the three device parameters.

use shared::{domain::ParameterField, error::ValidationError, protocol::PredictionRequest};

/// Returns true when `raw` is empty or a prefix of a plain decimal number:
/// ASCII digits with at most one `.` anywhere.
pub fn is_decimal_prefix(raw: &str) -> bool {
    let mut seen_dot = false;
    raw.chars().all(|ch| match ch {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

/// Text of a single numeric field. The stored string always satisfies
/// [`is_decimal_prefix`]; edits that would break that are refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecimalInput {
    raw: String,
}

impl DecimalInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_append(&mut self, ch: char) -> bool {
        match ch {
            '0'..='9' => {
                self.raw.push(ch);
                true
            }
            '.' if !self.raw.contains('.') => {
                self.raw.push(ch);
                true
            }
            _ => false,
        }
    }

    /// Replaces the whole value. Empty input is always accepted.
    pub fn try_set(&mut self, raw: &str) -> bool {
        if !is_decimal_prefix(raw) {
            return false;
        }
        self.raw.clear();
        self.raw.push_str(raw);
        true
    }

    pub fn backspace(&mut self) -> Option<char> {
        self.raw.pop()
    }

    pub fn clear(&mut self) {
        self.raw.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// `"5."` and `".5"` parse; `""` and `"."` do not.
    pub fn parse(&self) -> Option<f64> {
        if self.raw.is_empty() || self.raw == "." {
            return None;
        }
        self.raw.parse::<f64>().ok().filter(|value| !value.is_nan())
    }
}

/// The three inputs of the calculator, addressed by [`ParameterField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterInputs {
    fields: [DecimalInput; 3],
}

impl ParameterInputs {
    pub fn get(&self, field: ParameterField) -> &DecimalInput {
        &self.fields[field.index()]
    }

    pub fn get_mut(&mut self, field: ParameterField) -> &mut DecimalInput {
        &mut self.fields[field.index()]
    }

    pub fn clear_all(&mut self) {
        for input in &mut self.fields {
            input.clear();
        }
    }

    /// Parses every field, rejecting the first one that is missing,
    /// unparseable or exactly zero.
    pub fn parse(&self) -> Result<PredictionRequest, ValidationError> {
        let mut values = [0.0_f64; 3];
        for field in ParameterField::ALL {
            let value = self
                .get(field)
                .parse()
                .ok_or(ValidationError::Unparseable { field })?;
            if value == 0.0 {
                return Err(ValidationError::Zero { field });
            }
            values[field.index()] = value;
        }

        Ok(PredictionRequest {
            battery_capacity: values[ParameterField::BatteryCapacity.index()],
            hourly_consumption: values[ParameterField::HourlyConsumption.index()],
            current_charge: values[ParameterField::CurrentCharge.index()],
        })
    }
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
