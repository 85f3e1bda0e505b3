use thiserror::Error;

use crate::domain::ParameterField;

/// Text shown to the user whenever the parameters cannot be submitted.
pub const MISSING_VALUES_MESSAGE: &str = "Please enter all the values";

/// Rejection of the collected parameters at submission time.
///
/// Every variant displays the same fixed message; the variant and field are
/// kept for callers that want to know which input tripped validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter all the values")]
    Unparseable { field: ParameterField },
    #[error("Please enter all the values")]
    Zero { field: ParameterField },
}

impl ValidationError {
    pub fn field(&self) -> ParameterField {
        match self {
            ValidationError::Unparseable { field } | ValidationError::Zero { field } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_displays_the_fixed_message() {
        let errors = [
            ValidationError::Unparseable {
                field: ParameterField::BatteryCapacity,
            },
            ValidationError::Zero {
                field: ParameterField::CurrentCharge,
            },
        ];

        for err in errors {
            assert_eq!(err.to_string(), MISSING_VALUES_MESSAGE);
        }
        assert_eq!(errors[1].field(), ParameterField::CurrentCharge);
    }
}
