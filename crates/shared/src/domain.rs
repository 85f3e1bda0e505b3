use std::fmt;

use serde::{Deserialize, Serialize};

/// The three device parameters collected by the calculator modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterField {
    BatteryCapacity,
    HourlyConsumption,
    CurrentCharge,
}

impl ParameterField {
    /// Fields in the order they are presented and validated.
    pub const ALL: [ParameterField; 3] = [
        ParameterField::BatteryCapacity,
        ParameterField::HourlyConsumption,
        ParameterField::CurrentCharge,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            ParameterField::BatteryCapacity => "battery_capacity",
            ParameterField::HourlyConsumption => "hourly_consumption",
            ParameterField::CurrentCharge => "current_charge",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParameterField::BatteryCapacity => "Battery Capacity (Wh)",
            ParameterField::HourlyConsumption => "Hourly Consumption (W)",
            ParameterField::CurrentCharge => "Current Charge (%)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ParameterField::BatteryCapacity => "e.g. 310.0",
            ParameterField::HourlyConsumption => "e.g. 2.5",
            ParameterField::CurrentCharge => "e.g. 14.0",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ParameterField::BatteryCapacity => 0,
            ParameterField::HourlyConsumption => 1,
            ParameterField::CurrentCharge => 2,
        }
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Decision string the prediction service uses for "charge now".
pub const CHARGE_DECISION: &str = "Charge";
