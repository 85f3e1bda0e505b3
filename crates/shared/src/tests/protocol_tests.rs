use super::*;

#[test]
fn integral_parameters_serialize_without_fraction() {
    let request = PredictionRequest {
        battery_capacity: 310.0,
        hourly_consumption: 2.5,
        current_charge: 14.0,
    };

    assert_eq!(
        serde_json::to_string(&request).expect("serialize"),
        r#"{"battery_capacity":310,"hourly_consumption":2.5,"current_charge":14}"#
    );
}

#[test]
fn non_finite_parameters_serialize_as_null() {
    let request = PredictionRequest {
        battery_capacity: f64::INFINITY,
        hourly_consumption: 0.25,
        current_charge: 1.0,
    };

    let value = serde_json::to_value(request).expect("serialize");
    assert!(value["battery_capacity"].is_null());
    assert_eq!(value["hourly_consumption"], serde_json::json!(0.25));
    assert_eq!(value["current_charge"], serde_json::json!(1));
}

#[test]
fn result_decodes_and_ignores_extra_fields() {
    let result: PredictionResult = serde_json::from_str(
        r#"{"decision":"Charge","message":"Battery low, charge now.","confidence":0.9}"#,
    )
    .expect("decode");

    assert_eq!(
        result,
        PredictionResult::new("Charge", "Battery low, charge now.")
    );
    assert!(result.is_charge());
}

#[test]
fn result_missing_fields_decodes_empty() {
    let result: PredictionResult = serde_json::from_str("{}").expect("decode");

    assert!(result.decision.is_empty());
    assert!(result.message.is_empty());
    assert!(!result.is_charge());
}

#[test]
fn non_charge_decision_is_not_charge() {
    let result = PredictionResult::new("Discharge", "Plenty of charge left.");
    assert!(!result.is_charge());
}
