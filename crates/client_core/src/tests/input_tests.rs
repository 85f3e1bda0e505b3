use super::*;

#[test]
fn decimal_prefix_accepts_partial_numbers() {
    for raw in ["", "0", "310", "2.", ".5", ".", "007.250"] {
        assert!(is_decimal_prefix(raw), "should accept {raw:?}");
    }
}

#[test]
fn decimal_prefix_rejects_everything_else() {
    for raw in ["1..2", "1.2.3", "abc", "-1", "+1", "1e5", " 1", "1,5", "٣"] {
        assert!(!is_decimal_prefix(raw), "should reject {raw:?}");
    }
}

#[test]
fn try_append_keeps_digits_and_a_single_dot() {
    let mut input = DecimalInput::new();
    let kept: Vec<bool> = "3a1.0.x5".chars().map(|ch| input.try_append(ch)).collect();

    assert_eq!(
        kept,
        vec![true, false, true, true, true, false, false, true]
    );
    assert_eq!(input.as_str(), "31.05");
}

#[test]
fn try_set_leaves_value_unchanged_on_rejection() {
    let mut input = DecimalInput::new();
    assert!(input.try_set("12.5"));
    assert!(!input.try_set("12.5.1"));
    assert!(!input.try_set("twelve"));
    assert_eq!(input.as_str(), "12.5");

    assert!(input.try_set(""));
    assert!(input.is_empty());
}

#[test]
fn backspace_removes_last_character() {
    let mut input = DecimalInput::new();
    assert!(input.try_set("1."));
    assert_eq!(input.backspace(), Some('.'));
    assert!(input.try_append('.'));
    assert_eq!(input.as_str(), "1.");

    input.clear();
    assert_eq!(input.backspace(), None);
}

#[test]
fn parse_follows_permissive_decimal_rules() {
    let cases = [
        ("5.", Some(5.0)),
        (".5", Some(0.5)),
        ("007", Some(7.0)),
        (".", None),
        ("", None),
    ];

    for (raw, expected) in cases {
        let mut input = DecimalInput::new();
        assert!(input.try_set(raw));
        assert_eq!(input.parse(), expected, "parsing {raw:?}");
    }
}

fn filled(values: [&str; 3]) -> ParameterInputs {
    let mut inputs = ParameterInputs::default();
    for (field, value) in ParameterField::ALL.into_iter().zip(values) {
        assert!(inputs.get_mut(field).try_set(value));
    }
    inputs
}

#[test]
fn parse_all_builds_request_in_field_order() {
    let request = filled(["310", "2.5", "14"]).parse().expect("valid");

    assert_eq!(
        request,
        PredictionRequest {
            battery_capacity: 310.0,
            hourly_consumption: 2.5,
            current_charge: 14.0,
        }
    );
}

#[test]
fn parse_all_rejects_missing_values() {
    let err = filled(["310", "", "14"]).parse().expect_err("missing");
    assert_eq!(
        err,
        ValidationError::Unparseable {
            field: ParameterField::HourlyConsumption
        }
    );

    let err = filled(["310", "2.5", "."]).parse().expect_err("bare dot");
    assert_eq!(err.field(), ParameterField::CurrentCharge);
}

#[test]
fn parse_all_rejects_zero_in_any_spelling() {
    for zero in ["0", "0.", ".0", "000.000"] {
        let err = filled([zero, "2.5", "14"]).parse().expect_err("zero");
        assert_eq!(
            err,
            ValidationError::Zero {
                field: ParameterField::BatteryCapacity
            }
        );
    }
}

#[test]
fn clear_all_empties_every_field() {
    let mut inputs = filled(["1", "2", "3"]);

    inputs.clear_all();
    for field in ParameterField::ALL {
        assert!(inputs.get(field).is_empty(), "{field} should be empty");
    }
}
