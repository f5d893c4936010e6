use crate::error::RecordError;

#[test]
fn only_numeric_failures_are_reported() {
    assert!(
        !RecordError::TooFewFields {
            found: 1,
            required: 5
        }
        .is_reported()
    );
    assert!(!RecordError::NullMarker { field: 1 }.is_reported());
    assert!(!RecordError::EmptyField { field: 4 }.is_reported());
    assert!(
        RecordError::InvalidFloat {
            field: 1,
            value: "x".into()
        }
        .is_reported()
    );
    assert!(
        RecordError::NotAnInteger {
            field: 4,
            value: f64::NAN
        }
        .is_reported()
    );
}

#[test]
fn numeric_failure_messages() {
    let err = RecordError::InvalidFloat {
        field: 4,
        value: "not_a_number".into(),
    };
    assert_eq!(
        err.to_string(),
        "could not convert string to float: 'not_a_number'"
    );

    let err = RecordError::InvalidFloat {
        field: 1,
        value: "it's".into(),
    };
    assert_eq!(err.to_string(), "could not convert string to float: \"it's\"");

    let err = RecordError::NotAnInteger {
        field: 4,
        value: f64::NEG_INFINITY,
    };
    assert_eq!(err.to_string(), "cannot convert float infinity to integer");

    let err = RecordError::NotAnInteger {
        field: 4,
        value: f64::NAN,
    };
    assert_eq!(err.to_string(), "cannot convert float NaN to integer");
}
