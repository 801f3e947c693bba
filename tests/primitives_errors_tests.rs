#![cfg(feature = "dev")]

use recur_rs::internals::primitives::errors::RecurrenceError;

#[test]
fn test_recurrence_error_display() {
    // EmptyDefinition
    let err = RecurrenceError::EmptyDefinition;
    assert_eq!(
        format!("{}", err),
        "Recurrence definition is empty (no offsets)"
    );

    // EmptySeed
    let err = RecurrenceError::EmptySeed;
    assert_eq!(format!("{}", err), "Seed sequence is empty");

    // MismatchedDefinition
    let err = RecurrenceError::MismatchedDefinition {
        offsets: 3,
        coefficients: 2,
    };
    assert_eq!(format!("{}", err), "Length mismatch: 3 offsets, 2 coefficients");

    // InvalidOffset
    let err = RecurrenceError::InvalidOffset(1);
    assert_eq!(
        format!("{}", err),
        "Invalid offset: 1 (offsets must be negative)"
    );

    // NegativeIndex
    let err = RecurrenceError::NegativeIndex(-1);
    assert_eq!(format!("{}", err), "Invalid index: -1 (must be non-negative)");

    // MissingDependency
    let err = RecurrenceError::MissingDependency {
        index: 1,
        dependency: -2,
    };
    assert_eq!(
        format!("{}", err),
        "Missing dependency: index 1 requires index -2, which lies before the seed"
    );

    // InvalidNumericValue
    let err = RecurrenceError::InvalidNumericValue("seed[0]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: seed[0]=NaN");

    // DuplicateParameter
    let err = RecurrenceError::DuplicateParameter { parameter: "seed" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'seed' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_recurrence_error_properties() {
    let err1 = RecurrenceError::EmptySeed;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, RecurrenceError::EmptyDefinition);
    assert_ne!(
        RecurrenceError::InvalidOffset(0),
        RecurrenceError::InvalidOffset(1)
    );
}

#[cfg(feature = "std")]
#[test]
fn test_recurrence_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<RecurrenceError>();
}
