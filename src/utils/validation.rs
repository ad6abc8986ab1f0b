//! Validation of user-entered measurements.

/// Largest stack/reach accepted from user input, in millimetres
pub const MAX_MEASUREMENT_MM: f64 = 2_000.0;

/// Measurement validation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Enter a value for {field}")]
    Empty { field: &'static str },
    #[error("Enter a valid number for {field} (got '{input}')")]
    NotANumber { field: &'static str, input: String },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} of {value} mm is out of range (max {MAX_MEASUREMENT_MM} mm)")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Parse a stack/reach value typed by the user.
///
/// Surrounding whitespace is ignored. The value must be a finite, non-negative
/// number no larger than [`MAX_MEASUREMENT_MM`].
///
/// # Examples
///
/// ```
/// use bike_fit::utils::validation::parse_measurement;
///
/// assert_eq!(parse_measurement("stack", " 555 "), Ok(555.0));
/// assert!(parse_measurement("reach", "abc").is_err());
/// assert!(parse_measurement("reach", "-3").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`ValidationError`] describing why the input was rejected.
pub fn parse_measurement(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field,
        input: trimmed.to_string(),
    })?;

    validate_measurement(field, value)
}

/// Check an already-numeric measurement.
///
/// # Errors
///
/// Rejects NaN, infinities, negative values and values above [`MAX_MEASUREMENT_MM`].
pub fn validate_measurement(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    if value > MAX_MEASUREMENT_MM {
        return Err(ValidationError::OutOfRange { field, value });
    }
    Ok(value)
}

/// Tolerances follow the same rules as measurements
///
/// # Errors
///
/// See [`validate_measurement`].
pub fn validate_tolerance(value: f64) -> Result<f64, ValidationError> {
    validate_measurement("tolerance", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_measurement("stack", "555"), Ok(555.0));
        assert_eq!(parse_measurement("stack", "\t395.5\n"), Ok(395.5));
        assert_eq!(parse_measurement("stack", "0"), Ok(0.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_measurement("stack", "55o"),
            Err(ValidationError::NotANumber {
                field: "stack",
                input: "55o".to_string()
            })
        );
        assert_eq!(
            parse_measurement("reach", "   "),
            Err(ValidationError::Empty { field: "reach" })
        );
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        for input in ["NaN", "inf", "-inf", "infinity"] {
            assert_eq!(
                parse_measurement("stack", input),
                Err(ValidationError::NotFinite { field: "stack" }),
                "input {input}"
            );
        }
    }

    #[test]
    fn test_rejects_negative_and_huge() {
        assert!(matches!(
            parse_measurement("reach", "-1"),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            validate_measurement("reach", 2_000.5),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(validate_measurement("reach", 2_000.0), Ok(2_000.0));
    }

    #[test]
    fn test_error_message_names_field() {
        let err = parse_measurement("stack", "abc").unwrap_err();
        assert_eq!(err.to_string(), "Enter a valid number for stack (got 'abc')");
    }

    #[test]
    fn test_validate_tolerance() {
        assert_eq!(validate_tolerance(10.0), Ok(10.0));
        assert!(validate_tolerance(-0.5).is_err());
    }
}
