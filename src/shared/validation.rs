use crate::core::error::{AppError, Result};

/// Ensure a required text field is present and not blank.
///
/// Fields are checked one at a time by the caller, so the error names the
/// first missing field in declaration order.
pub fn require_text(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

/// Ensure a required value is present
pub fn require<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| missing(field))
}

fn missing(field: &str) -> AppError {
    AppError::Validation(format!("{} is required", field))
}

/// Reject an optional text field that is present but blank
pub fn reject_blank(value: Option<&str>, field: &str) -> Result<()> {
    match value {
        Some(v) if v.trim().is_empty() => Err(missing(field)),
        _ => Ok(()),
    }
}

/// Flatten `validator` errors into one message
pub fn validation_message(errors: validator::ValidationErrors) -> AppError {
    AppError::Validation(errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_accepts_value() {
        assert_eq!(
            require_text(Some("Jane".to_string()), "name").unwrap(),
            "Jane"
        );
    }

    #[test]
    fn test_require_text_rejects_missing_and_blank() {
        for value in [None, Some(String::new()), Some("   ".to_string())] {
            match require_text(value, "reason") {
                Err(AppError::Validation(msg)) => assert_eq!(msg, "reason is required"),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn test_reject_blank_only_when_present() {
        assert!(reject_blank(None, "name").is_ok());
        assert!(reject_blank(Some("Clinic"), "name").is_ok());
        match reject_blank(Some("  "), "type") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "type is required"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_require_names_field() {
        match require::<f64>(None, "latitude") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "latitude is required"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(require(Some(1.5), "latitude").unwrap(), 1.5);
    }
}
