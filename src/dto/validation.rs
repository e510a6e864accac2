//! Validation helpers for DTOs.

use validator::ValidationError;

use crate::dto::parse_rfc3339;

/// Validates that a scheduling timestamp is a well-formed RFC3339 instant.
pub fn validate_rfc3339(value: &str) -> Result<(), ValidationError> {
    if parse_rfc3339(value).is_err() {
        let mut err = ValidationError::new("timestamp_format");
        err.message = Some(format!("`{value}` is not a valid RFC3339 timestamp").into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rfc3339_valid() {
        assert!(validate_rfc3339("2026-05-01T14:30:00Z").is_ok());
        assert!(validate_rfc3339("2026-05-01T14:30:00+02:00").is_ok());
    }

    #[test]
    fn test_validate_rfc3339_invalid() {
        assert!(validate_rfc3339("2026-05-01").is_err()); // date only
        assert!(validate_rfc3339("next saturday").is_err());
        assert!(validate_rfc3339("").is_err());
    }
}
