//! Validation trait and helpers for configuration types

use crate::error::{ConfigError, Result};

/// Trait for validating configuration values
///
/// Implement this for any config type that needs checks beyond what the type
/// system gives for free.
pub trait Validate {
    /// Returns `Ok(())` if validation passes, or a `ConfigError` describing
    /// what failed.
    fn validate(&self) -> Result<()>;
}

/// Check that a value lies within an inclusive range.
pub fn validate_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Check that a value is not negative.
pub fn validate_non_negative(field: impl Into<String>, value: f64) -> Result<()> {
    if value < 0.0 {
        return Err(ConfigError::Negative {
            field: field.into(),
            value,
        });
    }
    Ok(())
}

/// Check that an integer meets a minimum.
pub fn validate_at_least(field: impl Into<String>, value: usize, min: usize) -> Result<()> {
    if value < min {
        return Err(ConfigError::InvalidInteger {
            field: field.into(),
            value,
            min,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_accepts_bounds() {
        assert!(validate_range("f", 0.0, 0.0, 1.0).is_ok());
        assert!(validate_range("f", 1.0, 0.0, 1.0).is_ok());
        assert!(validate_range("f", 1.01, 0.0, 1.0).is_err());
    }

    #[test]
    fn non_negative_rejects_below_zero() {
        assert!(validate_non_negative("f", 0.0).is_ok());
        assert!(validate_non_negative("f", -0.1).is_err());
    }

    #[test]
    fn at_least_enforces_minimum() {
        assert!(validate_at_least("f", 1, 1).is_ok());
        assert!(validate_at_least("f", 0, 1).is_err());
    }
}
