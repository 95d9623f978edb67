//! Validation utilities for request inputs
//!
//! These guard the outer surfaces (HTTP, WASM); the core operations only
//! reject what their own contracts forbid.

use rust_decimal::Decimal;

/// Longest daily series a client may request
pub const MAX_REQUEST_DAYS: u32 = 366;

/// Validate a percentage is within 0 to 100
pub fn validate_percentage(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Validate a requested number of days
pub fn validate_day_count(days: u32) -> Result<(), &'static str> {
    if days < 1 {
        return Err("Number of days must be at least 1");
    }
    if days > MAX_REQUEST_DAYS {
        return Err("Number of days must be at most 366");
    }
    Ok(())
}

/// Validate a rainfall amount is not negative
pub fn validate_rainfall_mm(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("Rainfall cannot be negative");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage(Decimal::ZERO).is_ok());
        assert!(validate_percentage(Decimal::new(799, 1)).is_ok());
        assert!(validate_percentage(Decimal::ONE_HUNDRED).is_ok());
        assert!(validate_percentage(Decimal::new(-1, 1)).is_err());
        assert!(validate_percentage(Decimal::new(1001, 1)).is_err());
    }

    #[test]
    fn test_validate_day_count() {
        assert!(validate_day_count(1).is_ok());
        assert!(validate_day_count(7).is_ok());
        assert!(validate_day_count(MAX_REQUEST_DAYS).is_ok());
        assert!(validate_day_count(0).is_err());
        assert!(validate_day_count(MAX_REQUEST_DAYS + 1).is_err());
    }

    #[test]
    fn test_validate_rainfall() {
        assert!(validate_rainfall_mm(Decimal::ZERO).is_ok());
        assert!(validate_rainfall_mm(Decimal::new(-5, 0)).is_err());
    }
}
