use crate::utils::error::{PlannerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Customer-count tiers: at least one entry, every entry >= 1.
pub fn validate_tier_counts(field_name: &str, counts: &[u32]) -> Result<()> {
    if counts.is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one customer count is required".to_string(),
        });
    }

    for &count in counts {
        validate_positive_number(field_name, count, 1)?;
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.directory", "./reports").is_ok());
        assert!(validate_path("output.directory", "").is_err());
        assert!(validate_path("output.directory", "   ").is_err());
        assert!(validate_path("output.directory", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("tiers.one_time", 5, 1).is_ok());
        assert!(validate_positive_number("tiers.one_time", 0, 1).is_err());
    }

    #[test]
    fn test_validate_tier_counts() {
        assert!(validate_tier_counts("tiers.subscription", &[100, 10, 1]).is_ok());
        assert!(validate_tier_counts("tiers.subscription", &[]).is_err());

        let err = validate_tier_counts("tiers.subscription", &[100, 0]).unwrap_err();
        match err {
            PlannerError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "tiers.subscription");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("output.decimals", 2u8, 0, 4).is_ok());
        assert!(validate_range("output.decimals", 0u8, 0, 4).is_ok());
        assert!(validate_range("output.decimals", 5u8, 0, 4).is_err());
    }
}
