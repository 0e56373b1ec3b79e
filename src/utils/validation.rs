use crate::utils::error::{ImeiError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const PREFIX_MIN_LEN: usize = 8;
pub const PREFIX_MAX_LEN: usize = 12;

// ASCII only; `\d` would also accept other Unicode decimal digits.
static ASCII_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digit pattern is a valid regex"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn is_ascii_digits(value: &str) -> bool {
    ASCII_DIGITS.is_match(value)
}

pub fn validate_prefix(value: &str) -> Result<()> {
    if !is_ascii_digits(value) {
        return Err(invalid_input(
            "prefix",
            value,
            "must contain digits only".to_string(),
        ));
    }
    validate_range("prefix length", value.len(), PREFIX_MIN_LEN, PREFIX_MAX_LEN).map_err(|_| {
        invalid_input(
            "prefix",
            value,
            format!("must be {} to {} digits long", PREFIX_MIN_LEN, PREFIX_MAX_LEN),
        )
    })
}

pub fn parse_count(value: &str) -> Result<usize> {
    if !is_ascii_digits(value) {
        return Err(invalid_input(
            "count",
            value,
            "must be a whole number greater than zero".to_string(),
        ));
    }
    let count: usize = value
        .parse()
        .map_err(|_| invalid_input("count", value, "number is too large".to_string()))?;
    validate_positive_number("count", count, 1)?;
    Ok(count)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid_input(field_name, path, "Path cannot be empty".to_string()));
    }

    if path.contains('\0') {
        return Err(invalid_input(field_name, path, "Path contains null bytes".to_string()));
    }

    Ok(())
}

/// A single filename component: no separators, no null bytes.
pub fn validate_file_component(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if value.contains(['/', '\\', '\0']) {
        return Err(invalid_input(
            field_name,
            value,
            "Value cannot contain path separators".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(invalid_input(
            field_name,
            &value.to_string(),
            format!("must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid_input(
            field_name,
            value,
            "Value cannot be empty or whitespace-only".to_string(),
        ));
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
        return Err(invalid_input(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

fn invalid_input(field: &str, value: &str, reason: String) -> ImeiError {
    ImeiError::InvalidInputError {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_prefix() {
        assert!(validate_prefix("12345678").is_ok());
        assert!(validate_prefix("123456789012").is_ok());
        assert!(validate_prefix("1234567").is_err());
        assert!(validate_prefix("1234567890123").is_err());
        assert!(validate_prefix("1234abcd").is_err());
        assert!(validate_prefix("").is_err());
        assert!(validate_prefix("１２３４５６７８").is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("5").unwrap(), 5);
        assert_eq!(parse_count("007").unwrap(), 7);
        assert!(parse_count("0").is_err());
        assert!(parse_count("-1").is_err());
        assert!(parse_count("abc").is_err());
        assert!(parse_count("").is_err());
        assert!(parse_count("99999999999999999999999999").is_err());
    }

    #[test]
    fn test_validate_file_component() {
        assert!(validate_file_component("base_name", "generated_imeis").is_ok());
        assert!(validate_file_component("base_name", "").is_err());
        assert!(validate_file_component("base_name", "../escape").is_err());
        assert!(validate_file_component("extension", "t\\xt").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("count", 5, 1).is_ok());
        assert!(validate_positive_number("count", 0, 1).is_err());
    }
}
