use crate::utils::error::{Result, ShowcaseError};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShowcaseError::invalid(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ShowcaseError::invalid(
            field_name,
            format!("Value must be a finite number, got {}", value),
        ));
    }
    Ok(())
}

/// Finite and strictly greater than zero.
pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value <= 0.0 {
        return Err(ShowcaseError::invalid(
            field_name,
            format!("Value must be greater than 0, got {}", value),
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
        return Err(ShowcaseError::invalid(
            field_name,
            format!("Value must be between {} and {}, got {}", min, max, value),
        ));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if !email_pattern().is_match(value) {
        return Err(ShowcaseError::invalid(
            field_name,
            format!("'{}' is not a valid email address", value),
        ));
    }
    Ok(())
}
