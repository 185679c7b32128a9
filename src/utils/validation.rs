use crate::utils::error::{LandingError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// 一個以上非空白非 '@' 字元，接著 '@'，網域中至少一個 '.'
///
/// `[:space:]` is the ASCII set `[\t\n\x0B\x0C\r ]`, the same one `trim_email_input` strips.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^[:space:]@]+@[^[:space:]@]+\.[^[:space:]@]+$")
        .expect("email pattern is a valid regex")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn is_email_space(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0B' | '\x0C' | '\r' | ' ')
}

/// Strips ASCII whitespace only; non-ASCII spaces stay part of the input.
pub fn trim_email_input(raw: &str) -> &str {
    raw.trim_matches(is_email_space)
}

/// Checks the shape of an already-trimmed email candidate.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(LandingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LandingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 也不在範圍內
    if !(value >= min && value <= max) {
        return Err(LandingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
