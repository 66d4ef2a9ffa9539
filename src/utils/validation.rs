use crate::utils::error::{Result, SignupError};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SignupError::validation(field_name, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SignupError::validation(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(SignupError::validation(
            field_name,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SignupError::validation(
            field_name,
            format!("Value must be at least {}, got {}", min_value, value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SignupError::validation(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_max_length(field_name: &str, value: &str, max_chars: usize) -> Result<()> {
    let length = value.chars().count();
    if length > max_chars {
        return Err(SignupError::validation(
            field_name,
            format!("Value must be at most {} characters, got {}", max_chars, length),
        ));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if !EMAIL_RE.is_match(value) {
        return Err(SignupError::validation(
            field_name,
            format!("'{}' is not a valid email address", value),
        ));
    }
    Ok(())
}
