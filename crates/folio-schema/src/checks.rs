//! Standalone single-value checks.
//!
//! Each returns the input on success, or a one-element error list, so they
//! compose with the rest of the validator.

use std::sync::LazyLock;

use folio_core::dates::parse_content_date;
use regex::Regex;

use crate::types::{ErrorKind, ValidationError, ValidationResult};

static SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("slug regex is valid"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

fn fail<T>(field: &str, message: &str, code: ErrorKind, value: &str) -> ValidationResult<T> {
    Err(vec![
        ValidationError::new(field, message, code).with_value(value),
    ])
}

/// Check a project slug: lowercase letters, digits, and single inner hyphens.
///
/// # Errors
///
/// Returns an `invalid_format` error naming the first rule the slug breaks.
pub fn validate_project_slug(slug: &str) -> ValidationResult<String> {
    if !SLUG_CHARS.is_match(slug) {
        return fail(
            "slug",
            "Slug must contain only lowercase letters, numbers, and hyphens",
            ErrorKind::InvalidFormat,
            slug,
        );
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return fail(
            "slug",
            "Slug cannot start or end with a hyphen",
            ErrorKind::InvalidFormat,
            slug,
        );
    }
    if slug.contains("--") {
        return fail(
            "slug",
            "Slug cannot contain consecutive hyphens",
            ErrorKind::InvalidFormat,
            slug,
        );
    }
    Ok(slug.to_string())
}

/// Check that `value` is an absolute URL.
///
/// # Errors
///
/// Returns an `invalid_url` error at `field`.
pub fn validate_url(value: &str, field: &str) -> ValidationResult<String> {
    match url::Url::parse(value) {
        Ok(_) => Ok(value.to_string()),
        Err(_) => fail(field, "Invalid URL format", ErrorKind::InvalidUrl, value),
    }
}

/// Check that `value` looks like `local@domain.tld`.
///
/// # Errors
///
/// Returns an `invalid_email` error at `email`.
pub fn validate_email(value: &str) -> ValidationResult<String> {
    if EMAIL.is_match(value) {
        Ok(value.to_string())
    } else {
        fail("email", "Invalid email format", ErrorKind::InvalidEmail, value)
    }
}

/// Check that `value` is an ISO 8601 date or timestamp.
///
/// # Errors
///
/// Returns an `invalid_date` error at `field`.
pub fn validate_date(value: &str, field: &str) -> ValidationResult<String> {
    if parse_content_date(value).is_some() {
        Ok(value.to_string())
    } else {
        fail(
            field,
            "Invalid date format (expected ISO 8601)",
            ErrorKind::InvalidDate,
            value,
        )
    }
}
