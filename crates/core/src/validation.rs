//! Input validation utilities.
//!
//! This module contains functions for validating configuration inputs before
//! they are used in operations.

use crate::{CoreError, CoreResult};

/// Validates that a viewer base URL is safe to parameterise with a record id.
///
/// Selecting a record navigates to `{base_url}?id={record_id}`, so the base
/// URL is checked once at configuration time:
/// - Rejects empty or whitespace-only strings
/// - Bounds the length to avoid pathological inputs
/// - Requires an `http://` or `https://` scheme
/// - Rejects whitespace and non-ASCII characters
/// - Rejects URLs that already carry a query string
///
/// # Arguments
///
/// * `base_url` - The viewer base URL to validate.
///
/// # Errors
///
/// Returns a `CoreError::InvalidInput` if the URL is invalid.
pub fn validate_viewer_base_url(base_url: &str) -> CoreResult<()> {
    const MAX_URL_LEN: usize = 2048;

    if base_url.trim().is_empty() {
        return Err(CoreError::InvalidInput(
            "viewer base URL cannot be empty".into(),
        ));
    }

    if base_url.len() > MAX_URL_LEN {
        return Err(CoreError::InvalidInput(format!(
            "viewer base URL exceeds maximum length of {} characters",
            MAX_URL_LEN
        )));
    }

    if !base_url.is_ascii() {
        return Err(CoreError::InvalidInput(
            "viewer base URL must contain only ASCII characters".into(),
        ));
    }

    if base_url.chars().any(|c| c.is_whitespace()) {
        return Err(CoreError::InvalidInput(
            "viewer base URL must not contain whitespace".into(),
        ));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(CoreError::InvalidInput(
            "viewer base URL must use the http or https scheme".into(),
        ));
    }

    if base_url.contains('?') {
        return Err(CoreError::InvalidInput(
            "viewer base URL must not already carry a query string".into(),
        ));
    }

    Ok(())
}
