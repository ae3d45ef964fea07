//! Input validation helpers
//!
//! Centralized text length constants and validation functions for
//! customer-entered checkout fields.

use shared::{KioskError, KioskResult};

// ── Text length limits ──────────────────────────────────────────────

/// Customer and product names
pub const MAX_NAME_LEN: usize = 200;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Short identifiers: phone numbers and the like
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty after trimming and
/// within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> KioskResult<()> {
    if value.trim().is_empty() {
        return Err(KioskError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(KioskError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> KioskResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(KioskError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}
