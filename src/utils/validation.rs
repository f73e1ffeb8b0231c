//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by the
//! CRUD handlers and repositories. SurrealDB schemaless fields have no
//! built-in length enforcement, so limits live here.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: movie titles, employee names, promotion titles, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, feedback messages
pub const MAX_NOTE_LEN: usize = 1000;

/// Short identifiers: seat labels, ticket ids, months, positions, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
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
) -> Result<(), AppError> {
    if let Some(v) = value {
        if v.len() > max_len {
            return Err(AppError::validation(format!(
                "{field} is too long ({} chars, max {max_len})",
                v.len()
            )));
        }
    }
    Ok(())
}

/// Minimal email shape check (local@domain.tld) — 与前端校验一致
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    });
    if !valid {
        return Err(AppError::validation(format!("Invalid email address: {email}")));
    }
    Ok(())
}

/// Phone numbers are exactly 10 digits (admin front-end rule)
pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    if phone.len() != 10 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::validation(
            "Phone number must be exactly 10 digits".to_string(),
        ));
    }
    Ok(())
}

/// Movie rating is 0–10
pub fn validate_rate(rate: f32) -> Result<(), AppError> {
    if !(0.0..=10.0).contains(&rate) || !rate.is_finite() {
        return Err(AppError::validation(format!(
            "rate must be between 0 and 10, got {rate}"
        )));
    }
    Ok(())
}

/// Discount percentage is 0–100
pub fn validate_percentage(value: u8) -> Result<(), AppError> {
    if value > 100 {
        return Err(AppError::validation(format!(
            "discountPercentage must be between 0 and 100, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Inception", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(300), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("admin@skylight.lk").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("@domain.com").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("0771234567").is_ok());
        assert!(validate_phone("077123456").is_err());
        assert!(validate_phone("07712345678").is_err());
        assert!(validate_phone("07712345ab").is_err());
    }

    #[test]
    fn test_rate_and_percentage() {
        assert!(validate_rate(0.0).is_ok());
        assert!(validate_rate(10.0).is_ok());
        assert!(validate_rate(10.5).is_err());
        assert!(validate_rate(-1.0).is_err());
        assert!(validate_percentage(100).is_ok());
        assert!(validate_percentage(101).is_err());
    }
}
