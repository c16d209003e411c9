//! Field-format rules shared across account payloads.

use std::borrow::Cow;

use validator::ValidationError;

/// Validates username format.
///
/// Requirements:
/// - Unicode letters and digits, plus `@`, `.`, `+`, `-`, `_`
/// - 1-150 characters in length
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() || username.chars().count() > 150 {
        return Err(rule_error(
            "username_invalid_length",
            "یک نام کاربری معتبر وارد کنید.",
        ));
    }

    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Err(rule_error(
            "username_invalid_characters",
            "یک نام کاربری معتبر وارد کنید.",
        ));
    }

    Ok(())
}

/// Validates a mobile number: exactly 11 digits, e.g. 09121111111.
/// Persian digits are accepted alongside ASCII.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.chars().count() == 11
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || ('۰'..='۹').contains(&c));
    if !digits {
        return Err(rule_error(
            "phone_invalid",
            "شماره همراه باید به صورت ۰۹۱۲۱۱۱۱۱۱۱ وارد شود.",
        ));
    }
    Ok(())
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        let result = validate_username("");
        assert!(result.is_err());
    }

    #[test]
    fn username_rejects_special_chars() {
        let result = validate_username("user name!");
        assert!(result.is_err());
    }

    #[test]
    fn username_rejects_overlong() {
        let result = validate_username(&"a".repeat(151));
        assert!(result.is_err());
    }

    #[test]
    fn username_accepts_valid() {
        let result = validate_username("valid_user123");
        assert!(result.is_ok());
    }

    #[test]
    fn username_accepts_email_style_and_unicode() {
        assert!(validate_username("john.smith@example.com").is_ok());
        assert!(validate_username("کاربر_۱۲۳").is_ok());
    }

    #[test]
    fn username_errors_carry_farsi_message() {
        let error = validate_username("bad name").unwrap_err();
        assert_eq!(
            error.message.as_deref(),
            Some("یک نام کاربری معتبر وارد کنید.")
        );
    }

    #[test]
    fn phone_accepts_eleven_digits() {
        assert!(validate_phone("09121111111").is_ok());
    }

    #[test]
    fn phone_accepts_persian_digits() {
        assert!(validate_phone("۰۹۱۲۱۱۱۱۱۱۱").is_ok());
    }

    #[test]
    fn phone_rejects_wrong_length_or_letters() {
        assert!(validate_phone("0912111111").is_err());
        assert!(validate_phone("0912111111a").is_err());
    }
}
