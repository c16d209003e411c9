//! Request payloads for the account flows, with Farsi validation messages.
//!
//! These validate request *shape*: required fields, formats, and the
//! password-confirmation match. The password policy itself runs after
//! shape validation passes, on `password1`/`new_password1`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::rules;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
/// Payload for registering a new account.
pub struct RegisterPayload {
    #[validate(custom(function = "rules::validate_username"))]
    pub username: String,
    #[validate(email(message = "یک ایمیل معتبر وارد کنید."))]
    pub email: String,
    #[validate(length(min = 1, message = "فیلد نام اجباری است."))]
    pub first_name: String,
    #[validate(length(min = 1, message = "فیلد نام خانوادگی اجباری است."))]
    pub last_name: String,
    /// New password exactly as typed; never trimmed.
    #[validate(length(min = 1, message = "فیلد رمز عبور اجباری است."))]
    pub password1: String,
    /// Confirmation of the new password.
    #[validate(must_match(
        other = "password1",
        message = "هر دو رمز عبور باید دقیقا مثل هم باشند."
    ))]
    pub password2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
/// Payload for changing the password of a signed-in account.
///
/// Verifying `old_password` against the stored hash is the caller's
/// responsibility; this payload only enforces shape.
pub struct ChangePasswordPayload {
    #[validate(length(min = 1, message = "فیلد رمز عبور فعلی اجباری است."))]
    pub old_password: String,
    #[validate(length(min = 1, message = "فیلد رمز عبور جدید اجباری است."))]
    pub new_password1: String,
    #[validate(must_match(
        other = "new_password1",
        message = "هر دو رمز عبور باید دقیقا مثل هم باشند."
    ))]
    pub new_password2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
/// Payload for completing a password reset with an emailed token.
pub struct ResetPasswordPayload {
    /// Opaque reset token from the email link.
    #[validate(length(min = 32, message = "توکن بازیابی نامعتبر است."))]
    pub token: String,
    #[validate(length(min = 1, message = "فیلد رمز عبور جدید اجباری است."))]
    pub new_password1: String,
    #[validate(must_match(
        other = "new_password1",
        message = "هر دو رمز عبور باید دقیقا مثل هم باشند."
    ))]
    pub new_password2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
/// Payload for editing optional profile information.
pub struct ProfileUpdatePayload {
    /// Mobile number, 11 digits.
    #[validate(custom(function = "rules::validate_phone"))]
    pub phone: Option<String>,
    #[validate(length(max = 300, message = "آدرس نمیتواند بیشتر از ۳۰۰ کاراکتر باشد."))]
    pub address: Option<String>,
    /// Whether the user wants site updates by email.
    #[serde(default)]
    pub receive_updates: bool,
}
