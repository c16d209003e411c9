//! Password rule validators with Farsi error messages.
//!
//! Each validator is stateless per check: configuration is fixed at
//! construction and `validate` only reads it. A failing rule reports a
//! violation, it never aborts evaluation of the rules after it.

use crate::models::account::{attribute_label, UserAttributes};
use crate::validation::denylist::Denylist;
use crate::validation::similarity::quick_ratio;
use crate::validation::violation::{Violation, ViolationCode};

/// Default minimum password length.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Attribute names the similarity check inspects by default.
pub const DEFAULT_USER_ATTRIBUTES: [&str; 4] = ["username", "first_name", "last_name", "email"];

/// Default similarity threshold at or above which a password is rejected.
pub const DEFAULT_MAX_SIMILARITY: f64 = 0.7;

/// A single password rule.
///
/// Given a candidate password and, for password changes, the attributes of
/// the account it will belong to, reports at most one violation. Shared
/// instances are safe to evaluate from multiple threads concurrently.
pub trait PasswordValidator: Send + Sync {
    fn validate(&self, password: &str, user: Option<&UserAttributes>) -> Option<Violation>;

    /// Static description of the rule, for UI hints. Never evaluates a
    /// password.
    fn help_text(&self) -> String;
}

#[derive(Debug, Clone)]
/// Rejects passwords shorter than a configured number of characters.
pub struct MinimumLengthValidator {
    min_length: usize,
}

impl MinimumLengthValidator {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    fn message(&self) -> String {
        // Farsi uses one surface form for singular and plural.
        let template = ngettext(
            "رمز عبور باید دارای حداقل {min_length} کاراکتر باشد.",
            "رمز عبور باید دارای حداقل {min_length} کاراکتر باشد.",
            self.min_length,
        );
        template.replace("{min_length}", &self.min_length.to_string())
    }
}

/// Selects the singular or plural form of a message by count.
fn ngettext(singular: &'static str, plural: &'static str, n: usize) -> &'static str {
    if n == 1 {
        singular
    } else {
        plural
    }
}

impl Default for MinimumLengthValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

impl PasswordValidator for MinimumLengthValidator {
    fn validate(&self, password: &str, _user: Option<&UserAttributes>) -> Option<Violation> {
        if password.chars().count() < self.min_length {
            return Some(
                Violation::new(ViolationCode::PasswordTooShort, self.message())
                    .with_param("min_length", self.min_length as u64),
            );
        }
        None
    }

    fn help_text(&self) -> String {
        self.message()
    }
}

#[derive(Debug, Clone)]
/// Rejects passwords too similar to the account's own attributes.
///
/// Each attribute value is compared both whole and split into word-level
/// parts, so a password is checked against either side of an email
/// address as well as the full address. Attributes that are absent or
/// empty are skipped; at most one violation is reported per evaluation.
pub struct AttributeSimilarityValidator {
    user_attributes: Vec<String>,
    max_similarity: f64,
}

impl AttributeSimilarityValidator {
    pub fn new<I, S>(user_attributes: I, max_similarity: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_attributes: user_attributes.into_iter().map(Into::into).collect(),
            max_similarity,
        }
    }
}

impl Default for AttributeSimilarityValidator {
    fn default() -> Self {
        Self::new(DEFAULT_USER_ATTRIBUTES, DEFAULT_MAX_SIMILARITY)
    }
}

impl PasswordValidator for AttributeSimilarityValidator {
    fn validate(&self, password: &str, user: Option<&UserAttributes>) -> Option<Violation> {
        let user = user?;
        let password = password.to_lowercase();

        for attribute_name in &self.user_attributes {
            let value = match user.get(attribute_name) {
                Some(value) if !value.is_empty() => value,
                _ => continue,
            };

            let mut parts: Vec<&str> = value.split(is_non_word).collect();
            parts.push(value);

            for part in parts {
                if quick_ratio(&password, &part.to_lowercase()) >= self.max_similarity {
                    let label = attribute_label(attribute_name);
                    return Some(
                        Violation::new(
                            ViolationCode::PasswordTooSimilar,
                            format!("رمز عبور شما به {} بسیار شبیه است.", label),
                        )
                        .with_param("verbose_name", label),
                    );
                }
            }
        }
        None
    }

    fn help_text(&self) -> String {
        "رمز عبور نباید بیش از حد به اطلاعات شخصی شما شبیه باشد.".to_string()
    }
}

/// Word characters are alphanumeric or underscore; everything else splits.
fn is_non_word(c: char) -> bool {
    !(c.is_alphanumeric() || c == '_')
}

#[derive(Debug, Clone, Default)]
/// Rejects passwords found in a preloaded list of known-common passwords.
pub struct CommonPasswordValidator {
    passwords: Denylist,
}

impl CommonPasswordValidator {
    pub fn new(passwords: Denylist) -> Self {
        Self { passwords }
    }
}

impl PasswordValidator for CommonPasswordValidator {
    fn validate(&self, password: &str, _user: Option<&UserAttributes>) -> Option<Violation> {
        if self.passwords.contains(password.to_lowercase().trim()) {
            return Some(Violation::new(
                ViolationCode::PasswordTooCommon,
                "رمز عبور بیش از حد ساده است.",
            ));
        }
        None
    }

    fn help_text(&self) -> String {
        "رمز عبور نباید بیش از حد ساده و معمول باشد.".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Rejects non-empty passwords made up entirely of digits, Persian
/// digits included.
pub struct NumericPasswordValidator;

impl PasswordValidator for NumericPasswordValidator {
    fn validate(&self, password: &str, _user: Option<&UserAttributes>) -> Option<Violation> {
        if !password.is_empty() && password.chars().all(char::is_numeric) {
            return Some(Violation::new(
                ViolationCode::PasswordEntirelyNumeric,
                "رمز عبور نمیتواند فقط از اعداد باشد.",
            ));
        }
        None
    }

    fn help_text(&self) -> String {
        "رمز عبور نمیتواند فقط از اعداد باشد.".to_string()
    }
}
