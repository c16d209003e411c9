//! Account attributes exposed to the password similarity check.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Core identity fields of a user account.
pub struct Account {
    /// Username used for login.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl Account {
    /// The account's fields as the attribute mapping the similarity
    /// validator compares candidate passwords against.
    pub fn attributes(&self) -> UserAttributes {
        let mut attributes = UserAttributes::new();
        attributes.insert("username", &self.username);
        attributes.insert("email", &self.email);
        attributes.insert("first_name", &self.first_name);
        attributes.insert("last_name", &self.last_name);
        attributes
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Mapping from attribute name to its current value.
///
/// The similarity check skips attributes that are not present, so callers
/// only supply what they have. For registration there is no account yet
/// and no attributes are passed at all.
pub struct UserAttributes {
    values: BTreeMap<String, String>,
}

impl UserAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builds attributes from a JSON object, keeping only string values.
    /// Non-string values count as absent attributes, not as errors.
    pub fn from_json(value: &Value) -> Self {
        let mut attributes = Self::new();
        if let Some(object) = value.as_object() {
            for (name, value) in object {
                if let Some(text) = value.as_str() {
                    attributes.insert(name, text);
                }
            }
        }
        attributes
    }
}

impl From<&Account> for UserAttributes {
    fn from(account: &Account) -> Self {
        account.attributes()
    }
}

/// Farsi display label for an account attribute. Falls back to the raw
/// attribute name when no label is known.
pub fn attribute_label(name: &str) -> &str {
    match name {
        "username" => "نام کاربری",
        "email" => "ایمیل",
        "first_name" => "نام",
        "last_name" => "نام خانوادگی",
        _ => name,
    }
}
