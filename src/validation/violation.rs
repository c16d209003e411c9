//! Violation codes, localized messages, and the aggregated policy report.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Stable identifier for a policy rule failure, independent of the
/// message text. Serializes to the snake_case wire form so callers can
/// build structured API error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    PasswordTooShort,
    PasswordTooSimilar,
    PasswordTooCommon,
    PasswordEntirelyNumeric,
}

impl ViolationCode {
    /// Returns the canonical snake_case representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCode::PasswordTooShort => "password_too_short",
            ViolationCode::PasswordTooSimilar => "password_too_similar",
            ViolationCode::PasswordTooCommon => "password_too_common",
            ViolationCode::PasswordEntirelyNumeric => "password_entirely_numeric",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A single rule failure: stable code, Farsi message with all parameters
/// already substituted, and the raw parameters for programmatic handling.
pub struct Violation {
    /// Machine-readable failure code.
    pub code: ViolationCode,
    /// Human-readable message, fully parameter-substituted.
    pub message: String,
    /// Parameters the message was built from.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, Value>,
}

impl Violation {
    pub fn new(code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Ordered collection of violations from one password evaluation.
/// An empty report means the password was accepted. Order follows the
/// configured validator sequence, not the order failures were detected.
pub struct PolicyReport {
    violations: Vec<Violation>,
}

impl PolicyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// True when no validator reported a violation.
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Failure codes in report order.
    pub fn codes(&self) -> Vec<ViolationCode> {
        self.violations.iter().map(|v| v.code).collect()
    }

    /// Localized messages in report order, ready to surface to the user.
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }
}

impl IntoIterator for PolicyReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}
