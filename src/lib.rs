//! Farsi-localized password policy engine and account payload validation.
//!
//! The policy engine runs a candidate password through an ordered chain of
//! validators (minimum length, similarity to the account's own attributes,
//! common-password denylist, not entirely numeric) and collects every
//! violation into a [`PolicyReport`] with stable codes and fully
//! substituted Farsi messages. The `models` module carries the request
//! payloads of the surrounding account flows (registration, password
//! change, password reset, profile edit) with the matching localized
//! validation messages.
//!
//! Persistence, HTTP routing, session handling, and password hashing are
//! the caller's concern: on a non-empty report the caller surfaces the
//! messages and rejects the operation, on an empty report it hashes and
//! stores the new password.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use config::Config;
pub use error::PolicyError;
pub use models::account::{attribute_label, Account, UserAttributes};
pub use validation::policy::PasswordPolicy;
pub use validation::validators::PasswordValidator;
pub use validation::violation::{PolicyReport, Violation, ViolationCode};
