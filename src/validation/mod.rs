//! Password policy validation.
//!
//! This module provides the validator chain, the similarity scoring and
//! denylist it relies on, and reusable field-format rules so error
//! reporting stays consistent across all account flows.

pub mod denylist;
pub mod policy;
pub mod rules;
pub mod similarity;
pub mod validators;
pub mod violation;

pub use denylist::Denylist;
pub use policy::PasswordPolicy;
pub use validators::PasswordValidator;
pub use violation::{PolicyReport, Violation, ViolationCode};
