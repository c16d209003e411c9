//! The policy engine: an ordered chain of validators evaluated as one.

use crate::models::account::UserAttributes;
use crate::validation::denylist::Denylist;
use crate::validation::validators::{
    AttributeSimilarityValidator, CommonPasswordValidator, MinimumLengthValidator,
    NumericPasswordValidator, PasswordValidator, DEFAULT_MAX_SIMILARITY, DEFAULT_MIN_LENGTH,
    DEFAULT_USER_ATTRIBUTES,
};
use crate::validation::violation::PolicyReport;

/// An ordered set of password validators.
///
/// Reports preserve the order validators were configured in, and every
/// validator always runs: a failing rule never skips the rules after it.
pub struct PasswordPolicy {
    validators: Vec<Box<dyn PasswordValidator>>,
}

impl PasswordPolicy {
    /// Builds a policy from an explicit validator chain. Evaluation order
    /// follows the order given here.
    pub fn new(validators: Vec<Box<dyn PasswordValidator>>) -> Self {
        Self { validators }
    }

    /// The standard chain: minimum length, attribute similarity, common
    /// password, not entirely numeric.
    pub fn standard(min_length: usize, max_similarity: f64, denylist: Denylist) -> Self {
        Self::new(vec![
            Box::new(MinimumLengthValidator::new(min_length)),
            Box::new(AttributeSimilarityValidator::new(
                DEFAULT_USER_ATTRIBUTES,
                max_similarity,
            )),
            Box::new(CommonPasswordValidator::new(denylist)),
            Box::new(NumericPasswordValidator),
        ])
    }

    /// Runs every validator in order against `password` and collects all
    /// violations. Pure: no logging, no mutation, no I/O.
    ///
    /// `user` carries the attributes of the account the password is for;
    /// pass `None` on registration paths where no account exists yet and
    /// the similarity rule should not apply.
    pub fn evaluate(&self, password: &str, user: Option<&UserAttributes>) -> PolicyReport {
        let mut report = PolicyReport::new();
        for validator in &self.validators {
            if let Some(violation) = validator.validate(password, user) {
                report.push(violation);
            }
        }
        report
    }

    /// Rule descriptions in evaluation order, for UI hints.
    pub fn help_texts(&self) -> Vec<String> {
        self.validators.iter().map(|v| v.help_text()).collect()
    }

    /// Number of configured validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::standard(DEFAULT_MIN_LENGTH, DEFAULT_MAX_SIMILARITY, Denylist::default())
    }
}
