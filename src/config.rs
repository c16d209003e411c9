use std::env;
use std::path::PathBuf;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::validation::denylist::Denylist;
use crate::validation::policy::PasswordPolicy;
use crate::validation::validators::{
    AttributeSimilarityValidator, CommonPasswordValidator, MinimumLengthValidator,
    NumericPasswordValidator, DEFAULT_MAX_SIMILARITY, DEFAULT_MIN_LENGTH,
    DEFAULT_USER_ATTRIBUTES,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub min_length: usize,
    pub max_similarity: f64,
    pub similarity_attributes: Vec<String>,
    pub denylist_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let min_length = env::var("PASSWORD_MIN_LENGTH")
            .unwrap_or_else(|_| DEFAULT_MIN_LENGTH.to_string())
            .parse()
            .unwrap_or(DEFAULT_MIN_LENGTH);

        let max_similarity: f64 = env::var("PASSWORD_MAX_SIMILARITY")
            .unwrap_or_else(|_| DEFAULT_MAX_SIMILARITY.to_string())
            .parse()
            .unwrap_or(DEFAULT_MAX_SIMILARITY);
        if !(0.0..=1.0).contains(&max_similarity) {
            return Err(anyhow!(
                "Invalid PASSWORD_MAX_SIMILARITY value: {}",
                max_similarity
            ));
        }

        let similarity_attributes = match env::var("PASSWORD_SIMILARITY_ATTRIBUTES") {
            Ok(raw) => raw
                .split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
            Err(_) => default_attributes(),
        };

        let denylist_path = env::var("PASSWORD_DENYLIST_PATH").ok().map(PathBuf::from);

        Ok(Config {
            min_length,
            max_similarity,
            similarity_attributes,
            denylist_path,
        })
    }

    /// Builds the policy this config describes: the standard validator
    /// chain in the fixed order length, similarity, common, numeric, with
    /// the denylist loaded from `denylist_path` or the embedded default.
    pub fn build_policy(&self) -> Result<PasswordPolicy, PolicyError> {
        let denylist = match &self.denylist_path {
            Some(path) => Denylist::from_file(path)?,
            None => Denylist::default(),
        };

        tracing::debug!(
            min_length = self.min_length,
            max_similarity = self.max_similarity,
            denylist_entries = denylist.len(),
            "building password policy"
        );

        Ok(PasswordPolicy::new(vec![
            Box::new(MinimumLengthValidator::new(self.min_length)),
            Box::new(AttributeSimilarityValidator::new(
                self.similarity_attributes.clone(),
                self.max_similarity,
            )),
            Box::new(CommonPasswordValidator::new(denylist)),
            Box::new(NumericPasswordValidator),
        ]))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_length: DEFAULT_MIN_LENGTH,
            max_similarity: DEFAULT_MAX_SIMILARITY,
            similarity_attributes: default_attributes(),
            denylist_path: None,
        }
    }
}

fn default_attributes() -> Vec<String> {
    DEFAULT_USER_ATTRIBUTES.iter().map(|s| s.to_string()).collect()
}
