//! Error types for policy construction.
//!
//! Evaluating a password never fails: a rejected password is a report,
//! not an error. Only building a policy can fail, and only when the
//! configured denylist cannot be read.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    /// The denylist file named by the configuration could not be read.
    #[error("failed to read password denylist at {path}")]
    DenylistRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
