//! Data models shared between the account flows and the policy engine.

pub mod account;
pub mod payloads;

pub use account::{attribute_label, Account, UserAttributes};
pub use payloads::{
    ChangePasswordPayload, ProfileUpdatePayload, RegisterPayload, ResetPasswordPayload,
};
