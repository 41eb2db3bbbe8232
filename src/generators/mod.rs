// src/generators/mod.rs
use thiserror::Error;

use crate::crypto::CryptoError;

pub mod password;
pub mod strength;
pub mod token;

pub use password::{apply_preset, apply_preset_by_name, character_pool, generate_password, PasswordGenerator};
pub use strength::{score_strength, strength_label, MAX_STRENGTH};
pub use token::{generate_token, generate_uuid_v4, random_uuid, validate_length, TokenGenerator};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
