// src/generators/token.rs
use base64::{engine::general_purpose, Engine as _};
use uuid::{Builder, Uuid};

use super::{GeneratorError, Result};
use crate::crypto;
use crate::models::TokenEncoding;

pub const DEFAULT_TOKEN_LENGTH: usize = 32;
/// Range offered by the interactive prompts; the generator itself accepts any length.
pub const SUGGESTED_TOKEN_RANGE: std::ops::RangeInclusive<usize> = 8..=256;

#[derive(Debug, Clone)]
pub struct TokenGenerator {
    length: usize,
    encoding: TokenEncoding,
}

impl TokenGenerator {
    pub fn new() -> Self {
        Self {
            length: DEFAULT_TOKEN_LENGTH,
            encoding: TokenEncoding::Hex,
        }
    }

    pub fn with_defaults(length: usize, encoding: TokenEncoding) -> Self {
        Self { length, encoding }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn encoding(&self) -> TokenEncoding {
        self.encoding
    }

    pub fn generate(&self) -> Result<String> {
        generate_token(self.length, self.encoding)
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Random version-4 UUID; the builder fixes the version nibble and RFC 4122 variant bits
pub fn random_uuid() -> Result<Uuid> {
    let bytes = crypto::random_bytes(16)?;
    let mut raw = [0u8; 16];
    raw.copy_from_slice(&bytes);
    Ok(Builder::from_random_bytes(raw).into_uuid())
}

pub fn generate_uuid_v4() -> Result<String> {
    Ok(random_uuid()?.hyphenated().to_string())
}

pub fn generate_token(length: usize, encoding: TokenEncoding) -> Result<String> {
    let bytes = crypto::random_bytes(length)?;

    let token = match encoding {
        TokenEncoding::Hex => hex::encode(&bytes),
        TokenEncoding::Base64 => general_purpose::STANDARD.encode(&bytes),
    };

    Ok(token)
}

/// Convert a raw, possibly negative, length from user input.
pub fn validate_length(raw: i64) -> Result<usize> {
    if raw < 0 {
        return Err(GeneratorError::InvalidArgument(format!(
            "Length must not be negative (got {})",
            raw
        )));
    }

    usize::try_from(raw)
        .map_err(|_| GeneratorError::InvalidArgument(format!("Length {} is too large", raw)))
}
