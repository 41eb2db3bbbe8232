// src/crypto.rs
use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Random source error: {0}")]
    RandomSource(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

impl From<rand_core::Error> for CryptoError {
    fn from(e: rand_core::Error) -> Self {
        CryptoError::RandomSource(e.to_string())
    }
}

// Fill a fresh buffer straight from the operating system CSPRNG
pub fn random_bytes(len: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; len];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Build a ChaCha20 generator seeded from the OS.
///
/// Used where many small samples are drawn (character sampling), so the
/// fallible OS read happens once and every later draw is infallible.
pub fn secure_rng() -> Result<ChaCha20Rng> {
    Ok(ChaCha20Rng::from_rng(OsRng)?)
}

// SHA-256 digest of UTF-8 text as lowercase hex
pub fn sha256_hex(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}
