//! Password, token, UUID and SHA-256 generation with a heuristic strength score.
//!
//! Every random value comes from the operating system CSPRNG, either directly
//! or through a ChaCha20 generator seeded from it.

pub mod cli;
pub mod core;
pub mod crypto;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::crypto::sha256_hex;
pub use crate::generators::{
    apply_preset, apply_preset_by_name, generate_password, generate_token, generate_uuid_v4,
    score_strength, strength_label, GeneratorError,
};
pub use crate::models::{GenerationPolicy, Language, Preset, StrengthLevel, Theme, TokenEncoding};
