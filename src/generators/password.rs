// src/generators/password.rs
use clap::ValueEnum;
use rand::distributions::{Distribution, Uniform};

use super::{GeneratorError, Result};
use crate::crypto;
use crate::models::{GenerationPolicy, Preset};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, policy: &GenerationPolicy) -> Result<String> {
        generate_password(policy)
    }

    pub fn analyze_password_strength(&self, password: &str) -> u8 {
        super::score_strength(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenate the enabled character classes, always in the order
/// lowercase, uppercase, digits, symbols.
pub fn character_pool(policy: &GenerationPolicy) -> String {
    let mut pool = String::new();

    if policy.include_lowercase {
        pool.push_str(LOWERCASE);
    }
    if policy.include_uppercase {
        pool.push_str(UPPERCASE);
    }
    if policy.include_numbers {
        pool.push_str(DIGITS);
    }
    if policy.include_symbols {
        pool.push_str(SYMBOLS);
    }

    pool
}

// Generate a random password from the policy's character pool.
// An empty pool yields an empty password, whatever the requested length.
pub fn generate_password(policy: &GenerationPolicy) -> Result<String> {
    let pool = character_pool(policy);
    if pool.is_empty() || policy.length == 0 {
        return Ok(String::new());
    }

    let chars = pool.as_bytes();
    let mut rng = crypto::secure_rng()?;
    let dist = Uniform::from(0..chars.len());

    let password = (0..policy.length)
        .map(|_| chars[dist.sample(&mut rng)] as char)
        .collect();

    Ok(password)
}

pub fn apply_preset(preset: Preset) -> GenerationPolicy {
    match preset {
        Preset::Strong => GenerationPolicy {
            length: 20,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
        },
        Preset::Medium => GenerationPolicy {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: false,
        },
        Preset::Simple => GenerationPolicy {
            length: 12,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: false,
            include_symbols: false,
        },
    }
}

pub fn apply_preset_by_name(name: &str) -> Result<GenerationPolicy> {
    let preset = Preset::from_str(name.trim(), true)
        .map_err(|_| GeneratorError::InvalidArgument(format!("Unknown preset '{}'", name)))?;
    Ok(apply_preset(preset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(length: usize, lower: bool, upper: bool, digits: bool, symbols: bool) -> GenerationPolicy {
        GenerationPolicy {
            length,
            include_lowercase: lower,
            include_uppercase: upper,
            include_numbers: digits,
            include_symbols: symbols,
        }
    }

    #[test]
    fn pool_follows_fixed_class_order() {
        assert_eq!(character_pool(&policy(8, true, true, true, true)), format!("{LOWERCASE}{UPPERCASE}{DIGITS}{SYMBOLS}"));
        assert_eq!(character_pool(&policy(8, false, true, false, true)), format!("{UPPERCASE}{SYMBOLS}"));
        assert_eq!(character_pool(&policy(8, false, false, true, false)), DIGITS);
    }

    #[test]
    fn class_strings_have_expected_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 26);
    }

    #[test]
    fn generated_password_has_exact_length_and_uses_pool() {
        for length in [1, 4, 16, 64, 500] {
            let p = policy(length, true, false, true, true);
            let pool = character_pool(&p);
            let password = generate_password(&p).unwrap();
            assert_eq!(password.chars().count(), length);
            assert!(password.chars().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn single_class_stays_in_class() {
        let password = generate_password(&policy(200, false, false, true, false)).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));

        let password = generate_password(&policy(200, false, false, false, true)).unwrap();
        assert!(password.chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn empty_pool_returns_empty_string() {
        for length in [0, 1, 20, 1000] {
            assert_eq!(generate_password(&policy(length, false, false, false, false)).unwrap(), "");
        }
    }

    #[test]
    fn zero_length_returns_empty_string() {
        assert_eq!(generate_password(&policy(0, true, true, true, true)).unwrap(), "");
    }

    #[test]
    fn long_password_covers_every_enabled_class() {
        // 2000 draws from a 88-char pool: missing a whole class is not a realistic outcome
        let password = generate_password(&policy(2000, true, true, true, true)).unwrap();
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password.chars().any(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn consecutive_passwords_differ() {
        let p = GenerationPolicy::default();
        assert_ne!(generate_password(&p).unwrap(), generate_password(&p).unwrap());
    }

    #[test]
    fn presets_match_table() {
        assert_eq!(apply_preset(Preset::Strong), policy(20, true, true, true, true));
        assert_eq!(apply_preset(Preset::Medium), policy(16, true, true, true, false));
        assert_eq!(apply_preset(Preset::Simple), policy(12, true, true, false, false));
    }

    #[test]
    fn presets_resolve_by_name() {
        assert_eq!(apply_preset_by_name("strong").unwrap(), apply_preset(Preset::Strong));
        assert_eq!(apply_preset_by_name("Medium").unwrap(), apply_preset(Preset::Medium));
        assert_eq!(apply_preset_by_name(" simple ").unwrap(), apply_preset(Preset::Simple));
        assert!(matches!(
            apply_preset_by_name("extreme"),
            Err(GeneratorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn generator_facade_delegates() {
        let generator = PasswordGenerator::new();
        let password = generator.generate_password(&apply_preset(Preset::Strong)).unwrap();
        assert_eq!(password.len(), 20);
        assert!(generator.analyze_password_strength(&password) <= 7);
    }
}
