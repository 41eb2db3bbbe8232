// src/cli/handlers.rs
use std::io::Read;

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;

use super::{CliCommand, OutputSettings};
use crate::core::config::Config;
use crate::crypto;
use crate::generators::token::SUGGESTED_TOKEN_RANGE;
use crate::generators::{self, GeneratorError, PasswordGenerator, TokenGenerator};
use crate::models::{
    GenerationPolicy, HashOutput, PasswordOutput, Preset, StrengthLevel, StrengthOutput,
    TokenEncoding, TokenOutput, UuidOutput,
};
use crate::utils::{format_strength, weak_password_warning};

/// Upper bound on `--count`, so a typo cannot request an unbounded batch.
pub const MAX_COUNT: usize = 10_000;

/// Character classes switched off on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassExclusions {
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
}

pub fn run_command(command: &CliCommand, config: &Config, out: &OutputSettings) -> anyhow::Result<String> {
    match command {
        CliCommand::Password {
            preset,
            length,
            no_lower,
            no_upper,
            no_digits,
            no_symbols,
            count,
        } => {
            let exclusions = ClassExclusions {
                lower: *no_lower,
                upper: *no_upper,
                digits: *no_digits,
                symbols: *no_symbols,
            };
            let policy = build_policy(config, *preset, *length, exclusions)?;
            handle_password(out, &policy, *count)
        }
        CliCommand::Uuid { count } => handle_uuid(out, *count),
        CliCommand::Token { length, encoding } => handle_token(config, out, *length, *encoding),
        CliCommand::Hash { text } => {
            let text = match text {
                Some(text) => text.clone(),
                None => {
                    let mut input = String::new();
                    std::io::stdin()
                        .read_to_string(&mut input)
                        .context("Failed to read text from stdin")?;
                    strip_trailing_newline(input)
                }
            };
            handle_hash(out, &text)
        }
        CliCommand::Strength { password } => handle_strength(out, password),
    }
}

// Resolve the final policy: preset (or config default length) first, then explicit flags
pub fn build_policy(
    config: &Config,
    preset: Option<Preset>,
    length: Option<i64>,
    exclusions: ClassExclusions,
) -> Result<GenerationPolicy, GeneratorError> {
    let mut policy = match preset {
        Some(preset) => generators::apply_preset(preset),
        None => GenerationPolicy::with_length(config.default_password_length),
    };

    if let Some(raw) = length {
        policy.length = generators::validate_length(raw)?;
    }

    policy.include_lowercase &= !exclusions.lower;
    policy.include_uppercase &= !exclusions.upper;
    policy.include_numbers &= !exclusions.digits;
    policy.include_symbols &= !exclusions.symbols;

    Ok(policy)
}

pub fn handle_password(out: &OutputSettings, policy: &GenerationPolicy, count: usize) -> anyhow::Result<String> {
    check_count(count)?;
    if !policy.has_classes() {
        log::warn!("No character classes selected; generated passwords will be empty");
    }

    let generator = PasswordGenerator::new();
    let mut lines = Vec::new();

    for _ in 0..count {
        let password = generator.generate_password(policy)?;
        let strength = generator.analyze_password_strength(&password);

        if out.json {
            let level = StrengthLevel::from_score(strength);
            lines.push(to_json(&PasswordOutput {
                password,
                strength,
                level,
                label: level.label(out.language).to_string(),
                policy: *policy,
                generated_at: Utc::now(),
            })?);
        } else {
            lines.push(password);
            if count == 1 && out.show_strength {
                lines.push(format_strength(strength, out.language, out.theme));
                lines.extend(weak_password_warning(strength, out.language));
            }
        }
    }

    log::info!("Generated {} password(s) of length {}", count, policy.length);
    Ok(lines.join("\n"))
}

pub fn handle_uuid(out: &OutputSettings, count: usize) -> anyhow::Result<String> {
    check_count(count)?;
    let mut lines = Vec::new();

    for _ in 0..count {
        let uuid = generators::random_uuid()?;
        if out.json {
            lines.push(to_json(&UuidOutput {
                uuid,
                generated_at: Utc::now(),
            })?);
        } else {
            lines.push(uuid.hyphenated().to_string());
        }
    }

    log::info!("Generated {} uuid(s)", count);
    Ok(lines.join("\n"))
}

pub fn handle_token(
    config: &Config,
    out: &OutputSettings,
    length: Option<i64>,
    encoding: Option<TokenEncoding>,
) -> anyhow::Result<String> {
    let length = match length {
        Some(raw) => generators::validate_length(raw)?,
        None => config.default_token_length,
    };
    let encoding = encoding.unwrap_or(config.default_token_encoding);

    if !SUGGESTED_TOKEN_RANGE.contains(&length) {
        log::warn!(
            "Token length {} is outside the suggested range {}-{} bytes",
            length,
            SUGGESTED_TOKEN_RANGE.start(),
            SUGGESTED_TOKEN_RANGE.end()
        );
    }

    let token = TokenGenerator::with_defaults(length, encoding).generate()?;
    log::info!("Generated {}-byte {} token", length, encoding);

    if out.json {
        to_json(&TokenOutput {
            token,
            length,
            encoding,
            generated_at: Utc::now(),
        })
    } else {
        Ok(token)
    }
}

// Blank input yields an empty digest rather than the hash of whitespace
pub fn handle_hash(out: &OutputSettings, text: &str) -> anyhow::Result<String> {
    let digest = if text.trim().is_empty() {
        log::warn!("Nothing to hash: input is empty");
        String::new()
    } else {
        crypto::sha256_hex(text)
    };

    if out.json {
        to_json(&HashOutput {
            algorithm: "sha256".to_string(),
            digest,
            generated_at: Utc::now(),
        })
    } else {
        Ok(digest)
    }
}

pub fn handle_strength(out: &OutputSettings, password: &str) -> anyhow::Result<String> {
    let strength = generators::score_strength(password);
    let level = StrengthLevel::from_score(strength);

    if out.json {
        to_json(&StrengthOutput {
            strength,
            level,
            label: level.label(out.language).to_string(),
        })
    } else {
        let mut text = format_strength(strength, out.language, out.theme);
        if let Some(warning) = weak_password_warning(strength, out.language) {
            text.push('\n');
            text.push_str(&warning);
        }
        Ok(text)
    }
}

pub fn check_count(count: usize) -> Result<usize, GeneratorError> {
    if count > MAX_COUNT {
        return Err(GeneratorError::InvalidArgument(format!(
            "Count must be at most {} (got {})",
            MAX_COUNT, count
        )));
    }
    Ok(count)
}

// `echo abc | passgen hash` should hash "abc", not "abc\n"
fn strip_trailing_newline(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string(value).context("Failed to serialize output")
}
