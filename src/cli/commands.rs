// src/cli/commands.rs
use clap::Subcommand;

use super::handlers::check_count;
use crate::models::{Preset, TokenEncoding};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Generate passwords from a preset or character-class flags
    Password {
        /// Start from a preset policy; explicit flags still apply on top
        #[arg(long, value_enum)]
        preset: Option<Preset>,

        /// Password length [default: preset length or DEFAULT_PASSWORD_LENGTH]
        #[arg(long, short, allow_negative_numbers = true)]
        length: Option<i64>,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lower: bool,

        /// Exclude uppercase letters
        #[arg(long)]
        no_upper: bool,

        /// Exclude digits
        #[arg(long)]
        no_digits: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,

        /// Number of passwords to generate (at most 10000)
        #[arg(long, short = 'n', default_value_t = 1, value_parser = parse_count)]
        count: usize,
    },

    /// Generate version-4 UUIDs
    Uuid {
        /// Number of UUIDs to generate (at most 10000)
        #[arg(long, short = 'n', default_value_t = 1, value_parser = parse_count)]
        count: usize,
    },

    /// Generate a random token
    Token {
        /// Number of random bytes [default: DEFAULT_TOKEN_LENGTH or 32]
        #[arg(long, short, allow_negative_numbers = true)]
        length: Option<i64>,

        /// Output encoding [default: DEFAULT_TOKEN_ENCODING or hex]
        #[arg(long, short, value_enum)]
        encoding: Option<TokenEncoding>,
    },

    /// SHA-256 hash of TEXT, or of standard input when TEXT is omitted.
    /// One trailing newline is stripped from standard input.
    Hash {
        text: Option<String>,
    },

    /// Score a password's strength
    Strength {
        #[arg(required = true, allow_hyphen_values = true)]
        password: String,
    },
}

fn parse_count(value: &str) -> Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a valid count", value))?;
    check_count(count).map_err(|e| e.to_string())
}
