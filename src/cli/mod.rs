// src/cli/mod.rs
use clap::Parser;
use log::LevelFilter;

use crate::core::config::{self, Config};
use crate::models::{Language, Theme};

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(name = "passgen", author, version, about = "Generate passwords, tokens, UUIDs and SHA-256 hashes", long_about = None)]
pub struct Args {
    /// Print results as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Language for labels [default: UI_LANGUAGE or en]
    #[arg(long, global = true, value_enum)]
    pub lang: Option<Language>,

    /// Terminal colour theme [default: UI_THEME or light]
    #[arg(long, global = true, value_enum)]
    pub theme: Option<Theme>,

    /// Log level (off, error, warn, info, debug, trace) [default: LOG_LEVEL or warn]
    #[arg(long, global = true, value_parser = parse_log_level)]
    pub log_level: Option<LevelFilter>,

    /// Command to execute; the interactive menu runs when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

fn parse_log_level(value: &str) -> Result<LevelFilter, String> {
    config::parse_level(value).ok_or_else(|| format!("unknown log level '{}'", value))
}

/// How results are rendered, resolved from flags first and config second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub json: bool,
    pub language: Language,
    pub theme: Theme,
    /// Append the strength bar after a single generated password
    pub show_strength: bool,
}

impl OutputSettings {
    pub fn resolve(args: &Args, config: &Config, attended: bool) -> Self {
        Self {
            json: args.json,
            language: args.lang.unwrap_or(config.language),
            theme: args.theme.unwrap_or(config.theme),
            show_strength: attended && !args.json,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            json: false,
            language: Language::En,
            theme: Theme::Light,
            show_strength: false,
        }
    }
}
