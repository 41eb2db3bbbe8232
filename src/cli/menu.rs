// src/cli/menu.rs
use std::fmt;

use inquire::{Confirm, CustomType, InquireError, Password, PasswordDisplayMode, Select, Text};

use super::handlers::{self, ClassExclusions};
use super::OutputSettings;
use crate::core::config::Config;
use crate::generators;
use crate::models::{GenerationPolicy, Preset, TokenEncoding};
use crate::utils::{messages, preset_label, Messages};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Preset(Preset),
    CustomPassword,
    Uuid,
    Token,
    Hash,
    Strength,
    Exit,
}

struct MenuEntry {
    action: MenuAction,
    label: String,
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn menu_entries(text: &Messages, out: &OutputSettings) -> Vec<MenuEntry> {
    let mut entries: Vec<MenuEntry> = Preset::ALL
        .iter()
        .map(|preset| MenuEntry {
            action: MenuAction::Preset(*preset),
            label: format!("🔐  {} ({})", text.password_generator, preset_label(*preset, out.language)),
        })
        .collect();

    entries.extend([
        MenuEntry { action: MenuAction::CustomPassword, label: format!("🛠️  {}", text.custom_password) },
        MenuEntry { action: MenuAction::Uuid, label: format!("🆔  {}", text.uuid) },
        MenuEntry { action: MenuAction::Token, label: format!("🎲  {}", text.random_token) },
        MenuEntry { action: MenuAction::Hash, label: format!("#️⃣  {}", text.hash_generator) },
        MenuEntry { action: MenuAction::Strength, label: format!("📊  {}", text.check_strength) },
        MenuEntry { action: MenuAction::Exit, label: format!("❌  {}", text.exit) },
    ]);

    entries
}

pub fn run_cli_menu(config: &Config, out: &OutputSettings) -> anyhow::Result<()> {
    let text = messages(out.language);
    let out = OutputSettings {
        json: false,
        show_strength: true,
        ..*out
    };

    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 RUST PASSGEN TOOLKIT        ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let selection = Select::new(text.choose_option, menu_entries(text, &out))
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .with_page_size(12)
            .prompt();

        let action = match selection {
            Ok(entry) => entry.action,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        if action == MenuAction::Exit {
            break;
        }

        match run_action(action, config, &out, text) {
            Ok(output) => println!("\n{}\n", output),
            // Esc inside a sub-prompt returns to the menu
            Err(ActionError::Prompt(InquireError::OperationCanceled)) => continue,
            Err(ActionError::Prompt(InquireError::OperationInterrupted)) => break,
            Err(ActionError::Prompt(e)) => return Err(e.into()),
            Err(ActionError::Failed(e)) => {
                log::error!("Menu action failed: {:#}", e);
                println!("❌ {:#}", e);
            }
        }
    }

    log::debug!("Leaving interactive menu");
    Ok(())
}

enum ActionError {
    Prompt(InquireError),
    Failed(anyhow::Error),
}

impl From<InquireError> for ActionError {
    fn from(e: InquireError) -> Self {
        ActionError::Prompt(e)
    }
}

impl From<anyhow::Error> for ActionError {
    fn from(e: anyhow::Error) -> Self {
        ActionError::Failed(e)
    }
}

fn run_action(
    action: MenuAction,
    config: &Config,
    out: &OutputSettings,
    text: &Messages,
) -> Result<String, ActionError> {
    let output = match action {
        MenuAction::Preset(preset) => {
            handlers::handle_password(out, &generators::apply_preset(preset), 1)?
        }
        MenuAction::CustomPassword => {
            let policy = prompt_policy(config, text)?;
            handlers::handle_password(out, &policy, 1)?
        }
        MenuAction::Uuid => handlers::handle_uuid(out, 1)?,
        MenuAction::Token => {
            let length = CustomType::<i64>::new(&format!("{}:", text.length))
                .with_default(config.default_token_length as i64)
                .with_error_message("Please type a whole number")
                .prompt()?;
            let encoding = Select::new(
                &format!("{}:", text.encoding),
                vec![TokenEncoding::Hex, TokenEncoding::Base64],
            )
            .with_starting_cursor(match config.default_token_encoding {
                TokenEncoding::Hex => 0,
                TokenEncoding::Base64 => 1,
            })
            .prompt()?;
            handlers::handle_token(config, out, Some(length), Some(encoding))?
        }
        MenuAction::Hash => {
            let input = Text::new(&format!("{}:", text.input_text)).prompt()?;
            handlers::handle_hash(out, &input)?
        }
        MenuAction::Strength => {
            let password = Password::new(&format!("{}:", text.check_strength))
                .with_display_mode(PasswordDisplayMode::Masked)
                .without_confirmation()
                .prompt()?;
            handlers::handle_strength(out, &password)?
        }
        MenuAction::Exit => String::new(),
    };

    Ok(output)
}

fn prompt_policy(config: &Config, text: &Messages) -> Result<GenerationPolicy, ActionError> {
    let length = CustomType::<i64>::new(&format!("{}:", text.length))
        .with_default(config.default_password_length as i64)
        .with_error_message("Please type a whole number")
        .prompt()?;

    let lower = Confirm::new(text.lowercase).with_default(true).prompt()?;
    let upper = Confirm::new(text.uppercase).with_default(true).prompt()?;
    let digits = Confirm::new(text.numbers).with_default(true).prompt()?;
    let symbols = Confirm::new(text.special).with_default(true).prompt()?;

    let exclusions = ClassExclusions {
        lower: !lower,
        upper: !upper,
        digits: !digits,
        symbols: !symbols,
    };

    handlers::build_policy(config, None, Some(length), exclusions).map_err(|e| ActionError::Failed(e.into()))
}
