// src/generators/strength.rs
use console::Color;

use crate::models::{Language, StrengthLevel};

pub const MAX_STRENGTH: u8 = 7;

// Additive point score: three length thresholds plus one point per character class present
pub fn score_strength(password: &str) -> u8 {
    let mut score = 0;
    let length = password.chars().count();

    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if length >= 16 {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score.min(MAX_STRENGTH)
}

pub fn strength_label(score: u8) -> &'static str {
    StrengthLevel::from_score(score).label(Language::En)
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::VeryWeak,
            3 => StrengthLevel::Weak,
            4 => StrengthLevel::Fair,
            5 => StrengthLevel::Good,
            6 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, StrengthLevel::VeryWeak) => "Very Weak",
            (Language::En, StrengthLevel::Weak) => "Weak",
            (Language::En, StrengthLevel::Fair) => "Fair",
            (Language::En, StrengthLevel::Good) => "Good",
            (Language::En, StrengthLevel::Strong) => "Strong",
            (Language::En, StrengthLevel::VeryStrong) => "Very Strong",
            (Language::Vi, StrengthLevel::VeryWeak) => "Rất Yếu",
            (Language::Vi, StrengthLevel::Weak) => "Yếu",
            (Language::Vi, StrengthLevel::Fair) => "Trung Bình",
            (Language::Vi, StrengthLevel::Good) => "Tốt",
            (Language::Vi, StrengthLevel::Strong) => "Mạnh",
            (Language::Vi, StrengthLevel::VeryStrong) => "Rất Mạnh",
        }
    }

    // Terminals have no orange, so the two weakest bands share red
    pub fn color(&self) -> Color {
        match self {
            StrengthLevel::VeryWeak | StrengthLevel::Weak => Color::Red,
            StrengthLevel::Fair => Color::Yellow,
            StrengthLevel::Good => Color::Blue,
            StrengthLevel::Strong => Color::Green,
            StrengthLevel::VeryStrong => Color::Cyan,
        }
    }
}
