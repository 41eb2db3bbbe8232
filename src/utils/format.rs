// src/utils/format.rs
use console::Style;

use crate::generators::MAX_STRENGTH;
use crate::models::{Language, Preset, StrengthLevel, Theme};

/// User-facing strings for the terminal front end.
pub struct Messages {
    pub strength: &'static str,
    pub length: &'static str,
    pub lowercase: &'static str,
    pub uppercase: &'static str,
    pub numbers: &'static str,
    pub special: &'static str,
    pub password_generator: &'static str,
    pub custom_password: &'static str,
    pub uuid: &'static str,
    pub random_token: &'static str,
    pub encoding: &'static str,
    pub hash_generator: &'static str,
    pub input_text: &'static str,
    pub check_strength: &'static str,
    pub choose_option: &'static str,
    pub exit: &'static str,
    pub dont_use_passwords: &'static str,
    pub weak_passwords_warning: &'static str,
    pub use_generator_tip: &'static str,
}

/// Well-known passwords shown alongside the weak-password warning.
pub const COMMON_WEAK_PASSWORDS: [&str; 7] = [
    "abcd1234", "qwerty", "password", "12345678", "blabla", "admin123", "iloveyou",
];

/// Scores at or below this get the weak-password warning.
pub const WEAK_WARNING_THRESHOLD: u8 = 3;

static EN: Messages = Messages {
    strength: "Strength",
    length: "Length",
    lowercase: "Lowercase (a-z)",
    uppercase: "Uppercase (A-Z)",
    numbers: "Numbers (0-9)",
    special: "Special (!@#$...)",
    password_generator: "Password Generator",
    custom_password: "Custom password",
    uuid: "UUID v4",
    random_token: "Random Token",
    encoding: "Encoding",
    hash_generator: "SHA-256 Hash",
    input_text: "Input Text",
    check_strength: "Check password strength",
    choose_option: "Choose an option:",
    exit: "Exit",
    dont_use_passwords: "Don't use passwords like this!",
    weak_passwords_warning: "These passwords can be cracked in seconds:",
    use_generator_tip: "💡 Use the password generator to create stronger passwords!",
};

static VI: Messages = Messages {
    strength: "Độ Mạnh",
    length: "Độ Dài",
    lowercase: "Chữ thường (a-z)",
    uppercase: "Chữ hoa (A-Z)",
    numbers: "Số (0-9)",
    special: "Ký tự đặc biệt (!@#$...)",
    password_generator: "Trình Tạo Mật Khẩu",
    custom_password: "Mật khẩu tùy chỉnh",
    uuid: "UUID v4",
    random_token: "Token Ngẫu Nhiên",
    encoding: "Mã hóa",
    hash_generator: "Hash SHA-256",
    input_text: "Văn Bản Đầu Vào",
    check_strength: "Kiểm tra độ mạnh mật khẩu",
    choose_option: "Chọn một mục:",
    exit: "Thoát",
    dont_use_passwords: "Đừng đặt password như thế này!",
    weak_passwords_warning: "Những password này có thể bị crack trong vài giây:",
    use_generator_tip: "💡 Hãy dùng trình tạo mật khẩu để tạo password mạnh hơn!",
};

pub fn messages(language: Language) -> &'static Messages {
    match language {
        Language::En => &EN,
        Language::Vi => &VI,
    }
}

pub fn preset_label(preset: Preset, language: Language) -> &'static str {
    match (language, preset) {
        (Language::En, Preset::Strong) => "Strong",
        (Language::En, Preset::Medium) => "Medium",
        (Language::En, Preset::Simple) => "Simple",
        (Language::Vi, Preset::Strong) => "Mạnh",
        (Language::Vi, Preset::Medium) => "Trung Bình",
        (Language::Vi, Preset::Simple) => "Đơn Giản",
    }
}

fn bar_style(level: StrengthLevel, theme: Theme) -> Style {
    let style = Style::new().fg(level.color());
    match theme {
        Theme::Light => style,
        Theme::Dark => style.bright(),
    }
}

// Uncoloured bar, one cell per point
pub fn strength_bar(score: u8) -> String {
    let filled = score.min(MAX_STRENGTH) as usize;
    let empty = MAX_STRENGTH as usize - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

// e.g. "Strength: Good [█████░░] 5/7"
pub fn format_strength(score: u8, language: Language, theme: Theme) -> String {
    let level = StrengthLevel::from_score(score);
    let style = bar_style(level, theme);
    format!(
        "{}: {} [{}] {}/{}",
        messages(language).strength,
        style.apply_to(level.label(language)),
        style.apply_to(strength_bar(score)),
        score,
        MAX_STRENGTH
    )
}

pub fn weak_password_warning(score: u8, language: Language) -> Option<String> {
    if score > WEAK_WARNING_THRESHOLD {
        return None;
    }

    let text = messages(language);
    let style = Style::new().yellow();
    Some(format!(
        "{} {}\n{} {}\n{}",
        style.apply_to("⚠️"),
        style.apply_to(text.dont_use_passwords).bold(),
        text.weak_passwords_warning,
        COMMON_WEAK_PASSWORDS.join(", "),
        text.use_generator_tip
    ))
}
