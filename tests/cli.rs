//! Integration tests for the `passgen` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use base64::{engine::general_purpose, Engine as _};

fn passgen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_passgen"));
    // keep the developer's own defaults out of the assertions
    for key in [
        "DEFAULT_PASSWORD_LENGTH",
        "DEFAULT_TOKEN_LENGTH",
        "DEFAULT_TOKEN_ENCODING",
        "UI_LANGUAGE",
        "UI_THEME",
        "LOG_LEVEL",
        "LOG_FILE",
    ] {
        cmd.env_remove(key);
    }
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

fn run(args: &[&str]) -> Output {
    passgen().args(args).output().expect("failed to run passgen binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn password_defaults_to_sixteen_characters() {
    let output = run(&["password"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output).chars().count(), 16);
}

#[test]
fn password_preset_and_class_flags() {
    let output = run(&["password", "--preset", "simple", "-n", "4"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    for line in lines {
        assert_eq!(line.len(), 12);
        assert!(line.chars().all(|c| c.is_ascii_alphabetic()));
    }

    let output = run(&["password", "-l", "40", "--no-lower", "--no-upper", "--no-symbols"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert_eq!(stdout.len(), 40);
    assert!(stdout.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn password_with_no_classes_is_empty() {
    let output = run(&["password", "--no-lower", "--no-upper", "--no-digits", "--no-symbols"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn negative_password_length_fails() {
    let output = run(&["password", "--length", "-3"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("negative"));
}

#[test]
fn oversized_count_fails_without_panicking() {
    let output = run(&["uuid", "-n", "18446744073709551615"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn negative_token_length_fails() {
    let output = run(&["token", "-l", "-1"]);
    assert!(!output.status.success());
}

#[test]
fn non_numeric_length_fails() {
    let output = run(&["token", "-l", "lots"]);
    assert!(!output.status.success());
}

#[test]
fn hex_token_has_two_chars_per_byte() {
    let output = run(&["token", "-l", "16"]);
    assert!(output.status.success());
    let token = stdout_of(&output);
    assert_eq!(token.len(), 32);
    assert!(token.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
}

#[test]
fn base64_token_decodes_to_requested_length() {
    let output = run(&["token", "-l", "16", "--encoding", "base64"]);
    assert!(output.status.success());
    let decoded = general_purpose::STANDARD.decode(stdout_of(&output)).unwrap();
    assert_eq!(decoded.len(), 16);
}

#[test]
fn token_length_comes_from_environment() {
    let output = passgen()
        .args(["token"])
        .env("DEFAULT_TOKEN_LENGTH", "8")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_of(&output).len(), 16);
}

#[test]
fn uuid_prints_v4_identifiers() {
    let output = run(&["uuid", "-n", "2"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let ids: Vec<&str> = stdout.lines().collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    for id in ids {
        assert_eq!(id.len(), 36);
        assert_eq!(&id[14..15], "4");
    }
}

#[test]
fn hash_argument() {
    let output = run(&["hash", "abc"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn hash_reads_stdin() {
    let mut child = passgen()
        .arg("hash")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"abc\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn strength_json() {
    let output = run(&["strength", "Ab3!defghijklmno", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["strength"], 7);
    assert_eq!(value["level"], "very_strong");
    assert_eq!(value["label"], "Very Strong");
}

#[test]
fn weak_strength_check_warns() {
    let output = run(&["strength", "qwerty"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Don't use passwords like this!"));
    assert!(stdout.contains("admin123"));

    let output = run(&["strength", "--", "-Ab3!defghijklmn"]);
    assert!(!stdout_of(&output).contains("Don't use passwords"));
}

#[test]
fn strength_label_in_vietnamese() {
    let output = run(&["--lang", "vi", "strength", "abc", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["label"], "Rất Yếu");
}

#[test]
fn password_json_includes_policy() {
    let output = run(&["password", "--preset", "strong", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["policy"]["length"], 20);
    assert_eq!(value["policy"]["include_symbols"], true);
    assert_eq!(value["password"].as_str().unwrap().len(), 20);
}

#[test]
fn help_lists_subcommands() {
    let output = run(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    for sub in ["password", "uuid", "token", "hash", "strength"] {
        assert!(stdout.contains(sub), "missing {sub}");
    }
}
