#![cfg(feature = "cli")]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn run_cli(args: &[&str]) -> Output {
    let binary = PathBuf::from(env!("CARGO_BIN_EXE_fakefactory"));
    Command::new(binary)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("cli command should run")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn lists_locales_and_methods() {
    let locales = run_cli(&["locales"]);
    assert!(locales.status.success());
    let locales = stdout_lines(&locales);
    assert!(locales.iter().any(|line| line == "en_US"));
    assert!(locales.iter().any(|line| line == "fr_FR"));

    let methods = run_cli(&["methods"]);
    assert!(methods.status.success());
    let methods = stdout_lines(&methods);
    assert!(methods.iter().any(|line| line == "email"));
    assert!(methods.iter().any(|line| line == "name"));
}

#[test]
fn samples_are_seeded_and_valid() {
    let first = run_cli(&["sample", "email", "-n", "4", "--seed", "11", "--json"]);
    assert!(first.status.success());
    let emails: Vec<String> =
        serde_json::from_slice(&first.stdout).expect("sample output should be a json array");
    assert_eq!(emails.len(), 4);
    assert!(emails.iter().all(|email| email.contains('@')));

    let second = run_cli(&["sample", "email", "-n", "4", "--seed", "11", "--json"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn invalid_requests_fail() {
    let unknown = run_cli(&["sample", "spoon"]);
    assert!(!unknown.status.success());
    assert!(String::from_utf8_lossy(&unknown.stderr).contains("unsupported method"));

    let bad_locale = run_cli(&["sample", "name", "--locales", "fr_FR,mushroom_MUSHROOM"]);
    assert!(!bad_locale.status.success());
    assert!(String::from_utf8_lossy(&bad_locale.stderr).contains("unsupported locale"));

    let both = run_cli(&["sample", "name", "--locale", "fr_FR", "--locales", "en_US"]);
    assert!(!both.status.success());
}

#[test]
fn config_file_conflicting_locales_is_rejected() {
    let tmp = tempdir().expect("tempdir should be created");
    let path = tmp.path().join("request.json");
    fs::write(
        &path,
        r#"{"method": "name", "locale": "fr_FR", "locales": ["fr_FR", "en_US"]}"#,
    )
    .expect("config should be written");

    let output = run_cli(&[
        "sample",
        "--config",
        path.to_str().expect("config path should be valid utf-8"),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("both locale and locales"));

    let method_and_config = run_cli(&[
        "sample",
        "email",
        "--config",
        path.to_str().expect("config path should be valid utf-8"),
    ]);
    assert!(!method_and_config.status.success());
    assert!(String::from_utf8_lossy(&method_and_config.stderr).contains("cannot be used with"));

    fs::write(&path, r#"{"method": "name", "locales": ["fr_FR", "de_DE"]}"#)
        .expect("config should be written");
    let output = run_cli(&[
        "sample",
        "--config",
        path.to_str().expect("config path should be valid utf-8"),
        "-n",
        "3",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 3);
}
