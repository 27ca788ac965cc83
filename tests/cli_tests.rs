//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const API_VAR: &str = "NUXT_PUBLIC_API_URL";
const WS_VAR: &str = "NUXT_PUBLIC_WS_URL";

fn frontconf() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("frontconf"));
    cmd.env_remove(API_VAR).env_remove(WS_VAR).env_remove("FRONTCONF_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn dir_arg(dir: &TempDir) -> &str {
    dir.path().to_str().expect("utf8 path")
}

#[test]
fn test_cli_version() {
    let mut cmd = frontconf();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("frontconf"));
}

#[test]
fn test_cli_help() {
    let mut cmd = frontconf();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Resolve, validate and render"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("modules"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_resolve_defaults_as_json() {
    let dir = TempDir::new().expect("temp dir");
    let output = frontconf()
        .args(["resolve", "--dir", dir_arg(&dir)])
        .output()
        .expect("run resolve");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["ssr"], false);
    assert_eq!(value["devtools"]["enabled"], true);
    assert_eq!(value["runtimeConfig"]["public"]["apiUrl"], "");
    assert_eq!(value["runtimeConfig"]["public"]["wsUrl"], "");
    assert_eq!(
        value["modules"],
        serde_json::json!(["@nuxtjs/color-mode", "@nuxtjs/tailwindcss", "nuxt-emoji-picker"])
    );
}

#[test]
fn test_resolve_applies_env_override() {
    let dir = TempDir::new().expect("temp dir");
    frontconf()
        .env(API_VAR, "https://api.example.com")
        .args(["resolve", "--dir", dir_arg(&dir), "--format", "env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NUXT_PUBLIC_API_URL=\"https://api.example.com\""))
        .stdout(predicate::str::contains("NUXT_PUBLIC_WS_URL=\"\""));
}

#[test]
fn test_resolve_no_env_ignores_override() {
    let dir = TempDir::new().expect("temp dir");
    frontconf()
        .env(API_VAR, "https://api.example.com")
        .args(["resolve", "--dir", dir_arg(&dir), "--format", "env", "--no-env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NUXT_PUBLIC_API_URL=\"\""));
}

#[test]
fn test_resolve_reads_dotenv() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join(".env"), "NUXT_PUBLIC_WS_URL=wss://rt.example.com\n")
        .expect("write .env");

    frontconf()
        .args(["resolve", "--dir", dir_arg(&dir), "--format", "env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NUXT_PUBLIC_WS_URL=\"wss://rt.example.com\""));
}

#[test]
fn test_resolve_flag_beats_env() {
    let dir = TempDir::new().expect("temp dir");
    frontconf()
        .env(API_VAR, "https://env.example.com")
        .args(["resolve", "--dir", dir_arg(&dir), "--format", "env", "--api-url", "/api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NUXT_PUBLIC_API_URL=\"/api\""));
}

#[test]
fn test_rust_log_enables_info_output() {
    let dir = TempDir::new().expect("temp dir");
    frontconf()
        .env("RUST_LOG", "info")
        .args(["resolve", "--dir", dir_arg(&dir)])
        .assert()
        .success()
        .stderr(predicate::str::contains("Settings resolved"));
}

#[test]
fn test_default_log_level_hides_info_output() {
    let dir = TempDir::new().expect("temp dir");
    frontconf()
        .args(["resolve", "--dir", dir_arg(&dir)])
        .assert()
        .success()
        .stderr(predicate::str::contains("Settings resolved").not());
}

#[test]
fn test_verbose_enables_debug_output() {
    let dir = TempDir::new().expect("temp dir");
    frontconf()
        .args(["resolve", "--dir", dir_arg(&dir), "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Settings resolved"));
}

#[test]
fn test_resolve_rejects_invalid_format() {
    let dir = TempDir::new().expect("temp dir");
    frontconf()
        .args(["resolve", "--dir", dir_arg(&dir), "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid output format"));
}

#[test]
fn test_check_reports_unknown_module() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("frontconf.toml"),
        "modules = [\"@nuxtjs/color-mode\", \"@nuxtjs/not-a-module\"]\n",
    )
    .expect("write settings");

    frontconf()
        .args(["check", "--dir", dir_arg(&dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown module identifier '@nuxtjs/not-a-module'"));
}

#[test]
fn test_check_valid_settings() {
    let dir = TempDir::new().expect("temp dir");
    frontconf()
        .args(["check", "--dir", dir_arg(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"))
        .stdout(predicate::str::contains(
            "Modules: @nuxtjs/color-mode, @nuxtjs/tailwindcss, nuxt-emoji-picker",
        ))
        .stdout(predicate::str::contains("Fingerprint:"));
}

#[test]
fn test_check_strict_without_file_fails() {
    let dir = TempDir::new().expect("temp dir");
    frontconf()
        .args(["check", "--dir", dir_arg(&dir), "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required field 'compatibilityDate' is missing"));
}

#[test]
fn test_config_path_from_env() {
    let dir = TempDir::new().expect("temp dir");
    let settings = dir.path().join("custom.json");
    fs::write(&settings, r#"{"ssr": true}"#).expect("write settings");

    let output = frontconf()
        .env("FRONTCONF_CONFIG", settings.to_str().expect("utf8 path"))
        .args(["resolve", "--dir", dir_arg(&dir)])
        .output()
        .expect("run resolve");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["ssr"], true);
}

#[test]
fn test_modules_lists_registry_in_order() {
    let output = frontconf().arg("modules").output().expect("run modules");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let ids: Vec<&str> =
        stdout.lines().filter_map(|line| line.split_whitespace().next()).collect();
    assert_eq!(ids, ["@nuxtjs/color-mode", "@nuxtjs/tailwindcss", "nuxt-emoji-picker"]);
}

#[test]
fn test_init_writes_file_that_resolves() {
    let dir = TempDir::new().expect("temp dir");
    frontconf().args(["init", "--dir", dir_arg(&dir)]).assert().success();
    assert!(dir.path().join("frontconf.toml").is_file());

    frontconf()
        .args(["check", "--dir", dir_arg(&dir), "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compatibility date: 2024-04-03"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("frontconf.yaml"), "ssr: true\n").expect("write settings");

    frontconf()
        .args(["init", "--dir", dir_arg(&dir), "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    frontconf()
        .args(["init", "--dir", dir_arg(&dir), "--format", "yaml", "--force"])
        .assert()
        .success();
    let written = fs::read_to_string(dir.path().join("frontconf.yaml")).expect("read");
    assert!(written.contains("ssr: false"));
}

#[test]
fn test_completions_generate() {
    frontconf()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("frontconf"));
}
