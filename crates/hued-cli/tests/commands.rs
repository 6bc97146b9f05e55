//! Integration tests for the hued command line.
//!
//! Commands run in-process against a temporary preference file and write to
//! a buffer; ANSI styling is stripped before assertions.

use std::fs;
use std::io;
use std::path::Path;

use clap::Parser;
use console::Key;
use hued::{
    MemoryStore, PreferenceError, PreferenceStore, ThemeKind, ThemeSwitcher, THEME_KEY,
};
use hued_cli::commands::play::{run_session, TerminalTarget};
use hued_cli::{run, Cli, Settings};
use tempfile::TempDir;

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("hued").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(cli, &mut out)?;
    Ok(console::strip_ansi_codes(&String::from_utf8(out)?).into_owned())
}

fn prefs_arg(dir: &TempDir) -> String {
    dir.path().join("prefs.json").display().to_string()
}

fn pressed(keys: Vec<Key>) -> Vec<io::Result<Key>> {
    keys.into_iter().map(Ok).collect()
}

/// Fails the first `failures` writes, then behaves like a [`MemoryStore`].
struct FlakyStore {
    failures: usize,
    inner: MemoryStore,
}

impl PreferenceStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(PreferenceError::unavailable("disk busy"));
        }
        self.inner.set(key, value)
    }
}

fn read_prefs(dir: &TempDir) -> serde_json::Value {
    let content = fs::read_to_string(dir.path().join("prefs.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

// ============================================================================
// Color commands
// ============================================================================

#[test]
fn convert_prints_all_representations() {
    let out = run_args(&["convert", "f4f6f8"]).unwrap();
    assert!(out.contains("#f4f6f8"));
    assert!(out.contains("244, 246, 248"));
    assert!(out.contains("210°, 22%, 96%"));
}

#[test]
fn convert_expands_shorthand() {
    let out = run_args(&["convert", "#abc", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["hex"], "#aabbcc");
}

#[test]
fn convert_rejects_malformed_color() {
    let err = run_args(&["convert", "#abcd"]).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("#abcd"), "got: {}", msg);
}

#[test]
fn adjust_identity_at_100_percent() {
    let out = run_args(&["adjust", "#f4f6f8", "--lightness", "100", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["input"], "#f4f6f8");
    assert_eq!(value["output"], "#f3f5f7");
}

#[test]
fn adjust_clamps_to_black_and_white() {
    let out = run_args(&["adjust", "#1f2937", "--lightness", "1000"]).unwrap();
    assert!(out.contains("-> "));
    assert!(out.trim_end().ends_with("#ffffff"));

    let out = run_args(&["adjust", "#1f2937", "--lightness", "-5"]).unwrap();
    assert!(out.trim_end().ends_with("#000000"));
}

#[test]
fn adjust_rejects_non_finite_percent() {
    let err = run_args(&["adjust", "#ff0000", "--lightness", "NaN"]).unwrap_err();
    assert!(err.to_string().contains("finite"), "got: {}", err);
    assert!(run_args(&["adjust", "#ff0000", "--saturation", "inf"]).is_err());
}

#[test]
fn adjust_requires_a_factor() {
    assert!(run_args(&["adjust", "#1f2937"]).is_err());
}

#[test]
fn luminance_reports_text_choice() {
    let out = run_args(&["luminance", "#1f2937"]).unwrap();
    assert!(out.starts_with("0.155"), "got: {}", out);
    assert!(out.contains("#ffffff"));

    let out = run_args(&["luminance", "#ffffff"]).unwrap();
    assert!(out.starts_with("1.000"));
    assert!(out.contains("#0f172a"));
}

// ============================================================================
// Theme commands
// ============================================================================

#[test]
fn theme_show_without_saved_preference_uses_default() {
    let dir = TempDir::new().unwrap();
    let out = run_args(&["theme", "show", "--prefs", &prefs_arg(&dir)]).unwrap();
    assert!(out.contains("(default)"));
    assert!(out.contains("theme-light"));
    assert!(out.contains("--bg-color: #f3f5f7;"));
    // show never writes
    assert!(!dir.path().join("prefs.json").exists());
}

#[test]
fn theme_set_persists_and_show_reads_it_back() {
    let dir = TempDir::new().unwrap();
    let prefs = prefs_arg(&dir);

    let out = run_args(&["theme", "set", "dark", "--prefs", &prefs]).unwrap();
    assert!(out.contains("--bg-color: #1f2937;"));
    assert!(out.contains("--text-color: #f3f4f6;"));
    assert_eq!(read_prefs(&dir)[THEME_KEY], "dark");

    let out = run_args(&["theme", "show", "--prefs", &prefs, "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["theme"], "dark");
    assert_eq!(value["source"], "saved");
    assert_eq!(value["class"], "theme-dark");
}

#[test]
fn theme_set_with_no_persist_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    run_args(&["theme", "set", "blue", "--prefs", &prefs_arg(&dir), "--no-persist"]).unwrap();
    assert!(!dir.path().join("prefs.json").exists());
}

#[test]
fn theme_set_reports_unwritable_store() {
    let dir = TempDir::new().unwrap();
    // A directory where the file should be makes every write fail.
    let prefs = dir.path().join("prefs.json");
    fs::create_dir(&prefs).unwrap();

    let err = run_args(&["theme", "set", "blue", "--prefs", &prefs.display().to_string()])
        .unwrap_err();
    assert!(format!("{:#}", err).contains("could not be saved"));
}

#[test]
fn theme_set_recovers_corrupt_preference_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("prefs.json"), r#"{"theme": null}"#).unwrap();
    let prefs = prefs_arg(&dir);

    run_args(&["theme", "set", "dark", "--prefs", &prefs]).unwrap();
    assert_eq!(read_prefs(&dir)[THEME_KEY], "dark");

    let out = run_args(&["theme", "show", "--prefs", &prefs]).unwrap();
    assert!(out.contains("(saved)"));
}

#[test]
fn settings_file_supplies_prefs_and_sliders() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("hued.yaml");
    let prefs = dir.path().join("from-config.json");
    fs::write(
        &config,
        format!(
            "preferences: {}\nlight_lightness: 20\n",
            prefs.display()
        ),
    )
    .unwrap();

    let out = run_args(&[
        "theme",
        "set",
        "light",
        "--config",
        &config.display().to_string(),
        "--format",
        "json",
    ])
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    // Dimmed to 20% lightness the light theme needs light text.
    assert_eq!(value["text"], "#ffffff");
    assert!(Path::new(&prefs).exists());
}

// ============================================================================
// Interactive session
// ============================================================================

#[test]
fn play_session_counts_resets_and_switches() {
    let mut switcher = ThemeSwitcher::new(MemoryStore::new());
    let mut target = TerminalTarget::default();
    let settings = Settings::default();
    let mut frames = Vec::new();

    let keys = pressed(vec![
        Key::Char(' '),
        Key::Char(' '),
        Key::Char('x'),
        Key::Char('3'),
        Key::Char('R'),
        Key::Char(' '),
        Key::Char('q'),
        Key::Char(' '),
    ]);

    let session = run_session(
        keys,
        ThemeKind::Light,
        &mut switcher,
        &mut target,
        &settings,
        |frame| {
            frames.push(console::strip_ansi_codes(frame).into_owned());
            Ok(())
        },
    )
    .unwrap();

    // initial + 2 increments + theme + reset + increment; 'x' is unbound
    // and the space after 'q' is never read.
    assert_eq!(frames.len(), 6);
    assert!(frames[0].contains("count: 0"));
    assert!(frames[2].contains("count: 2"));
    assert!(frames[3].contains("*3 dark"));
    assert!(frames[5].contains("count: 1"));

    assert_eq!(session.count(), 1);
    assert_eq!(session.theme(), ThemeKind::Dark);
    assert_eq!(target.class(), "theme-dark");
    assert_eq!(target.background().to_string(), "#1f2937");
    assert_eq!(
        switcher.store().get(THEME_KEY).unwrap().as_deref(),
        Some("dark")
    );
}

#[test]
fn play_session_shows_notice_when_theme_not_saved() {
    let mut switcher = ThemeSwitcher::new(MemoryStore::unavailable());
    let mut target = TerminalTarget::default();
    let mut last = String::new();

    run_session(
        pressed(vec![Key::Char('2')]),
        ThemeKind::Light,
        &mut switcher,
        &mut target,
        &Settings::default(),
        |frame| {
            last = console::strip_ansi_codes(frame).into_owned();
            Ok(())
        },
    )
    .unwrap();

    assert_eq!(target.class(), "theme-blue");
    assert!(last.contains("theme not saved"));
}

#[test]
fn play_session_retries_save_when_active_theme_selected_again() {
    let store = FlakyStore {
        failures: 1,
        inner: MemoryStore::new(),
    };
    let mut switcher = ThemeSwitcher::new(store);
    let mut target = TerminalTarget::default();
    let mut frames = Vec::new();

    run_session(
        pressed(vec![Key::Char('2'), Key::Char('2'), Key::Char('2')]),
        ThemeKind::Light,
        &mut switcher,
        &mut target,
        &Settings::default(),
        |frame| {
            frames.push(console::strip_ansi_codes(frame).into_owned());
            Ok(())
        },
    )
    .unwrap();

    // initial, failed save, retried save; the third press changes nothing
    assert_eq!(frames.len(), 3);
    assert!(frames[1].contains("theme not saved"));
    assert!(!frames[2].contains("theme not saved"));
    assert_eq!(
        switcher.store().get(THEME_KEY).unwrap().as_deref(),
        Some("blue")
    );
}

#[test]
fn play_session_stops_on_key_read_error() {
    let mut switcher = ThemeSwitcher::new(MemoryStore::new());
    let mut target = TerminalTarget::default();
    let mut frames = 0;

    let keys = vec![
        Ok(Key::Char(' ')),
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "tty closed")),
        Ok(Key::Char(' ')),
    ];
    let err = run_session(
        keys,
        ThemeKind::Light,
        &mut switcher,
        &mut target,
        &Settings::default(),
        |_| {
            frames += 1;
            Ok(())
        },
    )
    .unwrap_err();

    assert!(format!("{:#}", err).contains("tty closed"));
    assert_eq!(frames, 2);
}
