#![expect(clippy::expect_used, reason = "tests may panic")]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path = std::env::temp_dir().join(format!(
            "dotstroke_cli_{tag}_{}_{}",
            std::process::id(),
            ts
        ));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_dotstroke(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dotstroke"))
        .args(args)
        .current_dir(cwd)
        .env_remove("DOTSTROKE_FONT_DIR")
        .env_remove("RUST_LOG")
        .output()
        .expect("run dotstroke")
}

#[test]
fn help_lists_font_dir_option() {
    let dir = TestDir::new("help");
    let output = run_dotstroke(&["--help"], &dir.path);

    assert!(output.status.success(), "process failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--font-dir"), "got: {stdout}");
    assert!(stdout.contains("--dots"), "got: {stdout}");
}

#[test]
fn missing_font_directory_fails() {
    let dir = TestDir::new("missing_fonts");
    let output = run_dotstroke(&["A"], &dir.path);

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("font directory not found"),
        "expected resource-not-found message, got: {stderr}"
    );
}

#[test]
fn font_directory_without_fonts_fails() {
    let dir = TestDir::new("empty_fonts");
    let fonts = dir.path.join("fonts");
    fs::create_dir_all(&fonts).expect("create fonts dir");
    fs::write(fonts.join("README"), "no fonts here").expect("write readme");

    let output = run_dotstroke(&["A"], &dir.path);

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no font files found"),
        "expected resource-not-found message, got: {stderr}"
    );
}

#[test]
fn font_dir_can_come_from_environment() {
    let dir = TestDir::new("env_fonts");
    let output = Command::new(env!("CARGO_BIN_EXE_dotstroke"))
        .args(["A"])
        .current_dir(&dir.path)
        .env("DOTSTROKE_FONT_DIR", dir.path.join("from-env"))
        .output()
        .expect("run dotstroke");

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("from-env"), "got: {stderr}");
}

#[test]
fn zero_resolution_is_rejected_before_loading_fonts() {
    let dir = TestDir::new("zero_dots");
    let output = run_dotstroke(&["A", "--dots", "0"], &dir.path);

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("resolution must be positive"),
        "expected invalid-argument message, got: {stderr}"
    );
}

#[test]
fn unknown_style_is_a_usage_error() {
    let dir = TestDir::new("bad_style");
    let output = run_dotstroke(&["A", "--style", "dots"], &dir.path);

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown style"), "got: {stderr}");
}

fn with_test_font(tag: &str) -> TestDir {
    let dir = TestDir::new(tag);
    let fonts = dir.path.join("fonts");
    fs::create_dir_all(&fonts).expect("create fonts dir");
    let font = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../dotstroke-fonts/fonts/DejaVuSansMono.ttf");
    fs::copy(font, fonts.join("DejaVuSansMono.ttf")).expect("copy test font");
    dir
}

#[test]
fn json_output_lists_strokes_per_character() {
    let dir = with_test_font("json");
    let output = run_dotstroke(&["Ab", "--format", "json"], &dir.path);

    assert!(output.status.success(), "process failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"char\": \"A\""), "got: {stdout}");
    assert!(stdout.contains("\"char\": \"b\""), "got: {stdout}");
    assert!(stdout.contains("\"width\": \"half\""), "got: {stdout}");
    assert!(stdout.contains("\"strokes\""), "got: {stdout}");
}

#[test]
fn threshold_changes_the_sampled_matrix() {
    let dir = with_test_font("threshold");
    let run = |threshold: &str| {
        let output = run_dotstroke(
            &["Ag@", "-n", "64", "--format", "matrix", "--threshold", threshold],
            &dir.path,
        );
        assert!(output.status.success(), "process failed: {output:?}");
        output.stdout
    };

    let strict = run("1");
    let loose = run("255");
    assert_ne!(strict, loose, "--threshold had no effect");
    let ink = |out: &[u8]| out.iter().filter(|&&b| b == b'#').count();
    assert!(ink(&strict) < ink(&loose));
}

#[test]
fn output_dir_gets_one_file_per_character() {
    let dir = with_test_font("files");
    let output = run_dotstroke(&["Ab", "--format", "svg", "-o", "out"], &dir.path);

    assert!(output.status.success(), "process failed: {output:?}");
    let svg = fs::read_to_string(dir.path.join("out/U+0041.svg")).expect("read A");
    assert!(svg.contains("<svg"), "got: {svg}");
    assert!(dir.path.join("out/U+0062.svg").is_file());
}
