use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_binary(args: &[&str]) -> Output {
    let bin_path = std::env::var("CARGO_BIN_EXE_gcode-details")
        .unwrap_or_else(|_| "target/debug/gcode-details".to_string());

    Command::new(bin_path)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run gcode-details")
}

fn write_sample(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("write sample file");
    path.to_str().expect("utf8 temp path").to_string()
}

#[test]
fn describes_every_line_and_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path(), "part.gcode", "G1 X10 Y20\n; comment\n\n");

    let output = run_binary(&[&path]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(
        "Read: [G1 X10 Y20][Standard command, e.g. move to a point]\n\
         Read: [; comment][Comment]\n\
         Read: [][]\n"
    ));
    assert!(stdout.ends_with(&format!("\n\n\nInput:  {}\n\nFinished.\n\n", path)));
    assert!(output.stderr.is_empty());
}

#[test]
fn missing_file_reports_error_without_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.gcode");

    let output = run_binary(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("GcodeDetails:\n  "));
    assert!(!stderr.contains("Finished."));
}

#[test]
fn two_paths_print_usage_only() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_sample(dir.path(), "a.gcode", "G28\n");
    let second = write_sample(dir.path(), "b.gcode", "M104 S200\n");

    let output = run_binary(&[&first, &second]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Syntax:"));
    assert!(!stdout.contains("Read:"));
}

#[test]
fn no_path_prints_usage() {
    let output = run_binary(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("Syntax:"));
}

#[test]
fn usage_error_is_logged_at_debug_level() {
    let bin_path = std::env::var("CARGO_BIN_EXE_gcode-details")
        .unwrap_or_else(|_| "target/debug/gcode-details".to_string());

    let output = Command::new(bin_path)
        .args(["a.gcode", "b.gcode"])
        .env("RUST_LOG", "debug")
        .output()
        .expect("Failed to run gcode-details");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("Syntax:"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("expected exactly one G-code file, got 2"));
}

#[test]
fn large_file_is_written_completely() {
    let dir = tempfile::tempdir().unwrap();
    let content: String = (0..20_000).map(|i| format!("G1 X{i} Y{i}\n")).collect();
    let path = write_sample(dir.path(), "large.gcode", &content);

    let output = run_binary(&[&path]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // 20_000 records plus the empty line after the final newline
    assert_eq!(stdout.matches("Read: [").count(), 20_001);
    assert!(stdout.contains("Read: [G1 X19999 Y19999][Standard command, e.g. move to a point]\n"));
    assert!(stdout.ends_with(&format!("\n\n\nInput:  {}\n\nFinished.\n\n", path)));
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(
        dir.path(),
        "layer.gcode",
        ";LAYER:0\r\nG0 F3600 X10 Y10\r\nT1\r\nM106 S255\r\n",
    );

    let first = run_binary(&[&path]);
    let second = run_binary(&[&path]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
}

#[test]
fn detailed_flag_uses_long_descriptions() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path(), "part.gcode", "E5\n");

    let output = run_binary(&["--detailed", &path]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(
        "Read: [E5][Length of extrudate. This is exactly like X, Y and Z, \
         but for the length of filament to consume.]\n"
    ));
}
