//! Integration tests for the `simkml` binary.
//!
//! These tests run the real executable and verify:
//! - Exit codes for usage errors and unsupported inputs
//! - A FlightGear log is converted into a `.kml` file
//! - `events` prints one JSON object per line
//!
//! Run with: `cargo test --test convert_workflow`

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use filetime::FileTime;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

const FG_LOG: &str = "time;lon;lat;alt;hgt;hdg;ias;gs;tas;vs;flp;stl;om;mm;im\n\
                      0.0;11.78;48.35;1480.5;0.5;80;0;0;0;0;0;0;0;0;0\n\
                      1.0;11.79;48.35;1480.5;0.5;80;70;70;70;0;0;0;0;0;0\n\
                      2.0;11.80;48.36;1700.5;220.5;80;100;100;100;800;0;0;0;0;0\n\
                      3.0;11.81;48.36;1900.5;420.5;80;110;110;110;800;0;0;0;0;0\n";

/// Run the binary with `home` as both `$HOME` and working directory.
fn simkml(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_simkml"))
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run simkml")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// Integration Tests
// ============================================================================

#[test]
fn test_help_exits_zero() {
    let home = TempDir::new().unwrap();
    let output = simkml(home.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("convert"));
}

#[test]
fn test_missing_argument_exits_one() {
    let home = TempDir::new().unwrap();

    let output = simkml(home.path(), &["convert"]);
    assert_eq!(output.status.code(), Some(1));

    let output = simkml(home.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_unknown_extension_exits_one() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("flight.gpx");
    fs::write(&input, "<gpx/>").unwrap();

    let output = simkml(home.path(), &["convert", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
    assert!(stderr(&output).contains("Supported inputs"));
}

#[test]
fn test_unreadable_format_exits_one() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("Data.txt");
    fs::write(&input, "not|an|xplane|log\n1|2|3|4\n").unwrap();

    let output = simkml(home.path(), &["convert", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not found in log header"));
}

#[test]
fn test_convert_flightgear_to_default_path() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("flight.csv");
    fs::write(&input, FG_LOG).unwrap();
    // 2023-04-05 14:07:09 UTC
    filetime::set_file_mtime(&input, FileTime::from_unix_time(1_680_703_629, 0)).unwrap();

    let output = simkml(home.path(), &["convert", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("FlightGear data detected."));
    assert!(out.contains("Saving "));

    let kml = home.path().join("Flightlog 05-04-2023 14.07.kml");
    assert!(kml.exists(), "stdout: {out}");
    let content = fs::read_to_string(kml).unwrap();
    assert!(content.contains("<name>T/O</name>"));

    // Logging went to the configured file, not stdout
    assert!(home.path().join(".simkml").join("simkml.log").exists());
}

#[test]
fn test_convert_explicit_output() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("flight.csv");
    fs::write(&input, FG_LOG).unwrap();
    let target = home.path().join("my-flight.kml");

    let output = simkml(
        home.path(),
        &["convert", input.to_str().unwrap(), target.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(target.exists());
}

#[test]
fn test_events_prints_json_lines() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("flight.csv");
    fs::write(&input, FG_LOG).unwrap();

    let output = simkml(home.path(), &["events", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    // start, ground track, takeoff, air track, stop
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains(r#""event":"marker""#));
    assert!(lines[0].contains(r#""kind":"start_of_log""#));
    assert!(lines[1].contains(r#""event":"track_closed""#));
    assert!(lines[2].contains(r#""kind":"takeoff""#));

    // Nothing is written
    let written = fs::read_dir(home.path())
        .unwrap()
        .filter_map(Result::ok)
        .any(|e| e.path().extension().is_some_and(|ext| ext == "kml"));
    assert!(!written);
}

#[test]
fn test_init_and_config_path() {
    let home = TempDir::new().unwrap();

    let output = simkml(home.path(), &["init"]);
    assert_eq!(output.status.code(), Some(0));
    let config = home.path().join(".simkml").join("config.ini");
    assert!(config.exists());

    let output = simkml(home.path(), &["config", "path"]);
    assert_eq!(stdout(&output).trim(), config.display().to_string());

    let output = simkml(home.path(), &["config", "list"]);
    let out = stdout(&output);
    assert!(out.contains("[xplane]"));
    assert!(out.contains("time = _totl,_time"));
    assert!(out.contains("directory = (not set)"));
}

#[test]
fn test_invalid_config_exits_one() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".simkml");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.ini"), "[xplane]\nbogus = x\n").unwrap();

    let input = home.path().join("flight.csv");
    fs::write(&input, FG_LOG).unwrap();

    let output = simkml(home.path(), &["convert", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("xplane.bogus"));
}
