//! CLI integration tests for h8ray.
//!
//! These tests verify that the h8ray CLI produces correct listings for
//! raw H8S images written to temporary fixture files.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// Get the path to the h8ray binary.
fn h8ray_bin() -> String {
    env!("CARGO_BIN_EXE_h8ray").to_string()
}

/// Run h8ray with the given arguments.
fn run_h8ray(args: &[&str]) -> Output {
    Command::new(h8ray_bin())
        .args(args)
        .output()
        .expect("Failed to execute h8ray")
}

/// Write a raw image to a temporary file fixture.
fn write_image(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

// =============================================================================
// Basic Command Tests
// =============================================================================

#[test]
fn test_help() {
    let output = run_h8ray(&["--help"]);
    assert!(output.status.success(), "h8ray --help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("H8S/2000 disassembler"),
        "Help should mention disassembler"
    );
    assert!(stdout.contains("--base"), "Help should show --base option");
    assert!(
        stdout.contains("--skip-raw-words"),
        "Help should show --skip-raw-words option"
    );
}

#[test]
fn test_missing_file() {
    let output = run_h8ray(&["/nonexistent/h8ray-test-image"]);
    assert!(
        !output.status.success(),
        "Missing input file should exit nonzero"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read image"),
        "Error should name the failing step: {}",
        stderr
    );
}

// =============================================================================
// Listing Tests
// =============================================================================

#[test]
fn test_basic_listing() {
    let image = write_image(&[
        0x0F, 0x80, // mov.l er0, er0
        0x79, 0x13, 0x00, 0x01, // add.w #1, r3
        0x54, 0x70, // rts
    ]);

    let output = run_h8ray(&[image.path().to_str().unwrap()]);
    assert!(output.status.success(), "listing should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3, "one line per instruction: {}", stdout);
    assert!(lines[0].starts_with("0000: 0f80"), "line: {}", lines[0]);
    assert!(lines[0].ends_with("mov.l er0, er0"), "line: {}", lines[0]);
    assert!(lines[1].starts_with("0002: 7913 0001"), "line: {}", lines[1]);
    assert!(lines[1].ends_with("add.w #1, r3"), "line: {}", lines[1]);
    assert!(lines[2].starts_with("0006: 5470"), "line: {}", lines[2]);
    assert!(lines[2].ends_with("rts"), "line: {}", lines[2]);
}

#[test]
fn test_base_offset() {
    let image = write_image(&[
        0x40, 0xFE, // bra . (branch to self)
        0x54, 0x70, // rts
    ]);

    let output = run_h8ray(&[image.path().to_str().unwrap(), "--base", "0x1000"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].starts_with("1000:"), "line: {}", lines[0]);
    assert!(
        lines[0].ends_with("bra 0x1000"),
        "branch target should include the base: {}",
        lines[0]
    );
    assert!(lines[1].starts_with("1002:"), "line: {}", lines[1]);
}

#[test]
fn test_base_accepts_bare_hex() {
    let image = write_image(&[0x54, 0x70]); // rts

    let output = run_h8ray(&[image.path().to_str().unwrap(), "--base", "4000"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("4000:"),
        "bare hex base should parse: {}",
        stdout
    );
}

#[test]
fn test_skip_raw_words() {
    let image = write_image(&[
        0xFF, 0xFF, // no encoding: listed as .word
        0x54, 0x70, // rts
    ]);

    let path = image.path().to_str().unwrap().to_string();

    let output = run_h8ray(&[&path]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(".word 0xffff"),
        "default listing keeps raw words: {}",
        stdout
    );

    let output = run_h8ray(&[&path, "--skip-raw-words"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains(".word"),
        "--skip-raw-words hides raw words: {}",
        stdout
    );
    assert!(stdout.contains("rts"), "real instructions remain: {}", stdout);
}

#[test]
fn test_empty_image() {
    let image = write_image(&[]);

    let output = run_h8ray(&[image.path().to_str().unwrap()]);
    assert!(output.status.success(), "empty image should succeed");
    assert!(
        output.stdout.is_empty(),
        "empty image should produce no listing"
    );
}

#[test]
fn test_trailing_odd_byte_ignored() {
    let image = write_image(&[0x54, 0x70, 0x00]); // rts + stray byte

    let output = run_h8ray(&[image.path().to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stray trailing byte is not listed");
    assert!(lines[0].ends_with("rts"));
}
