// e2e/cli_integration.rs — CLI integration tests (Suite 02)
//
// Runs the `lz4-block` binary as a black box with std::process::Command.
// Covers output-name derivation, stdin/stdout, overwrite policy, exit codes,
// --xxh32, --max-size and the -c warning.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

include!("support.rs");

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lz4-block"))
}

/// TempDir holding `input.bin.lz4` and the bytes it decodes to.
fn make_temp_block() -> (TempDir, PathBuf, Vec<u8>) {
    let dir = TempDir::new().unwrap();
    let original = "Hello, LZ4 block!\n".repeat(200).into_bytes();
    let path = dir.path().join("input.bin.lz4");
    fs::write(&path, lz4_writer::encode(&original)).unwrap();
    (dir, path, original)
}

// ── 1. Output name derived from .lz4 input ───────────────────────────────────

#[test]
fn decodes_to_stripped_name() {
    let (dir, input, original) = make_temp_block();
    let status = Command::new(bin()).arg("-q").arg(&input).status().unwrap();
    assert!(status.success());
    assert_eq!(fs::read(dir.path().join("input.bin")).unwrap(), original);
    assert!(input.exists(), "input is kept by default");
}

// ── 2. Explicit output and --rm ──────────────────────────────────────────────

#[test]
fn explicit_output_and_remove_source() {
    let (dir, input, original) = make_temp_block();
    let out = dir.path().join("decoded.dat");
    let status = Command::new(bin())
        .args(["-q", "--rm"])
        .arg(&input)
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&out).unwrap(), original);
    assert!(!input.exists());
}

// ── 3. stdin → stdout ────────────────────────────────────────────────────────

#[test]
fn stdin_to_stdout() {
    let (_dir, input, original) = make_temp_block();
    let compressed = fs::read(&input).unwrap();

    let mut child = Command::new(bin())
        .arg("-q")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&compressed).unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout, original);
}

// ── 4. -c forces stdout ──────────────────────────────────────────────────────

#[test]
fn force_stdout_warns_about_ignored_output() {
    let (dir, input, original) = make_temp_block();
    let ignored = dir.path().join("ignored.bin");
    let output = Command::new(bin()).arg("-c").arg(&input).arg(&ignored).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, original);
    assert!(String::from_utf8_lossy(&output.stderr).contains("ignoring output file"));
    assert!(!ignored.exists());
}

#[test]
fn stdout_output_keeps_stderr_quiet() {
    let (_dir, input, original) = make_temp_block();
    let output = Command::new(bin()).arg("-c").arg(&input).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, original);
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));

    let output = Command::new(bin()).arg("-v").arg("-c").arg(&input).output().unwrap();
    assert!(String::from_utf8_lossy(&output.stderr).contains("decoded"));
}

#[test]
fn force_stdout() {
    let (dir, input, original) = make_temp_block();
    let output = Command::new(bin()).args(["-q", "-c"]).arg(&input).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, original);
    assert!(!dir.path().join("input.bin").exists());
}

// ── 5. Overwrite policy ──────────────────────────────────────────────────────

#[test]
fn refuses_to_overwrite_without_force() {
    let (dir, input, original) = make_temp_block();
    let target = dir.path().join("input.bin");
    fs::write(&target, b"precious").unwrap();

    let output = Command::new(bin()).arg(&input).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not overwritten"));
    assert_eq!(fs::read(&target).unwrap(), b"precious");

    let status = Command::new(bin()).args(["-q", "-f"]).arg(&input).status().unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&target).unwrap(), original);
}

// ── 6. Corrupt input ─────────────────────────────────────────────────────────

#[test]
fn corrupt_input_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.lz4");
    // Offset 9 with only one byte of output.
    fs::write(&input, [0x10, b'a', 0x09, 0x00]).unwrap();

    let output = Command::new(bin()).arg(&input).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("corrupt input"));
    assert!(!dir.path().join("bad").exists());
}

// ── 7. No derivable output name ──────────────────────────────────────────────

#[test]
fn input_without_extension_needs_output_name() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("raw.block");
    fs::write(&input, [0x10, b'a']).unwrap();
    let output = Command::new(bin()).arg(&input).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot determine an output filename"));
}

// ── 8. --xxh32 ───────────────────────────────────────────────────────────────

#[test]
fn prints_xxh32_digest() {
    let (_dir, input, original) = make_temp_block();
    let output = Command::new(bin())
        .args(["-q", "--xxh32"])
        .arg(&input)
        .arg("null")
        .output()
        .unwrap();
    assert!(output.status.success());
    let expected = format!("{:08x}", xxhash_rust::xxh32::xxh32(&original, 0));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with(&expected));
}

// ── 9. --max-size ─────────────────────────────────────────────────────────────

#[test]
fn max_size_limits_output() {
    let (_dir, input, original) = make_temp_block();
    let too_small = (original.len() - 1).to_string();

    let output = Command::new(bin())
        .args(["-c", "--max-size", &too_small])
        .arg(&input)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let output = Command::new(bin())
        .args(["-q", "-c", "--max-size", &original.len().to_string()])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, original);
}

#[test]
fn max_size_is_not_read_from_environment() {
    let (_dir, input, original) = make_temp_block();
    let output = Command::new(bin())
        .args(["-q", "-c"])
        .arg(&input)
        .env("LZ4_BLOCK_MAX_SIZE", "1")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, original);
}

// ── 10. --version ────────────────────────────────────────────────────────────

#[test]
fn version_flag() {
    let output = Command::new(bin()).arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}
