//! End-to-end tests for the `nitroc` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn nitroc() -> Command {
    Command::cargo_bin("nitroc").expect("binary builds")
}

#[test]
fn compiles_a_valid_program() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.nitro");
    let output = dir.path().join("main.nir");
    std::fs::write(&input, "i32 x = 1 + 2;\n").unwrap();

    nitroc().arg(&input).arg(&output).assert().success();

    let artifact = std::fs::read_to_string(&output).unwrap();
    assert!(artifact.ends_with("> STACK[0]\n"));
    assert!(artifact.contains("< A {addition} B\n"));
}

#[test]
fn reports_compile_errors_with_snippet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.nitro");
    let output = dir.path().join("bad.nir");
    std::fs::write(&input, "i32 x = 1;\nx = y;\n").unwrap();

    nitroc()
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Variable y is not declared"))
        .stderr(predicate::str::contains("bad.nitro:2:5"))
        .stderr(predicate::str::contains("x = y;"));

    assert!(!output.exists());
}

#[test]
fn prints_warnings_but_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("warn.nitro");
    let output = dir.path().join("warn.nir");
    std::fs::write(&input, "i32 snake_case = 1;\n").unwrap();

    nitroc()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Snake case is cringe"));

    assert!(output.exists());
}

#[test]
fn missing_input_file_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.nir");

    nitroc()
        .arg(dir.path().join("absent.nitro"))
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn unknown_target_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.nitro");
    std::fs::write(&input, "i32 x = 1;\n").unwrap();

    nitroc()
        .arg(&input)
        .arg(dir.path().join("out.nir"))
        .arg("--target")
        .arg("release")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown target"));
}

#[test]
fn empty_program_produces_empty_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.nitro");
    let output = dir.path().join("empty.nir");
    std::fs::write(&input, "// nothing here\n").unwrap();

    nitroc().arg(&input).arg(&output).assert().success();
    assert_eq!(std::fs::read(&output).unwrap(), b"");
}
