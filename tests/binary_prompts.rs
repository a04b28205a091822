//! Full interactive sessions driven through piped stdin.

use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

fn resub() -> Command {
    Command::cargo_bin("resub").expect("binary built")
}

/// Preview shown, user declines: plan printed, nothing renamed.
#[test]
fn declining_confirmation_cancels_run() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("report_v1.txt"), b"r").unwrap();
    fs::write(td.path().join("summary.txt"), b"s").unwrap();

    // answers: search, replacement, preview?, proceed?
    let out = resub()
        .arg(td.path())
        .write_stdin("v1\nv2\ny\nn\n")
        .output()
        .expect("spawn binary");
    assert!(out.status.success(), "declining is a normal exit");

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Rename: report_v1.txt -> report_v2.txt"));
    assert!(stdout.contains("Renaming cancelled."));
    assert!(!stdout.contains("Renamed:"));

    assert!(td.path().join("report_v1.txt").exists());
    assert!(!td.path().join("report_v2.txt").exists());
}

/// Empty answers take the documented defaults: preview yes, proceed no.
#[test]
fn default_answers_preview_then_cancel() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("report_v1.txt"), b"r").unwrap();

    let out = resub()
        .arg(td.path())
        .write_stdin("v1\nv2\n\n\n")
        .output()
        .expect("spawn binary");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Preview of renaming changes:"));
    assert!(stdout.contains("Renaming cancelled."));
    assert!(td.path().join("report_v1.txt").exists());
}

/// Accepting the confirmation performs the renames.
#[test]
fn accepting_confirmation_renames() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("report_v1.txt"), b"r").unwrap();

    let out = resub()
        .arg(td.path())
        .write_stdin("v1\nv2\ny\ny\n")
        .output()
        .expect("spawn binary");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Renamed: report_v1.txt -> report_v2.txt"));
    assert!(stdout.contains("Renaming completed."));
    assert!(td.path().join("report_v2.txt").exists());
}

/// Declining the preview goes straight to execution.
#[test]
fn declining_preview_executes_directly() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a_v1.txt"), b"a").unwrap();

    let out = resub()
        .arg(td.path())
        .write_stdin("v1\nv2\nn\n")
        .output()
        .expect("spawn binary");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("Preview of renaming changes:"));
    assert!(stdout.contains("Renamed: a_v1.txt -> a_v2.txt"));
    assert!(td.path().join("a_v2.txt").exists());
}

/// The directory prompt re-asks until it gets an existing directory.
#[test]
fn directory_prompt_revalidates() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a_v1.txt"), b"a").unwrap();

    let answers = format!("/definitely/not/here\n{}\nv1\nv2\nn\n", td.path().display());
    let out = resub()
        .write_stdin(answers)
        .output()
        .expect("spawn binary");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Directory does not exist."));
    assert!(td.path().join("a_v2.txt").exists());
}

/// An empty search answer is re-prompted, not accepted.
#[test]
fn empty_search_answer_is_reprompted() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a_v1.txt"), b"a").unwrap();

    let out = resub()
        .arg(td.path())
        .write_stdin("\nv1\nv2\nn\n")
        .output()
        .expect("spawn binary");
    assert!(out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Please enter a valid string to search for."));
    assert!(td.path().join("a_v2.txt").exists());
}

/// EOF while a prompt is pending is a fatal error, not a hang or a default.
#[test]
fn eof_during_prompt_fails() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a_v1.txt"), b"a").unwrap();

    let out = resub()
        .arg(td.path())
        .write_stdin("")
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());
    assert!(td.path().join("a_v1.txt").exists());
}
