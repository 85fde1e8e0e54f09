//! CLI tests for the `export-resume` binary.
//!
//! Spawns the binary inside a scratch workspace, feeds the prompt through
//! stdin and checks exit codes and the resulting filesystem.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use chrono::Local;
use resume_export::core::naming::{FALLBACK_BRANCH, default_dir_name};
use resume_export::exit_codes;
use resume_export::test_support::{RESUME_BYTES, Workspace};

fn export(ws: &Workspace, input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_export-resume"))
        .current_dir(ws.root())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn export-resume");
    if let Some(mut stdin) = child.stdin.take() {
        // Early failures exit before the prompt reads stdin.
        let _ = stdin.write_all(input.as_bytes());
    }
    child.wait_with_output().expect("wait export-resume")
}

/// Default folder names for `branch` on either side of the run, so a run
/// that crosses midnight still matches.
fn default_names_around<F: FnOnce() -> Output>(branch: &str, run: F) -> (Output, [String; 2]) {
    let before = Local::now().date_naive();
    let out = run();
    let after = Local::now().date_naive();
    (
        out,
        [
            default_dir_name(branch, before),
            default_dir_name(branch, after),
        ],
    )
}

#[test]
fn blank_input_exports_to_branch_and_date() {
    let ws = Workspace::ready().expect("workspace");
    ws.init_git("applications").expect("git init");

    let (out, expected) = default_names_around("applications", || export(&ws, "\n"));
    assert_eq!(out.status.code(), Some(exit_codes::OK));

    let entries = ws.base_entries().expect("list");
    assert_eq!(entries.len(), 1, "{entries:?}");
    assert!(expected.contains(&entries[0]), "{entries:?} vs {expected:?}");
    let copied = ws
        .base_dir()
        .join(&entries[0])
        .join("Ada_Lovelace_resume.pdf");
    assert_eq!(fs::read(&copied).expect("read copy"), RESUME_BYTES);

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Resume successfully exported to"), "{stdout}");
}

#[test]
fn outside_git_uses_fallback_branch() {
    let ws = Workspace::ready().expect("workspace");

    let (out, expected) = default_names_around(FALLBACK_BRANCH, || export(&ws, "\n"));
    assert_eq!(out.status.code(), Some(exit_codes::OK));

    let entries = ws.base_entries().expect("list");
    assert_eq!(entries.len(), 1, "{entries:?}");
    assert!(expected.contains(&entries[0]), "{entries:?} vs {expected:?}");
}

#[test]
fn explicit_name_is_used_verbatim() {
    let ws = Workspace::ready().expect("workspace");

    let out = export(&ws, "Foo\n");
    assert_eq!(out.status.code(), Some(exit_codes::OK));
    assert_eq!(ws.base_entries().expect("list"), vec!["Foo".to_string()]);
    assert!(ws.base_dir().join("Foo/Ada_Lovelace_resume.pdf").is_file());
}

#[test]
fn rerun_with_same_name_succeeds() {
    let ws = Workspace::ready().expect("workspace");

    assert_eq!(export(&ws, "Foo\n").status.code(), Some(exit_codes::OK));
    ws.write_resume(b"%PDF-1.7 v2").expect("rewrite resume");
    assert_eq!(export(&ws, "Foo\n").status.code(), Some(exit_codes::OK));

    let copied = fs::read(ws.base_dir().join("Foo/Ada_Lovelace_resume.pdf")).expect("read");
    assert_eq!(copied, b"%PDF-1.7 v2");
}

#[test]
fn missing_resume_exits_failed_without_creating_dir() {
    let ws = Workspace::ready().expect("workspace");
    fs::remove_file(ws.resume_path()).expect("remove resume");

    let out = export(&ws, "Foo\n");
    assert_eq!(out.status.code(), Some(exit_codes::FAILED));
    assert!(ws.base_entries().expect("list").is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Please compile your resume first."), "{stderr}");
}

#[test]
fn missing_base_dir_key_exits_failed() {
    let ws = Workspace::ready().expect("workspace");
    ws.write_raw_config("FIRST_NAME=Ada\nLAST_NAME=Lovelace\n")
        .expect("config");

    let out = export(&ws, "Foo\n");
    assert_eq!(out.status.code(), Some(exit_codes::FAILED));
    assert!(ws.base_entries().expect("list").is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("BASE_DIR"), "{stderr}");
}

#[test]
fn nonexistent_base_dir_exits_failed() {
    let ws = Workspace::new().expect("workspace");
    ws.write_resume(RESUME_BYTES).expect("resume");
    let base = ws.base_dir().display().to_string();
    ws.write_config(&base, "Ada", "Lovelace").expect("config");

    let out = export(&ws, "Foo\n");
    assert_eq!(out.status.code(), Some(exit_codes::FAILED));
    assert!(!ws.base_dir().exists());
}

#[test]
fn missing_config_file_exits_failed() {
    let ws = Workspace::new().expect("workspace");
    ws.write_resume(RESUME_BYTES).expect("resume");

    let out = export(&ws, "\n");
    assert_eq!(out.status.code(), Some(exit_codes::FAILED));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("configuration file not found"), "{stderr}");
}

#[cfg(unix)]
#[test]
fn read_only_resume_exports_twice() {
    use std::os::unix::fs::PermissionsExt;

    let ws = Workspace::ready().expect("workspace");
    fs::set_permissions(ws.resume_path(), fs::Permissions::from_mode(0o444)).expect("chmod");

    assert_eq!(export(&ws, "Foo\n").status.code(), Some(exit_codes::OK));
    assert_eq!(export(&ws, "Foo\n").status.code(), Some(exit_codes::OK));
    assert_eq!(
        ws.base_entries().expect("list"),
        vec!["Foo".to_string()]
    );
    let copied = fs::read(ws.base_dir().join("Foo/Ada_Lovelace_resume.pdf")).expect("read");
    assert_eq!(copied, RESUME_BYTES);
}
