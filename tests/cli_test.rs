// End-to-end tests that run the built binary and inspect its output.

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_mpv-keymap"))
        .args(args)
        .output()
        .expect("failed to run the mpv-keymap binary")
}

#[test]
fn test_resolves_known_keycodes() {
    // 62 = KEYCODE_SPACE, 160 = KEYCODE_NUMPAD_ENTER
    let output = run(&["62", "160"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("62 -> SPACE"));
    assert!(stdout.contains("160 -> KP_ENTER"));
}

#[test]
fn test_unmapped_keycode_is_not_a_failure() {
    // 24 = KEYCODE_VOLUME_UP, deliberately left to the platform
    let output = run(&["24", "999999"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("24 -> (unmapped, left to the platform)"));
    assert!(stdout.contains("999999 -> (unmapped, left to the platform)"));
}

#[test]
fn test_list_prints_every_binding() {
    let output = run(&["--list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("62 -> SPACE"));
    assert!(stdout.contains("142 -> F12"));
    assert!(stdout.contains("158 -> KP_DEC"));
    assert_eq!(stdout.lines().count(), 53);
}

#[test]
fn test_check_passes_on_shipped_table() {
    let output = run(&["--check"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Key-name table check finished."));
}

#[test]
fn test_no_arguments_is_a_usage_error() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
}
