// src/check.rs

//! This module implements the `--check` functionality for the binary.
//! It validates the key-name table's invariants and prints every binding
//! plus the deliberately-unmapped key-codes in a human-readable form.

use crate::keymap::{BINDINGS, UNMAPPED_KEYCODES};
use std::collections::HashMap;

/// Validates the key-name table for common issues.
///
/// Checks for:
/// - Duplicate key-codes among the bindings.
/// - Duplicate key names (two codes accidentally aliased to one name).
/// - Empty or non-uppercase-ASCII key names.
/// - Key-codes that appear both as a binding and in the unmapped list.
///
/// # Returns
///
/// * `Ok(())` if the table passes all checks.
/// * `Err(String)` with a descriptive error message if validation fails.
pub fn validate_table() -> Result<(), String> {
    // Check for duplicate key-codes
    let mut codes_seen = HashMap::new();
    for &(code, name) in BINDINGS {
        if let Some(existing_name) = codes_seen.get(&code) {
            return Err(format!(
                "Table validation error: Duplicate keycode {} detected. Used by key name '{}' and key name '{}'.",
                code, existing_name, name
            ));
        }
        codes_seen.insert(code, name);
    }

    // Check for duplicate key names
    let mut names_seen = HashMap::new();
    for &(code, name) in BINDINGS {
        if let Some(existing_code) = names_seen.get(name) {
            return Err(format!(
                "Table validation error: Duplicate key name '{}' detected. Used by keycode {} and keycode {}.",
                name, existing_code, code
            ));
        }
        names_seen.insert(name, code);
    }

    // Check the key-name grammar (uppercase ASCII tokens, non-empty)
    for &(code, name) in BINDINGS {
        if name.is_empty() {
            return Err(format!(
                "Table validation error: Keycode {} has an empty key name.",
                code
            ));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(format!(
                "Table validation error: Key name '{}' (keycode {}) is not an uppercase ASCII token.",
                name, code
            ));
        }
    }

    // Unmapped key-codes must never shadow a binding
    for &code in UNMAPPED_KEYCODES {
        if let Some(name) = codes_seen.get(&code) {
            return Err(format!(
                "Table validation error: Keycode {} is listed as unmapped but is bound to key name '{}'.",
                code, name
            ));
        }
    }

    Ok(())
}

/// Runs the table check process.
///
/// This is the main entry point for the `--check` command. It performs:
/// 1. Table validation (`validate_table`).
/// 2. Prints every binding as a fixed-width table, in source-list order.
/// 3. Prints the key-codes deliberately left to the platform.
///
/// Exits with status code 0 on success, or 1 if validation fails.
pub fn run_check() {
    println!("Performing key-name table check...");

    if let Err(e) = validate_table() {
        eprintln!("Table validation failed: {}", e);
        std::process::exit(1);
    } else {
        println!("Basic validation (duplicates, name grammar, unmapped overlap) passed.");
    }

    println!("\nBindings ({} total):", BINDINGS.len());
    println!("{:<10} | {:<12}", "Keycode", "Key Name");
    println!("{:-<10}-+-{:-<12}", "", "");
    for &(code, name) in BINDINGS {
        println!("{:<10} | {:<12}", code, name);
    }

    println!(
        "\nDeliberately unmapped key-codes (left to the platform): {:?}",
        UNMAPPED_KEYCODES
    );

    println!("\nKey-name table check finished.");
    std::process::exit(0);
}
