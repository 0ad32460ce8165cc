//! Store operation CLI commands.
//!
//! Provides the `get`, `set`, `remove`, `contains`, `list`, `clear`, and
//! `path` commands for working with a preference store from the command
//! line.

use dialoguer::Confirm;

use prefstore::Prefs;

use super::common::{parse_value, ValueType};
use crate::error::CliError;

/// Read a preference value.
pub fn run_get(prefs: &Prefs, key: &str, default: Option<&str>) -> Result<(), CliError> {
    match prefs.get_value(key) {
        Some(value) => println!("{}", value),
        None => match default {
            Some(default) => println!("{}", default),
            None => println!("(not set)"),
        },
    }

    Ok(())
}

/// Write a preference value.
pub fn run_set(
    prefs: &Prefs,
    key: &str,
    raw: &str,
    value_type: Option<ValueType>,
) -> Result<(), CliError> {
    let value = parse_value(raw, value_type)?;
    let type_name = value.type_name();
    prefs.put_value(key, value)?;

    println!("Set {} = {} ({})", key, raw, type_name);

    Ok(())
}

/// Remove a preference value.
pub fn run_remove(prefs: &Prefs, key: &str) -> Result<(), CliError> {
    if prefs.remove(key)? {
        println!("Removed {}", key);
    } else {
        println!("(not set)");
    }

    Ok(())
}

/// Check whether a key is stored.
pub fn run_contains(prefs: &Prefs, key: &str) -> Result<(), CliError> {
    println!("{}", prefs.contains(key));
    Ok(())
}

/// List all stored preferences.
pub fn run_list(prefs: &Prefs) -> Result<(), CliError> {
    let entries = prefs.all();

    println!("Store: {}", prefs.name());
    println!();

    if entries.is_empty() {
        println!("  (empty)");
        return Ok(());
    }

    for (key, value) in &entries {
        println!("  {} = {} ({})", key, value, value.type_name());
    }

    println!();
    println!("{} entries", entries.len());

    Ok(())
}

/// Remove every stored preference, prompting unless `--yes` was given.
pub fn run_clear(prefs: &Prefs, yes: bool) -> Result<(), CliError> {
    if prefs.is_empty() {
        println!("Store is already empty.");
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} stored preferences from '{}'?",
                prefs.len(),
                prefs.name()
            ))
            .default(false)
            .interact()
            .map_err(|e| CliError::Config(e.to_string()))?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    prefs.clear()?;
    println!("Store cleared.");

    Ok(())
}

/// Show the store file path.
pub fn run_path(prefs: &Prefs) -> Result<(), CliError> {
    println!("{}", prefs.path().display());
    Ok(())
}
