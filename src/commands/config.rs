//! Configuration commands for the persisted view preferences.
//!
//! - `config get`: Print one preference
//! - `config set`: Set a preference (validated)
//! - `config show`: Display both preferences

use owo_colors::OwoColorize;
use serde_json::json;

use crate::error::{PlankError, Result};
use crate::prefs::{PREF_GROUPING, PREF_SORTING};
use crate::types::{GroupingMode, SortingMode};

use super::board::open_preference_store;

fn validate_key(key: &str) -> Result<()> {
    if key == PREF_GROUPING || key == PREF_SORTING {
        return Ok(());
    }
    Err(PlankError::Config(format!(
        "unknown config key '{key}' (expected 'grouping' or 'sorting')"
    )))
}

/// Validate a value for a key and return its normalized (lowercase) form.
fn normalize_value(key: &str, value: &str) -> Result<String> {
    match key {
        PREF_GROUPING => Ok(value.parse::<GroupingMode>()?.to_string()),
        PREF_SORTING => Ok(value.parse::<SortingMode>()?.to_string()),
        _ => Err(PlankError::Config(format!(
            "unknown config key '{key}' (expected 'grouping' or 'sorting')"
        ))),
    }
}

pub fn cmd_config_get(key: &str) -> Result<()> {
    validate_key(key)?;
    let store = open_preference_store();
    match store.get(key) {
        Some(value) => println!("{value}"),
        None => println!("{}", "not set (using default)".dimmed()),
    }
    Ok(())
}

pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let normalized = normalize_value(key, value)?;
    let store = open_preference_store();
    store.set(key, &normalized);
    println!("{} {key} = {normalized}", "Updated".green());
    Ok(())
}

pub fn cmd_config_show(json_output: bool) -> Result<()> {
    let store = open_preference_store();
    let grouping = store.get(PREF_GROUPING);
    let sorting = store.get(PREF_SORTING);

    if json_output {
        let output = json!({
            "grouping": grouping.clone().unwrap_or_else(|| GroupingMode::default().to_string()),
            "sorting": sorting.clone().unwrap_or_else(|| SortingMode::default().to_string()),
            "grouping_persisted": grouping.is_some(),
            "sorting_persisted": sorting.is_some(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}\n", "Preferences:".cyan().bold());
    print_preference(PREF_GROUPING, grouping, &GroupingMode::default().to_string());
    print_preference(PREF_SORTING, sorting, &SortingMode::default().to_string());
    Ok(())
}

fn print_preference(key: &str, value: Option<String>, default: &str) {
    match value {
        Some(value) => println!("{}: {value}", key.cyan()),
        None => println!("{}: {} {}", key.cyan(), default, "(default)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_known_keys() {
        assert!(validate_key("grouping").is_ok());
        assert!(validate_key("sorting").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_unknown_keys() {
        assert!(matches!(validate_key("theme"), Err(PlankError::Config(_))));
    }

    #[test]
    fn test_normalize_value_lowercases() {
        assert_eq!(normalize_value("grouping", "Priority").unwrap(), "priority");
        assert_eq!(normalize_value("sorting", "TITLE").unwrap(), "title");
    }

    #[test]
    fn test_normalize_value_rejects_cross_key_values() {
        // "title" is a sorting mode, not a grouping mode.
        assert!(normalize_value("grouping", "title").is_err());
        assert!(normalize_value("sorting", "user").is_err());
    }
}
