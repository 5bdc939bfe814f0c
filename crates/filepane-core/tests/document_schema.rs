//! Integration tests for the schema pipeline.
//!
//! Defaults are generated from each document's field table, so these tests
//! keep covering every field as the schema grows.

use filepane_core::schema::{diff, merge_lenient, merge_strict, validate, DriftReason};
use filepane_core::{
    Document, FieldKind, FieldValue, HotkeysDocument, SettingsDocument, ThemeDocument,
};
use proptest::prelude::*;
use toml::{Table, Value};

fn default_value(name: &str, kind: FieldKind) -> Value {
    match kind {
        FieldKind::Text => Value::String(format!("default-{name}")),
        // 4 satisfies every width rule in the settings schema.
        FieldKind::Integer => Value::Integer(4),
        FieldKind::Boolean => Value::Boolean(true),
        FieldKind::TextList | FieldKind::KeyBindings => {
            Value::Array(vec![Value::String(format!("default-{name}"))])
        }
    }
}

fn user_value(name: &str, kind: FieldKind) -> Value {
    match kind {
        FieldKind::Text => Value::String(format!("user-{name}")),
        FieldKind::Integer => Value::Integer(0),
        FieldKind::Boolean => Value::Boolean(false),
        FieldKind::TextList | FieldKind::KeyBindings => Value::Array(vec![
            Value::String(format!("user-{name}")),
            Value::String("alt".to_string()),
        ]),
    }
}

fn defaults_table<D: Document>() -> Table {
    D::fields()
        .iter()
        .map(|f| (f.name.to_string(), default_value(f.name, f.kind)))
        .collect()
}

fn user_subset<D: Document>(mask: &[bool]) -> Table {
    D::fields()
        .iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|(f, _)| (f.name.to_string(), user_value(f.name, f.kind)))
        .collect()
}

fn as_toml(value: FieldValue<'_>) -> Value {
    match value {
        FieldValue::Text(s) => Value::String(s.to_string()),
        FieldValue::Integer(v) => Value::Integer(v),
        FieldValue::Boolean(v) => Value::Boolean(v),
        FieldValue::List(items) => {
            Value::Array(items.iter().cloned().map(Value::String).collect())
        }
    }
}

/// Asserts merged == user fields ∪ defaults, and drift == absent fields.
fn check_subset_property<D: Document>(mask: &[bool]) -> Result<(), TestCaseError> {
    let defaults = defaults_table::<D>();
    let user = user_subset::<D>(mask);

    let merged: D = merge_strict(&defaults, &user).map_err(|e| TestCaseError::fail(e.to_string()))?;

    for field in D::fields() {
        let expected = user
            .get(field.name)
            .or_else(|| defaults.get(field.name))
            .cloned();
        let actual = merged.value(field.name).map(as_toml);
        prop_assert_eq!(actual, expected, "field {}", field.name);
    }

    let drifted: Vec<&str> = diff::<D>(&defaults, &user).iter().map(|d| d.field).collect();
    let absent: Vec<&str> = D::fields()
        .iter()
        .filter(|f| !user.contains_key(f.name))
        .map(|f| f.name)
        .collect();
    prop_assert_eq!(drifted, absent);
    Ok(())
}

proptest! {
    #[test]
    fn prop_settings_subset_merges_and_reports_absent_fields(
        mask in prop::collection::vec(any::<bool>(), SettingsDocument::fields().len())
    ) {
        check_subset_property::<SettingsDocument>(&mask)?;
    }

    #[test]
    fn prop_hotkeys_subset_merges_and_reports_absent_fields(
        mask in prop::collection::vec(any::<bool>(), HotkeysDocument::fields().len())
    ) {
        check_subset_property::<HotkeysDocument>(&mask)?;
    }
}

#[test]
fn test_rewritten_merge_has_no_drift() {
    // Arrange: a user file with half the settings missing.
    let defaults = defaults_table::<SettingsDocument>();
    let mask: Vec<bool> = (0..SettingsDocument::fields().len()).map(|i| i % 2 == 0).collect();
    let user = user_subset::<SettingsDocument>(&mask);
    let merged: SettingsDocument = merge_strict(&defaults, &user).expect("merge");

    // Act: serialize the merged document the way a fix-mode rewrite does and re-read it.
    let rewritten = toml::to_string_pretty(&merged).expect("serialize");
    let reread: Table = toml::from_str(&rewritten).expect("parse rewritten");

    // Assert
    assert!(diff::<SettingsDocument>(&defaults, &reread).is_empty());
    let again: SettingsDocument = merge_strict(&defaults, &reread).expect("merge again");
    assert_eq!(again, merged);
}

#[test]
fn test_hotkeys_empty_list_is_drift_and_invalid_after_merge() {
    // Arrange
    let defaults = defaults_table::<HotkeysDocument>();
    let mut user = user_subset::<HotkeysDocument>(&vec![true; HotkeysDocument::fields().len()]);
    user.insert("quit".to_string(), Value::Array(Vec::new()));

    // Act
    let drift = diff::<HotkeysDocument>(&defaults, &user);
    let merged: HotkeysDocument = merge_strict(&defaults, &user).expect("merge");

    // Assert
    assert_eq!(drift.len(), 1);
    assert_eq!(drift[0].field, "quit");
    assert_eq!(drift[0].reason, DriftReason::Empty);
    // An explicit empty list overrides the default and then fails validation.
    assert_eq!(validate(&merged).expect_err("empty quit").field, "quit");
}

#[test]
fn test_theme_decodes_with_lenient_merge_of_full_defaults() {
    let defaults = defaults_table::<ThemeDocument>();
    let merged = merge_lenient::<ThemeDocument>(&defaults, &Table::new()).expect("merge");
    assert!(merged.rejected.is_empty());
    assert_eq!(merged.document.cursor, "default-cursor");
    assert_eq!(merged.document.gradient_color, ["default-gradient_color"]);
}
