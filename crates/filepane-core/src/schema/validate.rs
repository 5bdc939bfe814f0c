//! Semantic validation of merged documents.
//!
//! Runs after merging, so it always sees the value that will actually be
//! used: a user override if one exists, the bundled default otherwise.

use thiserror::Error;

use crate::domain::field::{Constraint, Document, DocumentKind, FieldValue};

/// A field whose merged value breaks its constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for \"{field}\" in {document}: expected {constraint}, found {found}")]
pub struct ValidationError {
    pub document: DocumentKind,
    pub field: &'static str,
    pub constraint: Constraint,
    /// Rendered offending value.
    pub found: String,
}

/// Checks a single value against a constraint.
pub fn satisfies(constraint: Constraint, value: FieldValue<'_>) -> bool {
    match (constraint, value) {
        (Constraint::DisabledOrRange { min, max }, FieldValue::Integer(v)) => {
            v == 0 || (min..=max).contains(&v)
        }
        (Constraint::KeyBinding, FieldValue::List(keys)) => {
            keys.first().is_some_and(|primary| !primary.is_empty())
        }
        // A constraint attached to a field of the wrong shape can never hold.
        _ => false,
    }
}

/// Every constraint violation in `doc`, in descriptor-table order.
pub fn violations<D: Document>(doc: &D) -> Vec<ValidationError> {
    D::fields()
        .iter()
        .filter_map(|field| {
            let constraint = field.constraint?;
            let value = doc.value(field.name)?;
            (!satisfies(constraint, value)).then(|| ValidationError {
                document: D::KIND,
                field: field.name,
                constraint,
                found: value.to_string(),
            })
        })
        .collect()
}

/// Validates `doc`, reporting the first violation.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in descriptor-table order.
pub fn validate<D: Document>(doc: &D) -> Result<(), ValidationError> {
    match violations(doc).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HotkeysDocument, KeyBindings, SettingsDocument};

    fn settings(file_preview_width: i64, sidebar_width: i64) -> SettingsDocument {
        SettingsDocument {
            file_preview_width,
            sidebar_width,
            ..Default::default()
        }
    }

    fn valid_hotkeys() -> HotkeysDocument {
        // Built from the field table so the test tracks the schema.
        let src: String = HotkeysDocument::fields()
            .iter()
            .map(|f| format!("{} = [\"x\"]\n", f.name))
            .collect();
        toml::from_str(&src).expect("generated hotkeys must decode")
    }

    #[test]
    fn test_file_preview_width_boundaries() {
        for ok in [0, 2, 10] {
            assert!(validate(&settings(ok, 0)).is_ok(), "{ok} must be accepted");
        }
        for bad in [1, 11, -1] {
            let err = validate(&settings(bad, 0)).expect_err("must be rejected");
            assert_eq!(err.field, "file_preview_width");
        }
    }

    #[test]
    fn test_sidebar_width_boundaries() {
        for ok in [0, 3, 20] {
            assert!(validate(&settings(0, ok)).is_ok(), "{ok} must be accepted");
        }
        for bad in [2, 21] {
            let err = validate(&settings(0, bad)).expect_err("must be rejected");
            assert_eq!(err.field, "sidebar_width");
        }
    }

    #[test]
    fn test_first_violation_is_reported() {
        let err = validate(&settings(1, 2)).expect_err("both invalid");
        assert_eq!(err.field, "file_preview_width");
        assert_eq!(violations(&settings(1, 2)).len(), 2);
    }

    #[test]
    fn test_complete_hotkeys_are_valid() {
        assert!(validate(&valid_hotkeys()).is_ok());
    }

    #[test]
    fn test_empty_binding_list_is_rejected() {
        // Arrange
        let mut doc = valid_hotkeys();
        doc.copy_items = KeyBindings::default();

        // Act
        let err = validate(&doc).expect_err("empty list");

        // Assert
        assert_eq!(err.field, "copy_items");
        assert_eq!(err.document, DocumentKind::Hotkeys);
    }

    #[test]
    fn test_blank_primary_binding_is_rejected() {
        let mut doc = valid_hotkeys();
        doc.quit = KeyBindings::new(["", "q"]);
        assert_eq!(validate(&doc).expect_err("blank primary").field, "quit");
    }

    #[test]
    fn test_error_message_names_field_and_value() {
        let err = validate(&settings(0, 25)).expect_err("out of range");
        let msg = err.to_string();
        assert!(msg.contains("\"sidebar_width\""), "{msg}");
        assert!(msg.contains("25"), "{msg}");
        assert!(msg.contains("between 3 and 20"), "{msg}");
    }

    #[test]
    fn test_mismatched_constraint_never_holds() {
        assert!(!satisfies(Constraint::KeyBinding, FieldValue::Integer(1)));
        assert!(!satisfies(
            Constraint::DisabledOrRange { min: 1, max: 2 },
            FieldValue::Text("1")
        ));
    }
}
