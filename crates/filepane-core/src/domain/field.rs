//! Field-descriptor tables for flat configuration documents.
//!
//! Every managed document is a flat struct whose top-level fields are listed in
//! a static table of [`Field`] descriptors.  Generic code (the schema differ
//! and the validator) walks that table instead of inspecting types at run time:
//!
//! ```text
//! SettingsDocument::fields()
//!  ├─ Field { name: "theme",              kind: Text,    constraint: None }
//!  ├─ Field { name: "file_preview_width", kind: Integer, constraint: Some(DisabledOrRange 2..=10) }
//!  └─ ...
//! ```
//!
//! The [`document!`](crate::document) macro declares the struct, its serde
//! attributes, the descriptor table and the by-name accessor in one place so
//! the three can never drift apart.

use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Which of the three managed documents a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// General settings (`config.toml`).
    Settings,
    /// Key-binding map (`hotkeys.toml`).
    Hotkeys,
    /// Color theme (`<theme>.toml` inside the theme folder).
    Theme,
}

impl DocumentKind {
    /// On-disk file name of the document, or `None` for themes, whose file is
    /// named after the theme selected in the settings.
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            DocumentKind::Settings => Some("config.toml"),
            DocumentKind::Hotkeys => Some("hotkeys.toml"),
            DocumentKind::Theme => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentKind::Settings => "configuration",
            DocumentKind::Hotkeys => "hotkeys",
            DocumentKind::Theme => "theme",
        };
        f.write_str(label)
    }
}

/// Shape of a top-level field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Boolean,
    /// Ordered list of plain strings (e.g. a color gradient).
    TextList,
    /// Ordered list of key-binding tokens; the first one is the primary binding.
    KeyBindings,
}

impl FieldKind {
    /// Sequence-typed fields are only meaningful when non-empty, so an empty
    /// array in a user document counts as drift.
    pub fn is_sequence(self) -> bool {
        matches!(self, FieldKind::TextList | FieldKind::KeyBindings)
    }
}

/// Semantic rule attached to a field and enforced after merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// `0` disables the feature; any other value must lie in `min..=max`.
    DisabledOrRange { min: i64, max: i64 },
    /// At least one binding, and the primary binding is not blank.
    KeyBinding,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::DisabledOrRange { min, max } => {
                write!(f, "0 (disabled) or a value between {min} and {max}")
            }
            Constraint::KeyBinding => f.write_str("at least one key, with a non-empty first key"),
        }
    }
}

/// Borrowed view of a field value, produced by [`Document::value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Boolean(bool),
    List(&'a [String]),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s:?}"),
            FieldValue::Integer(v) => write!(f, "{v}"),
            FieldValue::Boolean(v) => write!(f, "{v}"),
            FieldValue::List(items) => write!(f, "{items:?}"),
        }
    }
}

/// One row of a document's descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub constraint: Option<Constraint>,
}

/// A flat configuration document with a static field table.
pub trait Document: Serialize + DeserializeOwned + Default + Clone + PartialEq + fmt::Debug {
    const KIND: DocumentKind;

    /// Descriptor table, in declaration (and serialization) order.
    fn fields() -> &'static [Field];

    /// Returns the current value of the field called `name`, or `None` for a
    /// name that is not part of the schema.
    fn value(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Looks up a descriptor by name.
    fn field(name: &str) -> Option<&'static Field> {
        Self::fields().iter().find(|f| f.name == name)
    }
}

/// Maps a Rust field type to its [`FieldKind`] and borrowed value.
pub trait FieldType {
    const KIND: FieldKind;
    /// Rule implied by the type itself, used when the field declares none.
    const CONSTRAINT: Option<Constraint> = None;

    fn field_value(&self) -> FieldValue<'_>;
}

impl FieldType for String {
    const KIND: FieldKind = FieldKind::Text;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl FieldType for i64 {
    const KIND: FieldKind = FieldKind::Integer;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Integer(*self)
    }
}

impl FieldType for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Boolean(*self)
    }
}

impl FieldType for Vec<String> {
    const KIND: FieldKind = FieldKind::TextList;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::List(self)
    }
}

/// Ordered key-binding tokens for one action, e.g. `["ctrl+c", "q"]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings(Vec<String>);

impl KeyBindings {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    /// The binding shown in help menus and footers.
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FieldType for KeyBindings {
    const KIND: FieldKind = FieldKind::KeyBindings;
    const CONSTRAINT: Option<Constraint> = Some(Constraint::KeyBinding);

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::List(&self.0)
    }
}

/// Declares a flat document struct together with its descriptor table.
///
/// ```ignore
/// document! {
///     /// Example.
///     pub struct Example: DocumentKind::Settings {
///         /// Doc comments are forwarded to the field.
///         width: i64 => Constraint::DisabledOrRange { min: 2, max: 10 },
///         name: String,
///     }
/// }
/// ```
#[macro_export]
macro_rules! document {
    (
        $(#[$meta:meta])*
        pub struct $name:ident : $kind:path {
            $(
                $(#[doc = $doc:literal])*
                $field:ident : $ty:ty $(=> $constraint:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[doc = $doc])*
                pub $field: $ty,
            )*
        }

        impl $crate::domain::field::Document for $name {
            const KIND: $crate::domain::field::DocumentKind = $kind;

            fn fields() -> &'static [$crate::domain::field::Field] {
                const FIELDS: &[$crate::domain::field::Field] = &[
                    $(
                        $crate::domain::field::Field {
                            name: stringify!($field),
                            kind: <$ty as $crate::domain::field::FieldType>::KIND,
                            constraint: $crate::document!(
                                @constraint <$ty as $crate::domain::field::FieldType>::CONSTRAINT;
                                $($constraint)?
                            ),
                        },
                    )*
                ];
                FIELDS
            }

            fn value(&self, name: &str) -> Option<$crate::domain::field::FieldValue<'_>> {
                match name {
                    $(
                        stringify!($field) => Some(
                            $crate::domain::field::FieldType::field_value(&self.$field),
                        ),
                    )*
                    _ => None,
                }
            }
        }
    };
    (@constraint $implied:expr;) => { $implied };
    (@constraint $implied:expr; $explicit:expr) => { Some($explicit) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_fixed_documents_have_a_file_name() {
        assert_eq!(DocumentKind::Settings.file_name(), Some("config.toml"));
        assert_eq!(DocumentKind::Hotkeys.file_name(), Some("hotkeys.toml"));
        assert_eq!(DocumentKind::Theme.file_name(), None);
    }

    crate::document! {
        pub struct Sample: DocumentKind::Settings {
            /// Width with an explicit rule.
            width: i64 => Constraint::DisabledOrRange { min: 1, max: 4 },
            label: String,
            enabled: bool,
            keys: KeyBindings,
            colors: Vec<String>,
        }
    }

    #[test]
    fn test_field_table_follows_declaration_order() {
        let names: Vec<_> = Sample::fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["width", "label", "enabled", "keys", "colors"]);
    }

    #[test]
    fn test_field_kinds_are_derived_from_types() {
        assert_eq!(Sample::field("width").unwrap().kind, FieldKind::Integer);
        assert_eq!(Sample::field("label").unwrap().kind, FieldKind::Text);
        assert_eq!(Sample::field("enabled").unwrap().kind, FieldKind::Boolean);
        assert_eq!(Sample::field("keys").unwrap().kind, FieldKind::KeyBindings);
        assert_eq!(Sample::field("colors").unwrap().kind, FieldKind::TextList);
    }

    #[test]
    fn test_explicit_constraint_wins_and_key_bindings_imply_one() {
        assert_eq!(
            Sample::field("width").unwrap().constraint,
            Some(Constraint::DisabledOrRange { min: 1, max: 4 })
        );
        assert_eq!(
            Sample::field("keys").unwrap().constraint,
            Some(Constraint::KeyBinding)
        );
        assert_eq!(Sample::field("label").unwrap().constraint, None);
    }

    #[test]
    fn test_value_reads_fields_by_name() {
        // Arrange
        let sample = Sample {
            width: 3,
            label: "x".to_string(),
            enabled: true,
            keys: KeyBindings::new(["q", "esc"]),
            colors: vec!["#fff".to_string()],
        };

        // Act / Assert
        assert_eq!(sample.value("width"), Some(FieldValue::Integer(3)));
        assert_eq!(sample.value("label"), Some(FieldValue::Text("x")));
        assert_eq!(sample.value("enabled"), Some(FieldValue::Boolean(true)));
        assert_eq!(
            sample.value("keys"),
            Some(FieldValue::List(&["q".to_string(), "esc".to_string()]))
        );
        assert_eq!(sample.value("missing"), None);
    }

    #[test]
    fn test_key_bindings_primary_is_first_entry() {
        let keys = KeyBindings::new(["ctrl+c", "q"]);
        assert_eq!(keys.primary(), Some("ctrl+c"));
        assert!(keys.contains("q"));
        assert_eq!(KeyBindings::default().primary(), None);
    }

    #[test]
    fn test_key_bindings_serialize_as_plain_array() {
        #[derive(Serialize)]
        struct Wrapper {
            quit: KeyBindings,
        }
        let out = toml::to_string(&Wrapper {
            quit: KeyBindings::new(["q", "esc"]),
        })
        .expect("serialize");
        assert_eq!(out.trim(), r#"quit = ["q", "esc"]"#);
    }
}
