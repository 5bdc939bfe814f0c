//! Domain model: the three managed configuration documents and the
//! field-descriptor machinery shared by all of them.
//!
//! Nothing in here touches the file system; documents are plain data.

pub mod field;
pub mod hotkeys;
pub mod settings;
pub mod theme;

pub use field::{
    Constraint, Document, DocumentKind, Field, FieldKind, FieldType, FieldValue, KeyBindings,
};
pub use hotkeys::HotkeysDocument;
pub use settings::SettingsDocument;
pub use theme::ThemeDocument;
