//! # filepane-core
//!
//! Configuration documents and the rules that reconcile them, shared by the
//! filepane binary and its tests.  This crate performs no file-system access:
//! callers hand it TOML text and get back decoded documents, drift reports and
//! validation errors.
//!
//! - **`domain`** – The three flat documents (settings, hotkeys, theme) and
//!   their static field-descriptor tables.
//! - **`schema`** – Layering user files over bundled defaults, drift detection
//!   by raw key presence, and semantic validation.

pub mod domain;
pub mod schema;

pub use domain::{
    Constraint, Document, DocumentKind, Field, FieldKind, FieldValue, HotkeysDocument,
    KeyBindings, SettingsDocument, ThemeDocument,
};
pub use schema::{Drift, DriftReason, MergeError, Merged, ValidationError};
