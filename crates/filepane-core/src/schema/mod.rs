//! Schema operations over documents: merging user files onto defaults,
//! detecting drift, and validating merged values.
//!
//! # Pipeline (for beginners)
//!
//! ```text
//! bundled defaults ──parse_table──► defaults table ─┐
//!                                                   ├─ merge_* ──► merged document ──► validate
//! user file ─────────parse_table──► user table ─────┤
//!                                                   └─ diff ─────► drifted fields
//! ```
//!
//! The user table is never merged into anything when diffing; it only answers
//! "which keys did the user actually write?".

pub mod diff;
pub mod merge;
pub mod validate;

pub use diff::{diff, unknown_fields, Drift, DriftReason};
pub use merge::{
    decode, merge_lenient, merge_strict, overlay, parse_document, parse_table, MergeError, Merged,
    Rejection,
};
pub use validate::{satisfies, validate, violations, ValidationError};
