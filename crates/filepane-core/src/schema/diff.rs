//! Schema drift detection.
//!
//! A field has drifted when the bundled defaults define it but the user's raw
//! document does not provide a usable value for it.  Presence is decided on
//! the raw table, not by comparing decoded values, so a user who writes
//! `sidebar_width = 0` on purpose is never told the field is missing.
//!
//! The comparison is shallow: only top-level keys are considered.

use std::fmt;

use toml::{Table, Value};

use crate::domain::field::Document;

/// Why a field counts as drifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftReason {
    /// The key does not appear in the user's document.
    Absent,
    /// The key is present but holds an empty list.
    Empty,
}

/// One drifted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drift {
    pub field: &'static str,
    pub reason: DriftReason,
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            DriftReason::Absent => write!(f, "field \"{}\" is missing", self.field),
            DriftReason::Empty => write!(f, "field \"{}\" is empty", self.field),
        }
    }
}

/// Lists the schema fields defined in `defaults` that `user` lacks, in
/// descriptor-table order.
pub fn diff<D: Document>(defaults: &Table, user: &Table) -> Vec<Drift> {
    D::fields()
        .iter()
        .filter(|field| defaults.contains_key(field.name))
        .filter_map(|field| {
            let reason = match user.get(field.name) {
                None => DriftReason::Absent,
                Some(Value::Array(items)) if field.kind.is_sequence() && items.is_empty() => {
                    DriftReason::Empty
                }
                Some(_) => return None,
            };
            Some(Drift {
                field: field.name,
                reason,
            })
        })
        .collect()
}

/// Top-level keys in `user` that are not part of the schema.
pub fn unknown_fields<D: Document>(user: &Table) -> Vec<String> {
    user.keys()
        .filter(|key| D::field(key).is_none())
        .cloned()
        .collect()
}
