//! Storage infrastructure: reading and writing configuration files.
//!
//! This module is the thin adapter between the loaders and the file system:
//!
//! - `reader` – reads documents and small state files, telling "not found"
//!   apart from other I/O failures.
//! - `writer` – the config writer: serializes documents back to TOML for
//!   fix-mode repairs and writes raw bytes for asset extraction.
//!
//! Writes are plain `std::fs::write` calls with no locking; running two
//! startups against the same directory at once is not supported.

pub mod reader;
pub mod writer;

pub use reader::{read_document, read_optional, ReadError};
pub use writer::{write_bytes, write_document, WriteError};
