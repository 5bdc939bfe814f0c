//! Infrastructure layer: everything that touches the operating system.
//!
//! Contains the platform path resolver, file storage, the bundled default
//! assets and their extraction, logging setup, and terminal output.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `filepane_core`; `filepane_core` never depends on it.

pub mod assets;
pub mod logging;
pub mod paths;
pub mod storage;
pub mod terminal;
