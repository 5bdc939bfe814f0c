//! Application layer use cases for filepane startup.
//!
//! # What lives here? (for beginners)
//!
//! The *application* layer sits between the document rules in
//! `filepane_core` (pure: no file system) and the infrastructure adapters in
//! [`crate::infrastructure`] (paths, storage, bundled assets, terminal).
//! Each use case below strings those together for one document.
//!
//! # Sub-modules
//!
//! - **`diagnostics`**   – Non-fatal findings and the sink loaders report them to.
//! - **`load_settings`** – General settings; lenient about bad values.
//! - **`load_hotkeys`**  – Key bindings; strict about bad values.
//! - **`load_theme`**    – The selected color theme, with a built-in fallback.
//! - **`startup`**       – The full sequence producing a `StartupContext`.

pub mod diagnostics;
pub mod load_hotkeys;
pub mod load_settings;
pub mod load_theme;
pub mod startup;
