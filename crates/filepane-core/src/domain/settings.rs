//! General settings document (`config.toml`).
//!
//! The struct itself is zero-initialised by `Default`; real defaults live in
//! the bundled `config.toml` and are layered underneath the user's file by
//! [`crate::schema::merge`].

use crate::domain::field::{Constraint, DocumentKind};

crate::document! {
    /// Flat general settings.  Field names are the TOML keys.
    pub struct SettingsDocument: DocumentKind::Settings {
        /// Name of the theme file (without `.toml`) inside the theme folder.
        theme: String,
        /// Directory the first file panel opens in; a leading `~` is expanded.
        default_directory: String,
        auto_check_update: bool,
        cd_on_quit: bool,
        default_open_file_preview: bool,
        show_image_preview: bool,
        show_panel_footer_info: bool,
        file_size_use_si: bool,
        /// 0 = name, 1 = size, 2 = date modified.
        default_sort_type: i64,
        sort_order_reversed: bool,
        case_sensitive_sort: bool,
        zoxide_support: bool,
        metadata: bool,
        nerdfont: bool,
        transparent_background: bool,
        /// Preview width as a fraction of the terminal (`1/n`); 0 = fixed layout.
        file_preview_width: i64 => Constraint::DisabledOrRange { min: 2, max: 10 },
        /// Sidebar width in columns; 0 hides the sidebar.
        sidebar_width: i64 => Constraint::DisabledOrRange { min: 3, max: 20 },
        border_top: String,
        border_bottom: String,
        border_left: String,
        border_right: String,
        border_top_left: String,
        border_top_right: String,
        border_bottom_left: String,
        border_bottom_right: String,
        border_middle_left: String,
        border_middle_right: String,
    }
}

impl SettingsDocument {
    pub const FILE_PREVIEW_WIDTH: &'static str = "file_preview_width";
    pub const SIDEBAR_WIDTH: &'static str = "sidebar_width";

    pub fn sidebar_enabled(&self) -> bool {
        self.sidebar_width != 0
    }
}
