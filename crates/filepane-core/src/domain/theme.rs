//! Color theme document (`<theme>.toml`).
//!
//! Values are passed through untouched; turning them into terminal styles is
//! the UI layer's job.

use crate::domain::field::DocumentKind;

crate::document! {
    /// Color token -> color value.
    pub struct ThemeDocument: DocumentKind::Theme {
        /// Name of the syntax-highlighting style used by the file preview.
        code_syntax_highlight: String,
        file_panel_border: String,
        sidebar_border: String,
        footer_border: String,
        file_panel_border_active: String,
        sidebar_border_active: String,
        footer_border_active: String,
        modal_border_active: String,
        full_screen_bg: String,
        file_panel_bg: String,
        sidebar_bg: String,
        footer_bg: String,
        modal_bg: String,
        full_screen_fg: String,
        file_panel_fg: String,
        sidebar_fg: String,
        footer_fg: String,
        modal_fg: String,
        cursor: String,
        correct: String,
        error: String,
        hint: String,
        cancel: String,
        /// Start and end color of the progress-bar gradient.
        gradient_color: Vec<String>,
        file_panel_top_directory_icon: String,
        file_panel_top_path: String,
        file_panel_item_selected_fg: String,
        file_panel_item_selected_bg: String,
        sidebar_title: String,
        sidebar_item_selected_fg: String,
        sidebar_item_selected_bg: String,
        sidebar_divider: String,
        modal_cancel_fg: String,
        modal_cancel_bg: String,
        modal_confirm_fg: String,
        modal_confirm_bg: String,
        help_menu_hotkey: String,
        help_menu_title: String,
    }
}

impl ThemeDocument {
    /// Theme shipped as the fallback when the selected one cannot be read.
    pub const DEFAULT_NAME: &'static str = "catppuccin";
}
