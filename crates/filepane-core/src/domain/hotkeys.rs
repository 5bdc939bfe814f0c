//! Key-binding map (`hotkeys.toml`).
//!
//! Every field is a [`KeyBindings`] list.  The list type carries the
//! non-empty/primary-key rule, so the descriptor table needs no explicit
//! constraints here.

use crate::domain::field::{DocumentKind, KeyBindings};

crate::document! {
    /// One key-binding list per action.
    pub struct HotkeysDocument: DocumentKind::Hotkeys {
        confirm: KeyBindings,
        quit: KeyBindings,
        // navigation
        list_up: KeyBindings,
        list_down: KeyBindings,
        page_up: KeyBindings,
        page_down: KeyBindings,
        parent_directory: KeyBindings,
        change_directory: KeyBindings,
        search_bar: KeyBindings,
        // panels
        close_file_panel: KeyBindings,
        create_new_file_panel: KeyBindings,
        next_file_panel: KeyBindings,
        previous_file_panel: KeyBindings,
        toggle_file_preview_panel: KeyBindings,
        toggle_footer: KeyBindings,
        focus_on_process_bar: KeyBindings,
        focus_on_sidebar: KeyBindings,
        focus_on_metadata: KeyBindings,
        // file operations
        file_panel_item_create: KeyBindings,
        file_panel_item_rename: KeyBindings,
        copy_items: KeyBindings,
        cut_items: KeyBindings,
        paste_items: KeyBindings,
        delete_items: KeyBindings,
        extract_file: KeyBindings,
        compress_file: KeyBindings,
        copy_path: KeyBindings,
        pinned_directory: KeyBindings,
        open_file_with_editor: KeyBindings,
        open_current_directory_with_editor: KeyBindings,
        // modes and menus
        toggle_dot_file: KeyBindings,
        change_panel_mode: KeyBindings,
        open_help_menu: KeyBindings,
        open_sort_options_menu: KeyBindings,
        toggle_reverse_sort: KeyBindings,
        // select mode
        file_panel_select_mode_items_select_down: KeyBindings,
        file_panel_select_mode_items_select_up: KeyBindings,
        file_panel_select_all_items: KeyBindings,
    }
}
