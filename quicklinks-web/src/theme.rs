//! Applies the theme to the document root

use quicklinks_common::theme::DARK_MODE_CLASS;
use quicklinks_common::Theme;
use tracing::warn;

/// Add or remove the dark-mode class on `<html>`
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let dark = theme.root_class().is_some();
    if let Err(e) = root.class_list().toggle_with_force(DARK_MODE_CLASS, dark) {
        warn!("Failed to apply theme class: {:?}", e);
    }
}
