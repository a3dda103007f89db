//! Keyboard shortcuts on the main window.

use winit::keyboard::{Key, ModifiersState, NamedKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeyAction {
    Reload,
    LeaveFullscreen,
}

/// Map a pressed key to a kiosk action. `Escape` only maps when the config
/// allows leaving fullscreen.
pub(super) fn key_action(key: &Key, mods: ModifiersState, allow_escape: bool) -> Option<KeyAction> {
    match key {
        Key::Named(NamedKey::F5) => Some(KeyAction::Reload),
        Key::Named(NamedKey::Escape) if allow_escape => Some(KeyAction::LeaveFullscreen),
        Key::Character(c) if mods.control_key() && c.eq_ignore_ascii_case("r") => {
            Some(KeyAction::Reload)
        }
        _ => None,
    }
}
