//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the form shortcuts
/// - macOS: SUPER (Cmd key), CONTROL also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Download PDF shortcut display
#[cfg(target_os = "macos")]
pub const PDF_SHORTCUT: &str = "Cmd+P";

#[cfg(not(target_os = "macos"))]
pub const PDF_SHORTCUT: &str = "Ctrl+P";

/// Email view shortcut display
#[cfg(target_os = "macos")]
pub const EMAIL_SHORTCUT: &str = "Cmd+E";

#[cfg(not(target_os = "macos"))]
pub const EMAIL_SHORTCUT: &str = "Ctrl+E";

/// True if `modifiers` hold the platform shortcut modifier
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(SHORTCUT_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
