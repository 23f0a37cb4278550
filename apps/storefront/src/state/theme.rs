//! Current color scheme.

use std::sync::{Arc, Mutex, PoisonError};

use shopfront_core::theme::custom_theme;
use shopfront_core::{ThemeMode, ThemeOptions};
use tracing::debug;

/// Shared theme mode. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    mode: Arc<Mutex<ThemeMode>>,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        ThemeState {
            mode: Arc::new(Mutex::new(mode)),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Flips light/dark and returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let mut mode = self.mode.lock().unwrap_or_else(PoisonError::into_inner);
        let next = mode.toggle();
        *mode = next;
        debug!(mode = %next, "Theme toggled");
        next
    }

    /// Palette for the current mode.
    pub fn options(&self) -> ThemeOptions {
        custom_theme(self.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_and_returns_new_mode() {
        let theme = ThemeState::default();
        assert_eq!(theme.mode(), ThemeMode::Light);

        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(theme.options().palette.mode, ThemeMode::Dark);

        assert_eq!(theme.toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_starts_in_configured_mode() {
        let theme = ThemeState::new(ThemeMode::Dark);
        assert_eq!(theme.options().palette.background.paper, "#23272f");
    }
}
