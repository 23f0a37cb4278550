//! # Header Commands
//!
//! The header bar: links, avatar menu, theme switch and logout.

use shopfront_core::navigation::header_model;
use shopfront_core::{HeaderModel, Route, ThemeMode, ThemeOptions};
use tracing::debug;

use crate::services::Navigator;
use crate::state::{SessionStore, ThemeState};

/// Header for the current session and theme.
pub fn get_header(session: &SessionStore, theme: &ThemeState) -> HeaderModel {
    debug!("get_header command");
    let user = session.current_user();
    header_model(user.as_ref(), theme.mode())
}

/// Signs out and sends the shopper to the login page.
///
/// ## Returns
/// The header as it looks after logout.
pub fn logout(session: &SessionStore, theme: &ThemeState, navigator: &dyn Navigator) -> HeaderModel {
    debug!("logout command");
    session.logout();
    navigator.navigate(Route::Login);
    header_model(None, theme.mode())
}

/// Flips light/dark.
pub fn toggle_theme(theme: &ThemeState) -> ThemeMode {
    debug!("toggle_theme command");
    theme.toggle()
}

/// Palette for the current mode.
pub fn get_theme(theme: &ThemeState) -> ThemeOptions {
    theme.options()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::RouteHistory;
    use shopfront_core::navigation::{MenuEntry, ThemeIcon};
    use shopfront_core::User;

    fn signed_in() -> SessionStore {
        let session = SessionStore::new();
        session.login(User {
            id: 1,
            name: "Jhon".to_string(),
            email: "john@mail.com".to_string(),
            avatar: "https://cdn.test/jhon.png".to_string(),
        });
        session
    }

    #[test]
    fn test_header_follows_session() {
        let session = signed_in();
        let theme = ThemeState::default();

        let header = get_header(&session, &theme);
        assert!(header.signed_in);
        assert_eq!(header.user_menu.last(), Some(&MenuEntry::Logout));
    }

    #[test]
    fn test_logout_clears_user_and_navigates_to_login() {
        let session = signed_in();
        let theme = ThemeState::default();
        let history = RouteHistory::new();

        let header = logout(&session, &theme, &history);

        assert!(!header.signed_in);
        assert_eq!(session.current_user(), None);
        assert_eq!(history.current(), Route::Login);
        assert_eq!(get_header(&session, &theme), header);
    }

    #[test]
    fn test_theme_switch_updates_icon() {
        let session = SessionStore::new();
        let theme = ThemeState::default();
        assert_eq!(get_header(&session, &theme).theme_icon, ThemeIcon::DarkMode);

        assert_eq!(toggle_theme(&theme), ThemeMode::Dark);
        assert_eq!(get_header(&session, &theme).theme_icon, ThemeIcon::LightMode);
        assert_eq!(get_theme(&theme).palette.primary.main, "#121212");
    }
}
