//! # Navigation
//!
//! Routes the storefront can navigate to and the header model derived from
//! the session and the theme.
//!
//! ## Header Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ LOGO   Home   About Us   [Shopping Cart]          (☾/☀)   (avatar ▾)    │
//! │                           signed in only                    │           │
//! │                                                             ▼           │
//! │                                              [Shopping Cart]            │
//! │                                              User Page                  │
//! │                                              Login  | Logout            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::theme::ThemeMode;
use crate::types::User;

/// Navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    AboutUs,
    ShoppingCart,
    UserProfile,
    Login,
}

impl Route {
    /// URL path of the route.
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::AboutUs => "/about-us",
            Route::ShoppingCart => "/shopping-cart",
            Route::UserProfile => "/user-profile",
            Route::Login => "/login",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// A labelled link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NavLink {
    pub label: String,
    pub route: Route,
}

impl NavLink {
    fn new(label: &str, route: Route) -> Self {
        NavLink {
            label: label.to_string(),
            route,
        }
    }
}

/// An entry of the avatar menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    Link(NavLink),
    /// Runs the logout command instead of following a link.
    Logout,
}

/// Icon on the theme switch; it shows the mode a click switches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ThemeIcon {
    DarkMode,
    LightMode,
}

/// Everything the header renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HeaderModel {
    pub brand: NavLink,
    pub nav_links: Vec<NavLink>,
    pub user_menu: Vec<MenuEntry>,
    pub theme_icon: ThemeIcon,
    pub signed_in: bool,
}

/// Builds the header for the current user and theme.
pub fn header_model(user: Option<&User>, mode: ThemeMode) -> HeaderModel {
    let signed_in = user.is_some();

    let mut nav_links = vec![
        NavLink::new("Home", Route::Home),
        NavLink::new("About Us", Route::AboutUs),
    ];
    if signed_in {
        nav_links.push(NavLink::new("Shopping Cart", Route::ShoppingCart));
    }

    let mut user_menu = Vec::with_capacity(3);
    if signed_in {
        user_menu.push(MenuEntry::Link(NavLink::new("Shopping Cart", Route::ShoppingCart)));
    }
    user_menu.push(MenuEntry::Link(NavLink::new("User Page", Route::UserProfile)));
    user_menu.push(if signed_in {
        MenuEntry::Logout
    } else {
        MenuEntry::Link(NavLink::new("Login", Route::Login))
    });

    let theme_icon = match mode {
        ThemeMode::Light => ThemeIcon::DarkMode,
        ThemeMode::Dark => ThemeIcon::LightMode,
    };

    HeaderModel {
        brand: NavLink::new("LOGO", Route::Home),
        nav_links,
        user_menu,
        theme_icon,
        signed_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            name: "Jhon".to_string(),
            email: "john@mail.com".to_string(),
            avatar: "https://i.imgur.com/LDOO4Qs.jpg".to_string(),
        }
    }

    fn routes(links: &[NavLink]) -> Vec<Route> {
        links.iter().map(|l| l.route).collect()
    }

    #[test]
    fn test_signed_out_header() {
        let header = header_model(None, ThemeMode::Light);

        assert!(!header.signed_in);
        assert_eq!(routes(&header.nav_links), vec![Route::Home, Route::AboutUs]);
        assert_eq!(
            header.user_menu,
            vec![
                MenuEntry::Link(NavLink::new("User Page", Route::UserProfile)),
                MenuEntry::Link(NavLink::new("Login", Route::Login)),
            ]
        );
        assert_eq!(header.theme_icon, ThemeIcon::DarkMode);
    }

    #[test]
    fn test_signed_in_header() {
        let user = user();
        let header = header_model(Some(&user), ThemeMode::Dark);

        assert!(header.signed_in);
        assert_eq!(
            routes(&header.nav_links),
            vec![Route::Home, Route::AboutUs, Route::ShoppingCart]
        );
        assert_eq!(header.user_menu.len(), 3);
        assert_eq!(header.user_menu.last(), Some(&MenuEntry::Logout));
        assert_eq!(header.theme_icon, ThemeIcon::LightMode);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Login.to_string(), "/login");
        assert_eq!(Route::UserProfile.path(), "/user-profile");
    }
}
