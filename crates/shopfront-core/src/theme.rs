//! # Theme
//!
//! Light and dark palettes for the storefront. `custom_theme` is a pure
//! function of the mode; the app keeps the current mode in its theme state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub const fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ValidationError::InvalidFormat {
                field: "theme".to_string(),
                reason: format!("expected 'light' or 'dark', got '{}'", other),
            }),
        }
    }
}

/// A main color with the text color drawn on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    pub main: String,
    pub contrast_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BackgroundColors {
    pub default: String,
    pub paper: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Palette {
    pub mode: ThemeMode,
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub info: PaletteColor,
    pub text: TextColors,
    pub background: BackgroundColors,
}

/// Colors of the checkout stepper icons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StepIconColors {
    pub completed: String,
    pub active: String,
    pub disabled: String,
}

/// Everything the presentation layer needs to style itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOptions {
    pub palette: Palette,
    pub step_icon: StepIconColors,
}

impl ThemeOptions {
    /// JSON form handed to the web frontend.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn color(main: &str, contrast_text: &str) -> PaletteColor {
    PaletteColor {
        main: main.to_string(),
        contrast_text: contrast_text.to_string(),
    }
}

/// Builds the storefront theme for `mode`.
pub fn custom_theme(mode: ThemeMode) -> ThemeOptions {
    let palette = match mode {
        ThemeMode::Light => Palette {
            mode,
            primary: color("#FEFEFE", "#212121"),
            secondary: color("#074a41", "#fff"),
            info: color("#2d86b8", "#212121"),
            text: TextColors {
                primary: "#212121".to_string(),
                secondary: "#616161".to_string(),
            },
            background: BackgroundColors {
                default: "#FEFEFE".to_string(),
                paper: "#fff".to_string(),
            },
        },
        ThemeMode::Dark => Palette {
            mode,
            primary: color("#121212", "#fff"),
            secondary: color("#090909", "#fff"),
            info: color("#7ab9dd", "#fff"),
            text: TextColors {
                primary: "#fff".to_string(),
                secondary: "#bdbdbd".to_string(),
            },
            background: BackgroundColors {
                default: "#121212".to_string(),
                paper: "#23272f".to_string(),
            },
        },
    };

    ThemeOptions {
        palette,
        step_icon: StepIconColors {
            completed: "green".to_string(),
            active: "#2d86b8".to_string(),
            disabled: "cyan".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_palette() {
        let theme = custom_theme(ThemeMode::Light);
        assert_eq!(theme.palette.mode, ThemeMode::Light);
        assert_eq!(theme.palette.primary.main, "#FEFEFE");
        assert_eq!(theme.palette.secondary.main, "#074a41");
        assert_eq!(theme.palette.background.paper, "#fff");
    }

    #[test]
    fn test_dark_palette() {
        let theme = custom_theme(ThemeMode::Dark);
        assert_eq!(theme.palette.primary.main, "#121212");
        assert_eq!(theme.palette.info.main, "#7ab9dd");
        assert_eq!(theme.palette.text.secondary, "#bdbdbd");
        assert_eq!(theme.palette.background.paper, "#23272f");
    }

    #[test]
    fn test_step_icons_do_not_depend_on_mode() {
        assert_eq!(
            custom_theme(ThemeMode::Light).step_icon,
            custom_theme(ThemeMode::Dark).step_icon
        );
    }

    #[test]
    fn test_toggle_and_parse() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle().toggle(), ThemeMode::Dark);
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_json_uses_frontend_field_names() {
        let json = custom_theme(ThemeMode::Dark).to_json().unwrap();
        assert!(!json.contains("\"contrast_text\""));
        assert!(json.contains("\"contrastText\":\"#fff\""));
        assert!(json.contains("\"stepIcon\""));
        assert!(json.contains("\"mode\":\"dark\""));
    }
}
