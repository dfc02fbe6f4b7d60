//! Color mode and light/dark theme resolution.

use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

/// When to emit color escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stderr is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a yes/no decision for the current process.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
            }
        }
    }
}

/// Terminal background the palette is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Guess from `COLORFGBG`, falling back to dark.
    #[default]
    Auto,
    Light,
    Dark,
}

impl Theme {
    /// Resolve `Auto` into a concrete theme.
    pub fn resolve(self) -> Theme {
        match self {
            Theme::Auto => {
                let hint = std::env::var("COLORFGBG").ok();
                Self::from_colorfgbg(hint.as_deref()).unwrap_or(Theme::Dark)
            }
            other => other,
        }
    }

    /// Parse a `COLORFGBG` value such as `15;0`; the last field is the
    /// background color index.
    fn from_colorfgbg(value: Option<&str>) -> Option<Theme> {
        let bg: u8 = value?.rsplit(';').next()?.trim().parse().ok()?;
        match bg {
            0..=6 | 8 => Some(Theme::Dark),
            _ => Some(Theme::Light),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes() {
        assert!(ColorMode::Always.enabled());
        assert!(!ColorMode::Never.enabled());
    }

    #[test]
    fn colorfgbg_background() {
        assert_eq!(Theme::from_colorfgbg(Some("15;0")), Some(Theme::Dark));
        assert_eq!(Theme::from_colorfgbg(Some("0;15")), Some(Theme::Light));
        assert_eq!(Theme::from_colorfgbg(Some("12;default;8")), Some(Theme::Dark));
        assert_eq!(Theme::from_colorfgbg(Some("garbage")), None);
        assert_eq!(Theme::from_colorfgbg(None), None);
    }

    #[test]
    fn concrete_theme_resolves_to_itself() {
        assert_eq!(Theme::Light.resolve(), Theme::Light);
        assert_eq!(Theme::Dark.resolve(), Theme::Dark);
        assert_ne!(Theme::Auto.resolve(), Theme::Auto);
    }
}
