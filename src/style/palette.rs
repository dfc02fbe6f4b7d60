//! Style table for the two log lines.

use crossterm::style::{style, Color, Stylize};

use crate::style::{ColorMode, StatusClass, Theme};

/// A foreground color, or nothing for plain output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    color: Option<Color>,
}

impl Style {
    /// Style that leaves text untouched.
    pub const PLAIN: Style = Style { color: None };

    /// Foreground from the xterm 256-color table, written as `38;5;N`.
    pub fn xterm(index: u8) -> Self {
        Self {
            color: Some(Color::AnsiValue(index)),
        }
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Render `text` with this style.
    pub fn paint(&self, text: &str) -> String {
        match self.color {
            Some(color) => style(text).with(color).to_string(),
            None => text.to_owned(),
        }
    }
}

/// Immutable mapping from log field to style.
///
/// Built once at startup and shared by reference with every logger.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Direction markers (`<-`, `->`) and the byte count.
    pub subtle: Style,
    pub method: Style,
    pub uri: Style,
    pub address: Style,
    pub elapsed: Style,
    pub success: Style,
    pub redirect: Style,
    pub client_error: Style,
    pub server_error: Style,
}

impl Palette {
    /// Palette that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            subtle: Style::PLAIN,
            method: Style::PLAIN,
            uri: Style::PLAIN,
            address: Style::PLAIN,
            elapsed: Style::PLAIN,
            success: Style::PLAIN,
            redirect: Style::PLAIN,
            client_error: Style::PLAIN,
            server_error: Style::PLAIN,
        }
    }

    /// Colored palette tuned for a terminal background.
    pub fn themed(theme: Theme) -> Self {
        let light = matches!(theme.resolve(), Theme::Light);
        let pick = |l: u8, d: u8| Style::xterm(if light { l } else { d });

        Self {
            subtle: Style::xterm(250),
            method: Style::xterm(62),
            uri: Style::xterm(240),
            address: Style::xterm(250),
            elapsed: Style::xterm(240),
            success: pick(35, 48),
            redirect: pick(208, 192),
            client_error: pick(39, 86),
            server_error: pick(203, 204),
        }
    }

    /// Palette for the process' stderr, honouring the requested color mode.
    pub fn for_terminal(mode: ColorMode, theme: Theme) -> Self {
        if mode.enabled() {
            Self::themed(theme)
        } else {
            Self::plain()
        }
    }

    /// Whether any field carries a color.
    pub fn is_colored(&self) -> bool {
        [
            self.subtle,
            self.method,
            self.uri,
            self.address,
            self.elapsed,
            self.success,
            self.redirect,
            self.client_error,
            self.server_error,
        ]
        .iter()
        .any(|s| s.color.is_some())
    }

    pub fn status(&self, class: StatusClass) -> &Style {
        match class {
            StatusClass::Success => &self.success,
            StatusClass::Redirect => &self.redirect,
            StatusClass::ClientError => &self.client_error,
            StatusClass::ServerError => &self.server_error,
        }
    }
}

impl Default for Palette {
    /// Auto-detected palette. Only reads the environment and stderr.
    fn default() -> Self {
        Self::for_terminal(ColorMode::Auto, Theme::Auto)
    }
}
