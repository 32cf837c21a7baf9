//! # Theme System
//!
//! Provides the light and dark colour themes and the controller that switches
//! between them.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines all colors used throughout the UI. Rendering
//! code references theme fields instead of hardcoding `ratatui::style::Color`
//! values. [`ThemeController`] owns the current [`ThemeMode`]:
//!
//! - **Dark** — Catppuccin Mocha
//! - **Light** — Catppuccin Latte
//!
//! The starting mode comes from the terminal's colour scheme hint, read once at
//! startup. Toggling only changes the in-memory mode; nothing is saved.

use ratatui::style::Color;
use serde::Deserialize;

/// Which of the two palettes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Interpret a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
    ///
    /// The background is the last field, an ANSI colour index: 7 and 9-15 are
    /// light backgrounds, 0-6 and 8 are dark. Anything else yields `None`.
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        match bg {
            0..=6 | 8 => Some(ThemeMode::Dark),
            7 | 9..=15 => Some(ThemeMode::Light),
            _ => None,
        }
    }

    /// The terminal's preferred scheme, if it advertises one.
    pub fn system_preference() -> Option<Self> {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| Self::from_colorfgbg(&v))
    }
}

/// Startup theme choice from the config file or `--theme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the terminal's colour scheme hint.
    #[default]
    System,
    Light,
    Dark,
}

/// All colors used by the Octoscope TUI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name.
    pub name: &'static str,
    pub mode: ThemeMode,

    // -- Background colors --
    /// Main background color for every panel.
    pub bg: Color,

    // -- Foreground / text colors --
    /// Primary text color (e.g. descriptions, counts).
    pub fg: Color,
    /// Muted/secondary text (e.g. URLs, hints, footer).
    pub fg_dim: Color,

    // -- Accent / brand colors --
    /// Primary accent used for branding, focused borders, repository names.
    pub accent: Color,
    /// Secondary accent for the display name and active controls.
    pub secondary: Color,

    // -- Semantic status colors --
    /// Success / green indicator (loading spinner, star counts).
    pub success: Color,
    /// Error / red indicator (error banner).
    pub error: Color,

    /// Unfocused borders.
    pub border: Color,
}

impl Theme {
    /// The palette for `mode`.
    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static DARK: Theme = Theme {
    name: "Catppuccin Mocha",
    mode: ThemeMode::Dark,
    bg: Color::Rgb(30, 30, 46),           // base
    fg: Color::Rgb(205, 214, 244),        // text
    fg_dim: Color::Rgb(108, 112, 134),    // overlay0
    accent: Color::Rgb(137, 180, 250),    // blue
    secondary: Color::Rgb(249, 226, 175), // yellow
    success: Color::Rgb(166, 227, 161),   // green
    error: Color::Rgb(243, 139, 168),     // red
    border: Color::Rgb(69, 71, 90),       // surface1
};

static LIGHT: Theme = Theme {
    name: "Catppuccin Latte",
    mode: ThemeMode::Light,
    bg: Color::Rgb(239, 241, 245),        // base
    fg: Color::Rgb(76, 79, 105),          // text
    fg_dim: Color::Rgb(156, 160, 176),    // overlay0
    accent: Color::Rgb(30, 102, 245),     // blue
    secondary: Color::Rgb(223, 142, 29),  // yellow
    success: Color::Rgb(64, 160, 43),     // green
    error: Color::Rgb(210, 15, 57),       // red
    border: Color::Rgb(188, 192, 204),    // surface1
};

/// Holds the active mode and hands out the matching palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeController {
    mode: ThemeMode,
}

impl ThemeController {
    /// Pick the starting mode.
    ///
    /// `System` consults the terminal hint once; with no hint available the
    /// controller starts light, the same as a browser that does not report a
    /// dark-scheme preference.
    pub fn init(preference: ThemePreference) -> Self {
        let mode = match preference {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::System => ThemeMode::system_preference().unwrap_or(ThemeMode::Light),
        };
        Self { mode }
    }

    pub fn with_mode(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn theme(&self) -> &'static Theme {
        Theme::for_mode(self.mode)
    }

    /// Glyph for the toggle: a sun while dark (switch to light), a moon while light.
    pub fn icon(&self) -> &'static str {
        match self.mode {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "☾",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Convert a catppuccin color to a ratatui Color via its RGB values.
    fn ctp(color: catppuccin::Color) -> Color {
        Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    #[test]
    fn test_dark_matches_mocha_palette() {
        let mocha = catppuccin::PALETTE.mocha.colors;
        let theme = Theme::for_mode(ThemeMode::Dark);
        assert_eq!(theme.bg, ctp(mocha.base));
        assert_eq!(theme.fg, ctp(mocha.text));
        assert_eq!(theme.fg_dim, ctp(mocha.overlay0));
        assert_eq!(theme.accent, ctp(mocha.blue));
        assert_eq!(theme.secondary, ctp(mocha.yellow));
        assert_eq!(theme.success, ctp(mocha.green));
        assert_eq!(theme.error, ctp(mocha.red));
        assert_eq!(theme.border, ctp(mocha.surface1));
    }

    #[test]
    fn test_light_matches_latte_palette() {
        let latte = catppuccin::PALETTE.latte.colors;
        let theme = Theme::for_mode(ThemeMode::Light);
        assert_eq!(theme.bg, ctp(latte.base));
        assert_eq!(theme.fg, ctp(latte.text));
        assert_eq!(theme.fg_dim, ctp(latte.overlay0));
        assert_eq!(theme.accent, ctp(latte.blue));
        assert_eq!(theme.secondary, ctp(latte.yellow));
        assert_eq!(theme.success, ctp(latte.green));
        assert_eq!(theme.error, ctp(latte.red));
        assert_eq!(theme.border, ctp(latte.surface1));
    }

    #[test]
    fn test_toggle_flips_mode_and_icon() {
        let mut controller = ThemeController::with_mode(ThemeMode::Dark);
        assert!(controller.is_dark());
        assert_eq!(controller.icon(), "☀");
        assert_eq!(controller.theme().name, "Catppuccin Mocha");

        controller.toggle();
        assert_eq!(controller.mode(), ThemeMode::Light);
        assert_eq!(controller.icon(), "☾");
        assert_eq!(controller.theme().name, "Catppuccin Latte");

        controller.toggle();
        assert!(controller.is_dark());
    }

    #[test]
    fn test_explicit_preference_overrides_system() {
        assert_eq!(ThemeController::init(ThemePreference::Dark).mode(), ThemeMode::Dark);
        assert_eq!(ThemeController::init(ThemePreference::Light).mode(), ThemeMode::Light);
    }

    #[test]
    fn test_colorfgbg_parsing() {
        assert_eq!(ThemeMode::from_colorfgbg("15;0"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_colorfgbg("0;15"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_colorfgbg("0;7"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_colorfgbg("15;default;8"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_colorfgbg("15;default"), None);
        assert_eq!(ThemeMode::from_colorfgbg("0;200"), None);
        assert_eq!(ThemeMode::from_colorfgbg(""), None);
    }

    #[test]
    fn test_preference_deserializes_lowercase() {
        let pref: ThemePreference = serde_json::from_str("\"dark\"").expect("deserialize");
        assert_eq!(pref, ThemePreference::Dark);
        assert_eq!(ThemePreference::default(), ThemePreference::System);
    }
}
