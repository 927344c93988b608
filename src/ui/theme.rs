//! # Theme System
//!
//! Color palettes for the TV screens.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines every color the renderer uses. Rendering code
//! references theme fields instead of hardcoding `ratatui::style::Color`
//! values. The theme is picked by name from the config file or `--theme`.
//!
//! ## Built-in Themes
//!
//! - **Tolteka Night** (default) - slate background of the hotel set-top app
//! - **Catppuccin Mocha** - warm, dark pastel theme
//! - **Nord** - arctic, north-bluish color palette
//! - **Dracula** - dark theme with vivid colors

use ratatui::style::Color;

/// All colors used by the TV screens, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name used in the config file.
    pub name: &'static str,

    // -- Background colors --
    /// Screen background.
    pub bg: Color,
    /// Background of the element that has focus.
    pub focus_bg: Color,

    // -- Foreground / text colors --
    /// Primary text color.
    pub fg: Color,
    /// Muted/secondary text (hints, artists, footers).
    pub fg_dim: Color,

    // -- Accent / brand colors --
    /// Focus ring, focused labels, titles.
    pub accent: Color,
    /// Prices, ratings and the header bar on the flight board.
    pub secondary: Color,

    // -- Semantic status colors --
    /// Action status line and the playing button.
    pub success: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Tolteka Night).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// Resolve a configured theme name, falling back to the default.
    pub fn resolve(name: &str) -> &'static Theme {
        Self::by_name(name).unwrap_or_else(|| {
            tracing::warn!(theme = name, "unknown theme, using default");
            Self::default_theme()
        })
    }
}

static BUILT_IN_THEMES: [Theme; 4] = [
    // 0 - Tolteka Night (default)
    Theme {
        name: "Tolteka Night",
        bg: Color::Rgb(15, 23, 42),         // slate-900
        focus_bg: Color::Rgb(30, 58, 95),   // primary/20 over slate
        fg: Color::Rgb(248, 250, 252),      // slate-50
        fg_dim: Color::Rgb(148, 163, 184),  // slate-400
        accent: Color::Rgb(96, 165, 250),   // blue-400
        secondary: Color::Rgb(251, 191, 36), // amber-400
        success: Color::Rgb(74, 222, 128),  // green-400
    },
    // 1 - Catppuccin Mocha
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        focus_bg: Color::Rgb(69, 71, 90),     // surface1
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        success: Color::Rgb(166, 227, 161),   // green
    },
    // 2 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        focus_bg: Color::Rgb(67, 76, 94),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // yellow
        success: Color::Rgb(163, 190, 140),
    },
    // 3 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        focus_bg: Color::Rgb(68, 71, 90),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),    // cyan
        secondary: Color::Rgb(241, 250, 140), // yellow
        success: Color::Rgb(80, 250, 123),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Convert a catppuccin color to a ratatui Color via its RGB values.
    fn ctp(color: catppuccin::Color) -> Color {
        Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    #[test]
    fn test_default_is_tolteka() {
        assert_eq!(Theme::default_theme().name, "Tolteka Night");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("tolteka night").is_some());
        assert!(Theme::by_name("NORD").is_some());
        assert!(Theme::by_name("dracula").is_some());
        assert!(Theme::by_name("nonexistent").is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Theme::resolve("Nord").name, "Nord");
        assert_eq!(Theme::resolve("Solarized Light").name, "Tolteka Night");
    }

    #[test]
    fn test_catppuccin_mocha_matches_palette() {
        let mocha = catppuccin::PALETTE.mocha.colors;
        let theme = Theme::by_name("Catppuccin Mocha").expect("theme exists");
        assert_eq!(theme.bg, ctp(mocha.base));
        assert_eq!(theme.focus_bg, ctp(mocha.surface1));
        assert_eq!(theme.fg, ctp(mocha.text));
        assert_eq!(theme.accent, ctp(mocha.blue));
        assert_eq!(theme.secondary, ctp(mocha.yellow));
        assert_eq!(theme.success, ctp(mocha.green));
    }

    #[test]
    fn test_all_themes_have_distinct_names() {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len(), "duplicate theme names found");
    }
}
