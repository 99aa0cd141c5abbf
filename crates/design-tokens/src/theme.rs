//! Theme definitions for the Taxicab design system
//!
//! Three themes are supported:
//! - Light: bright theme with white background
//! - Dark: dark theme with near-black background
//! - HighContrast: maximum-contrast theme for accessibility
//!
//! # Usage
//!
//! ```rust
//! use design_tokens::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! let bg = theme.background;
//! ```

use crate::colors::{contrast_color, Color};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// =============================================================================
// Theme Name
// =============================================================================

/// Error raised when a theme name cannot be resolved
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    /// The given name matches no known theme
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
    /// High contrast accessibility theme
    HighContrast,
}

impl ThemeName {
    /// Get the CSS color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
            ThemeName::HighContrast => "dark",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "light"),
            ThemeName::Dark => write!(f, "dark"),
            ThemeName::HighContrast => write!(f, "high-contrast"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            "high-contrast" | "high_contrast" => Ok(ThemeName::HighContrast),
            _ => Err(ThemeError::UnknownTheme(s.to_string())),
        }
    }
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Complete theme definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Page background
    pub background: Color,
    /// Default text color
    pub foreground: Color,
    /// Primary brand color
    pub primary: Color,
    /// Secondary surface color
    pub secondary: Color,
    /// Accent color for links and highlights
    pub accent: Color,
    /// Muted text color
    pub muted: Color,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self.name, ThemeName::Dark | ThemeName::HighContrast)
    }

    /// Readable text color for surfaces using the primary brand color
    pub fn on_primary(&self) -> Color {
        contrast_color(self.primary)
    }
}

// =============================================================================
// Theme Constructors
// =============================================================================

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        background: "#FFFFFF",
        foreground: "#111827",
        primary: "#F59E0B",
        secondary: "#F3F4F6",
        accent: "#3B82F6",
        muted: "#6B7280",
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        background: "#111827",
        foreground: "#F9FAFB",
        primary: "#F59E0B",
        secondary: "#374151",
        accent: "#60A5FA",
        muted: "#9CA3AF",
    }
}

/// Create the high contrast theme
pub fn high_contrast_theme() -> Theme {
    Theme {
        name: ThemeName::HighContrast,
        background: "#000000",
        foreground: "#FFFFFF",
        primary: "#FFFF00",
        secondary: "#FFFFFF",
        accent: "#00FFFF",
        muted: "#CCCCCC",
    }
}

// =============================================================================
// Theme Provider
// =============================================================================

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
        ThemeName::HighContrast => high_contrast_theme(),
    }
}

/// All available themes
pub fn all_themes() -> HashMap<ThemeName, Theme> {
    let mut themes = HashMap::new();
    themes.insert(ThemeName::Light, light_theme());
    themes.insert(ThemeName::Dark, dark_theme());
    themes.insert(ThemeName::HighContrast, high_contrast_theme());
    themes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{contrast_ratio, parse_hex};

    // ==========================================================================
    // Theme Name Tests
    // ==========================================================================

    #[test]
    fn test_theme_name_display() {
        assert_eq!(ThemeName::Light.to_string(), "light");
        assert_eq!(ThemeName::Dark.to_string(), "dark");
        assert_eq!(ThemeName::HighContrast.to_string(), "high-contrast");
    }

    #[test]
    fn test_theme_name_from_str() {
        assert_eq!("light".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert_eq!("dark".parse::<ThemeName>().unwrap(), ThemeName::Dark);
        assert_eq!(
            "high-contrast".parse::<ThemeName>().unwrap(),
            ThemeName::HighContrast
        );
        assert_eq!("DARK".parse::<ThemeName>().unwrap(), ThemeName::Dark);
        assert_eq!(
            "midnight".parse::<ThemeName>(),
            Err(ThemeError::UnknownTheme("midnight".to_string()))
        );
    }

    #[test]
    fn test_theme_name_serialization() {
        let json = serde_json::to_string(&ThemeName::HighContrast).unwrap();
        assert_eq!(json, "\"high-contrast\"");
        let parsed: ThemeName = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ThemeName::Dark);
    }

    // ==========================================================================
    // Theme Value Tests
    // ==========================================================================

    #[test]
    fn test_light_theme_values() {
        let theme = light_theme();
        assert_eq!(theme.background, "#FFFFFF");
        assert_eq!(theme.foreground, "#111827");
        assert_eq!(theme.primary, "#F59E0B");
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_dark_theme_values() {
        let theme = dark_theme();
        assert_eq!(theme.background, "#111827");
        assert_eq!(theme.foreground, "#F9FAFB");
        assert!(theme.is_dark());
    }

    #[test]
    fn test_high_contrast_theme_values() {
        let theme = high_contrast_theme();
        assert_eq!(theme.background, "#000000");
        assert_eq!(theme.primary, "#FFFF00");
        assert!(theme.is_dark());
    }

    #[test]
    fn test_brand_primary_shared_by_light_and_dark() {
        assert_eq!(light_theme().primary, dark_theme().primary);
    }

    // ==========================================================================
    // Theme Provider Tests
    // ==========================================================================

    #[test]
    fn test_get_theme() {
        assert_eq!(get_theme(ThemeName::Light).name, ThemeName::Light);
        assert_eq!(get_theme(ThemeName::Dark).name, ThemeName::Dark);
        assert_eq!(
            get_theme(ThemeName::HighContrast).name,
            ThemeName::HighContrast
        );
    }

    #[test]
    fn test_all_themes() {
        let themes = all_themes();
        assert_eq!(themes.len(), 3);
        assert!(themes.contains_key(&ThemeName::Light));
        assert!(themes.contains_key(&ThemeName::Dark));
        assert!(themes.contains_key(&ThemeName::HighContrast));
    }

    // ==========================================================================
    // Accessibility Tests
    // ==========================================================================

    #[test]
    fn test_all_theme_colors_are_valid_hex() {
        for (name, theme) in all_themes() {
            for color in [
                theme.background,
                theme.foreground,
                theme.primary,
                theme.secondary,
                theme.accent,
                theme.muted,
            ] {
                assert!(
                    parse_hex(color).is_ok(),
                    "invalid color {color} in {name} theme"
                );
            }
        }
    }

    #[test]
    fn test_foreground_readable_on_background() {
        for (name, theme) in all_themes() {
            let ratio = contrast_ratio(
                parse_hex(theme.background).unwrap(),
                parse_hex(theme.foreground).unwrap(),
            );
            // WCAG AA body text threshold
            assert!(
                ratio >= 4.5,
                "{name} theme foreground/background ratio {ratio} below 4.5"
            );
        }
    }

    #[test]
    fn test_on_primary_contrast() {
        for (name, theme) in all_themes() {
            let on = theme.on_primary();
            let ratio = contrast_ratio(
                parse_hex(theme.primary).unwrap(),
                parse_hex(on).unwrap(),
            );
            assert!(
                ratio >= 4.5,
                "{name} theme on_primary ratio {ratio} below 4.5"
            );
        }
    }
}
