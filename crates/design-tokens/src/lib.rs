//! Design tokens for the Taxicab ride-hailing platform
//!
//! This crate provides the single source of truth for visual design values:
//! colors, spacing, typography, motion, breakpoints, and themes.
//!
//! # Design System
//!
//! The design system is built around the taxi brand palette:
//! - Primary: Taxi yellow (#F59E0B)
//! - Contrast: Taxi black (#111827)
//!
//! Three themes are supported:
//! - [`theme::ThemeName::Light`] - Bright theme with white background
//! - [`theme::ThemeName::Dark`] - Dark theme with near-black background
//! - [`theme::ThemeName::HighContrast`] - Maximum-contrast accessibility theme
//!
//! # Modules
//!
//! - [`colors`] - Color scales, status/payment palettes, and WCAG contrast
//! - [`spacing`] - Spacing scale and layout dimensions
//! - [`typography`] - Font stacks, sizes, and text styles
//! - [`tokens`] - Radius, shadows, z-index, breakpoints, and motion
//! - [`theme`] - Theme definitions and lookup
//!
//! # Example
//!
//! ```rust
//! use design_tokens::colors::{contrast_color, taxi};
//! use design_tokens::spacing::touch;
//! use design_tokens::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! assert!(theme.is_dark());
//!
//! let text = contrast_color(taxi::YELLOW.s500);
//! let target = touch::COMFORTABLE_TARGET;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod colors;
pub mod spacing;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use colors::{contrast_color, contrast_ratio, parse_hex, Color, ColorError, ColorScale, Rgb};

pub use theme::{
    all_themes, dark_theme, get_theme, high_contrast_theme, light_theme, Theme, ThemeError,
    ThemeName,
};

pub use tokens::{
    animations, breakpoints, duration, easing, opacity, radius, shadows, z_index, Breakpoint,
};

pub use typography::{
    font_size, font_weight, FontFamily, FontSize, TextStyle, TextTransform, TextVariant,
    TypeBreakpoint,
};
