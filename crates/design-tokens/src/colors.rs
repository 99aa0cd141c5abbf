//! Color tokens for the Taxicab platform
//!
//! Colors are organized by purpose: brand palettes, semantic scales,
//! neutrals, and the fixed status/payment lookup tables used by badges
//! and indicators. Scale stops follow WCAG 2.1 AA guidance; the stops
//! called out in comments are the ones verified against white.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A color represented as a hex string (e.g., "#F59E0B") or an
/// rgba() string for translucent tokens
pub type Color = &'static str;

/// Errors for color parsing and lookup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not a parseable #RRGGBB color
    #[error("Malformed hex color: {0}")]
    MalformedHex(String),
}

// =============================================================================
// Color Scale
// =============================================================================

/// A 10-stop color scale from lightest (50) to darkest (900)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScale {
    /// Lightest (50)
    pub s50: Color,
    /// Very light (100)
    pub s100: Color,
    /// Light (200)
    pub s200: Color,
    /// Medium-light (300)
    pub s300: Color,
    /// Medium (400)
    pub s400: Color,
    /// Base (500)
    pub s500: Color,
    /// Medium-dark (600)
    pub s600: Color,
    /// Dark (700)
    pub s700: Color,
    /// Very dark (800)
    pub s800: Color,
    /// Darkest (900)
    pub s900: Color,
}

impl ColorScale {
    /// Get a color by its numeric stop (50, 100, ..., 900)
    pub fn get(&self, stop: u16) -> Option<Color> {
        match stop {
            50 => Some(self.s50),
            100 => Some(self.s100),
            200 => Some(self.s200),
            300 => Some(self.s300),
            400 => Some(self.s400),
            500 => Some(self.s500),
            600 => Some(self.s600),
            700 => Some(self.s700),
            800 => Some(self.s800),
            900 => Some(self.s900),
            _ => None,
        }
    }

    /// Iterate the stops from lightest to darkest
    pub fn stops(&self) -> [(u16, Color); 10] {
        [
            (50, self.s50),
            (100, self.s100),
            (200, self.s200),
            (300, self.s300),
            (400, self.s400),
            (500, self.s500),
            (600, self.s600),
            (700, self.s700),
            (800, self.s800),
            (900, self.s900),
        ]
    }
}

// =============================================================================
// Brand Palettes (Taxi Yellow / Taxi Black)
// =============================================================================

/// Primary taxi brand palettes
pub mod taxi {
    use super::ColorScale;

    /// Taxi yellow scale; 500 is the primary brand color,
    /// 600 the hover state, 700 the active state
    pub const YELLOW: ColorScale = ColorScale {
        s50: "#FFFBEB",
        s100: "#FEF3C7",
        s200: "#FDE68A",
        s300: "#FCD34D",
        s400: "#FBBF24",
        s500: "#F59E0B",
        s600: "#D97706",
        s700: "#B45309",
        s800: "#92400E",
        s900: "#78350F",
    };

    /// Taxi black (gray) scale; 900 is the primary text color
    pub const BLACK: ColorScale = ColorScale {
        s50: "#F9FAFB",
        s100: "#F3F4F6",
        s200: "#E5E7EB",
        s300: "#D1D5DB",
        s400: "#9CA3AF",
        s500: "#6B7280",
        s600: "#4B5563",
        s700: "#374151",
        s800: "#1F2937",
        s900: "#111827",
    };
}

// =============================================================================
// Semantic Scales
// =============================================================================

/// Semantic color scales (success, warning, error, info)
pub mod semantic {
    use super::ColorScale;

    /// Success green; 500 reaches 4.5:1 on white, 700 reaches 7:1
    pub const SUCCESS: ColorScale = ColorScale {
        s50: "#ECFDF5",
        s100: "#D1FAE5",
        s200: "#A7F3D0",
        s300: "#6EE7B7",
        s400: "#34D399",
        s500: "#10B981",
        s600: "#059669",
        s700: "#047857",
        s800: "#065F46",
        s900: "#064E3B",
    };

    /// Warning amber; 500 is 3.8:1 and needs dark text, 700 reaches 6.2:1
    pub const WARNING: ColorScale = ColorScale {
        s50: "#FFFBEB",
        s100: "#FEF3C7",
        s200: "#FDE68A",
        s300: "#FCD34D",
        s400: "#FBBF24",
        s500: "#F59E0B",
        s600: "#D97706",
        s700: "#B45309",
        s800: "#92400E",
        s900: "#78350F",
    };

    /// Error red; 500 reaches 4.5:1 on white, 700 reaches 7.8:1
    pub const ERROR: ColorScale = ColorScale {
        s50: "#FEF2F2",
        s100: "#FEE2E2",
        s200: "#FECACA",
        s300: "#FCA5A5",
        s400: "#F87171",
        s500: "#EF4444",
        s600: "#DC2626",
        s700: "#B91C1C",
        s800: "#991B1B",
        s900: "#7F1D1D",
    };

    /// Info blue; 500 reaches 4.5:1 on white, 700 reaches 8.2:1
    pub const INFO: ColorScale = ColorScale {
        s50: "#EFF6FF",
        s100: "#DBEAFE",
        s200: "#BFDBFE",
        s300: "#93C5FD",
        s400: "#60A5FA",
        s500: "#3B82F6",
        s600: "#2563EB",
        s700: "#1D4ED8",
        s800: "#1E40AF",
        s900: "#1E3A8A",
    };
}

// =============================================================================
// Neutrals
// =============================================================================

/// Neutral colors
pub mod neutral {
    use super::{Color, ColorScale};

    /// Pure white
    pub const WHITE: Color = "#FFFFFF";
    /// Off white
    pub const OFF_WHITE: Color = "#FAFAFA";
    /// Light gray surface
    pub const LIGHT_GRAY: Color = "#F5F5F5";
    /// Border gray
    pub const BORDER_GRAY: Color = "#E0E0E0";

    /// Neutral gray scale
    pub const GRAY: ColorScale = ColorScale {
        s50: "#F9FAFB",
        s100: "#F3F4F6",
        s200: "#E5E7EB",
        s300: "#D1D5DB",
        s400: "#9CA3AF",
        s500: "#6B7280",
        s600: "#4B5563",
        s700: "#374151",
        s800: "#1F2937",
        s900: "#111827",
    };
}

// =============================================================================
// Status Colors
// =============================================================================

/// Status colors for driver and ride states
pub mod status {
    use super::Color;

    /// Driver online
    pub const ONLINE: Color = "#10B981";
    /// Driver offline
    pub const OFFLINE: Color = "#6B7280";
    /// Driver busy
    pub const BUSY: Color = "#F59E0B";
    /// Emergency
    pub const EMERGENCY: Color = "#EF4444";
    /// Ride requested
    pub const RIDE_REQUESTED: Color = "#3B82F6";
    /// Ride accepted
    pub const RIDE_ACCEPTED: Color = "#10B981";
    /// Ride completed
    pub const RIDE_COMPLETED: Color = "#059669";
    /// Ride cancelled
    pub const RIDE_CANCELLED: Color = "#EF4444";

    /// Get a status color by name
    pub fn get(name: &str) -> Option<Color> {
        match name {
            "online" => Some(ONLINE),
            "offline" => Some(OFFLINE),
            "busy" => Some(BUSY),
            "emergency" => Some(EMERGENCY),
            "ride-requested" => Some(RIDE_REQUESTED),
            "ride-accepted" => Some(RIDE_ACCEPTED),
            "ride-completed" => Some(RIDE_COMPLETED),
            "ride-cancelled" => Some(RIDE_CANCELLED),
            _ => None,
        }
    }
}

// =============================================================================
// Payment Method Colors
// =============================================================================

/// Payment method colors
pub mod payment {
    use super::Color;

    /// Cash payments
    pub const CASH: Color = "#10B981";
    /// Card payments
    pub const CARD: Color = "#3B82F6";
    /// EcoCash brand color
    pub const ECOCASH: Color = "#E11D48";
    /// OneMoney brand color
    pub const ONEMONEY: Color = "#7C3AED";

    /// Get a payment method color by name
    pub fn get(name: &str) -> Option<Color> {
        match name {
            "cash" => Some(CASH),
            "card" => Some(CARD),
            "ecocash" => Some(ECOCASH),
            "onemoney" => Some(ONEMONEY),
            _ => None,
        }
    }
}

// =============================================================================
// Surface, Text, Border, Shadow Groups
// =============================================================================

/// Background colors
pub mod background {
    use super::Color;

    /// Primary surface
    pub const PRIMARY: Color = "#FFFFFF";
    /// Secondary surface
    pub const SECONDARY: Color = "#F9FAFB";
    /// Tertiary surface
    pub const TERTIARY: Color = "#F3F4F6";
    /// Dimming overlay
    pub const OVERLAY: Color = "rgba(0, 0, 0, 0.5)";
    /// Modal backdrop
    pub const MODAL_BACKDROP: Color = "rgba(0, 0, 0, 0.75)";
}

/// Text colors
pub mod text {
    use super::Color;

    /// Primary text
    pub const PRIMARY: Color = "#111827";
    /// Secondary text
    pub const SECONDARY: Color = "#374151";
    /// Tertiary/muted text
    pub const TERTIARY: Color = "#6B7280";
    /// Text on dark surfaces
    pub const INVERSE: Color = "#FFFFFF";
    /// Disabled text
    pub const DISABLED: Color = "#9CA3AF";
    /// Link text
    pub const LINK: Color = "#2563EB";
    /// Link hover text
    pub const LINK_HOVER: Color = "#1D4ED8";
}

/// Border colors
pub mod border {
    use super::Color;

    /// Default border
    pub const PRIMARY: Color = "#E5E7EB";
    /// Stronger border
    pub const SECONDARY: Color = "#D1D5DB";
    /// Focus ring
    pub const FOCUS: Color = "#F59E0B";
    /// Error border
    pub const ERROR: Color = "#EF4444";
    /// Success border
    pub const SUCCESS: Color = "#10B981";
}

/// Shadow colors
pub mod shadow {
    use super::Color;

    /// Small shadow
    pub const SM: Color = "rgba(0, 0, 0, 0.05)";
    /// Medium shadow
    pub const MD: Color = "rgba(0, 0, 0, 0.1)";
    /// Large shadow
    pub const LG: Color = "rgba(0, 0, 0, 0.15)";
    /// Extra large shadow
    pub const XL: Color = "rgba(0, 0, 0, 0.2)";
    /// Taxi yellow glow
    pub const TAXI_GLOW: Color = "rgba(245, 158, 11, 0.3)";
}

// =============================================================================
// Contrast Computation
// =============================================================================

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

/// Parse a "#RRGGBB" hex color (a trailing alpha pair is ignored)
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() < 6 || !digits.is_ascii() {
        return Err(ColorError::MalformedHex(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorError::MalformedHex(hex.to_string()))
    };
    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Format an RGB color as a "#RRGGBB" hex string
pub fn to_hex(color: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

fn linearize(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG 2.1 relative luminance of a color, in [0.0, 1.0]
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG 2.1 contrast ratio between two colors, in [1.0, 21.0]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick the text color (primary or inverse) with the higher contrast
/// ratio against the given background.
///
/// Malformed backgrounds resolve to the primary text color.
pub fn contrast_color(background: &str) -> Color {
    let Ok(bg) = parse_hex(background) else {
        return text::PRIMARY;
    };
    // both candidate text tokens are valid hex
    let dark = parse_hex(text::PRIMARY).unwrap();
    let light = parse_hex(text::INVERSE).unwrap();
    if contrast_ratio(bg, dark) >= contrast_ratio(bg, light) {
        text::PRIMARY
    } else {
        text::INVERSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Scale Tests
    // ==========================================================================

    #[test]
    fn test_scale_get() {
        assert_eq!(taxi::YELLOW.get(500), Some("#F59E0B"));
        assert_eq!(taxi::YELLOW.get(600), Some("#D97706"));
        assert_eq!(taxi::YELLOW.get(999), None);
        assert_eq!(taxi::BLACK.get(900), Some("#111827"));
    }

    #[test]
    fn test_scale_stops_cover_all_entries() {
        for scale in [
            taxi::YELLOW,
            taxi::BLACK,
            semantic::SUCCESS,
            semantic::WARNING,
            semantic::ERROR,
            semantic::INFO,
            neutral::GRAY,
        ] {
            let stops = scale.stops();
            assert_eq!(stops.len(), 10);
            for (stop, color) in stops {
                assert_eq!(scale.get(stop), Some(color));
            }
        }
    }

    #[test]
    fn test_scales_darken_monotonically() {
        for scale in [semantic::SUCCESS, semantic::ERROR, semantic::INFO, neutral::GRAY] {
            let mut last = f64::INFINITY;
            for (_, color) in scale.stops() {
                let lum = relative_luminance(parse_hex(color).unwrap());
                assert!(lum < last, "{color} is not darker than its predecessor");
                last = lum;
            }
        }
    }

    // ==========================================================================
    // Lookup Table Tests
    // ==========================================================================

    #[test]
    fn test_status_lookup() {
        assert_eq!(status::get("online"), Some(status::ONLINE));
        assert_eq!(status::get("ride-cancelled"), Some(status::RIDE_CANCELLED));
        assert_eq!(status::get("teleporting"), None);
    }

    #[test]
    fn test_payment_lookup() {
        assert_eq!(payment::get("cash"), Some(payment::CASH));
        assert_eq!(payment::get("ecocash"), Some(payment::ECOCASH));
        assert_eq!(payment::get("onemoney"), Some(payment::ONEMONEY));
        assert_eq!(payment::get("barter"), None);
    }

    // ==========================================================================
    // Hex Parsing Tests
    // ==========================================================================

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#F59E0B"), Ok(Rgb { r: 0xF5, g: 0x9E, b: 0x0B }));
        assert_eq!(parse_hex("111827"), Ok(Rgb { r: 0x11, g: 0x18, b: 0x27 }));
        assert!(parse_hex("#FFF").is_err());
        assert!(parse_hex("#GGGGGG").is_err());
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn test_to_hex_round_trip() {
        let rgb = parse_hex("#E11D48").unwrap();
        assert_eq!(to_hex(rgb), "#E11D48");
    }

    #[test]
    fn test_all_scale_colors_are_valid_hex() {
        for scale in [
            taxi::YELLOW,
            taxi::BLACK,
            semantic::SUCCESS,
            semantic::WARNING,
            semantic::ERROR,
            semantic::INFO,
            neutral::GRAY,
        ] {
            for (stop, color) in scale.stops() {
                assert!(parse_hex(color).is_ok(), "invalid hex at stop {stop}: {color}");
            }
        }
    }

    // ==========================================================================
    // Contrast Tests
    // ==========================================================================

    #[test]
    fn test_relative_luminance_extremes() {
        let white = parse_hex("#FFFFFF").unwrap();
        let black = parse_hex("#000000").unwrap();
        assert!((relative_luminance(white) - 1.0).abs() < 1e-9);
        assert!(relative_luminance(black).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_ratio_extremes() {
        let white = parse_hex("#FFFFFF").unwrap();
        let black = parse_hex("#000000").unwrap();
        assert!((contrast_ratio(white, black) - 21.0).abs() < 1e-6);
        assert!((contrast_ratio(white, white) - 1.0).abs() < 1e-6);
        // Symmetric
        assert_eq!(contrast_ratio(white, black), contrast_ratio(black, white));
    }

    #[test]
    fn test_contrast_color_on_light_backgrounds() {
        assert_eq!(contrast_color(taxi::YELLOW.s50), text::PRIMARY);
        assert_eq!(contrast_color(neutral::WHITE), text::PRIMARY);
        // Taxi yellow 500 is a mid tone; dark text wins on luminance
        assert_eq!(contrast_color(taxi::YELLOW.s500), text::PRIMARY);
    }

    #[test]
    fn test_contrast_color_on_dark_backgrounds() {
        assert_eq!(contrast_color(taxi::BLACK.s900), text::INVERSE);
        assert_eq!(contrast_color(semantic::ERROR.s700), text::INVERSE);
        assert_eq!(contrast_color("#000000"), text::INVERSE);
    }

    #[test]
    fn test_contrast_color_falls_back_on_malformed_input() {
        assert_eq!(contrast_color("not-a-color"), text::PRIMARY);
        assert_eq!(contrast_color(background::OVERLAY), text::PRIMARY);
    }
}
