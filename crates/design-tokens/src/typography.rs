//! Typography tokens for the Taxicab platform
//!
//! Font families, the size scale with paired line heights, weight and
//! tracking constants, and the semantic text styles used across both
//! dashboards. Text styles resolve through [`TextVariant::style`], with
//! responsive overrides for smaller breakpoints.

use serde::{Deserialize, Serialize};

// =============================================================================
// Font Families
// =============================================================================

/// Font family roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Body font (Inter)
    #[default]
    Primary,
    /// Heading font (Poppins)
    Heading,
    /// Monospace font (JetBrains Mono)
    Mono,
    /// Local-language font with wide Unicode coverage for Shona/Ndebele
    Local,
}

impl FontFamily {
    /// The ordered font stack for this role
    pub fn stack(&self) -> &'static [&'static str] {
        match self {
            Self::Primary => &[
                "Inter",
                "system-ui",
                "-apple-system",
                "BlinkMacSystemFont",
                "Segoe UI",
                "sans-serif",
            ],
            Self::Heading => &[
                "Poppins",
                "Inter",
                "system-ui",
                "-apple-system",
                "BlinkMacSystemFont",
                "Segoe UI",
                "sans-serif",
            ],
            Self::Mono => &[
                "JetBrains Mono",
                "Monaco",
                "Cascadia Code",
                "Segoe UI Mono",
                "Roboto Mono",
                "monospace",
            ],
            Self::Local => &["Noto Sans", "Inter", "system-ui", "sans-serif"],
        }
    }

    /// Render the stack as a CSS font-family value
    pub fn to_css(&self) -> String {
        self.stack()
            .iter()
            .map(|font| {
                if font.contains(' ') {
                    format!("\"{font}\"")
                } else {
                    (*font).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// =============================================================================
// Font Size Scale
// =============================================================================

/// A font size paired with its line height and letter spacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSize {
    /// Size in pixels
    pub size: f32,
    /// Line height in pixels
    pub line_height: f32,
    /// Letter spacing in em
    pub letter_spacing: f32,
}

/// Font size scale
pub mod font_size {
    use super::FontSize;

    /// Caption text (12px)
    pub const XS: FontSize = FontSize { size: 12.0, line_height: 16.0, letter_spacing: 0.025 };
    /// Small text (14px)
    pub const SM: FontSize = FontSize { size: 14.0, line_height: 20.0, letter_spacing: 0.025 };
    /// Body text (16px)
    pub const BASE: FontSize = FontSize { size: 16.0, line_height: 24.0, letter_spacing: 0.0 };
    /// Large body text (18px)
    pub const LG: FontSize = FontSize { size: 18.0, line_height: 28.0, letter_spacing: 0.0 };
    /// Small heading (20px)
    pub const XL: FontSize = FontSize { size: 20.0, line_height: 28.0, letter_spacing: -0.025 };
    /// Heading (24px)
    pub const XXL: FontSize = FontSize { size: 24.0, line_height: 32.0, letter_spacing: -0.025 };
    /// Large heading (32px)
    pub const XXXL: FontSize = FontSize { size: 32.0, line_height: 40.0, letter_spacing: -0.025 };
    /// Display (40px)
    pub const XL4: FontSize = FontSize { size: 40.0, line_height: 48.0, letter_spacing: -0.025 };
    /// Large display (48px)
    pub const XL5: FontSize = FontSize { size: 48.0, line_height: 56.0, letter_spacing: -0.025 };
    /// Hero display (64px)
    pub const XL6: FontSize = FontSize { size: 64.0, line_height: 72.0, letter_spacing: -0.025 };
}

/// Font weight values
pub mod font_weight {
    /// Light (300)
    pub const LIGHT: u16 = 300;
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
    /// Extra bold (800)
    pub const EXTRA_BOLD: u16 = 800;
}

/// Line height multipliers
pub mod line_height {
    /// None (1.0)
    pub const NONE: f32 = 1.0;
    /// Tight (1.25)
    pub const TIGHT: f32 = 1.25;
    /// Snug (1.375)
    pub const SNUG: f32 = 1.375;
    /// Normal (1.5)
    pub const NORMAL: f32 = 1.5;
    /// Relaxed (1.625), preferred for longer local-language text
    pub const RELAXED: f32 = 1.625;
    /// Loose (2.0)
    pub const LOOSE: f32 = 2.0;
}

/// Letter spacing (tracking) in em units
pub mod tracking {
    /// Tighter (-0.05em)
    pub const TIGHTER: f32 = -0.05;
    /// Tight (-0.025em)
    pub const TIGHT: f32 = -0.025;
    /// Normal
    pub const NORMAL: f32 = 0.0;
    /// Wide (0.025em)
    pub const WIDE: f32 = 0.025;
    /// Wider (0.05em)
    pub const WIDER: f32 = 0.05;
    /// Widest (0.1em)
    pub const WIDEST: f32 = 0.1;
}

// =============================================================================
// Text Styles
// =============================================================================

/// Text transform applied by a style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    /// No transform
    #[default]
    None,
    /// UPPERCASE
    Uppercase,
}

/// A resolved semantic text style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font family role
    pub family: FontFamily,
    /// Font size with line height and tracking
    pub font_size: FontSize,
    /// Font weight
    pub font_weight: u16,
    /// Line height multiplier overriding the size's paired value
    pub line_height: f32,
    /// Letter spacing in em overriding the size's paired value
    pub letter_spacing: f32,
    /// Text transform
    pub transform: TextTransform,
}

impl TextStyle {
    fn new(family: FontFamily, font_size: FontSize, font_weight: u16) -> Self {
        Self {
            family,
            font_size,
            font_weight,
            line_height: line_height::NORMAL,
            letter_spacing: tracking::NORMAL,
            transform: TextTransform::None,
        }
    }

    fn with_line_height(mut self, lh: f32) -> Self {
        self.line_height = lh;
        self
    }

    fn with_tracking(mut self, ls: f32) -> Self {
        self.letter_spacing = ls;
        self
    }

    fn uppercase(mut self) -> Self {
        self.transform = TextTransform::Uppercase;
        self
    }

    /// Line height in pixels for this style
    pub fn line_height_px(&self) -> f32 {
        self.font_size.size * self.line_height
    }
}

/// Breakpoint classes for responsive text styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeBreakpoint {
    /// Phone widths
    Mobile,
    /// Tablet widths
    Tablet,
    /// Desktop widths
    Desktop,
}

/// Semantic text style identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextVariant {
    /// Largest display text
    DisplayLarge,
    /// Medium display text
    DisplayMedium,
    /// Small display text
    DisplaySmall,
    /// Page heading
    Heading1,
    /// Section heading
    Heading2,
    /// Subsection heading
    Heading3,
    /// Large body copy
    BodyLarge,
    /// Default body copy
    #[default]
    BodyMedium,
    /// Small body copy
    BodySmall,
    /// Large button label
    ButtonLarge,
    /// Default button label
    ButtonMedium,
    /// Small button label
    ButtonSmall,
    /// Form label
    Label,
    /// Caption text
    Caption,
    /// Code/monospace text
    Code,
    /// Prominent fare figure
    FareDisplay,
    /// Uppercase status text
    StatusText,
    /// Pickup/destination line
    LocationText,
}

impl TextVariant {
    /// Resolve this variant to a concrete style.
    ///
    /// Every variant has a mapping; there is no fallback arm.
    pub fn style(&self) -> TextStyle {
        use font_size as fs;
        use font_weight as fw;
        use FontFamily::{Heading, Mono, Primary};

        match self {
            Self::DisplayLarge => TextStyle::new(Heading, fs::XL5, fw::BOLD)
                .with_line_height(line_height::TIGHT)
                .with_tracking(tracking::TIGHT),
            Self::DisplayMedium => TextStyle::new(Heading, fs::XL4, fw::BOLD)
                .with_line_height(line_height::TIGHT)
                .with_tracking(tracking::TIGHT),
            Self::DisplaySmall => TextStyle::new(Heading, fs::XXXL, fw::SEMI_BOLD)
                .with_line_height(line_height::TIGHT)
                .with_tracking(tracking::TIGHT),
            Self::Heading1 => TextStyle::new(Heading, fs::XXL, fw::SEMI_BOLD)
                .with_line_height(line_height::TIGHT)
                .with_tracking(tracking::TIGHT),
            Self::Heading2 => TextStyle::new(Heading, fs::XL, fw::SEMI_BOLD)
                .with_line_height(line_height::SNUG)
                .with_tracking(tracking::TIGHT),
            Self::Heading3 => TextStyle::new(Heading, fs::LG, fw::MEDIUM)
                .with_line_height(line_height::SNUG),
            Self::BodyLarge => TextStyle::new(Primary, fs::LG, fw::NORMAL)
                .with_line_height(line_height::RELAXED),
            Self::BodyMedium => TextStyle::new(Primary, fs::BASE, fw::NORMAL),
            Self::BodySmall => TextStyle::new(Primary, fs::SM, fw::NORMAL)
                .with_tracking(tracking::WIDE),
            Self::ButtonLarge => TextStyle::new(Primary, fs::BASE, fw::MEDIUM)
                .with_line_height(line_height::NONE)
                .with_tracking(tracking::WIDE),
            Self::ButtonMedium => TextStyle::new(Primary, fs::SM, fw::MEDIUM)
                .with_line_height(line_height::NONE)
                .with_tracking(tracking::WIDE),
            Self::ButtonSmall => TextStyle::new(Primary, fs::XS, fw::MEDIUM)
                .with_line_height(line_height::NONE)
                .with_tracking(tracking::WIDER),
            Self::Label => TextStyle::new(Primary, fs::SM, fw::MEDIUM)
                .with_tracking(tracking::WIDE),
            Self::Caption => TextStyle::new(Primary, fs::XS, fw::NORMAL)
                .with_tracking(tracking::WIDE),
            Self::Code => TextStyle::new(Mono, fs::SM, fw::NORMAL),
            Self::FareDisplay => TextStyle::new(Heading, fs::XXXL, fw::BOLD)
                .with_line_height(line_height::NONE)
                .with_tracking(tracking::TIGHT),
            Self::StatusText => TextStyle::new(Primary, fs::SM, fw::SEMI_BOLD)
                .with_line_height(line_height::NONE)
                .with_tracking(tracking::WIDER)
                .uppercase(),
            Self::LocationText => TextStyle::new(Primary, fs::BASE, fw::MEDIUM)
                .with_line_height(line_height::SNUG),
        }
    }

    /// Resolve this variant for a breakpoint, stepping display and
    /// heading sizes down on smaller screens.
    pub fn responsive_style(&self, breakpoint: TypeBreakpoint) -> TextStyle {
        use font_size as fs;

        let mut style = self.style();
        match breakpoint {
            TypeBreakpoint::Mobile => {
                style.font_size = match self {
                    Self::DisplayLarge => fs::XXXL,
                    Self::DisplayMedium => fs::XXL,
                    Self::DisplaySmall => fs::XL,
                    Self::Heading1 => fs::XL,
                    Self::Heading2 => fs::LG,
                    Self::Heading3 => fs::BASE,
                    _ => style.font_size,
                };
            }
            TypeBreakpoint::Tablet => {
                style.font_size = match self {
                    Self::DisplayLarge => fs::XL4,
                    Self::DisplayMedium => fs::XXXL,
                    Self::DisplaySmall => fs::XXL,
                    _ => style.font_size,
                };
            }
            TypeBreakpoint::Desktop => {}
        }
        style
    }

    /// All variants, for coverage checks and registry dumps
    pub fn all() -> &'static [TextVariant] {
        &[
            Self::DisplayLarge,
            Self::DisplayMedium,
            Self::DisplaySmall,
            Self::Heading1,
            Self::Heading2,
            Self::Heading3,
            Self::BodyLarge,
            Self::BodyMedium,
            Self::BodySmall,
            Self::ButtonLarge,
            Self::ButtonMedium,
            Self::ButtonSmall,
            Self::Label,
            Self::Caption,
            Self::Code,
            Self::FareDisplay,
            Self::StatusText,
            Self::LocationText,
        ]
    }
}
