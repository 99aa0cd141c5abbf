//! Cross-cutting design tokens
//!
//! Border radius, box shadows, z-index layers, responsive breakpoints,
//! motion tokens, the opacity scale, and per-component dimension tokens.

use serde::{Deserialize, Serialize};

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius scale in pixels
pub mod radius {
    /// No radius (0px)
    pub const NONE: f32 = 0.0;
    /// Small radius (2px)
    pub const SM: f32 = 2.0;
    /// Base radius (4px)
    pub const BASE: f32 = 4.0;
    /// Medium radius (6px)
    pub const MD: f32 = 6.0;
    /// Large radius (8px)
    pub const LG: f32 = 8.0;
    /// Extra large radius (12px)
    pub const XL: f32 = 12.0;
    /// 2x large radius (16px)
    pub const XXL: f32 = 16.0;
    /// 3x large radius (24px)
    pub const XXXL: f32 = 24.0;
    /// Full/round radius (9999px)
    pub const FULL: f32 = 9999.0;
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Box shadow presets as CSS shadow strings
pub mod shadows {
    /// No shadow
    pub const NONE: &str = "none";
    /// Small shadow
    pub const SM: &str = "0 1px 2px 0 rgba(0, 0, 0, 0.05)";
    /// Base shadow
    pub const BASE: &str = "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)";
    /// Medium shadow
    pub const MD: &str = "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)";
    /// Large shadow
    pub const LG: &str = "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)";
    /// Extra large shadow
    pub const XL: &str =
        "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)";
    /// 2x large shadow
    pub const XXL: &str = "0 25px 50px -12px rgba(0, 0, 0, 0.25)";
    /// Inner shadow
    pub const INNER: &str = "inset 0 2px 4px 0 rgba(0, 0, 0, 0.06)";
    /// Taxi yellow glow for brand emphasis
    pub const TAXI_GLOW: &str = "0 4px 14px 0 rgba(245, 158, 11, 0.15)";
    /// Large taxi yellow glow
    pub const TAXI_GLOW_LG: &str =
        "0 10px 25px -3px rgba(245, 158, 11, 0.2), 0 4px 6px -2px rgba(245, 158, 11, 0.1)";
}

// =============================================================================
// Z-Index Tokens
// =============================================================================

/// Z-index layers
pub mod z_index {
    /// Hidden below the page
    pub const HIDE: i32 = -1;
    /// Default layer
    pub const BASE: i32 = 0;
    /// Docked elements
    pub const DOCKED: i32 = 10;
    /// Dropdown menus
    pub const DROPDOWN: i32 = 1000;
    /// Sticky headers
    pub const STICKY: i32 = 1100;
    /// Banners
    pub const BANNER: i32 = 1200;
    /// Overlays
    pub const OVERLAY: i32 = 1300;
    /// Modal dialogs
    pub const MODAL: i32 = 1400;
    /// Popovers
    pub const POPOVER: i32 = 1500;
    /// Skip links
    pub const SKIP_LINK: i32 = 1600;
    /// Toast notifications
    pub const TOAST: i32 = 1700;
    /// Tooltips
    pub const TOOLTIP: i32 = 1800;
}

// =============================================================================
// Breakpoint Tokens
// =============================================================================

/// Responsive breakpoint classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// < 640px
    Xs,
    /// >= 640px
    Sm,
    /// >= 768px
    Md,
    /// >= 1024px
    Lg,
    /// >= 1280px
    Xl,
    /// >= 1536px
    Xxl,
}

/// Breakpoint widths in pixels
pub mod breakpoints {
    /// Small breakpoint (640px)
    pub const SM: u32 = 640;
    /// Medium breakpoint (768px)
    pub const MD: u32 = 768;
    /// Large breakpoint (1024px)
    pub const LG: u32 = 1024;
    /// Extra large breakpoint (1280px)
    pub const XL: u32 = 1280;
    /// 2x large breakpoint (1536px)
    pub const XXL: u32 = 1536;

    /// Classify a viewport width
    pub fn current(width: u32) -> super::Breakpoint {
        use super::Breakpoint::*;
        if width >= XXL {
            Xxl
        } else if width >= XL {
            Xl
        } else if width >= LG {
            Lg
        } else if width >= MD {
            Md
        } else if width >= SM {
            Sm
        } else {
            Xs
        }
    }

    /// Phone-sized viewport (< 768px)
    pub fn is_mobile(width: u32) -> bool {
        width < MD
    }

    /// Tablet-sized viewport (768px to 1023px)
    pub fn is_tablet(width: u32) -> bool {
        width >= MD && width < LG
    }

    /// Desktop-sized viewport (>= 1024px)
    pub fn is_desktop(width: u32) -> bool {
        width >= LG
    }
}

// =============================================================================
// Motion Tokens
// =============================================================================

/// Transition durations in milliseconds
pub mod duration {
    /// 75ms
    pub const D75: u32 = 75;
    /// 100ms
    pub const D100: u32 = 100;
    /// 150ms
    pub const D150: u32 = 150;
    /// 200ms
    pub const D200: u32 = 200;
    /// 300ms
    pub const D300: u32 = 300;
    /// 500ms
    pub const D500: u32 = 500;
    /// 700ms
    pub const D700: u32 = 700;
    /// 1000ms
    pub const D1000: u32 = 1000;
}

/// Transition timing functions
pub mod easing {
    /// Linear
    pub const LINEAR: &str = "linear";
    /// Ease in
    pub const IN: &str = "cubic-bezier(0.4, 0, 1, 1)";
    /// Ease out
    pub const OUT: &str = "cubic-bezier(0, 0, 0.2, 1)";
    /// Ease in-out
    pub const IN_OUT: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
}

/// Animation presets as CSS animation shorthand
pub mod animations {
    /// Continuous spinner
    pub const SPIN: &str = "spin 1s linear infinite";
    /// Attention ping
    pub const PING: &str = "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite";
    /// Soft pulse
    pub const PULSE: &str = "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite";
    /// Bounce
    pub const BOUNCE: &str = "bounce 1s infinite";
    /// Fade in on mount
    pub const FADE_IN: &str = "fadeIn 0.2s ease-out";
    /// Slide in on mount
    pub const SLIDE_IN: &str = "slideIn 0.3s ease-out";
    /// Scale in on mount
    pub const SCALE_IN: &str = "scaleIn 0.2s ease-out";
    /// Loading shimmer
    pub const SHIMMER: &str = "shimmer 1.5s infinite";
}

/// Opacity scale
pub mod opacity {
    /// Fully transparent
    pub const O0: f32 = 0.0;
    /// 10%
    pub const O10: f32 = 0.1;
    /// 25%
    pub const O25: f32 = 0.25;
    /// 50%
    pub const O50: f32 = 0.5;
    /// Disabled-control opacity (60%)
    pub const O60: f32 = 0.6;
    /// 75%
    pub const O75: f32 = 0.75;
    /// 90%
    pub const O90: f32 = 0.9;
    /// Fully opaque
    pub const O100: f32 = 1.0;
}

// =============================================================================
// Per-Component Tokens
// =============================================================================

/// Component-specific dimension tokens
pub mod components {
    /// Button dimensions
    pub mod button {
        /// Small button height (32px)
        pub const SM_HEIGHT: f32 = 32.0;
        /// Medium button height (40px)
        pub const MD_HEIGHT: f32 = 40.0;
        /// Large button height (48px)
        pub const LG_HEIGHT: f32 = 48.0;
        /// Border radius (6px)
        pub const RADIUS: f32 = super::super::radius::MD;
    }

    /// Input dimensions
    pub mod input {
        /// Small input height (32px)
        pub const SM_HEIGHT: f32 = 32.0;
        /// Medium input height (40px)
        pub const MD_HEIGHT: f32 = 40.0;
        /// Large input height (48px)
        pub const LG_HEIGHT: f32 = 48.0;
        /// Border radius (6px)
        pub const RADIUS: f32 = super::super::radius::MD;
    }

    /// Card dimensions
    pub mod card {
        /// Border radius (8px)
        pub const RADIUS: f32 = super::super::radius::LG;
        /// Default shadow
        pub const SHADOW: &str = super::super::shadows::BASE;
    }

    /// Modal dimensions
    pub mod modal {
        /// Border radius (12px)
        pub const RADIUS: f32 = super::super::radius::XL;
        /// Modal shadow
        pub const SHADOW: &str = super::super::shadows::XL;
        /// Backdrop color
        pub const BACKDROP: &str = "rgba(0, 0, 0, 0.75)";
    }
}
