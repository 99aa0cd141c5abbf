//! Spacing tokens for the Taxicab platform
//!
//! Margins, padding, gaps, and layout dimensions in pixels, on a 4px
//! base step. Semantic groups cover the recurring component, layout,
//! dashboard, form, card, modal, and navigation spacings, plus the
//! taxi-specific distances used by ride and driver surfaces.

/// Base spacing scale in pixels
pub mod scale {
    /// 0px
    pub const NONE: f32 = 0.0;
    /// 1px hairline
    pub const PX: f32 = 1.0;
    /// 2px
    pub const S0_5: f32 = 2.0;
    /// 4px
    pub const S1: f32 = 4.0;
    /// 6px
    pub const S1_5: f32 = 6.0;
    /// 8px
    pub const S2: f32 = 8.0;
    /// 10px
    pub const S2_5: f32 = 10.0;
    /// 12px
    pub const S3: f32 = 12.0;
    /// 14px
    pub const S3_5: f32 = 14.0;
    /// 16px
    pub const S4: f32 = 16.0;
    /// 20px
    pub const S5: f32 = 20.0;
    /// 24px
    pub const S6: f32 = 24.0;
    /// 28px
    pub const S7: f32 = 28.0;
    /// 32px
    pub const S8: f32 = 32.0;
    /// 36px
    pub const S9: f32 = 36.0;
    /// 40px
    pub const S10: f32 = 40.0;
    /// 44px
    pub const S11: f32 = 44.0;
    /// 48px
    pub const S12: f32 = 48.0;
    /// 56px
    pub const S14: f32 = 56.0;
    /// 64px
    pub const S16: f32 = 64.0;
    /// 72px (platform-specific step)
    pub const S18: f32 = 72.0;
    /// 80px
    pub const S20: f32 = 80.0;
    /// 96px
    pub const S24: f32 = 96.0;
    /// 128px
    pub const S32: f32 = 128.0;
    /// 192px
    pub const S48: f32 = 192.0;
    /// 256px
    pub const S64: f32 = 256.0;
    /// 352px (platform-specific step)
    pub const S88: f32 = 352.0;
    /// 384px
    pub const S96: f32 = 384.0;
}

/// Semantic spacing for common use cases
pub mod semantic {
    /// Component internal spacing, extra small (4px)
    pub const COMPONENT_XS: f32 = 4.0;
    /// Component internal spacing, small (8px)
    pub const COMPONENT_SM: f32 = 8.0;
    /// Component internal spacing, medium (12px)
    pub const COMPONENT_MD: f32 = 12.0;
    /// Component internal spacing, large (16px)
    pub const COMPONENT_LG: f32 = 16.0;
    /// Component internal spacing, extra large (24px)
    pub const COMPONENT_XL: f32 = 24.0;

    /// Layout spacing, extra small (8px)
    pub const LAYOUT_XS: f32 = 8.0;
    /// Layout spacing, small (16px)
    pub const LAYOUT_SM: f32 = 16.0;
    /// Layout spacing, medium (24px)
    pub const LAYOUT_MD: f32 = 24.0;
    /// Layout spacing, large (32px)
    pub const LAYOUT_LG: f32 = 32.0;
    /// Layout spacing, extra large (48px)
    pub const LAYOUT_XL: f32 = 48.0;
    /// Layout spacing, 2x large (64px)
    pub const LAYOUT_2XL: f32 = 64.0;

    /// Section spacing, small (32px)
    pub const SECTION_SM: f32 = 32.0;
    /// Section spacing, medium (48px)
    pub const SECTION_MD: f32 = 48.0;
    /// Section spacing, large (64px)
    pub const SECTION_LG: f32 = 64.0;
    /// Section spacing, extra large (96px)
    pub const SECTION_XL: f32 = 96.0;

    /// Container spacing, small (16px)
    pub const CONTAINER_SM: f32 = 16.0;
    /// Container spacing, medium (24px)
    pub const CONTAINER_MD: f32 = 24.0;
    /// Container spacing, large (32px)
    pub const CONTAINER_LG: f32 = 32.0;
    /// Container spacing, extra large (48px)
    pub const CONTAINER_XL: f32 = 48.0;

    /// Get a semantic spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "component-xs" => Some(COMPONENT_XS),
            "component-sm" => Some(COMPONENT_SM),
            "component-md" => Some(COMPONENT_MD),
            "component-lg" => Some(COMPONENT_LG),
            "component-xl" => Some(COMPONENT_XL),
            "layout-xs" => Some(LAYOUT_XS),
            "layout-sm" => Some(LAYOUT_SM),
            "layout-md" => Some(LAYOUT_MD),
            "layout-lg" => Some(LAYOUT_LG),
            "layout-xl" => Some(LAYOUT_XL),
            "layout-2xl" => Some(LAYOUT_2XL),
            "section-sm" => Some(SECTION_SM),
            "section-md" => Some(SECTION_MD),
            "section-lg" => Some(SECTION_LG),
            "section-xl" => Some(SECTION_XL),
            "container-sm" => Some(CONTAINER_SM),
            "container-md" => Some(CONTAINER_MD),
            "container-lg" => Some(CONTAINER_LG),
            "container-xl" => Some(CONTAINER_XL),
            _ => None,
        }
    }
}

/// Touch target sizes (mobile accessibility)
pub mod touch {
    /// Minimum touch target (44px - iOS guideline)
    pub const MIN_TARGET: f32 = 44.0;
    /// Comfortable touch target (48px - Material guideline)
    pub const COMFORTABLE_TARGET: f32 = 48.0;
    /// Large touch target for primary actions (56px)
    pub const LARGE_TARGET: f32 = 56.0;
}

/// Dashboard chrome dimensions
pub mod dashboard {
    /// Expanded sidebar width (256px)
    pub const SIDEBAR_WIDTH: f32 = 256.0;
    /// Collapsed sidebar width (64px)
    pub const SIDEBAR_COLLAPSED: f32 = 64.0;
    /// Desktop header height (64px)
    pub const HEADER_HEIGHT: f32 = 64.0;
    /// Mobile header height (56px)
    pub const MOBILE_HEADER: f32 = 56.0;
    /// Content padding (24px)
    pub const CONTENT_PADDING: f32 = 24.0;
    /// Mobile content padding (16px)
    pub const MOBILE_CONTENT_PADDING: f32 = 16.0;
    /// Gap between dashboard cards (16px)
    pub const CARD_GAP: f32 = 16.0;
    /// Gap between dashboard sections (32px)
    pub const SECTION_GAP: f32 = 32.0;
}

/// Form spacing
pub mod form {
    /// Gap between fields (16px)
    pub const FIELD_GAP: f32 = 16.0;
    /// Gap between field groups (24px)
    pub const GROUP_GAP: f32 = 24.0;
    /// Gap between form sections (32px)
    pub const SECTION_GAP: f32 = 32.0;
    /// Input horizontal padding (12px)
    pub const INPUT_PADDING_X: f32 = 12.0;
    /// Input vertical padding (8px)
    pub const INPUT_PADDING_Y: f32 = 8.0;
    /// Button horizontal padding (16px)
    pub const BUTTON_PADDING_X: f32 = 16.0;
    /// Button vertical padding (8px)
    pub const BUTTON_PADDING_Y: f32 = 8.0;
    /// Large button horizontal padding (24px)
    pub const BUTTON_PADDING_X_LG: f32 = 24.0;
    /// Large button vertical padding (12px)
    pub const BUTTON_PADDING_Y_LG: f32 = 12.0;
}

/// Card spacing
pub mod card {
    /// Small card padding (12px)
    pub const PADDING_SM: f32 = 12.0;
    /// Medium card padding (16px)
    pub const PADDING_MD: f32 = 16.0;
    /// Large card padding (24px)
    pub const PADDING_LG: f32 = 24.0;
    /// Extra large card padding (32px)
    pub const PADDING_XL: f32 = 32.0;
    /// Gap between cards (16px)
    pub const GAP: f32 = 16.0;
    /// Gap inside a card header (8px)
    pub const HEADER_GAP: f32 = 8.0;
    /// Gap inside card content (12px)
    pub const CONTENT_GAP: f32 = 12.0;
    /// Gap inside a card footer (16px)
    pub const FOOTER_GAP: f32 = 16.0;
}

/// Modal and overlay spacing
pub mod modal {
    /// Modal padding (24px)
    pub const PADDING: f32 = 24.0;
    /// Mobile modal padding (16px)
    pub const MOBILE_PADDING: f32 = 16.0;
    /// Gap between modal blocks (16px)
    pub const GAP: f32 = 16.0;
    /// Gap inside a modal header (12px)
    pub const HEADER_GAP: f32 = 12.0;
    /// Gap inside a modal footer (16px)
    pub const FOOTER_GAP: f32 = 16.0;
}

/// Navigation spacing
pub mod navigation {
    /// Nav item horizontal padding (16px)
    pub const ITEM_PADDING_X: f32 = 16.0;
    /// Nav item vertical padding (8px)
    pub const ITEM_PADDING_Y: f32 = 8.0;
    /// Gap between nav items (4px)
    pub const ITEM_GAP: f32 = 4.0;
    /// Gap between nav groups (16px)
    pub const GROUP_GAP: f32 = 16.0;
    /// Mobile nav item padding (12px)
    pub const MOBILE_ITEM_PADDING: f32 = 12.0;
}

/// Taxi-specific spacing
pub mod taxi {
    /// Ride request card padding (16px)
    pub const RIDE_CARD_PADDING: f32 = 16.0;
    /// Gap inside ride request cards (12px)
    pub const RIDE_CARD_GAP: f32 = 12.0;
    /// Gap between ride info rows (8px)
    pub const RIDE_INFO_GAP: f32 = 8.0;
    /// Driver status indicator size (12px)
    pub const STATUS_INDICATOR_SIZE: f32 = 12.0;
    /// Gap beside status indicators (8px)
    pub const STATUS_GAP: f32 = 8.0;
    /// Map control margin (16px)
    pub const MAP_CONTROL_MARGIN: f32 = 16.0;
    /// Map button size (48px)
    pub const MAP_BUTTON_SIZE: f32 = 48.0;
    /// Map floating action button margin (24px)
    pub const MAP_FAB_MARGIN: f32 = 24.0;
    /// Fare display padding (12px)
    pub const FARE_PADDING: f32 = 12.0;
    /// Gap inside fare displays (4px)
    pub const FARE_GAP: f32 = 4.0;
    /// Vehicle card padding (16px)
    pub const VEHICLE_CARD_PADDING: f32 = 16.0;
    /// Gap between vehicle info rows (8px)
    pub const VEHICLE_INFO_GAP: f32 = 8.0;
}

/// Grid system configuration
pub mod grid {
    /// Number of grid columns
    pub const COLUMNS: u32 = 12;

    /// Gutter widths by breakpoint
    pub mod gutter {
        /// Extra small gutter (8px)
        pub const XS: f32 = 8.0;
        /// Small gutter (16px)
        pub const SM: f32 = 16.0;
        /// Medium gutter (24px)
        pub const MD: f32 = 24.0;
        /// Large gutter (32px)
        pub const LG: f32 = 32.0;
    }

    /// Container max widths by breakpoint
    pub mod container {
        /// Small container (640px)
        pub const SM: f32 = 640.0;
        /// Medium container (768px)
        pub const MD: f32 = 768.0;
        /// Large container (1024px)
        pub const LG: f32 = 1024.0;
        /// Extra large container (1280px)
        pub const XL: f32 = 1280.0;
        /// 2x large container (1536px)
        pub const XXL: f32 = 1536.0;
    }
}
