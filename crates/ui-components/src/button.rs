//! Button component
//!
//! Interactive buttons with brand, status, and outline variants. The
//! touch-friendly size keeps ride actions usable on phones mounted in
//! vehicles. Ride-action constructors cover the accept / decline /
//! emergency flows.

use crate::style::{compose, ComponentId, EventHandler, StyleVariant};
use serde::{Deserialize, Serialize};

/// Base classes applied to every button
pub const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";

// =============================================================================
// Variants and Sizes
// =============================================================================

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Primary brand button
    #[default]
    Default,
    /// Taxi yellow call-to-action
    Taxi,
    /// Success action
    Success,
    /// Warning action
    Warning,
    /// Destructive or emergency action
    Error,
    /// Outlined button
    Outline,
    /// Borderless button
    Ghost,
}

impl ButtonVariant {
    /// Parse a variant name, falling back to [`ButtonVariant::Default`]
    pub fn from_name(name: &str) -> Self {
        serde_json::from_str(&format!("\"{name}\"")).unwrap_or_default()
    }
}

impl StyleVariant for ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Taxi => {
                "bg-taxi-yellow-500 text-taxi-black-900 hover:bg-taxi-yellow-600"
            }
            ButtonVariant::Success => "bg-success-500 text-white hover:bg-success-600",
            ButtonVariant::Warning => "bg-warning-500 text-taxi-black-900 hover:bg-warning-600",
            ButtonVariant::Error => "bg-error-500 text-white hover:bg-error-600",
            ButtonVariant::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
        }
    }
}

/// Button sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonSize {
    /// Small button
    Sm,
    /// Default button
    #[default]
    Md,
    /// Large button
    Lg,
    /// Tall touch target for in-vehicle use
    TouchFriendly,
}

impl StyleVariant for ButtonSize {
    fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "h-9 px-3",
            ButtonSize::Md => "h-10 px-4 py-2",
            ButtonSize::Lg => "h-11 px-8",
            ButtonSize::TouchFriendly => "h-12 px-6 text-base",
        }
    }
}

// =============================================================================
// Button Component
// =============================================================================

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Button label
    pub label: String,
    /// Button style variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Button size
    #[serde(default)]
    pub size: ButtonSize,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Whether the button shows a loading state
    #[serde(default)]
    pub loading: bool,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Leading icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Additional classes appended after variant and size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Button {
    /// Create a button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            loading: false,
            on_press: None,
            icon: None,
            class_name: None,
        }
    }

    /// Set the button ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the button variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set loading state
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Set the leading icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Append extra classes
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Whether the button responds to presses
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Resolve the full class string
    pub fn class(&self) -> String {
        compose(
            BUTTON_BASE,
            &self.variant,
            &self.size,
            self.class_name.as_deref().unwrap_or(""),
        )
    }

    // ==========================================================================
    // Ride Action Constructors
    // ==========================================================================

    /// Primary accept action for an incoming ride request
    pub fn accept_ride(handler: impl Into<String>) -> Self {
        Button::new("Accept Ride")
            .with_variant(ButtonVariant::Taxi)
            .with_size(ButtonSize::TouchFriendly)
            .on_press(handler)
    }

    /// Decline action for an incoming ride request
    pub fn decline_ride(handler: impl Into<String>) -> Self {
        Button::new("Decline")
            .with_variant(ButtonVariant::Outline)
            .with_size(ButtonSize::TouchFriendly)
            .on_press(handler)
    }

    /// Emergency action, always full width
    pub fn emergency(handler: impl Into<String>) -> Self {
        Button::new("🚨 Emergency")
            .with_variant(ButtonVariant::Error)
            .with_size(ButtonSize::TouchFriendly)
            .with_class("w-full")
            .on_press(handler)
    }
}
