//! Badge component
//!
//! Compact status labels. Beyond the generic variants, badges cover driver
//! status, ride lifecycle, payment methods, and request priority through
//! dedicated factories.

use crate::status::{DriverStatus, PaymentMethod, Priority, RideStatus};
use crate::style::{compose, ComponentId, EventHandler, StyleVariant};
use serde::{Deserialize, Serialize};

/// Base classes applied to every badge
pub const BADGE_BASE: &str = "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2";

// =============================================================================
// Variants and Sizes
// =============================================================================

/// Badge style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeVariant {
    /// Primary brand badge
    #[default]
    Default,
    /// Secondary surface badge
    Secondary,
    /// Destructive action badge
    Destructive,
    /// Outline-only badge
    Outline,
    /// Taxi yellow solid badge
    TaxiPrimary,
    /// Taxi yellow outline badge
    TaxiOutline,
    /// Success badge
    Success,
    /// Warning badge
    Warning,
    /// Error badge
    Error,
    /// Informational badge
    Info,
    /// Driver online
    Online,
    /// Driver offline
    Offline,
    /// Driver busy
    Busy,
    /// Driver emergency, pulses
    Emergency,
    /// Ride requested
    RideRequested,
    /// Ride accepted
    RideAccepted,
    /// Ride in progress
    RideInProgress,
    /// Ride completed
    RideCompleted,
    /// Ride cancelled
    RideCancelled,
    /// Cash payment
    Cash,
    /// Card payment
    Card,
    /// EcoCash payment
    Ecocash,
    /// OneMoney payment
    Onemoney,
}

impl BadgeVariant {
    /// Parse a variant name, falling back to [`BadgeVariant::Default`]
    pub fn from_name(name: &str) -> Self {
        serde_json::from_str(&format!("\"{name}\"")).unwrap_or_default()
    }
}

impl StyleVariant for BadgeVariant {
    fn classes(&self) -> &'static str {
        match self {
            BadgeVariant::Default => {
                "border-transparent bg-primary text-primary-foreground hover:bg-primary/80"
            }
            BadgeVariant::Secondary => {
                "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
            BadgeVariant::Destructive => {
                "border-transparent bg-destructive text-destructive-foreground hover:bg-destructive/80"
            }
            BadgeVariant::Outline => "text-foreground",
            BadgeVariant::TaxiPrimary => {
                "border-transparent bg-taxi-yellow-500 text-taxi-black-900 hover:bg-taxi-yellow-600"
            }
            BadgeVariant::TaxiOutline => {
                "border-taxi-yellow-500 text-taxi-yellow-600 bg-transparent"
            }
            BadgeVariant::Success => "border-transparent bg-success-500 text-white",
            BadgeVariant::Warning => "border-transparent bg-warning-500 text-taxi-black-900",
            BadgeVariant::Error => "border-transparent bg-error-500 text-white",
            BadgeVariant::Info => "border-transparent bg-info-500 text-white",
            BadgeVariant::Online => "border-transparent bg-success-500 text-white",
            BadgeVariant::Offline => "border-transparent bg-neutral-400 text-white",
            BadgeVariant::Busy => "border-transparent bg-warning-500 text-taxi-black-900",
            BadgeVariant::Emergency => {
                "border-transparent bg-error-500 text-white animate-pulse"
            }
            BadgeVariant::RideRequested => "border-transparent bg-info-500 text-white",
            BadgeVariant::RideAccepted => "border-transparent bg-success-500 text-white",
            BadgeVariant::RideInProgress => {
                "border-transparent bg-warning-500 text-taxi-black-900"
            }
            BadgeVariant::RideCompleted => "border-transparent bg-success-600 text-white",
            BadgeVariant::RideCancelled => "border-transparent bg-error-500 text-white",
            BadgeVariant::Cash => {
                "border-transparent bg-success-100 text-success-800 border-success-200"
            }
            BadgeVariant::Card => "border-transparent bg-info-100 text-info-800 border-info-200",
            BadgeVariant::Ecocash => {
                "border-transparent bg-pink-100 text-pink-800 border-pink-200"
            }
            BadgeVariant::Onemoney => {
                "border-transparent bg-purple-100 text-purple-800 border-purple-200"
            }
        }
    }
}

/// Badge sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeSize {
    /// Default size
    #[default]
    Default,
    /// Small badge
    Sm,
    /// Large badge
    Lg,
    /// Extra large badge
    Xl,
}

impl StyleVariant for BadgeSize {
    fn classes(&self) -> &'static str {
        match self {
            BadgeSize::Default => "px-2.5 py-0.5 text-xs",
            BadgeSize::Sm => "px-2 py-0.5 text-xs",
            BadgeSize::Lg => "px-3 py-1 text-sm",
            BadgeSize::Xl => "px-4 py-1.5 text-base",
        }
    }
}

// =============================================================================
// Badge Component
// =============================================================================

/// Badge component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Badge text content
    pub text: String,
    /// Badge style variant
    #[serde(default)]
    pub variant: BadgeVariant,
    /// Badge size
    #[serde(default)]
    pub size: BadgeSize,
    /// Leading icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the badge shows a remove affordance
    #[serde(default)]
    pub removable: bool,
    /// On remove event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_remove: Option<EventHandler>,
    /// Additional classes appended after variant and size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Badge {
    /// Create a badge with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            variant: BadgeVariant::default(),
            size: BadgeSize::default(),
            icon: None,
            removable: false,
            on_remove: None,
            class_name: None,
        }
    }

    /// Set the badge ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the badge variant
    pub fn with_variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the badge size
    pub fn with_size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    /// Set the leading icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Make the badge removable with the given handler
    pub fn removable(mut self, handler: impl Into<String>) -> Self {
        self.removable = true;
        self.on_remove = Some(handler.into());
        self
    }

    /// Append extra classes
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Resolve the full class string
    pub fn class(&self) -> String {
        compose(
            BADGE_BASE,
            &self.variant,
            &self.size,
            self.class_name.as_deref().unwrap_or(""),
        )
    }

    // ==========================================================================
    // Specialized Factories
    // ==========================================================================

    /// Badge for a driver status, with icon and label
    pub fn status(status: DriverStatus) -> Self {
        let variant = match status {
            DriverStatus::Online => BadgeVariant::Online,
            DriverStatus::Offline => BadgeVariant::Offline,
            DriverStatus::Busy => BadgeVariant::Busy,
            DriverStatus::Emergency => BadgeVariant::Emergency,
        };
        Badge::new(status.label())
            .with_variant(variant)
            .with_icon(status.icon())
    }

    /// Badge for a ride lifecycle status
    pub fn ride_status(status: RideStatus) -> Self {
        let variant = match status {
            RideStatus::Requested => BadgeVariant::RideRequested,
            RideStatus::Accepted => BadgeVariant::RideAccepted,
            RideStatus::InProgress => BadgeVariant::RideInProgress,
            RideStatus::Completed => BadgeVariant::RideCompleted,
            RideStatus::Cancelled => BadgeVariant::RideCancelled,
        };
        Badge::new(status.label()).with_variant(variant)
    }

    /// Badge for a payment method, with icon and label
    pub fn payment(method: PaymentMethod) -> Self {
        let variant = match method {
            PaymentMethod::Cash => BadgeVariant::Cash,
            PaymentMethod::Card => BadgeVariant::Card,
            PaymentMethod::Ecocash => BadgeVariant::Ecocash,
            PaymentMethod::Onemoney => BadgeVariant::Onemoney,
        };
        Badge::new(method.label())
            .with_variant(variant)
            .with_icon(method.icon())
    }

    /// Badge for a request priority; urgent badges pulse
    pub fn priority(priority: Priority) -> Self {
        let variant = match priority {
            Priority::Low => BadgeVariant::Secondary,
            Priority::Normal => BadgeVariant::Outline,
            Priority::High => BadgeVariant::Warning,
            Priority::Urgent => BadgeVariant::Error,
        };
        let badge = Badge::new(priority.label()).with_variant(variant);
        if priority == Priority::Urgent {
            badge.with_class("animate-pulse")
        } else {
            badge
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_default_class() {
        let badge = Badge::new("New");
        let class = badge.class();
        assert!(class.starts_with("inline-flex items-center rounded-full"));
        assert!(class.contains("bg-primary"));
        assert!(class.contains("text-xs"));
    }

    #[test]
    fn test_badge_variant_classes() {
        let badge = Badge::new("Taxi").with_variant(BadgeVariant::TaxiPrimary);
        assert!(badge.class().contains("bg-taxi-yellow-500"));
        assert!(badge.class().contains("text-taxi-black-900"));
    }

    #[test]
    fn test_badge_size_classes() {
        let badge = Badge::new("Big").with_size(BadgeSize::Xl);
        assert!(badge.class().contains("px-4 py-1.5 text-base"));
    }

    #[test]
    fn test_badge_override_appends_last() {
        let badge = Badge::new("x").with_class("w-full");
        assert!(badge.class().ends_with("w-full"));
    }

    #[test]
    fn test_variant_from_name_falls_back_to_default() {
        assert_eq!(BadgeVariant::from_name("taxi-primary"), BadgeVariant::TaxiPrimary);
        assert_eq!(BadgeVariant::from_name("ride-in-progress"), BadgeVariant::RideInProgress);
        assert_eq!(BadgeVariant::from_name("sparkly"), BadgeVariant::Default);
    }

    #[test]
    fn test_status_badge_factory() {
        let badge = Badge::status(DriverStatus::Online);
        assert_eq!(badge.text, "Online");
        assert_eq!(badge.icon.as_deref(), Some("🟢"));
        assert!(badge.class().contains("bg-success-500"));
    }

    #[test]
    fn test_emergency_badge_pulses() {
        let badge = Badge::status(DriverStatus::Emergency);
        assert!(badge.class().contains("animate-pulse"));
    }

    #[test]
    fn test_ride_status_badge_factory() {
        let badge = Badge::ride_status(RideStatus::InProgress);
        assert_eq!(badge.text, "In Progress");
        assert!(badge.class().contains("bg-warning-500"));
        assert!(badge.icon.is_none());
    }

    #[test]
    fn test_payment_badge_factory() {
        let badge = Badge::payment(PaymentMethod::Ecocash);
        assert_eq!(badge.text, "EcoCash");
        assert_eq!(badge.icon.as_deref(), Some("📱"));
        assert!(badge.class().contains("bg-pink-100"));
    }

    #[test]
    fn test_priority_badge_factory() {
        let low = Badge::priority(Priority::Low);
        assert!(low.class().contains("bg-secondary"));

        let urgent = Badge::priority(Priority::Urgent);
        assert!(urgent.class().contains("bg-error-500"));
        assert!(urgent.class().contains("animate-pulse"));
    }

    #[test]
    fn test_badge_serialization_skips_empty_fields() {
        let badge = Badge::new("New");
        let json = serde_json::to_string(&badge).unwrap();
        assert!(!json.contains("icon"));
        assert!(!json.contains("on_remove"));
        assert!(json.contains("\"variant\":\"default\""));
    }
}
