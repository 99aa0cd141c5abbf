//! Domain status enums shared across components
//!
//! Driver availability, ride lifecycle, payment methods, and request
//! priority, each carrying its display label, icon, and color classes.
//! Unknown names resolve to the documented default so stale data from the
//! backend degrades to a neutral presentation instead of failing.

use design_tokens::colors::payment;
use serde::{Deserialize, Serialize};

// =============================================================================
// Driver Status
// =============================================================================

/// Driver availability state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    /// Accepting ride requests
    Online,
    /// Not accepting requests
    #[default]
    Offline,
    /// Temporarily unavailable
    Busy,
    /// Emergency assistance requested
    Emergency,
}

impl DriverStatus {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            DriverStatus::Online => "Online",
            DriverStatus::Offline => "Offline",
            DriverStatus::Busy => "Busy",
            DriverStatus::Emergency => "Emergency",
        }
    }

    /// Status icon
    pub fn icon(&self) -> &'static str {
        match self {
            DriverStatus::Online => "🟢",
            DriverStatus::Offline => "⚫",
            DriverStatus::Busy => "🟡",
            DriverStatus::Emergency => "🚨",
        }
    }

    /// Background class for status indicator dots
    pub fn color_class(&self) -> &'static str {
        match self {
            DriverStatus::Online => "bg-success-500",
            DriverStatus::Offline => "bg-neutral-400",
            DriverStatus::Busy => "bg-warning-500",
            DriverStatus::Emergency => "bg-error-500",
        }
    }

    /// Parse a status name, falling back to [`DriverStatus::Offline`]
    pub fn from_name(name: &str) -> Self {
        match name {
            "online" => DriverStatus::Online,
            "busy" => DriverStatus::Busy,
            "emergency" => DriverStatus::Emergency,
            _ => DriverStatus::Offline,
        }
    }
}

// =============================================================================
// Ride Status
// =============================================================================

/// Ride lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RideStatus {
    /// Rider has requested a ride
    #[default]
    Requested,
    /// Driver has accepted
    Accepted,
    /// Ride underway
    InProgress,
    /// Ride finished
    Completed,
    /// Ride cancelled
    Cancelled,
}

impl RideStatus {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RideStatus::Requested => "Requested",
            RideStatus::Accepted => "Accepted",
            RideStatus::InProgress => "In Progress",
            RideStatus::Completed => "Completed",
            RideStatus::Cancelled => "Cancelled",
        }
    }

    /// Background class for status indicator dots
    pub fn color_class(&self) -> &'static str {
        match self {
            RideStatus::Requested => "bg-info-500",
            RideStatus::Accepted => "bg-success-500",
            RideStatus::InProgress => "bg-warning-500",
            RideStatus::Completed => "bg-success-600",
            RideStatus::Cancelled => "bg-error-500",
        }
    }

    /// Parse a status name, falling back to [`RideStatus::Requested`]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ride-accepted" | "accepted" => RideStatus::Accepted,
            "ride-in-progress" | "in-progress" => RideStatus::InProgress,
            "ride-completed" | "completed" => RideStatus::Completed,
            "ride-cancelled" | "cancelled" => RideStatus::Cancelled,
            _ => RideStatus::Requested,
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Accepted payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on arrival
    #[default]
    Cash,
    /// Bank card
    Card,
    /// EcoCash mobile money
    Ecocash,
    /// OneMoney mobile money
    Onemoney,
}

impl PaymentMethod {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Ecocash => "EcoCash",
            PaymentMethod::Onemoney => "OneMoney",
        }
    }

    /// Method icon
    pub fn icon(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "💵",
            PaymentMethod::Card => "💳",
            PaymentMethod::Ecocash | PaymentMethod::Onemoney => "📱",
        }
    }

    /// Text color class for inline method labels
    pub fn color_class(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "text-success-600",
            PaymentMethod::Card => "text-info-600",
            PaymentMethod::Ecocash => "text-pink-600",
            PaymentMethod::Onemoney => "text-purple-600",
        }
    }

    /// Brand color token for this method
    pub fn token_color(&self) -> Option<design_tokens::Color> {
        payment::get(self.name())
    }

    /// Wire name for this method
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Ecocash => "ecocash",
            PaymentMethod::Onemoney => "onemoney",
        }
    }

    /// Parse a method name, falling back to [`PaymentMethod::Cash`]
    pub fn from_name(name: &str) -> Self {
        match name {
            "card" => PaymentMethod::Card,
            "ecocash" => PaymentMethod::Ecocash,
            "onemoney" => PaymentMethod::Onemoney,
            _ => PaymentMethod::Cash,
        }
    }
}

// =============================================================================
// Priority
// =============================================================================

/// Request priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,
    /// Normal priority
    #[default]
    Normal,
    /// High priority
    High,
    /// Urgent, animated to draw attention
    Urgent,
}

impl Priority {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

// =============================================================================
// Name-Based Lookups
// =============================================================================

/// Background class for a named status, driver or ride
///
/// Unknown names resolve to the neutral offline color.
pub fn status_color_class(status: &str) -> &'static str {
    match status {
        "online" => "bg-success-500",
        "offline" => "bg-neutral-400",
        "busy" => "bg-warning-500",
        "emergency" => "bg-error-500",
        "ride-requested" => "bg-info-500",
        "ride-accepted" => "bg-success-500",
        "ride-completed" => "bg-success-600",
        "ride-cancelled" => "bg-error-500",
        _ => "bg-neutral-400",
    }
}

/// Icon and text color class for a named payment method
///
/// Unknown names resolve to a generic money presentation.
pub fn payment_method_info(method: &str) -> (&'static str, &'static str) {
    match method {
        "cash" | "card" | "ecocash" | "onemoney" => {
            let m = PaymentMethod::from_name(method);
            (m.icon(), m.color_class())
        }
        _ => ("💰", "text-neutral-600"),
    }
}
