//! Card component
//!
//! Content containers with taxi-branded accent variants, plus the StatCard
//! and RideRequestCard specializations used on the dashboards.

use crate::status::PaymentMethod;
use crate::style::{compose, ComponentId, EventHandler, StyleVariant};
use serde::{Deserialize, Serialize};
use shared_utils::{format_currency, format_distance, format_duration};

/// Base classes applied to every card
pub const CARD_BASE: &str = "rounded-lg border bg-card text-card-foreground shadow-sm";

/// Section class constants for card internals
pub mod section {
    /// Card header block
    pub const HEADER: &str = "flex flex-col space-y-1.5 p-6";
    /// Card title text
    pub const TITLE: &str = "text-2xl font-semibold leading-none tracking-tight";
    /// Card description text
    pub const DESCRIPTION: &str = "text-sm text-muted-foreground";
    /// Card content block
    pub const CONTENT: &str = "p-6 pt-0";
    /// Card footer row
    pub const FOOTER: &str = "flex items-center p-6 pt-0";
}

// =============================================================================
// Variants and Sizes
// =============================================================================

/// Card style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardVariant {
    /// Plain bordered card
    #[default]
    Default,
    /// Card with hover elevation
    Elevated,
    /// Heavier border
    Outlined,
    /// Muted fill
    Filled,
    /// Yellow left-accent card
    TaxiPrimary,
    /// Success left-accent card
    TaxiSuccess,
    /// Warning left-accent card
    TaxiWarning,
    /// Error left-accent card
    TaxiError,
    /// Incoming ride request surface
    RideRequest,
    /// Driver status surface
    DriverStatus,
    /// Earnings summary surface
    Earnings,
}

impl CardVariant {
    /// Parse a variant name, falling back to [`CardVariant::Default`]
    pub fn from_name(name: &str) -> Self {
        serde_json::from_str(&format!("\"{name}\"")).unwrap_or_default()
    }
}

impl StyleVariant for CardVariant {
    fn classes(&self) -> &'static str {
        match self {
            CardVariant::Default => "border-border",
            CardVariant::Elevated => "shadow-md hover:shadow-lg transition-shadow duration-200",
            CardVariant::Outlined => "border-2 border-border",
            CardVariant::Filled => "bg-muted/50",
            CardVariant::TaxiPrimary => {
                "border-l-4 border-l-taxi-yellow-500 bg-white shadow-sm hover:shadow-md transition-shadow duration-200"
            }
            CardVariant::TaxiSuccess => "border-l-4 border-l-success-500 bg-success-50",
            CardVariant::TaxiWarning => "border-l-4 border-l-warning-500 bg-warning-50",
            CardVariant::TaxiError => "border-l-4 border-l-error-500 bg-error-50",
            CardVariant::RideRequest => {
                "border border-taxi-yellow-200 bg-taxi-yellow-50 hover:bg-taxi-yellow-100 transition-colors duration-200"
            }
            CardVariant::DriverStatus => "bg-white border border-gray-200 shadow-sm",
            CardVariant::Earnings => {
                "bg-gradient-to-br from-taxi-yellow-50 to-taxi-yellow-100 border border-taxi-yellow-200"
            }
        }
    }
}

/// Card padding sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardSize {
    /// Default padding
    #[default]
    Default,
    /// Small padding
    Sm,
    /// Large padding
    Lg,
    /// Extra large padding
    Xl,
    /// Minimal padding for dense lists
    Compact,
    /// Extra touch room on phones
    MobileFriendly,
}

impl StyleVariant for CardSize {
    fn classes(&self) -> &'static str {
        match self {
            CardSize::Default => "p-6",
            CardSize::Sm => "p-4",
            CardSize::Lg => "p-8",
            CardSize::Xl => "p-10",
            CardSize::Compact => "p-3",
            CardSize::MobileFriendly => "p-4 min-h-[80px]",
        }
    }
}

// =============================================================================
// Card Component
// =============================================================================

/// Card component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Card style variant
    #[serde(default)]
    pub variant: CardVariant,
    /// Card padding size
    #[serde(default)]
    pub size: CardSize,
    /// Additional classes appended after variant and size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Card {
    /// Create a default card
    pub fn new() -> Self {
        Self {
            id: None,
            variant: CardVariant::default(),
            size: CardSize::default(),
            class_name: None,
        }
    }

    /// Set the card ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the card variant
    pub fn with_variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the padding size
    pub fn with_size(mut self, size: CardSize) -> Self {
        self.size = size;
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
            CARD_BASE,
            &self.variant,
            &self.size,
            self.class_name.as_deref().unwrap_or(""),
        )
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Stat Card
// =============================================================================

/// Direction and magnitude of a period-over-period change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Percentage change magnitude
    pub value: f64,
    /// Whether the change is an improvement
    pub is_positive: bool,
}

impl Trend {
    /// Text color class for the trend indicator
    pub fn color_class(&self) -> &'static str {
        if self.is_positive {
            "text-success-600"
        } else {
            "text-error-600"
        }
    }

    /// Arrow glyph for the trend direction
    pub fn arrow(&self) -> &'static str {
        if self.is_positive {
            "↗"
        } else {
            "↘"
        }
    }

    /// Display label, e.g. `↗ 12%`
    pub fn label(&self) -> String {
        format!("{} {}%", self.arrow(), self.value.abs())
    }
}

/// Headline metric card used on admin dashboards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    /// Metric title, rendered uppercase
    pub title: String,
    /// Metric value
    pub value: String,
    /// Supporting line under the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Trailing icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Period-over-period change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl StatCard {
    /// Create a stat card with a title and value
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            subtitle: None,
            icon: None,
            trend: None,
        }
    }

    /// Set the supporting subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the trailing icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the trend indicator
    pub fn with_trend(mut self, value: f64, is_positive: bool) -> Self {
        self.trend = Some(Trend { value, is_positive });
        self
    }

    /// Backing card for this stat
    pub fn card(&self) -> Card {
        Card::new()
            .with_variant(CardVariant::TaxiPrimary)
            .with_class("relative overflow-hidden")
    }
}

// =============================================================================
// Ride Request Card
// =============================================================================

/// Incoming ride request shown to a driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideRequestCard {
    /// Pickup location description
    pub pickup: String,
    /// Destination description
    pub destination: String,
    /// Offered fare in US dollars
    pub fare: f64,
    /// Trip distance in kilometres
    pub distance_km: f64,
    /// Estimated trip duration in minutes
    pub duration_minutes: f64,
    /// How the rider will pay
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// Accept handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_accept: Option<EventHandler>,
    /// Decline handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_decline: Option<EventHandler>,
    /// View route handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_view_route: Option<EventHandler>,
}

impl RideRequestCard {
    /// Create a ride request card
    pub fn new(
        pickup: impl Into<String>,
        destination: impl Into<String>,
        fare: f64,
        distance_km: f64,
        duration_minutes: f64,
    ) -> Self {
        Self {
            pickup: pickup.into(),
            destination: destination.into(),
            fare,
            distance_km,
            duration_minutes,
            payment_method: PaymentMethod::default(),
            on_accept: None,
            on_decline: None,
            on_view_route: None,
        }
    }

    /// Set the payment method
    pub fn with_payment(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    /// Set the accept handler
    pub fn on_accept(mut self, handler: impl Into<String>) -> Self {
        self.on_accept = Some(handler.into());
        self
    }

    /// Set the decline handler
    pub fn on_decline(mut self, handler: impl Into<String>) -> Self {
        self.on_decline = Some(handler.into());
        self
    }

    /// Set the view route handler
    pub fn on_view_route(mut self, handler: impl Into<String>) -> Self {
        self.on_view_route = Some(handler.into());
        self
    }

    /// Formatted fare headline, e.g. `$12.50`
    pub fn fare_label(&self) -> String {
        format_currency(self.fare)
    }

    /// Trip summary line, e.g. `2.5km • 12min`
    pub fn summary(&self) -> String {
        format!(
            "{} • {}",
            format_distance(self.distance_km),
            format_duration(self.duration_minutes)
        )
    }

    /// Whether the footer action row should render
    pub fn has_actions(&self) -> bool {
        self.on_accept.is_some() || self.on_decline.is_some() || self.on_view_route.is_some()
    }

    /// Backing card for this request
    pub fn card(&self) -> Card {
        Card::new()
            .with_variant(CardVariant::RideRequest)
            .with_class("w-full")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_default_class() {
        let card = Card::new();
        let class = card.class();
        assert!(class.starts_with(CARD_BASE));
        assert!(class.contains("border-border"));
        assert!(class.contains("p-6"));
    }

    #[test]
    fn test_taxi_variant_left_accent() {
        let card = Card::new().with_variant(CardVariant::TaxiPrimary);
        assert!(card.class().contains("border-l-taxi-yellow-500"));
    }

    #[test]
    fn test_earnings_variant_gradient() {
        let card = Card::new().with_variant(CardVariant::Earnings);
        assert!(card.class().contains("bg-gradient-to-br"));
    }

    #[test]
    fn test_mobile_friendly_size() {
        let card = Card::new().with_size(CardSize::MobileFriendly);
        assert!(card.class().contains("min-h-[80px]"));
    }

    #[test]
    fn test_variant_from_name_falls_back() {
        assert_eq!(CardVariant::from_name("ride-request"), CardVariant::RideRequest);
        assert_eq!(CardVariant::from_name("bogus"), CardVariant::Default);
    }

    #[test]
    fn test_section_classes() {
        assert!(section::HEADER.contains("p-6"));
        assert!(section::TITLE.contains("font-semibold"));
        assert!(section::FOOTER.starts_with("flex items-center"));
    }

    #[test]
    fn test_trend_presentation() {
        let up = Trend {
            value: 12.0,
            is_positive: true,
        };
        assert_eq!(up.label(), "↗ 12%");
        assert_eq!(up.color_class(), "text-success-600");

        let down = Trend {
            value: -8.0,
            is_positive: false,
        };
        assert_eq!(down.label(), "↘ 8%");
        assert_eq!(down.color_class(), "text-error-600");
    }

    #[test]
    fn test_stat_card_builder() {
        let stat = StatCard::new("Active Drivers", "42")
            .with_subtitle("12 on a ride")
            .with_trend(5.0, true);
        assert_eq!(stat.title, "Active Drivers");
        assert_eq!(stat.trend.unwrap().value, 5.0);
        assert!(stat.card().class().contains("border-l-taxi-yellow-500"));
        assert!(stat.card().class().contains("overflow-hidden"));
    }

    #[test]
    fn test_ride_request_card_labels() {
        let request = RideRequestCard::new("Harare CBD", "Avondale", 12.5, 2.5, 12.0)
            .with_payment(PaymentMethod::Ecocash);
        assert_eq!(request.fare_label(), "$12.50");
        assert_eq!(request.summary(), "2.5km • 12min");
        assert_eq!(request.payment_method.label(), "EcoCash");
    }

    #[test]
    fn test_ride_request_short_hop_in_metres() {
        let request = RideRequestCard::new("A", "B", 4.0, 0.8, 4.0);
        assert_eq!(request.summary(), "800m • 4min");
    }

    #[test]
    fn test_ride_request_actions_gate_footer() {
        let request = RideRequestCard::new("A", "B", 10.0, 3.0, 9.0);
        assert!(!request.has_actions());
        let with_accept = request.on_accept("accept-ride");
        assert!(with_accept.has_actions());
    }

    #[test]
    fn test_ride_request_backing_card() {
        let request = RideRequestCard::new("A", "B", 10.0, 3.0, 9.0);
        let class = request.card().class();
        assert!(class.contains("bg-taxi-yellow-50"));
        assert!(class.ends_with("w-full"));
    }
}
