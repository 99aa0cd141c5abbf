//! Driver-facing taxi components
//!
//! The driver status card with its availability toggles and the earnings
//! summaries shown on the driver dashboard.

use crate::badge::Badge;
use crate::button::{Button, ButtonSize, ButtonVariant};
use crate::card::{Card, CardVariant, Trend};
use crate::status::DriverStatus;
use crate::style::EventHandler;
use serde::{Deserialize, Serialize};
use shared_utils::{format_currency, format_currency_in};

// =============================================================================
// Driver Status Card
// =============================================================================

/// Driver home card: greeting, availability controls, and daily numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStatusCard {
    /// Driver display name
    pub driver_name: String,
    /// Current availability
    #[serde(default)]
    pub status: DriverStatus,
    /// Earnings today, in US dollars
    #[serde(default)]
    pub earnings_today: f64,
    /// Earnings this week, in US dollars
    #[serde(default)]
    pub earnings_week: f64,
    /// Rides completed today
    #[serde(default)]
    pub rides_today: u32,
    /// Rides completed this week
    #[serde(default)]
    pub rides_week: u32,
    /// Status change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_status_change: Option<EventHandler>,
    /// Emergency handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_emergency: Option<EventHandler>,
}

impl DriverStatusCard {
    /// Create a status card for the named driver
    pub fn new(driver_name: impl Into<String>) -> Self {
        Self {
            driver_name: driver_name.into(),
            status: DriverStatus::default(),
            earnings_today: 0.0,
            earnings_week: 0.0,
            rides_today: 0,
            rides_week: 0,
            on_status_change: None,
            on_emergency: None,
        }
    }

    /// Set the availability status
    pub fn with_status(mut self, status: DriverStatus) -> Self {
        self.status = status;
        self
    }

    /// Set today's and this week's earnings
    pub fn with_earnings(mut self, today: f64, week: f64) -> Self {
        self.earnings_today = today;
        self.earnings_week = week;
        self
    }

    /// Set today's and this week's completed ride counts
    pub fn with_rides(mut self, today: u32, week: u32) -> Self {
        self.rides_today = today;
        self.rides_week = week;
        self
    }

    /// Set the status change handler
    pub fn on_status_change(mut self, handler: impl Into<String>) -> Self {
        self.on_status_change = Some(handler.into());
        self
    }

    /// Set the emergency handler
    pub fn on_emergency(mut self, handler: impl Into<String>) -> Self {
        self.on_emergency = Some(handler.into());
        self
    }

    // ==========================================================================
    // Status Transitions
    // ==========================================================================

    /// Toggle between online and offline
    ///
    /// Any non-online state (offline, busy, emergency) goes online.
    pub fn toggle_online(&mut self) -> DriverStatus {
        self.status = if self.status == DriverStatus::Online {
            DriverStatus::Offline
        } else {
            DriverStatus::Online
        };
        self.status
    }

    /// Toggle between busy and available (online)
    pub fn toggle_busy(&mut self) -> DriverStatus {
        self.status = if self.status == DriverStatus::Busy {
            DriverStatus::Online
        } else {
            DriverStatus::Busy
        };
        self.status
    }

    /// Enter emergency mode
    pub fn trigger_emergency(&mut self) -> DriverStatus {
        self.status = DriverStatus::Emergency;
        self.status
    }

    // ==========================================================================
    // Presentation
    // ==========================================================================

    /// Header greeting
    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.driver_name)
    }

    /// Formatted earnings for today
    pub fn earnings_today_label(&self) -> String {
        format_currency(self.earnings_today)
    }

    /// Formatted earnings for this week
    pub fn earnings_week_label(&self) -> String {
        format_currency(self.earnings_week)
    }

    /// Guidance message for the current status
    pub fn status_message(&self) -> &'static str {
        match self.status {
            DriverStatus::Online => "✅ You're online and ready to receive ride requests",
            DriverStatus::Offline => "⏸️ You're offline. Go online to start receiving requests",
            DriverStatus::Busy => "⏳ You're marked as busy. New requests are paused",
            DriverStatus::Emergency => "🚨 Emergency mode activated. Help is on the way",
        }
    }

    /// Status badge for the header
    pub fn badge(&self) -> Badge {
        Badge::status(self.status)
    }

    /// Backing card
    pub fn card(&self) -> Card {
        Card::new()
            .with_variant(CardVariant::DriverStatus)
            .with_class("w-full")
    }

    /// Online/offline toggle button for the current status
    pub fn online_button(&self) -> Button {
        let (variant, label) = if self.status == DriverStatus::Online {
            (ButtonVariant::Success, "🟢 Go Offline")
        } else {
            (ButtonVariant::Taxi, "🔴 Go Online")
        };
        Button::new(label)
            .with_variant(variant)
            .with_size(ButtonSize::TouchFriendly)
            .with_class("flex-1")
    }

    /// Busy toggle button, only meaningful while online or busy
    pub fn busy_button(&self) -> Button {
        let (variant, label) = if self.status == DriverStatus::Busy {
            (ButtonVariant::Outline, "Available")
        } else {
            (ButtonVariant::Warning, "Busy")
        };
        Button::new(label)
            .with_variant(variant)
            .with_size(ButtonSize::TouchFriendly)
            .with_class("flex-1")
    }

    /// Emergency button
    pub fn emergency_button(&self) -> Button {
        Button::emergency(self.on_emergency.clone().unwrap_or_default())
    }
}

// =============================================================================
// Earnings Display
// =============================================================================

/// One period's earnings with an optional trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsEntry {
    /// Period label, e.g. "Today" or "This Week"
    pub period: String,
    /// Amount earned in the period
    pub amount: f64,
    /// Change against the previous period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<Trend>,
}

impl EarningsEntry {
    /// Create an entry without a trend
    pub fn new(period: impl Into<String>, amount: f64) -> Self {
        Self {
            period: period.into(),
            amount,
            change: None,
        }
    }

    /// Set the period-over-period change
    pub fn with_change(mut self, value: f64, is_positive: bool) -> Self {
        self.change = Some(Trend { value, is_positive });
        self
    }

    /// Trend line, e.g. `↗ 12% from last today`
    pub fn change_label(&self) -> Option<String> {
        self.change.map(|trend| {
            format!("{} from last {}", trend.label(), self.period.to_lowercase())
        })
    }
}

/// Multi-period earnings summary card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsDisplay {
    /// Card title
    pub title: String,
    /// Period entries, in display order
    pub entries: Vec<EarningsEntry>,
    /// ISO 4217 currency code
    pub currency: String,
    /// Whether trend lines render
    #[serde(default)]
    pub show_trends: bool,
}

impl EarningsDisplay {
    /// Create an earnings display in US dollars
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
            currency: "USD".to_string(),
            show_trends: true,
        }
    }

    /// Set the currency code
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Append a period entry
    pub fn push(mut self, entry: EarningsEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Sum across all periods
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Formatted total
    pub fn total_label(&self) -> String {
        format_currency_in(self.total(), &self.currency)
    }

    /// Formatted amount for one entry
    pub fn entry_label(&self, entry: &EarningsEntry) -> String {
        format_currency_in(entry.amount, &self.currency)
    }

    /// Backing card
    pub fn card(&self) -> Card {
        Card::new()
            .with_variant(CardVariant::Earnings)
            .with_class("w-full")
    }
}

/// Today's performance summary with per-ride and per-hour averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEarnings {
    /// Total earned today
    pub amount: f64,
    /// Rides completed today
    pub rides_completed: u32,
    /// Hours worked today
    pub hours_worked: f64,
    /// ISO 4217 currency code
    pub currency: String,
}

impl DailyEarnings {
    /// Create a daily summary in US dollars
    pub fn new(amount: f64, rides_completed: u32, hours_worked: f64) -> Self {
        Self {
            amount,
            rides_completed,
            hours_worked,
            currency: "USD".to_string(),
        }
    }

    /// Average earned per completed ride, zero when no rides
    pub fn average_per_ride(&self) -> f64 {
        if self.rides_completed > 0 {
            self.amount / self.rides_completed as f64
        } else {
            0.0
        }
    }

    /// Average earned per hour worked, zero when no hours
    pub fn average_per_hour(&self) -> f64 {
        if self.hours_worked > 0.0 {
            self.amount / self.hours_worked
        } else {
            0.0
        }
    }

    /// Formatted total
    pub fn amount_label(&self) -> String {
        format_currency_in(self.amount, &self.currency)
    }

    /// Formatted per-ride average
    pub fn per_ride_label(&self) -> String {
        format_currency_in(self.average_per_ride(), &self.currency)
    }

    /// Formatted per-hour average
    pub fn per_hour_label(&self) -> String {
        format_currency_in(self.average_per_hour(), &self.currency)
    }

    /// Hours worked line, e.g. `7.5h`
    pub fn hours_label(&self) -> String {
        format!("{:.1}h", self.hours_worked)
    }
}
