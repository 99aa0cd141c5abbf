//! Visual component library for the Taxicab ride-hailing platform
//!
//! Components are defined as Rust structs with serializable properties
//! that a frontend renders. Each component provides:
//!
//! - Type-safe props with builder patterns
//! - Variant and size enums resolving to utility class strings
//! - Event handling hooks (string handler identifiers)
//!
//! Appearance resolves through one shared contract: every variant/size
//! enum implements [`style::StyleVariant`], and [`style::compose`] joins
//! base, variant, size, and caller overrides in fixed precedence order.
//!
//! # Available Components
//!
//! - [`Badge`] - Status labels, with driver / ride / payment / priority forms
//! - [`Button`] - Actions, with accept / decline / emergency constructors
//! - [`Card`] - Containers, with [`StatCard`] and [`RideRequestCard`]
//! - [`Input`] - Text fields, with search / location / phone forms
//! - [`DashboardLayout`] - Page scaffolds for admin and driver dashboards
//! - [`DriverStatusCard`] / [`EarningsDisplay`] - Driver home components
//!
//! # Example
//!
//! ```rust
//! use ui_components::{Badge, Button, DriverStatus, RideRequestCard};
//!
//! let badge = Badge::status(DriverStatus::Online);
//! assert!(badge.class().contains("bg-success-500"));
//!
//! let request = RideRequestCard::new("Harare CBD", "Avondale", 12.5, 2.5, 12.0)
//!     .on_accept("accept-ride");
//! assert_eq!(request.fare_label(), "$12.50");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod layout;
pub mod status;
pub mod style;
pub mod taxi;

// Re-export commonly used types
pub use badge::{Badge, BadgeSize, BadgeVariant, BADGE_BASE};
pub use button::{Button, ButtonSize, ButtonVariant, BUTTON_BASE};
pub use card::{Card, CardSize, CardVariant, RideRequestCard, StatCard, Trend, CARD_BASE};
pub use input::{
    Input, InputSize, InputVariant, LocationInput, PhoneInput, SearchInput, INPUT_BASE,
};
pub use layout::{
    AdminDashboardLayout, DashboardLayout, DriverDashboardLayout, NavItem, UserInfo, ADMIN_NAV,
};
pub use status::{
    payment_method_info, status_color_class, DriverStatus, PaymentMethod, Priority, RideStatus,
};
pub use style::{cn, compose, ComponentId, EventHandler, StyleVariant};
pub use taxi::{DailyEarnings, DriverStatusCard, EarningsDisplay, EarningsEntry};
