//! Dashboard layouts
//!
//! Page scaffolding for the admin and driver dashboards: a generic layout
//! with header / sidebar / content slots, plus specializations carrying
//! the user identity, notification count, and driver status summary.

use crate::status::DriverStatus;
use crate::style::{cn, EventHandler};
use serde::{Deserialize, Serialize};
use shared_utils::{format_currency, get_initials};

/// Layout class constants
pub mod classes {
    /// Page container
    pub const CONTAINER: &str = "min-h-screen bg-background";
    /// Header slot
    pub const HEADER: &str = "dashboard-header";
    /// Sidebar slot
    pub const SIDEBAR: &str = "dashboard-sidebar";
    /// Main column
    pub const MAIN: &str = "dashboard-main";
    /// Content wrapper
    pub const CONTENT: &str = "dashboard-content";
}

// =============================================================================
// Dashboard Layout
// =============================================================================

/// Generic dashboard page scaffold
///
/// Slots reference child components by ID; empty slots collapse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    /// Header slot component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Sidebar slot component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<String>,
    /// Additional container classes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl DashboardLayout {
    /// Create an empty layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header slot
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the sidebar slot
    pub fn with_sidebar(mut self, sidebar: impl Into<String>) -> Self {
        self.sidebar = Some(sidebar.into());
        self
    }

    /// Append extra container classes
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Resolve the container class string
    pub fn class(&self) -> String {
        cn(&[classes::CONTAINER, self.class_name.as_deref().unwrap_or("")])
    }
}

// =============================================================================
// Admin Dashboard
// =============================================================================

/// Signed-in user identity shown in the admin header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Avatar URL, initials used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserInfo {
    /// Initials shown when no avatar is set
    pub fn initials(&self) -> String {
        get_initials(&self.name)
    }
}

/// Sidebar navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Entry icon
    pub icon: &'static str,
    /// Entry label
    pub label: &'static str,
}

/// Admin dashboard navigation entries, in display order
pub const ADMIN_NAV: [NavItem; 7] = [
    NavItem { icon: "📊", label: "Overview" },
    NavItem { icon: "🚗", label: "Drivers" },
    NavItem { icon: "👥", label: "Clients" },
    NavItem { icon: "🏢", label: "Companies" },
    NavItem { icon: "📋", label: "Requests" },
    NavItem { icon: "📈", label: "Analytics" },
    NavItem { icon: "⚙️", label: "Settings" },
];

/// Admin dashboard scaffold with user menu and notifications
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboardLayout {
    /// Base layout
    #[serde(default)]
    pub layout: DashboardLayout,
    /// Signed-in user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
    /// Unread notification count
    #[serde(default)]
    pub notifications: u32,
    /// Notification bell handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_notifications: Option<EventHandler>,
}

impl AdminDashboardLayout {
    /// Create an admin dashboard layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signed-in user
    pub fn with_user(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.user = Some(UserInfo {
            name: name.into(),
            email: email.into(),
            avatar: None,
        });
        self
    }

    /// Set the unread notification count
    pub fn with_notifications(mut self, count: u32) -> Self {
        self.notifications = count;
        self
    }

    /// Header title
    pub fn title(&self) -> &'static str {
        "Taxicab Admin Dashboard"
    }

    /// Whether the notification indicator renders
    pub fn has_notifications(&self) -> bool {
        self.notifications > 0
    }
}

// =============================================================================
// Driver Dashboard
// =============================================================================

/// Driver dashboard scaffold with status and earnings summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverDashboardLayout {
    /// Base layout
    #[serde(default)]
    pub layout: DashboardLayout,
    /// Driver display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    /// Current availability
    #[serde(default)]
    pub status: DriverStatus,
    /// Earnings so far today, in US dollars
    #[serde(default)]
    pub earnings: f64,
}

impl DriverDashboardLayout {
    /// Create a driver dashboard layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the driver name
    pub fn with_driver(mut self, name: impl Into<String>) -> Self {
        self.driver_name = Some(name.into());
        self
    }

    /// Set the availability status
    pub fn with_status(mut self, status: DriverStatus) -> Self {
        self.status = status;
        self
    }

    /// Set today's earnings
    pub fn with_earnings(mut self, earnings: f64) -> Self {
        self.earnings = earnings;
        self
    }

    /// Header title
    pub fn title(&self) -> &'static str {
        "Taxicab Driver"
    }

    /// Status indicator dot classes
    pub fn status_dot_class(&self) -> String {
        cn(&["w-3 h-3 rounded-full", self.status.color_class()])
    }

    /// Formatted earnings headline
    pub fn earnings_label(&self) -> String {
        format_currency(self.earnings)
    }
}
