//! Input component
//!
//! Text inputs with validation-aware variants. Setting an error message
//! forces the error variant regardless of the configured one. Search,
//! location, and phone specializations cover the booking flows.

use crate::style::{compose, ComponentId, EventHandler, StyleVariant};
use serde::{Deserialize, Serialize};
use shared_utils::{generate_id, validate_zimbabwe_phone};

/// Base classes applied to every input
pub const INPUT_BASE: &str = "flex w-full rounded-md border border-input bg-background px-3 py-2 text-sm ring-offset-background file:border-0 file:bg-transparent file:text-sm file:font-medium placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

/// Label classes for the optional field label
pub const LABEL_CLASS: &str =
    "text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70";

// =============================================================================
// Variants and Sizes
// =============================================================================

/// Input style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputVariant {
    /// Neutral border
    #[default]
    Default,
    /// Invalid value
    Error,
    /// Validated value
    Success,
    /// Taxi yellow focus ring
    TaxiPrimary,
}

impl InputVariant {
    /// Parse a variant name, falling back to [`InputVariant::Default`]
    pub fn from_name(name: &str) -> Self {
        serde_json::from_str(&format!("\"{name}\"")).unwrap_or_default()
    }
}

impl StyleVariant for InputVariant {
    fn classes(&self) -> &'static str {
        match self {
            InputVariant::Default => "border-input",
            InputVariant::Error => "border-error-500 focus-visible:ring-error-500",
            InputVariant::Success => "border-success-500 focus-visible:ring-success-500",
            InputVariant::TaxiPrimary => {
                "border-taxi-yellow-300 focus-visible:ring-taxi-yellow-500 focus-visible:border-taxi-yellow-500"
            }
        }
    }
}

/// Input sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputSize {
    /// Default height
    #[default]
    Default,
    /// Compact input
    Sm,
    /// Large input
    Lg,
    /// Extra large input
    Xl,
    /// Tall touch target for phones
    TouchFriendly,
}

impl StyleVariant for InputSize {
    fn classes(&self) -> &'static str {
        match self {
            InputSize::Default => "h-10",
            InputSize::Sm => "h-9 px-2 text-xs",
            InputSize::Lg => "h-11 px-4",
            InputSize::Xl => "h-12 px-4 text-base",
            InputSize::TouchFriendly => "h-12 px-4 text-base",
        }
    }
}

// =============================================================================
// Input Component
// =============================================================================

/// Input component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Unique component ID, generated when not supplied
    pub id: ComponentId,
    /// Input type attribute (`text`, `search`, `tel`, ...)
    pub input_type: String,
    /// Field label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Input style variant
    #[serde(default)]
    pub variant: InputVariant,
    /// Input size
    #[serde(default)]
    pub size: InputSize,
    /// Validation error message; forces the error variant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Helper text shown when there is no error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    /// Leading icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_icon: Option<String>,
    /// Trailing icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_icon: Option<String>,
    /// Whether the input is disabled
    #[serde(default)]
    pub disabled: bool,
    /// On change event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
    /// Additional classes appended after variant and size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Input {
    /// Create a text input with a generated ID
    pub fn new() -> Self {
        Self {
            id: generate_id("input"),
            input_type: "text".to_string(),
            label: None,
            placeholder: None,
            value: None,
            variant: InputVariant::default(),
            size: InputSize::default(),
            error: None,
            helper_text: None,
            left_icon: None,
            right_icon: None,
            disabled: false,
            on_change: None,
            class_name: None,
        }
    }

    /// Set the input ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the input type attribute
    pub fn with_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    /// Set the field label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the input variant
    pub fn with_variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the input size
    pub fn with_size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Set a validation error message
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set helper text
    pub fn with_helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set the leading icon
    pub fn with_left_icon(mut self, icon: impl Into<String>) -> Self {
        self.left_icon = Some(icon.into());
        self
    }

    /// Set the trailing icon
    pub fn with_right_icon(mut self, icon: impl Into<String>) -> Self {
        self.right_icon = Some(icon.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set on change handler
    pub fn on_change(mut self, handler: impl Into<String>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// Append extra classes
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Variant after validation state is applied; an error always wins
    pub fn effective_variant(&self) -> InputVariant {
        if self.error.is_some() {
            InputVariant::Error
        } else {
            self.variant
        }
    }

    /// Resolve the full class string, including icon padding
    pub fn class(&self) -> String {
        let mut overrides = String::new();
        if self.left_icon.is_some() {
            overrides.push_str("pl-10 ");
        }
        if self.right_icon.is_some() {
            overrides.push_str("pr-10 ");
        }
        if let Some(class) = &self.class_name {
            overrides.push_str(class);
        }
        compose(INPUT_BASE, &self.effective_variant(), &self.size, &overrides)
    }

    /// Message shown under the input, error taking precedence
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().or(self.helper_text.as_deref())
    }

    /// Classes for the message line
    pub fn message_class(&self) -> &'static str {
        if self.error.is_some() {
            "text-sm text-error-600"
        } else {
            "text-sm text-muted-foreground"
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Specialized Inputs
// =============================================================================

/// Search input with a clear affordance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchInput {
    /// Underlying input
    pub input: Input,
    /// Whether the clear button shows when there is a value
    #[serde(default)]
    pub show_clear_button: bool,
    /// On search event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_search: Option<EventHandler>,
    /// On clear event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_clear: Option<EventHandler>,
}

impl SearchInput {
    /// Create a search input
    pub fn new() -> Self {
        Self {
            input: Input::new()
                .with_type("search")
                .with_left_icon("search")
                .with_class("pr-8"),
            show_clear_button: true,
            on_search: None,
            on_clear: None,
        }
    }

    /// Set the search handler
    pub fn on_search(mut self, handler: impl Into<String>) -> Self {
        self.on_search = Some(handler.into());
        self
    }

    /// Set the clear handler
    pub fn on_clear(mut self, handler: impl Into<String>) -> Self {
        self.on_clear = Some(handler.into());
        self
    }

    /// Whether the clear button should render right now
    pub fn clear_visible(&self) -> bool {
        self.show_clear_button && self.input.value.as_deref().is_some_and(|v| !v.is_empty())
    }
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Location input with a current-location affordance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInput {
    /// Underlying input
    pub input: Input,
    /// Whether the use-current-location button shows
    #[serde(default)]
    pub current_location: bool,
    /// On location select event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_location_select: Option<EventHandler>,
}

impl LocationInput {
    /// Create a location input
    pub fn new() -> Self {
        Self {
            input: Input::new()
                .with_variant(InputVariant::TaxiPrimary)
                .with_left_icon("location")
                .with_placeholder("Enter location..."),
            current_location: false,
            on_location_select: None,
        }
    }

    /// Show the use-current-location button
    pub fn with_current_location(mut self) -> Self {
        self.current_location = true;
        self
    }

    /// Set the location select handler
    pub fn on_location_select(mut self, handler: impl Into<String>) -> Self {
        self.on_location_select = Some(handler.into());
        self
    }
}

impl Default for LocationInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Phone input with a country code prefix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneInput {
    /// Underlying input
    pub input: Input,
    /// Dialing prefix shown before the number
    pub country_code: String,
}

impl PhoneInput {
    /// Create a phone input defaulting to the Zimbabwe country code
    pub fn new() -> Self {
        Self {
            input: Input::new()
                .with_type("tel")
                .with_placeholder("77 123 4567")
                .with_class("pl-16"),
            country_code: "+263".to_string(),
        }
    }

    /// Set the country code prefix
    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = code.into();
        self
    }

    /// Validate the current value against Zimbabwe numbering
    pub fn is_valid(&self) -> bool {
        let Some(value) = self.input.value.as_deref() else {
            return false;
        };
        validate_zimbabwe_phone(&format!("{}{}", self.country_code, value))
    }
}

impl Default for PhoneInput {
    fn default() -> Self {
        Self::new()
    }
}
