//! Shared utilities for the Taxicab ride-hailing platform
//!
//! Pure helpers used across the design system and application crates:
//! display formatting, input validation, date/time rendering, rate
//! limiting for bursty event streams, and identifier generation.
//!
//! # Modules
//!
//! - [`format`] - Currency, distance, duration, fares, and text helpers
//! - [`validate`] - Email and Zimbabwe phone validation
//! - [`datetime`] - Time, date, and relative-time rendering
//! - [`timing`] - Debounce and throttle wrappers
//! - [`id`] - Random identifier generation
//!
//! # Example
//!
//! ```rust
//! use shared_utils::{calculate_fare, format_currency, validate_zimbabwe_phone};
//!
//! let fare = calculate_fare(10.0, 20.0);
//! assert_eq!(format_currency(fare), "$40.00");
//! assert!(validate_zimbabwe_phone("+263 71 234 5678"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod datetime;
pub mod format;
pub mod id;
pub mod timing;
pub mod validate;

// Re-export commonly used helpers
pub use datetime::{format_date, format_time, time_ago, time_ago_from};
pub use format::{
    calculate_fare, capitalize_words, format_currency, format_currency_in, format_distance,
    format_duration, get_initials, truncate_text, FareRates,
};
pub use id::generate_id;
pub use timing::{Debouncer, Throttler};
pub use validate::{validate_email, validate_zimbabwe_phone};
