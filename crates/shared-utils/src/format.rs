//! Display formatting for money, distances, durations, and names
//!
//! All formatters return owned strings ready for rendering. Money values
//! are rounded to two decimal places with halves rounding away from zero.

// =============================================================================
// Currency
// =============================================================================

/// Symbol for an ISO 4217 currency code, if we render it symbolically
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

/// Insert thousands separators into a non-negative integer
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount in US dollars (e.g., `1234.5` becomes `$1,234.50`)
pub fn format_currency(amount: f64) -> String {
    format_currency_in(amount, "USD")
}

/// Format an amount in the given currency
///
/// Known currencies render with their symbol (`$`, `€`, `£`); anything else
/// falls back to the code as a prefix (e.g., `ZWL 120.00`).
pub fn format_currency_in(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    // Round to whole cents, halves away from zero
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    let sign = if negative { "-" } else { "" };
    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{whole}.{frac:02}"),
        None => format!("{sign}{currency} {whole}.{frac:02}"),
    }
}

// =============================================================================
// Distance and Duration
// =============================================================================

/// Format a distance in kilometres for display
///
/// Sub-kilometre distances render in whole metres (`750m`), everything
/// else with one decimal (`2.5km`).
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{}m", (distance_km * 1000.0).round() as i64)
    } else {
        format!("{distance_km:.1}km")
    }
}

/// Format a duration in minutes for display
///
/// Sub-hour durations render as `45min`, longer ones as `1h 30min`.
pub fn format_duration(duration_minutes: f64) -> String {
    if duration_minutes < 60.0 {
        format!("{}min", duration_minutes.round() as i64)
    } else {
        let hours = (duration_minutes / 60.0).floor() as i64;
        let minutes = (duration_minutes % 60.0).round() as i64;
        format!("{hours}h {minutes}min")
    }
}

// =============================================================================
// Fare Calculation
// =============================================================================

/// Tariff rates for fare estimation
///
/// Serializable so operators can ship tariff updates as plain JSON.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FareRates {
    /// Flat fare charged per ride
    pub base_fare: f64,
    /// Rate per kilometre travelled
    pub rate_per_km: f64,
    /// Rate per minute of ride time
    pub rate_per_minute: f64,
}

impl Default for FareRates {
    fn default() -> Self {
        Self {
            base_fare: 5.0,
            rate_per_km: 2.5,
            rate_per_minute: 0.5,
        }
    }
}

impl FareRates {
    /// Estimate the fare for a ride of the given distance and duration
    pub fn fare(&self, distance_km: f64, duration_minutes: f64) -> f64 {
        self.base_fare + distance_km * self.rate_per_km + duration_minutes * self.rate_per_minute
    }
}

/// Estimate a fare using the default tariff
pub fn calculate_fare(distance_km: f64, duration_minutes: f64) -> f64 {
    FareRates::default().fare(distance_km, duration_minutes)
}

// =============================================================================
// Text Helpers
// =============================================================================

/// Derive up to two uppercase initials from a name
pub fn get_initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Truncate text to `max_length` characters, ending with `...` when cut
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let keep = max_length.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Uppercase the first letter of each word
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !ch.is_alphanumeric();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Currency Tests
    // ==========================================================================

    #[test]
    fn test_format_currency_usd() {
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.0), "$5.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_currency_other_currencies() {
        assert_eq!(format_currency_in(1000.0, "EUR"), "€1,000.00");
        assert_eq!(format_currency_in(12.5, "GBP"), "£12.50");
        assert_eq!(format_currency_in(120.0, "ZWL"), "ZWL 120.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-42.5), "-$42.50");
    }

    #[test]
    fn test_format_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(2.345), "$2.35");
        assert_eq!(format_currency(-2.345), "-$2.35");
        assert_eq!(format_currency(2.344), "$2.34");
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(123.45), "$123.45");
        assert_eq!(format_currency(1234567.89), "$1,234,567.89");
    }

    // ==========================================================================
    // Distance and Duration Tests
    // ==========================================================================

    #[test]
    fn test_format_distance_metres() {
        assert_eq!(format_distance(0.5), "500m");
        assert_eq!(format_distance(0.75), "750m");
        assert_eq!(format_distance(0.0), "0m");
    }

    #[test]
    fn test_format_distance_kilometres() {
        assert_eq!(format_distance(1.0), "1.0km");
        assert_eq!(format_distance(2.5), "2.5km");
        assert_eq!(format_distance(12.34), "12.3km");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(5.0), "5min");
        assert_eq!(format_duration(45.4), "45min");
        assert_eq!(format_duration(59.0), "59min");
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(60.0), "1h 0min");
        assert_eq!(format_duration(90.0), "1h 30min");
        assert_eq!(format_duration(135.0), "2h 15min");
    }

    // ==========================================================================
    // Fare Tests
    // ==========================================================================

    #[test]
    fn test_calculate_fare_default_tariff() {
        // 5.0 base + 10km * 2.5 + 20min * 0.5
        assert_eq!(calculate_fare(10.0, 20.0), 40.0);
        assert_eq!(calculate_fare(0.0, 0.0), 5.0);
    }

    #[test]
    fn test_calculate_fare_custom_tariff() {
        let night = FareRates {
            base_fare: 8.0,
            rate_per_km: 3.0,
            rate_per_minute: 0.75,
        };
        assert_eq!(night.fare(4.0, 10.0), 8.0 + 12.0 + 7.5);
    }

    #[test]
    fn test_fare_rates_deserialization() {
        let json = r#"{"base-fare": 8.0, "rate-per-km": 3.0, "rate-per-minute": 0.75}"#;
        let rates: FareRates = serde_json::from_str(json).unwrap();
        assert_eq!(rates.base_fare, 8.0);
        assert_eq!(rates.fare(2.0, 4.0), 8.0 + 6.0 + 3.0);
    }

    #[test]
    fn test_fare_scales_with_distance() {
        let short = calculate_fare(2.0, 10.0);
        let long = calculate_fare(20.0, 10.0);
        assert!(long > short);
    }

    // ==========================================================================
    // Text Helper Tests
    // ==========================================================================

    #[test]
    fn test_get_initials() {
        assert_eq!(get_initials("Tendai Moyo"), "TM");
        assert_eq!(get_initials("grace"), "G");
        assert_eq!(get_initials("Anna Maria Chikore"), "AM");
        assert_eq!(get_initials(""), "");
    }

    #[test]
    fn test_get_initials_collapses_extra_spaces() {
        assert_eq!(get_initials("  Tendai   Moyo  "), "TM");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly ten", 11), "exactly ten");
        assert_eq!(truncate_text("a longer sentence here", 10), "a longe...");
    }

    #[test]
    fn test_truncate_text_ends_with_ellipsis() {
        let out = truncate_text("this will definitely be cut", 12);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 12);
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("hello world"), "Hello World");
        assert_eq!(capitalize_words("pickup at harare cbd"), "Pickup At Harare Cbd");
        assert_eq!(capitalize_words("already Capitalized"), "Already Capitalized");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_capitalize_words_with_punctuation() {
        assert_eq!(capitalize_words("one-two three"), "One-Two Three");
    }
}
