//! Design System Integration Tests
//!
//! End-to-end tests composing tokens, components, and shared utilities
//! the way the dashboards consume them.

use design_tokens::colors::{contrast_color, contrast_ratio, parse_hex, status, taxi};
use design_tokens::theme::{get_theme, ThemeName};
use design_tokens::tokens::breakpoints;
use design_tokens::typography::{TextVariant, TypeBreakpoint};
use shared_utils::{
    calculate_fare, format_currency, format_distance, format_duration, time_ago_from,
    validate_zimbabwe_phone, Debouncer,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use ui_components::{
    Badge, Button, DriverStatus, DriverStatusCard, PaymentMethod, RideRequestCard,
};

/// A ride request renders with real formatted values end to end
#[test]
fn test_ride_request_flow() {
    let fare = calculate_fare(2.5, 12.0);
    let request = RideRequestCard::new("Harare CBD", "Avondale", fare, 2.5, 12.0)
        .with_payment(PaymentMethod::Ecocash)
        .on_accept("accept-ride")
        .on_decline("decline-ride");

    // 5.0 base + 2.5km * 2.5 + 12min * 0.5
    assert_eq!(fare, 17.25);
    assert_eq!(request.fare_label(), "$17.25");
    assert_eq!(request.summary(), "2.5km • 12min");
    assert!(request.has_actions());

    let accept = Button::accept_ride("accept-ride");
    assert!(accept.class().contains("bg-taxi-yellow-500"));
    assert!(accept.class().contains("h-12"));

    let payment_badge = Badge::payment(request.payment_method);
    assert_eq!(payment_badge.text, "EcoCash");
}

/// Driver status transitions drive badge, button, and message together
#[test]
fn test_driver_status_flow() {
    let mut card = DriverStatusCard::new("Tendai")
        .with_earnings(86.5, 420.0)
        .with_rides(7, 38);

    assert_eq!(card.status, DriverStatus::Offline);
    assert_eq!(card.online_button().label, "🔴 Go Online");

    card.toggle_online();
    assert_eq!(card.status, DriverStatus::Online);
    assert_eq!(card.badge().text, "Online");
    assert!(card.badge().class().contains("bg-success-500"));
    assert!(card.status_message().contains("ready to receive"));

    card.toggle_busy();
    assert_eq!(card.status, DriverStatus::Busy);
    assert_eq!(card.busy_button().label, "Available");

    card.trigger_emergency();
    assert!(card.badge().class().contains("animate-pulse"));
    assert_eq!(card.earnings_today_label(), "$86.50");
}

/// Component status colors stay consistent with the color tokens
#[test]
fn test_status_classes_match_tokens() {
    // The badge class names and the token table describe the same palette
    assert_eq!(status::get("online"), Some("#10B981"));
    assert!(Badge::status(DriverStatus::Online)
        .class()
        .contains("bg-success-500"));

    assert_eq!(status::get("emergency"), Some("#EF4444"));
    assert!(Badge::status(DriverStatus::Emergency)
        .class()
        .contains("bg-error-500"));
}

/// Brand surfaces pick a readable text color via WCAG contrast
#[test]
fn test_brand_contrast_end_to_end() {
    let on_yellow = contrast_color(taxi::YELLOW.s500);
    let ratio = contrast_ratio(
        parse_hex(taxi::YELLOW.s500).unwrap(),
        parse_hex(on_yellow).unwrap(),
    );
    assert!(ratio >= 4.5);

    for name in [ThemeName::Light, ThemeName::Dark, ThemeName::HighContrast] {
        let theme = get_theme(name);
        let ratio = contrast_ratio(
            parse_hex(theme.background).unwrap(),
            parse_hex(theme.foreground).unwrap(),
        );
        assert!(ratio >= 4.5, "{name} theme below AA contrast");
    }
}

/// Responsive typography honors the breakpoint classification
#[test]
fn test_responsive_typography() {
    let width = 390; // common phone width
    assert!(breakpoints::is_mobile(width));

    let breakpoint = if breakpoints::is_mobile(width) {
        TypeBreakpoint::Mobile
    } else if breakpoints::is_tablet(width) {
        TypeBreakpoint::Tablet
    } else {
        TypeBreakpoint::Desktop
    };

    let mobile = TextVariant::DisplayLarge.responsive_style(breakpoint);
    let desktop = TextVariant::DisplayLarge.responsive_style(TypeBreakpoint::Desktop);
    assert!(mobile.font_size.size <= desktop.font_size.size);
}

/// Booking form helpers agree: validation plus display formatting
#[test]
fn test_booking_form_helpers() {
    assert!(validate_zimbabwe_phone("+263 71 234 5678"));
    assert!(!validate_zimbabwe_phone("+263 70 234 5678"));

    assert_eq!(format_currency(1234.56), "$1,234.56");
    assert_eq!(format_distance(0.75), "750m");
    assert_eq!(format_duration(95.0), "1h 35min");

    let now = chrono::Utc::now();
    let five_min = now - chrono::Duration::minutes(5);
    assert_eq!(time_ago_from(&five_min, &now), "5m ago");
}

/// Debounced search input settles to a single callback
#[tokio::test(start_paused = true)]
async fn test_debounced_search() {
    let searches = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(Duration::from_millis(300));

    for _ in 0..4 {
        let counter = searches.clone();
        debouncer.call(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(searches.load(Ordering::SeqCst), 1);
}
