//! Input validation for contact details
//!
//! Phone validation targets Zimbabwe numbering: mobile prefixes 71-79 and
//! 86-89, landline area codes 24-29, each with optional +263/263/0 prefix.

use regex::Regex;
use std::sync::OnceLock;

/// Validate an email address
///
/// Accepts `local@domain.tld` shapes without whitespace. This is a display
/// level check, not a full RFC 5322 parser.
pub fn validate_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    re.is_match(email)
}

/// Validate a Zimbabwe phone number (mobile or landline)
///
/// Whitespace is stripped before matching, so `+263 71 234 5678` and
/// `+263712345678` are equivalent.
pub fn validate_zimbabwe_phone(phone: &str) -> bool {
    static MOBILE_REGEX: OnceLock<Regex> = OnceLock::new();
    static LANDLINE_REGEX: OnceLock<Regex> = OnceLock::new();

    let mobile =
        MOBILE_REGEX.get_or_init(|| Regex::new(r"^(\+263|263|0)(7[1-9]|8[6-9])\d{7}$").unwrap());
    let landline =
        LANDLINE_REGEX.get_or_init(|| Regex::new(r"^(\+263|263|0)(2[4-9])\d{6}$").unwrap());

    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    mobile.is_match(&compact) || landline.is_match(&compact)
}
