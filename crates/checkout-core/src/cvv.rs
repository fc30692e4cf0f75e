//! # CVV Validator
//!
//! Format-only check of the card security code. No brand-specific length
//! policy is applied: a 4-digit code on a Visa card passes, as does a 3-digit
//! code on an American Express card.

/// True when `text` is exactly 3 or 4 ASCII digits.
///
/// Callers trim surrounding whitespace first; inner or surrounding spaces
/// fail the check.
///
/// ## Example
/// ```rust
/// use checkout_core::cvv::is_valid_cvv;
///
/// assert!(is_valid_cvv("123"));
/// assert!(is_valid_cvv("1234"));
/// assert!(!is_valid_cvv("12"));
/// assert!(!is_valid_cvv(" 123"));
/// ```
pub fn is_valid_cvv(text: &str) -> bool {
    (3..=4).contains(&text.len()) && text.bytes().all(|b| b.is_ascii_digit())
}
