//! # Luhn Validator
//!
//! The mod-10 checksum used by every major card brand.
//!
//! ## Length Windows
//! The checksum itself works on any digit string. Callers decide which
//! lengths are acceptable:
//!
//! | Path                         | Window   | Function                  |
//! |------------------------------|----------|---------------------------|
//! | Payment form submission      | 13..=19  | [`is_valid_card_number`]  |
//! | Standalone quick check       | 12..=19  | [`quick_check`]           |

use crate::digits::DigitString;
use crate::{CARD_NUMBER_MAX_LEN, CARD_NUMBER_MIN_LEN, QUICK_CHECK_MIN_LEN};

/// Message shown by the quick check when the number passes.
pub const QUICK_CHECK_PASS: &str = "✔ Looks like a valid number format.";

/// Message shown by the quick check when the number fails.
pub const QUICK_CHECK_FAIL: &str = "✖ Not a valid card number.";

/// Validates `digits` with the Luhn algorithm inside a length window.
///
/// Returns `false` when the length is outside `min_len..=max_len`. The
/// `DigitString` type already guarantees there are no non-digit characters.
///
/// ## Algorithm
/// ```text
/// digits:   4  5  3  2  0  1  5  1  1  2  8  3  0  3  6  6
/// double?:  ✓     ✓     ✓     ✓     ✓     ✓     ✓     ✓
///           (starting from the right, every second digit)
/// doubled > 9 → subtract 9
/// valid ⇔ sum % 10 == 0
/// ```
///
/// ## Example
/// ```rust
/// use checkout_core::digits::normalize_digits;
/// use checkout_core::luhn::is_valid_luhn;
///
/// assert!(is_valid_luhn(&normalize_digits("4532015112830366"), 13, 19));
/// assert!(!is_valid_luhn(&normalize_digits("4532015112830367"), 13, 19));
/// ```
pub fn is_valid_luhn(digits: &DigitString, min_len: usize, max_len: usize) -> bool {
    if !digits.len_within(min_len, max_len) {
        return false;
    }

    luhn_sum(digits.as_str()) % 10 == 0
}

/// Luhn check with the card-number window (13..=19).
pub fn is_valid_card_number(digits: &DigitString) -> bool {
    is_valid_luhn(digits, CARD_NUMBER_MIN_LEN, CARD_NUMBER_MAX_LEN)
}

/// Standalone "does this look like a card number" check.
///
/// Only spaces and dashes are tolerated as separators; any other character
/// fails the check outright. Uses the 12..=19 window.
///
/// ## Example
/// ```rust
/// use checkout_core::luhn::quick_check;
///
/// assert!(quick_check("4111-1111-1111-1111"));
/// assert!(!quick_check("4111/1111/1111/1111"));
/// ```
pub fn quick_check(text: &str) -> bool {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if compact.is_empty() || !compact.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    is_valid_luhn(
        &DigitString::from(compact.as_str()),
        QUICK_CHECK_MIN_LEN,
        CARD_NUMBER_MAX_LEN,
    )
}

/// Message for the quick check result.
pub fn quick_check_message(text: &str) -> &'static str {
    if quick_check(text) {
        QUICK_CHECK_PASS
    } else {
        QUICK_CHECK_FAIL
    }
}

fn luhn_sum(digits: &str) -> u32 {
    let mut sum = 0;
    let mut double = false;

    for b in digits.bytes().rev() {
        let mut digit = u32::from(b - b'0');
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }

    sum
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::normalize_digits;
    use proptest::prelude::*;

    fn card(s: &str) -> DigitString {
        normalize_digits(s)
    }

    #[test]
    fn test_known_vectors() {
        assert!(is_valid_card_number(&card("4532015112830366")));
        assert!(is_valid_card_number(&card("1234567812345670")));
        assert!(!is_valid_card_number(&card("4532015112830367")));
    }

    #[test]
    fn test_test_cards_for_each_brand() {
        assert!(is_valid_card_number(&card("4111111111111111")));
        assert!(is_valid_card_number(&card("5500000000000004")));
        assert!(is_valid_card_number(&card("340000000000009")));
        assert!(is_valid_card_number(&card("6011000000000004")));
    }

    #[test]
    fn test_card_window_rejects_before_checksum() {
        // 12 digits with a valid checksum
        assert!(is_valid_luhn(&card("123456789015"), 12, 19));
        assert!(!is_valid_card_number(&card("123456789015")));

        // 20 zeros: checksum 0 but too long
        assert!(!is_valid_card_number(&card(&"0".repeat(20))));
        assert!(!is_valid_card_number(&card("")));
    }

    /// The quick check accepts 12-digit numbers, the submission path does not.
    /// Kept deliberately until the two windows are unified with stakeholders.
    #[test]
    fn test_known_inconsistency_quick_check_allows_twelve_digits() {
        assert!(quick_check("1234 5678 9015"));
        assert!(!is_valid_card_number(&card("123456789015")));
    }

    #[test]
    fn test_quick_check_separators() {
        assert!(quick_check(" 4532 0151-1283 0366 "));
        assert!(!quick_check("4532.0151.1283.0366"));
        assert!(!quick_check(""));
        assert!(!quick_check("   "));
        assert_eq!(quick_check_message("4111111111111111"), QUICK_CHECK_PASS);
        assert_eq!(quick_check_message("4111111111111112"), QUICK_CHECK_FAIL);
    }

    proptest! {
        #[test]
        fn prop_luhn_is_deterministic(s in "[0-9]{12,19}") {
            let digits = card(&s);
            prop_assert_eq!(is_valid_luhn(&digits, 12, 19), is_valid_luhn(&digits, 12, 19));
        }

        #[test]
        fn prop_single_digit_change_breaks_checksum(s in "[0-9]{15}", pos in 0usize..16, bump in 1u8..10) {
            // Append the check digit that makes `s` valid, then corrupt one digit
            let check = (10 - (luhn_sum(&format!("{}0", s)) % 10)) % 10;
            let valid = format!("{}{}", s, check);
            prop_assert!(is_valid_card_number(&card(&valid)));

            let mut bytes = valid.into_bytes();
            bytes[pos] = b'0' + (bytes[pos] - b'0' + bump) % 10;
            let corrupted = String::from_utf8(bytes).unwrap();
            prop_assert!(!is_valid_card_number(&card(&corrupted)));
        }
    }
}
