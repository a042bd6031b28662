//! Checksum and structural plausibility checks.
//!
//! All validators are pure and fail closed: malformed input returns
//! `false`, never an error. Absence of a valid checksum is an expected
//! outcome, not an exception path.

use once_cell::sync::Lazy;
use regex::Regex;

/// Verhoeff dihedral multiplication table.
const VERHOEFF_D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Verhoeff permutation table, applied by digit position mod 8.
const VERHOEFF_P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Validates a 12-digit Aadhaar number with the Verhoeff checksum.
///
/// Input must be exactly 12 ASCII digits; anything else fails closed.
#[must_use]
pub fn verhoeff(digits: &str) -> bool {
    if digits.len() != 12 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let mut c = 0u8;
    for (i, b) in digits.bytes().rev().enumerate() {
        let d = (b - b'0') as usize;
        c = VERHOEFF_D[c as usize][VERHOEFF_P[i % 8][d] as usize];
    }
    c == 0
}

/// Validates a payment-card number with the Luhn mod-10 checksum.
///
/// Input must be 13-19 ASCII digits; anything else fails closed.
#[must_use]
pub fn luhn(digits: &str) -> bool {
    if !(13..=19).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Validates an Indian mobile subscriber number.
///
/// Expects country prefix and separators already stripped: exactly 10
/// digits, leading digit in 6-9.
#[must_use]
pub fn indian_mobile(digits: &str) -> bool {
    digits.len() == 10
        && digits.bytes().all(|b| b.is_ascii_digit())
        && matches!(digits.as_bytes()[0], b'6'..=b'9')
}

static IFSC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("valid regex"));

/// Validates an IFSC bank-routing code: 4 uppercase letters, a literal
/// '0', then 6 alphanumerics.
#[must_use]
pub fn ifsc(code: &str) -> bool {
    IFSC_RE.is_match(code)
}
