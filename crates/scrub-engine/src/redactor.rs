//! Type-specific masking and de-identified table construction.
//!
//! Two families of policy: high-entropy identifiers that are never
//! needed in cleartext (Aadhaar, PAN, IFSC, bank accounts) become
//! deterministic one-way hash tokens, so repeated values still map to
//! the same token and duplicates remain countable; values a reviewer
//! benefits from partially seeing (phone, card, email) keep a few
//! boundary characters and lose the rest.

use crate::recognizer::strip_separators;
use scrub_core::{Detection, PiiType, Table};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Masking policy knobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaskPolicy {
    /// Render Aadhaar as first4/XXXX/last4 instead of a hash token.
    pub aadhaar_partial: bool,
    /// Character substituted for hidden digits in partial masks.
    pub mask_char: char,
}

impl Default for MaskPolicy {
    fn default() -> Self {
        Self {
            aadhaar_partial: false,
            mask_char: 'X',
        }
    }
}

/// Applies per-type masking and builds de-identified tables.
#[derive(Debug, Clone, Default)]
pub struct Redactor {
    policy: MaskPolicy,
}

impl Redactor {
    /// Creates a redactor with the given policy.
    #[must_use]
    pub fn new(policy: MaskPolicy) -> Self {
        Self { policy }
    }

    /// Masks a raw value according to its type's policy.
    ///
    /// Deterministic: the same `(pii_type, raw_value)` pair always
    /// yields the same masked value.
    #[must_use]
    pub fn mask(&self, pii_type: PiiType, raw_value: &str) -> String {
        let value = raw_value.trim();
        match pii_type {
            PiiType::Aadhaar => self.mask_aadhaar(value),
            PiiType::Pan => format!("PAN_{}", hash_token(&value.to_ascii_uppercase(), 10)),
            PiiType::Ifsc => self.mask_ifsc(value),
            PiiType::BankAccount => format!("ACCT_{}", hash_token(value, 12)),
            PiiType::Phone | PiiType::CreditCard => self.mask_digits_keep_last(raw_value, 4),
            PiiType::Email => mask_email(value),
        }
    }

    /// Returns a copy of the table with every detected cell replaced
    /// by its masked value; all other cells are unchanged.
    #[must_use]
    pub fn apply(&self, table: &Table, detections: &[Detection]) -> Table {
        let mut deidentified = table.clone();
        for d in detections {
            let Some(column) = table.column_index(&d.column_name) else {
                continue;
            };
            // Detection rows are 1-based.
            let Some(row) = d.row_index.checked_sub(1) else {
                continue;
            };
            deidentified.set_value(row, column, d.masked_value.clone());
        }
        deidentified
    }

    fn mask_aadhaar(&self, value: &str) -> String {
        let digits = strip_separators(value);
        if self.policy.aadhaar_partial && digits.len() == 12 {
            let masked = format!(
                "{}{}{}",
                &digits[..4],
                self.policy.mask_char.to_string().repeat(4),
                &digits[8..]
            );
            if value.contains(' ') {
                return format!("{} {} {}", &masked[..4], &masked[4..8], &masked[8..]);
            }
            return masked;
        }
        format!("AAD_{}", hash_token(&digits, 12))
    }

    fn mask_ifsc(&self, value: &str) -> String {
        let upper = value.to_ascii_uppercase();
        if upper.len() >= 4 && upper.as_bytes()[..4].iter().all(u8::is_ascii_alphabetic) {
            // Keep the bank code legible; the branch part becomes a
            // format-shaped hash token.
            return format!("{}0{}", &upper[..4], hash_token(&upper, 6));
        }
        format!("IFSC_{}", hash_token(&upper, 6))
    }

    /// Replaces every digit except the trailing `keep` with the mask
    /// character, preserving non-digit formatting.
    fn mask_digits_keep_last(&self, value: &str, keep: usize) -> String {
        let digit_count = value.chars().filter(char::is_ascii_digit).count();
        if digit_count <= keep {
            return value.to_string();
        }
        let mut remaining = digit_count - keep;
        value
            .chars()
            .map(|c| {
                if c.is_ascii_digit() && remaining > 0 {
                    remaining -= 1;
                    self.policy.mask_char
                } else {
                    c
                }
            })
            .collect()
    }
}

/// Uppercase hex prefix of the SHA-256 digest.
fn hash_token(input: &str, len: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let hex = format!("{:x}", hasher.finalize());
    hex[..len].to_ascii_uppercase()
}

/// Masks the local part, keeps the domain.
fn mask_email(value: &str) -> String {
    match value.split_once('@') {
        Some((_, domain)) => format!("xxxx@{domain}"),
        None => "xxxx@".to_string(),
    }
}
