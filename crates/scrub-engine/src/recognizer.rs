//! Per-type recognizers and their confidence tables.
//!
//! Each recognizer combines a structural test with a validator call
//! and scores the result on a three-tier scale: checksum- or
//! context-validated matches are near-certain, pattern-only matches
//! are probable but unverified, and checksum-failed-but-plausible
//! candidates are surfaced at low confidence so the threshold can
//! trade recall for precision.

use crate::validators;
use once_cell::sync::Lazy;
use regex::Regex;
use scrub_core::PiiType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static PAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid regex")
});

/// Loose IFSC shape: right length and character classes, but not
/// necessarily a well-formed code.
static IFSC_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{4}[A-Za-z0-9]{7}$").expect("valid regex"));

/// Column-name keywords that mark a bank-account context.
const ACCOUNT_KEYWORDS: [&str; 5] = ["account", "acct", "acc", "a/c", "bank"];

/// Confidence tiers for one PII type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Checksum or context check passed.
    pub validated: f64,
    /// Structural match only; the stronger check did not apply.
    pub structural: f64,
    /// Structurally plausible but the checksum failed.
    pub failed: f64,
}

impl Scores {
    const fn new(validated: f64, structural: f64, failed: f64) -> Self {
        Self {
            validated,
            structural,
            failed,
        }
    }
}

/// Per-type confidence tables.
///
/// Kept as data rather than inline constants so scoring can be
/// inspected and tested apart from the scan loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    by_type: BTreeMap<PiiType, Scores>,
}

impl Default for ScoreTable {
    fn default() -> Self {
        let mut by_type = BTreeMap::new();
        by_type.insert(PiiType::Aadhaar, Scores::new(0.95, 0.70, 0.30));
        by_type.insert(PiiType::Pan, Scores::new(1.0, 1.0, 0.0));
        by_type.insert(PiiType::Phone, Scores::new(0.90, 0.90, 0.40));
        by_type.insert(PiiType::Email, Scores::new(1.0, 1.0, 0.0));
        by_type.insert(PiiType::Ifsc, Scores::new(0.95, 0.95, 0.50));
        by_type.insert(PiiType::BankAccount, Scores::new(0.80, 0.60, 0.0));
        by_type.insert(PiiType::CreditCard, Scores::new(0.95, 0.95, 0.30));
        Self { by_type }
    }
}

impl ScoreTable {
    /// Returns the tiers for a type.
    #[must_use]
    pub fn scores(&self, pii_type: PiiType) -> Scores {
        // The default table covers every variant; a custom table falls
        // back to the defaults for types it does not override.
        self.by_type
            .get(&pii_type)
            .copied()
            .unwrap_or_else(|| Self::default().by_type[&pii_type])
    }

    /// Overrides the tiers for a type, clamping each score to `[0, 1]`.
    pub fn set(&mut self, pii_type: PiiType, scores: Scores) {
        self.by_type.insert(
            pii_type,
            Scores {
                validated: scores.validated.clamp(0.0, 1.0),
                structural: scores.structural.clamp(0.0, 1.0),
                failed: scores.failed.clamp(0.0, 1.0),
            },
        );
    }
}

/// A single-type recognizer.
///
/// Variants are declared in detection priority order; the scanner
/// consults them via [`Recognizer::PRIORITY`] and the first match
/// claims the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recognizer {
    Aadhaar,
    Pan,
    Phone,
    Email,
    Ifsc,
    BankAccount,
    CreditCard,
}

impl Recognizer {
    /// The fixed evaluation order.
    pub const PRIORITY: [Recognizer; 7] = [
        Recognizer::Aadhaar,
        Recognizer::Pan,
        Recognizer::Phone,
        Recognizer::Email,
        Recognizer::Ifsc,
        Recognizer::BankAccount,
        Recognizer::CreditCard,
    ];

    /// The PII type this recognizer detects.
    #[must_use]
    pub fn pii_type(self) -> PiiType {
        match self {
            Self::Aadhaar => PiiType::Aadhaar,
            Self::Pan => PiiType::Pan,
            Self::Phone => PiiType::Phone,
            Self::Email => PiiType::Email,
            Self::Ifsc => PiiType::Ifsc,
            Self::BankAccount => PiiType::BankAccount,
            Self::CreditCard => PiiType::CreditCard,
        }
    }

    /// Runs the structural test and, where one exists, the checksum or
    /// context check for this type.
    ///
    /// Returns the confidence of the match, or `None` if the value is
    /// not a candidate for this type at all. Idempotent: the same
    /// inputs always produce the same result.
    #[must_use]
    pub fn recognize(self, value: &str, column_name: &str, scores: &ScoreTable) -> Option<f64> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let s = scores.scores(self.pii_type());

        match self {
            Self::Aadhaar => {
                let digits = strip_separators(value);
                if digits.len() != 12 || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                if validators::verhoeff(&digits) {
                    Some(s.validated)
                } else {
                    Some(s.failed)
                }
            }
            Self::Pan => PAN_RE.is_match(value).then_some(s.validated),
            Self::Phone => {
                let (digits, had_prefix) = normalize_phone(value);
                if digits.len() != 10 || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                if validators::indian_mobile(&digits) {
                    Some(s.validated)
                } else if had_prefix {
                    // Explicitly dialled as Indian, but not a valid
                    // mobile subscriber number.
                    Some(s.failed)
                } else {
                    None
                }
            }
            Self::Email => EMAIL_RE.is_match(value).then_some(s.validated),
            Self::Ifsc => {
                let upper = value.to_ascii_uppercase();
                if validators::ifsc(&upper) {
                    Some(s.validated)
                } else if IFSC_SHAPE_RE.is_match(value) {
                    Some(s.failed)
                } else {
                    None
                }
            }
            Self::BankAccount => {
                if !(9..=18).contains(&value.len()) || !value.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let column = column_name.to_ascii_lowercase();
                if ACCOUNT_KEYWORDS.iter().any(|k| column.contains(k)) {
                    Some(s.validated)
                } else {
                    Some(s.structural)
                }
            }
            Self::CreditCard => {
                let digits = strip_separators(value);
                if !(13..=19).contains(&digits.len())
                    || !digits.bytes().all(|b| b.is_ascii_digit())
                {
                    return None;
                }
                if validators::luhn(&digits) {
                    Some(s.validated)
                } else {
                    Some(s.failed)
                }
            }
        }
    }
}

/// Removes spaces and hyphens.
pub(crate) fn strip_separators(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, ' ' | '-')).collect()
}

/// Strips separators and at most one leading `+91`/`91` country
/// prefix. Returns the remaining digit candidate and whether a prefix
/// was present.
fn normalize_phone(value: &str) -> (String, bool) {
    let compact = strip_separators(value);
    if let Some(rest) = compact.strip_prefix("+91") {
        return (rest.to_string(), true);
    }
    // A bare "91..." prefix is only a country code when stripping it
    // leaves a full subscriber number.
    if compact.len() == 12 {
        if let Some(rest) = compact.strip_prefix("91") {
            return (rest.to_string(), true);
        }
    }
    (compact, false)
}
