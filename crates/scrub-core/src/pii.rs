//! The PII type taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of PII types the engine recognizes.
///
/// Variants are declared in recognizer priority order, and the derived
/// `Ord` follows declaration order, so `BTreeMap<PiiType, _>` iterates
/// in the same order cells are claimed during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiType {
    /// 12-digit Aadhaar national ID.
    Aadhaar,
    /// PAN tax ID (5 letters, 4 digits, 1 letter).
    Pan,
    /// Indian mobile number.
    Phone,
    /// Email address.
    Email,
    /// IFSC bank-routing code.
    Ifsc,
    /// Bank account number (9-18 digits).
    BankAccount,
    /// Payment-card number (13-19 digits).
    CreditCard,
}

impl PiiType {
    /// All types, in recognizer priority order.
    pub const ALL: [PiiType; 7] = [
        PiiType::Aadhaar,
        PiiType::Pan,
        PiiType::Phone,
        PiiType::Email,
        PiiType::Ifsc,
        PiiType::BankAccount,
        PiiType::CreditCard,
    ];

    /// Returns the wire name used in reports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aadhaar => "aadhaar",
            Self::Pan => "pan",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Ifsc => "ifsc",
            Self::BankAccount => "bank_account",
            Self::CreditCard => "credit_card",
        }
    }

    /// Expected real-world precision of the recognizer for this type.
    ///
    /// A static heuristic weight surfaced in the summary for
    /// transparency about per-type detector reliability; not computed
    /// from the scanned data.
    #[must_use]
    pub fn estimated_precision(&self) -> f64 {
        match self {
            Self::Aadhaar => 0.95,
            Self::Pan => 0.99,
            Self::Phone => 0.90,
            Self::Email => 0.99,
            Self::Ifsc => 0.95,
            Self::BankAccount => 0.75,
            Self::CreditCard => 0.90,
        }
    }
}

impl fmt::Display for PiiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&PiiType::BankAccount).unwrap(),
            "\"bank_account\""
        );
        assert_eq!(
            serde_json::from_str::<PiiType>("\"credit_card\"").unwrap(),
            PiiType::CreditCard
        );
    }

    #[test]
    fn ordering_follows_priority() {
        let mut sorted = PiiType::ALL;
        sorted.sort();
        assert_eq!(sorted, PiiType::ALL);
    }

    #[test]
    fn precision_is_a_probability() {
        for t in PiiType::ALL {
            let p = t.estimated_precision();
            assert!((0.0..=1.0).contains(&p), "{t}: {p}");
        }
    }
}
