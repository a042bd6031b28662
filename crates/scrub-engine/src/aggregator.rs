//! Reduction of a detection list into a scan summary.

use chrono::Utc;
use scrub_core::{Detection, PiiType, ScanSummary};
use std::collections::{BTreeMap, BTreeSet};

/// Summarizes a detection sequence.
///
/// Deterministic apart from the timestamp: counts, distinct raw
/// values, and mean confidence per type, plus the static per-type
/// precision weights for every type that appeared. The overall
/// average is the mean of the per-type averages, so a noisy
/// high-volume type does not drown out the others.
#[must_use]
pub fn summarize(detections: &[Detection]) -> ScanSummary {
    if detections.is_empty() {
        return ScanSummary::empty();
    }

    let mut counts_by_type: BTreeMap<PiiType, usize> = BTreeMap::new();
    let mut unique: BTreeMap<PiiType, BTreeSet<&str>> = BTreeMap::new();
    let mut confidence_sums: BTreeMap<PiiType, f64> = BTreeMap::new();

    for d in detections {
        *counts_by_type.entry(d.pii_type).or_insert(0) += 1;
        unique.entry(d.pii_type).or_default().insert(&d.raw_value);
        *confidence_sums.entry(d.pii_type).or_insert(0.0) += d.confidence;
    }

    let unique_values_by_type = unique.iter().map(|(t, set)| (*t, set.len())).collect();

    let average_confidence_by_type: BTreeMap<PiiType, f64> = counts_by_type
        .iter()
        .map(|(t, count)| (*t, confidence_sums[t] / *count as f64))
        .collect();

    let overall_average_confidence = average_confidence_by_type.values().sum::<f64>()
        / average_confidence_by_type.len() as f64;

    let estimated_precision = counts_by_type
        .keys()
        .map(|t| (*t, t.estimated_precision()))
        .collect();

    ScanSummary {
        total_detections: detections.len(),
        counts_by_type,
        unique_values_by_type,
        average_confidence_by_type,
        estimated_precision,
        overall_average_confidence,
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection(row: usize, pii_type: PiiType, raw: &str, confidence: f64) -> Detection {
        Detection {
            row_index: row,
            column_name: "field".into(),
            pii_type,
            raw_value: raw.into(),
            masked_value: "masked".into(),
            confidence,
        }
    }

    #[test]
    fn empty_input_gives_zeroed_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_detections, 0);
        assert!(summary.counts_by_type.is_empty());
        assert!(summary.estimated_precision.is_empty());
        assert_eq!(summary.overall_average_confidence, 0.0);
    }

    #[test]
    fn counts_uniques_and_averages() {
        let detections = vec![
            detection(1, PiiType::Phone, "9876543210", 0.9),
            detection(2, PiiType::Phone, "9876543210", 0.9),
            detection(3, PiiType::Phone, "9123456789", 0.9),
            detection(4, PiiType::Aadhaar, "1234 5678 9012", 0.3),
        ];
        let summary = summarize(&detections);

        assert_eq!(summary.total_detections, 4);
        assert_eq!(summary.counts_by_type[&PiiType::Phone], 3);
        assert_eq!(summary.unique_values_by_type[&PiiType::Phone], 2);
        assert_eq!(summary.counts_by_type[&PiiType::Aadhaar], 1);
        assert!((summary.average_confidence_by_type[&PiiType::Phone] - 0.9).abs() < 1e-9);
        assert!((summary.average_confidence_by_type[&PiiType::Aadhaar] - 0.3).abs() < 1e-9);
        // Mean of per-type averages, not of all confidences.
        assert!((summary.overall_average_confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn precision_is_reported_only_for_seen_types() {
        let detections = vec![detection(1, PiiType::Email, "a@b.co", 1.0)];
        let summary = summarize(&detections);
        assert_eq!(summary.estimated_precision.len(), 1);
        assert_eq!(
            summary.estimated_precision[&PiiType::Email],
            PiiType::Email.estimated_precision()
        );
    }
}
