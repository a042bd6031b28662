//! Detection and summary records.

use crate::pii::PiiType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One PII finding for one cell.
///
/// Detections are created during a single scan pass and are immutable
/// afterwards. Every surviving detection satisfies
/// `confidence >= threshold` for the threshold the scan ran with, and
/// no two detections share a `(row_index, column_name)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// 1-based data row the value was found in.
    pub row_index: usize,
    /// Name of the column the value was found in.
    pub column_name: String,
    /// The type the recognizer assigned.
    pub pii_type: PiiType,
    /// The cell value as read from the source table.
    pub raw_value: String,
    /// The de-identified replacement value.
    pub masked_value: String,
    /// Detection confidence in `[0, 1]`.
    pub confidence: f64,
}

/// Aggregate report for one scan job.
///
/// Derived deterministically from the detection sequence (apart from
/// `timestamp`); the per-type maps contain only types with at least
/// one detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Total number of detections.
    pub total_detections: usize,
    /// Detections per type.
    pub counts_by_type: BTreeMap<PiiType, usize>,
    /// Distinct raw values per type (exact string match).
    pub unique_values_by_type: BTreeMap<PiiType, usize>,
    /// Arithmetic mean confidence per type.
    pub average_confidence_by_type: BTreeMap<PiiType, f64>,
    /// Static per-type reliability weights (see [`PiiType::estimated_precision`]).
    pub estimated_precision: BTreeMap<PiiType, f64>,
    /// Mean of the per-type average confidences; 0.0 when nothing was
    /// detected.
    pub overall_average_confidence: f64,
    /// When the summary was produced.
    pub timestamp: DateTime<Utc>,
}

impl ScanSummary {
    /// A zero-valued summary for a scan that found nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_detections: 0,
            counts_by_type: BTreeMap::new(),
            unique_values_by_type: BTreeMap::new(),
            average_confidence_by_type: BTreeMap::new(),
            estimated_precision: BTreeMap::new(),
            overall_average_confidence: 0.0,
            timestamp: Utc::now(),
        }
    }
}
