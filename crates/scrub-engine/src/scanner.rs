//! The cell-by-cell scan pass.

use crate::config::ScrubConfig;
use crate::recognizer::Recognizer;
use crate::redactor::Redactor;
use scrub_core::{Detection, Table};

/// Walks a table and collects detections above the configured
/// threshold.
///
/// Cells are visited in row-major order, then column order. Per cell
/// the recognizers run in [`Recognizer::PRIORITY`] order and the first
/// structural match claims the cell, so a value is never counted under
/// two types and a cell yields at most one detection. The claiming
/// candidate is emitted only if its confidence reaches the threshold;
/// otherwise the cell yields nothing.
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ScrubConfig,
    redactor: Redactor,
}

impl Scanner {
    /// Creates a scanner for the given config.
    #[must_use]
    pub fn new(config: ScrubConfig) -> Self {
        let redactor = Redactor::new(config.mask_policy());
        Self { config, redactor }
    }

    /// Scans every cell of the table.
    ///
    /// Never fails: empty, malformed, or checksum-failing cells are
    /// ordinary non-matches or low-confidence candidates. The source
    /// table is not mutated.
    #[must_use]
    pub fn scan(&self, table: &Table) -> Vec<Detection> {
        let mut detections = Vec::new();
        for cell in table.cells() {
            if cell.value.trim().is_empty() {
                continue;
            }
            let Some((recognizer, confidence)) = self.classify(cell.value, cell.column_name)
            else {
                continue;
            };
            if confidence < self.config.threshold {
                tracing::trace!(
                    row = cell.row_index,
                    column = cell.column_name,
                    pii_type = %recognizer.pii_type(),
                    confidence,
                    "candidate below threshold"
                );
                continue;
            }
            let pii_type = recognizer.pii_type();
            detections.push(Detection {
                row_index: cell.row_index,
                column_name: cell.column_name.to_string(),
                pii_type,
                raw_value: cell.value.to_string(),
                masked_value: self.redactor.mask(pii_type, cell.value),
                confidence,
            });
        }
        tracing::debug!(
            rows = table.row_count(),
            detections = detections.len(),
            "scan complete"
        );
        detections
    }

    /// Runs the recognizers in priority order; first match wins.
    fn classify(&self, value: &str, column_name: &str) -> Option<(Recognizer, f64)> {
        Recognizer::PRIORITY.iter().find_map(|r| {
            r.recognize(value, column_name, &self.config.scores)
                .map(|confidence| (*r, confidence))
        })
    }
}
