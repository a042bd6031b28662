//! Scan configuration.

use crate::error::{EngineError, EngineResult};
use crate::recognizer::ScoreTable;
use crate::redactor::MaskPolicy;
use serde::{Deserialize, Serialize};

/// Configuration for one scan job.
///
/// The threshold is validated at construction; the engine itself
/// assumes a threshold already inside the unit interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubConfig {
    /// Minimum confidence a candidate must reach to be reported.
    pub threshold: f64,
    /// Per-type confidence tiers.
    pub scores: ScoreTable,
    /// Render Aadhaar as a partial mask instead of a hash token.
    pub aadhaar_partial: bool,
    /// Character substituted for hidden digits in partial masks.
    pub mask_char: char,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            threshold: 0.7,
            scores: ScoreTable::default(),
            aadhaar_partial: false,
            mask_char: 'X',
        }
    }
}

impl ScrubConfig {
    /// Creates a config with the given threshold.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidThreshold`] when the threshold is
    /// not in `0.0..=1.0`.
    pub fn new(threshold: f64) -> EngineResult<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(EngineError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            ..Self::default()
        })
    }

    /// A high-precision config: only near-certain matches survive.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            threshold: 0.9,
            ..Self::default()
        }
    }

    /// A high-recall config: checksum-failed candidates survive too.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            threshold: 0.3,
            ..Self::default()
        }
    }

    /// Opts Aadhaar into partial masking.
    #[must_use]
    pub fn with_aadhaar_partial(mut self, enabled: bool) -> Self {
        self.aadhaar_partial = enabled;
        self
    }

    /// The masking policy implied by this config.
    #[must_use]
    pub fn mask_policy(&self) -> MaskPolicy {
        MaskPolicy {
            aadhaar_partial: self.aadhaar_partial,
            mask_char: self.mask_char,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_thresholds_are_accepted() {
        assert!(ScrubConfig::new(0.0).is_ok());
        assert!(ScrubConfig::new(1.0).is_ok());
        assert!(ScrubConfig::new(0.7).is_ok());
    }

    #[test]
    fn out_of_range_thresholds_are_rejected() {
        assert!(matches!(
            ScrubConfig::new(-0.1),
            Err(EngineError::InvalidThreshold(_))
        ));
        assert!(matches!(
            ScrubConfig::new(1.5),
            Err(EngineError::InvalidThreshold(_))
        ));
        assert!(ScrubConfig::new(f64::NAN).is_err());
    }
}
