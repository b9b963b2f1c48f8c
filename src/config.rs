use crate::{
    error::{AprioriError, Result},
    types::{Confidence, Support},
};

pub const DEFAULT_MIN_SUPPORT: Support = 0.3;
pub const DEFAULT_MIN_CONFIDENCE: Confidence = 0.7;

/// Thresholds for one mining run. Both must lie in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningConfig {
    min_support: Support,
    min_confidence: Confidence,
}

impl MiningConfig {
    pub fn new(min_support: Support, min_confidence: Confidence) -> Result<Self> {
        Ok(Self {
            min_support: check_threshold("min_support", min_support)?,
            min_confidence: check_threshold("min_confidence", min_confidence)?,
        })
    }

    pub fn min_support(&self) -> Support {
        self.min_support
    }

    pub fn min_confidence(&self) -> Confidence {
        self.min_confidence
    }
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

/// Rejects NaN as well as anything outside (0, 1].
pub(crate) fn check_threshold(name: &str, value: f64) -> Result<f64> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(AprioriError::InvalidInput(format!(
            "{name} must be in (0, 1], got {value}"
        )))
    }
}
