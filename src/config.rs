use std::path::Path;

use crate::feedback::debounce::DEFAULT_DWELL_MS;
use crate::feedback::messages::GuidanceMessages;
use crate::feedback::stability::{DEFAULT_STREAK_WINDOW_MS, StabilityThresholds};
use crate::foundation::error::{ScanGuideError, ScanGuideResult};
use crate::overlay::draw::DEFAULT_LINE_WIDTH;

/// Single- or two-sided document capture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// One side, then done.
    #[default]
    SingleSide,
    /// Front, then back.
    MultiSide,
}

/// Session tuning and wording.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanGuideConfig {
    /// Minimum display time of an unforced guidance message.
    pub dwell_ms: u64,
    /// Maximum gap between positive detections that keeps a streak alive.
    pub streak_window_ms: u64,
    /// Streak count after which guidance moves to "hold steady".
    pub stabilizing_after: u32,
    /// Streak count after which guidance moves to "processing".
    pub processing_after: u32,
    /// Overlay stroke width in canvas pixels.
    pub line_width: f64,
    /// Capture mode.
    pub mode: ScanMode,
    /// Guidance wording.
    pub messages: GuidanceMessages,
}

impl Default for ScanGuideConfig {
    fn default() -> Self {
        let thresholds = StabilityThresholds::default();
        Self {
            dwell_ms: DEFAULT_DWELL_MS,
            streak_window_ms: DEFAULT_STREAK_WINDOW_MS,
            stabilizing_after: thresholds.stabilizing_after,
            processing_after: thresholds.processing_after,
            line_width: DEFAULT_LINE_WIDTH,
            mode: ScanMode::default(),
            messages: GuidanceMessages::default(),
        }
    }
}

impl ScanGuideConfig {
    /// Parse a JSON config; omitted fields take their defaults.
    pub fn from_json_str(s: &str) -> ScanGuideResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_json_path(path: &Path) -> ScanGuideResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ScanGuideError::config(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    /// Stability thresholds view.
    pub fn thresholds(&self) -> StabilityThresholds {
        StabilityThresholds {
            stabilizing_after: self.stabilizing_after,
            processing_after: self.processing_after,
        }
    }

    /// Check invariants.
    pub fn validate(&self) -> ScanGuideResult<()> {
        if self.dwell_ms == 0 {
            return Err(ScanGuideError::validation("dwell_ms must be > 0"));
        }
        if self.streak_window_ms == 0 {
            return Err(ScanGuideError::validation("streak_window_ms must be > 0"));
        }
        if self.processing_after <= self.stabilizing_after {
            return Err(ScanGuideError::validation(
                "processing_after must be > stabilizing_after",
            ));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ScanGuideError::validation(
                "line_width must be finite and > 0",
            ));
        }
        self.messages.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
