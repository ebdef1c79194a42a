use crate::foundation::core::Timestamp;

/// Default maximum gap between positive detections that still counts as consecutive.
pub const DEFAULT_STREAK_WINDOW_MS: u64 = 500;

/// Counter of consecutive positive detections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectionStreak {
    window_ms: u64,
    last_detection: Option<Timestamp>,
    count: u32,
}

impl Default for DetectionStreak {
    fn default() -> Self {
        Self::new(DEFAULT_STREAK_WINDOW_MS)
    }
}

impl DetectionStreak {
    /// Empty streak with the given window.
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_detection: None,
            count: 0,
        }
    }

    /// Current count.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Record a positive detection at `now` and return the updated count.
    ///
    /// A gap longer than the window starts a new streak at 1.
    pub fn record(&mut self, now: Timestamp) -> u32 {
        let continues = self
            .last_detection
            .is_some_and(|last| now.millis_since(last) <= self.window_ms);
        self.count = if continues {
            self.count.saturating_add(1)
        } else {
            1
        };
        self.last_detection = Some(now);
        self.count
    }

    /// Drop the streak, e.g. after the engine reports a lost document.
    pub fn reset(&mut self) {
        self.count = 0;
        self.last_detection = None;
    }
}

/// Count thresholds for escalating guidance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StabilityThresholds {
    /// Counts above this are [`StabilityLevel::Stabilizing`].
    pub stabilizing_after: u32,
    /// Counts above this are [`StabilityLevel::Processing`].
    pub processing_after: u32,
}

impl Default for StabilityThresholds {
    fn default() -> Self {
        Self {
            stabilizing_after: 2,
            processing_after: 5,
        }
    }
}

/// How settled the detection is, escalating with the streak count.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StabilityLevel {
    /// Just found, not yet stable.
    Searching,
    /// Held for a few frames.
    Stabilizing,
    /// Held long enough for the engine to read it.
    Processing,
}

impl StabilityLevel {
    /// Level for a streak count. Monotonic non-decreasing in `count`.
    pub fn from_count(count: u32, thresholds: StabilityThresholds) -> Self {
        if count > thresholds.processing_after {
            Self::Processing
        } else if count > thresholds.stabilizing_after {
            Self::Stabilizing
        } else {
            Self::Searching
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feedback/stability.rs"]
mod tests;
