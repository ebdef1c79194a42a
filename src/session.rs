//! Per-scan state tying overlay drawing and debounced guidance together.
//!
//! A [`ScanSession`] is created when the camera scan starts and dropped when it ends. The
//! host forwards each engine callback to the matching `on_*` method and applies the returned
//! draw commands and guidance text to its UI.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::{ScanGuideConfig, ScanMode};
use crate::feedback::debounce::{FeedbackState, FeedbackUpdate};
use crate::feedback::messages::ScanSide;
use crate::feedback::stability::{DetectionStreak, StabilityLevel};
use crate::feedback::status::DetectionStatus;
use crate::foundation::core::{Size, Timestamp};
use crate::geometry::quad::DetectionEvent;
use crate::geometry::viewport::ViewportGeometry;
use crate::overlay::draw::{DrawCommand, clear_canvas, quad_overlay};

/// Everything the host needs to apply for one detection frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    /// Canvas commands, starting with a clear.
    pub overlay: Vec<DrawCommand>,
    /// Guidance change for this frame.
    pub guidance: FeedbackUpdate,
    /// Known classification of the frame, if any.
    pub status: Option<DetectionStatus>,
    /// Consecutive positive detections after this frame.
    pub streak: u32,
}

/// State for one scan, from camera start to result, cancel, or timeout.
#[derive(Clone, Debug)]
pub struct ScanSession {
    config: ScanGuideConfig,
    feedback: FeedbackState,
    streak: DetectionStreak,
    side: ScanSide,
}

impl ScanSession {
    /// Start a session. The config is assumed valid; see [`ScanGuideConfig::validate`].
    pub fn new(config: ScanGuideConfig) -> Self {
        Self {
            feedback: FeedbackState::new(config.dwell_ms),
            streak: DetectionStreak::new(config.streak_window_ms),
            side: ScanSide::Front,
            config,
        }
    }

    /// Start a session with default tuning and wording.
    pub fn with_defaults() -> Self {
        Self::new(ScanGuideConfig::default())
    }

    /// Session config.
    pub fn config(&self) -> &ScanGuideConfig {
        &self.config
    }

    /// Side currently being scanned.
    pub fn side(&self) -> ScanSide {
        self.side
    }

    /// Guidance text currently on screen.
    pub fn displayed(&self) -> Option<&str> {
        self.feedback.displayed()
    }

    /// Current consecutive-detection count.
    pub fn streak(&self) -> u32 {
        self.streak.count()
    }

    /// Handle one quad detection frame.
    #[tracing::instrument(
        level = "trace",
        skip(self, event, geometry),
        fields(ts = event.timestamp_ms.as_millis(), code = event.quad.detection_status.0)
    )]
    pub fn on_quad_detection(
        &mut self,
        event: &DetectionEvent,
        geometry: &ViewportGeometry,
    ) -> FrameOutput {
        let now = event.timestamp_ms;
        let overlay = quad_overlay(&event.quad, geometry, self.config.line_width);
        let status = event.quad.status();

        let guidance = match status {
            Some(s) if s.is_positive() => {
                let count = self.streak.record(now);
                let text = self.positive_message(count);
                self.feedback.offer(text, false, now)
            }
            Some(s) => {
                let text = self.config.messages.for_status(s).to_string();
                self.feedback.offer(text, false, now)
            }
            None => {
                tracing::warn!(
                    code = event.quad.detection_status.0,
                    "unhandled detection status, guidance unchanged"
                );
                FeedbackUpdate::Suppressed
            }
        };

        FrameOutput {
            overlay,
            guidance,
            status,
            streak: self.streak.count(),
        }
    }

    fn positive_message(&self, count: u32) -> String {
        let messages = &self.config.messages;
        let level = StabilityLevel::from_count(count, self.config.thresholds());
        match self.config.mode {
            ScanMode::SingleSide => messages.for_stability(level).to_string(),
            ScanMode::MultiSide => messages.side_stability_for(level, self.side),
        }
    }

    /// Engine lost the document. Always shown, overriding any dwell lock.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_detection_failed(&mut self, now: Timestamp) -> FeedbackUpdate {
        self.streak.reset();
        let text = match self.config.mode {
            ScanMode::SingleSide => self.config.messages.position_document.clone(),
            ScanMode::MultiSide => self.config.messages.position_for(self.side),
        };
        self.feedback.offer(text, true, now)
    }

    /// Engine finished reading a side.
    ///
    /// Only the first call of a multi-side scan flips to the back side; later calls read data.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn on_first_side_result(&mut self, now: Timestamp) -> FeedbackUpdate {
        let text = match (self.config.mode, self.side) {
            (ScanMode::SingleSide, _) | (ScanMode::MultiSide, ScanSide::Back) => {
                self.config.messages.reading_data.clone()
            }
            (ScanMode::MultiSide, ScanSide::Front) => {
                self.side = ScanSide::Back;
                self.streak.reset();
                self.config.messages.flip_to_back.clone()
            }
        };
        self.feedback.offer(text, false, now)
    }

    /// Host deadline passed; the host cancels recognition itself.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn on_timeout(&mut self, now: Timestamp) -> FeedbackUpdate {
        let text = self.config.messages.timeout.clone();
        self.feedback.offer(text, false, now)
    }

    /// End the session, returning the command that wipes leftover overlay drawing.
    pub fn finish(self, canvas: Size) -> Vec<DrawCommand> {
        tracing::debug!(side = ?self.side, streak = self.streak.count(), "scan session finished");
        clear_canvas(canvas).into_iter().collect()
    }
}

/// [`ScanSession`] behind a mutex, for hosts that deliver callbacks on several threads.
#[derive(Clone, Debug)]
pub struct SharedScanSession {
    inner: Arc<Mutex<ScanSession>>,
}

impl SharedScanSession {
    /// Wrap a session.
    pub fn new(session: ScanSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ScanSession> {
        // Session state stays usable after a panicking callback.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut ScanSession) -> R) -> R {
        f(&mut self.lock())
    }

    /// See [`ScanSession::on_quad_detection`].
    pub fn on_quad_detection(
        &self,
        event: &DetectionEvent,
        geometry: &ViewportGeometry,
    ) -> FrameOutput {
        self.lock().on_quad_detection(event, geometry)
    }

    /// See [`ScanSession::on_detection_failed`].
    pub fn on_detection_failed(&self, now: Timestamp) -> FeedbackUpdate {
        self.lock().on_detection_failed(now)
    }

    /// See [`ScanSession::on_first_side_result`].
    pub fn on_first_side_result(&self, now: Timestamp) -> FeedbackUpdate {
        self.lock().on_first_side_result(now)
    }

    /// See [`ScanSession::on_timeout`].
    pub fn on_timeout(&self, now: Timestamp) -> FeedbackUpdate {
        self.lock().on_timeout(now)
    }

    /// Guidance text currently on screen.
    pub fn displayed(&self) -> Option<String> {
        self.lock().displayed().map(str::to_owned)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session/session.rs"]
mod tests;
