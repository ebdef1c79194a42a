use crate::config::ScanGuideConfig;
use crate::feedback::debounce::FeedbackUpdate;
use crate::foundation::core::Timestamp;
use crate::foundation::error::ScanGuideResult;
use crate::geometry::quad::{DetectionEvent, Quad};
use crate::geometry::viewport::ViewportGeometry;
use crate::overlay::draw::DrawCommand;
use crate::session::ScanSession;

/// One recorded engine callback.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanEvent {
    /// Per-frame quad detection, with the viewport sizes read at that frame.
    QuadDetection {
        /// Frame time.
        timestamp_ms: Timestamp,
        /// Detected outline.
        quad: Quad,
        /// Video and canvas sizes.
        viewport: ViewportGeometry,
    },
    /// Engine lost the document.
    DetectionFailed {
        /// Event time.
        timestamp_ms: Timestamp,
    },
    /// Engine finished the first side.
    FirstSideResult {
        /// Event time.
        timestamp_ms: Timestamp,
    },
    /// Host deadline passed.
    Timeout {
        /// Event time.
        timestamp_ms: Timestamp,
    },
}

impl ScanEvent {
    /// Event time.
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::QuadDetection { timestamp_ms, .. }
            | Self::DetectionFailed { timestamp_ms }
            | Self::FirstSideResult { timestamp_ms }
            | Self::Timeout { timestamp_ms } => *timestamp_ms,
        }
    }
}

/// Result of replaying one event.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ReplayStep {
    /// Event time.
    pub timestamp_ms: Timestamp,
    /// Guidance change caused by the event.
    pub guidance: FeedbackUpdate,
    /// Text on screen after the event.
    pub displayed: Option<String>,
    /// Overlay commands, empty for non-frame events.
    pub overlay: Vec<DrawCommand>,
    /// Consecutive positive detections after the event.
    pub streak: u32,
}

/// Run `events` through a fresh session.
#[tracing::instrument(skip(config, events), fields(events = events.len()))]
pub fn replay(
    config: &ScanGuideConfig,
    events: &[ScanEvent],
) -> ScanGuideResult<Vec<ReplayStep>> {
    config.validate()?;
    let mut session = ScanSession::new(config.clone());

    let steps = events
        .iter()
        .map(|ev| {
            let now = ev.timestamp();
            let (guidance, overlay) = match ev {
                ScanEvent::QuadDetection { quad, viewport, .. } => {
                    let event = DetectionEvent::new(*quad, now);
                    let out = session.on_quad_detection(&event, viewport);
                    (out.guidance, out.overlay)
                }
                ScanEvent::DetectionFailed { .. } => (session.on_detection_failed(now), Vec::new()),
                ScanEvent::FirstSideResult { .. } => {
                    (session.on_first_side_result(now), Vec::new())
                }
                ScanEvent::Timeout { .. } => (session.on_timeout(now), Vec::new()),
            };
            ReplayStep {
                timestamp_ms: now,
                guidance,
                displayed: session.displayed().map(str::to_owned),
                overlay,
                streak: session.streak(),
            }
        })
        .collect();
    Ok(steps)
}

#[cfg(test)]
#[path = "../tests/unit/trace/trace.rs"]
mod tests;
