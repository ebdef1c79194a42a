/// Raw detection status code as emitted by the recognition engine.
///
/// Engines may add codes over time, so frames carry the raw value and classification into
/// [`DetectionStatus`] happens at the point of use.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct StatusCode(pub i32);

impl StatusCode {
    /// Classify into the known status set, or `None` for an unrecognized code.
    pub fn status(self) -> Option<DetectionStatus> {
        DetectionStatus::from_code(self.0)
    }
}

impl From<DetectionStatus> for StatusCode {
    fn from(status: DetectionStatus) -> Self {
        Self(status.code())
    }
}

/// Classification of a single frame's document detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionStatus {
    /// Nothing usable detected.
    Failed,
    /// Document detected.
    Success,
    /// Camera is too far from the document.
    CameraTooFar,
    /// Camera is too close to the document.
    CameraTooClose,
    /// Camera is tilted too much relative to the document plane.
    CameraAngleTooSteep,
    /// Document is too close to the edge of the camera frame.
    DocumentTooCloseToEdge,
    /// Only part of the document is in view.
    DocumentPartiallyVisible,
    /// Document detected by the engine's fallback detector.
    FallbackSuccess,
}

impl DetectionStatus {
    /// Every known status, in engine code order.
    pub const ALL: [DetectionStatus; 8] = [
        Self::Failed,
        Self::Success,
        Self::CameraTooFar,
        Self::CameraTooClose,
        Self::CameraAngleTooSteep,
        Self::DocumentTooCloseToEdge,
        Self::DocumentPartiallyVisible,
        Self::FallbackSuccess,
    ];

    /// Map an engine code to a status.
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Engine code for this status.
    pub fn code(self) -> i32 {
        match self {
            Self::Failed => 0,
            Self::Success => 1,
            Self::CameraTooFar => 2,
            Self::CameraTooClose => 3,
            Self::CameraAngleTooSteep => 4,
            Self::DocumentTooCloseToEdge => 5,
            Self::DocumentPartiallyVisible => 6,
            Self::FallbackSuccess => 7,
        }
    }

    /// Whether the document was found, by either detector.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Success | Self::FallbackSuccess)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feedback/status.rs"]
mod tests;
