use crate::feedback::status::{DetectionStatus, StatusCode};
use crate::foundation::core::{Point, Timestamp};

/// Detector affine that leaves source coordinates untouched.
pub const IDENTITY_MATRIX: [f64; 6] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];

/// A detected document outline for one frame, in source-image pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Quad {
    /// Top-left corner.
    pub top_left: Point,
    /// Top-right corner.
    pub top_right: Point,
    /// Bottom-right corner.
    pub bottom_right: Point,
    /// Bottom-left corner.
    pub bottom_left: Point,
    /// Row-major `[m00, m01, m02, m10, m11, m12]` image-to-preview affine.
    #[serde(default = "identity_matrix")]
    pub transform_matrix: [f64; 6],
    /// Raw engine classification for this frame.
    pub detection_status: StatusCode,
}

fn identity_matrix() -> [f64; 6] {
    IDENTITY_MATRIX
}

impl Quad {
    /// Quad from corners in clockwise order starting top-left, with an identity matrix.
    pub fn new(corners: [Point; 4], status: impl Into<StatusCode>) -> Self {
        let [top_left, top_right, bottom_right, bottom_left] = corners;
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
            transform_matrix: IDENTITY_MATRIX,
            detection_status: status.into(),
        }
    }

    /// Axis-aligned quad covering `(x0, y0)..(x1, y1)`.
    pub fn from_rect(x0: f64, y0: f64, x1: f64, y1: f64, status: impl Into<StatusCode>) -> Self {
        Self::new(
            [
                Point::new(x0, y0),
                Point::new(x1, y0),
                Point::new(x1, y1),
                Point::new(x0, y1),
            ],
            status,
        )
    }

    /// Replace the detector matrix.
    pub fn with_matrix(mut self, matrix: [f64; 6]) -> Self {
        self.transform_matrix = matrix;
        self
    }

    /// Corners in drawing order (clockwise from top-left).
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Known classification, if any.
    pub fn status(&self) -> Option<DetectionStatus> {
        self.detection_status.status()
    }
}

/// One per-frame detection event from the recognition engine.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DetectionEvent {
    /// Detected outline.
    pub quad: Quad,
    /// Monotonic time the frame was processed.
    pub timestamp_ms: Timestamp,
}

impl DetectionEvent {
    /// Event for `quad` at `timestamp_ms`.
    pub fn new(quad: Quad, timestamp_ms: Timestamp) -> Self {
        Self { quad, timestamp_ms }
    }
}
