//! Scanguide maps document-detection overlays onto a live camera preview and turns a noisy
//! per-frame detection signal into stable, readable scan guidance.
//!
//! The recognition engine itself is external. It reports, per processed frame, a quad (four
//! corners in source-image pixels, an image-to-preview affine, and a status code). This crate
//! consumes those events:
//!
//! 1. **Map**: `ViewportGeometry + Quad -> DrawTransform` (letterbox/pillarbox fit, then the
//!    detector affine)
//! 2. **Draw**: `DrawTransform -> Vec<DrawCommand>` in canvas pixels, colored by status
//! 3. **Guide**: `DetectionStatus + Timestamp -> FeedbackUpdate` through a dwell-time debouncer
//!    and a consecutive-detection streak
//!
//! [`ScanSession`] wires the three together per scan. Nothing on the per-frame path returns an
//! error: a degenerate viewport draws nothing and an unknown status leaves the text unchanged.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod feedback;
mod fields;
mod foundation;
mod geometry;
mod overlay;
mod session;
mod trace;

pub use config::{ScanGuideConfig, ScanMode};
pub use feedback::debounce::{DEFAULT_DWELL_MS, FeedbackState, FeedbackUpdate};
pub use feedback::messages::{GuidanceMessages, SIDE_PLACEHOLDER, ScanSide};
pub use feedback::stability::{
    DEFAULT_STREAK_WINDOW_MS, DetectionStreak, StabilityLevel, StabilityThresholds,
};
pub use feedback::status::{DetectionStatus, StatusCode};
pub use fields::{
    DateParts, FieldLookup, LocalizedText, NOT_AVAILABLE, display_or_na, first_non_empty,
    format_date,
};
pub use foundation::core::{Affine, BezPath, Point, Rgba8, Size, Timestamp, Vec2};
pub use foundation::error::{ScanGuideError, ScanGuideResult};
pub use geometry::quad::{DetectionEvent, IDENTITY_MATRIX, Quad};
pub use geometry::transform::{DrawTransform, detector_affine};
pub use geometry::viewport::{Boxing, VideoFit, ViewportGeometry};
pub use overlay::draw::{
    DEFAULT_LINE_WIDTH, DrawCommand, OverlayStyle, clear_canvas, overlay_path, quad_overlay,
};
pub use session::{FrameOutput, ScanSession, SharedScanSession};
pub use trace::{ReplayStep, ScanEvent, replay};
