//! Source-image to canvas transform for detection overlays.
//!
//! The composed transform is `T(offset) * S(scale) * A(detector)`: the detector affine is
//! applied to a source point first, then the video-to-canvas scale, then the letterbox or
//! pillarbox offset. This is the same stacking a 2D canvas context produces from
//! `translate`, `scale`, `transform` calls issued in that order.

use crate::foundation::core::{Affine, Point, Vec2};
use crate::geometry::viewport::{VideoFit, ViewportGeometry};

/// Build the detector affine from a row-major `[m00, m01, m02, m10, m11, m12]` matrix.
///
/// Canvas coefficient order is `(a, b, c, d, e, f) = (m00, m10, m01, m11, m02, m12)`.
pub fn detector_affine(matrix: &[f64; 6]) -> Affine {
    Affine::new([
        matrix[0], matrix[3], matrix[1], matrix[4], matrix[2], matrix[5],
    ])
}

/// Per-frame transform from source-image pixels to canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawTransform {
    /// Horizontal letterbox/pillarbox offset.
    pub translate_x: f64,
    /// Vertical letterbox/pillarbox offset.
    pub translate_y: f64,
    /// Video-to-canvas horizontal scale.
    pub scale_x: f64,
    /// Video-to-canvas vertical scale.
    pub scale_y: f64,
    /// Detector affine in canvas coefficient order `[a, b, c, d, e, f]`.
    pub affine: [f64; 6],
}

impl DrawTransform {
    /// Compose the draw transform for one frame.
    ///
    /// Returns `None` when the viewport is degenerate; callers skip drawing for that frame.
    pub fn compute(geometry: &ViewportGeometry, matrix: &[f64; 6]) -> Option<Self> {
        let fit = geometry.fit()?;
        Some(Self::from_fit(geometry, &fit, matrix))
    }

    /// Compose from an already computed fit.
    pub fn from_fit(geometry: &ViewportGeometry, fit: &VideoFit, matrix: &[f64; 6]) -> Self {
        let scale = fit.scale(geometry);
        Self {
            translate_x: fit.offset.x,
            translate_y: fit.offset.y,
            scale_x: scale.x,
            scale_y: scale.y,
            affine: detector_affine(matrix).as_coeffs(),
        }
    }

    /// Offset and scale only, without the detector affine.
    pub fn viewport_affine(&self) -> Affine {
        Affine::translate(Vec2::new(self.translate_x, self.translate_y))
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }

    /// Full transform as a single affine.
    pub fn to_affine(&self) -> Affine {
        self.viewport_affine() * Affine::new(self.affine)
    }

    /// Map a source-image point into canvas space.
    pub fn map_point(&self, p: Point) -> Point {
        self.to_affine() * p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/transform.rs"]
mod tests;
