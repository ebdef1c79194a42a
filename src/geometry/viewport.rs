use crate::foundation::core::{Size, Vec2};

/// Intrinsic video frame size and destination canvas size, both in pixels.
///
/// Re-read every frame by the host; sizes change on resize and are briefly zero during layout.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportGeometry {
    /// Source video frame width.
    pub video_width: f64,
    /// Source video frame height.
    pub video_height: f64,
    /// Destination canvas width.
    pub canvas_width: f64,
    /// Destination canvas height.
    pub canvas_height: f64,
}

/// Which bars the aspect-ratio fit introduces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boxing {
    /// Canvas is wider than the video: bars left and right.
    Pillarbox,
    /// Canvas is narrower (or equal): bars top and bottom.
    Letterbox,
}

/// Placement of the aspect-fitted video inside the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VideoFit {
    /// Fit direction.
    pub boxing: Boxing,
    /// Top-left of the displayed video in canvas pixels.
    pub offset: Vec2,
    /// Displayed video size in canvas pixels.
    pub scaled_size: Size,
}

impl ViewportGeometry {
    /// Build a geometry from video and canvas sizes.
    pub fn new(video_width: f64, video_height: f64, canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            video_width,
            video_height,
            canvas_width,
            canvas_height,
        }
    }

    /// Build a geometry from two [`Size`] values.
    pub fn from_sizes(video: Size, canvas: Size) -> Self {
        Self::new(video.width, video.height, canvas.width, canvas.height)
    }

    /// Video frame size.
    pub fn video_size(&self) -> Size {
        Size::new(self.video_width, self.video_height)
    }

    /// Canvas size.
    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    /// True when any dimension is zero, negative, or not finite.
    pub fn is_degenerate(&self) -> bool {
        [
            self.video_width,
            self.video_height,
            self.canvas_width,
            self.canvas_height,
        ]
        .iter()
        .any(|v| !v.is_finite() || *v <= 0.0)
    }

    /// Aspect-fit the video into the canvas, centered.
    ///
    /// Returns `None` for a degenerate viewport; there is nothing to draw into.
    pub fn fit(&self) -> Option<VideoFit> {
        if self.is_degenerate() {
            return None;
        }

        let canvas_aspect = self.canvas_width / self.canvas_height;
        let video_aspect = self.video_width / self.video_height;

        let fit = if canvas_aspect > video_aspect {
            let scaled_height = self.canvas_height;
            let scaled_width = video_aspect * scaled_height;
            VideoFit {
                boxing: Boxing::Pillarbox,
                offset: Vec2::new((self.canvas_width - scaled_width) / 2.0, 0.0),
                scaled_size: Size::new(scaled_width, scaled_height),
            }
        } else {
            let scaled_width = self.canvas_width;
            let scaled_height = scaled_width / video_aspect;
            VideoFit {
                boxing: Boxing::Letterbox,
                offset: Vec2::new(0.0, (self.canvas_height - scaled_height) / 2.0),
                scaled_size: Size::new(scaled_width, scaled_height),
            }
        };
        Some(fit)
    }
}

impl VideoFit {
    /// Per-axis scale from video pixels to canvas pixels.
    pub fn scale(&self, geometry: &ViewportGeometry) -> Vec2 {
        Vec2::new(
            self.scaled_size.width / geometry.video_width,
            self.scaled_size.height / geometry.video_height,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/viewport.rs"]
mod tests;
