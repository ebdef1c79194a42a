use crate::feedback::status::StatusCode;
use crate::foundation::core::{BezPath, Point, Rgba8, Size};
use crate::geometry::quad::Quad;
use crate::geometry::transform::DrawTransform;
use crate::geometry::viewport::ViewportGeometry;

/// Default outline stroke width in canvas pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 5.0;

/// Stroke and fill style for one overlay.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayStyle {
    /// Stroke and fill color.
    pub color: Rgba8,
    /// Stroke width in canvas pixels.
    pub line_width: f64,
}

impl OverlayStyle {
    /// Red for a failed detection, green for success, yellow for anything else.
    ///
    /// Only the primary success code is green; fallback and unknown codes use yellow.
    pub fn for_status(code: StatusCode, line_width: f64) -> Self {
        let color = match code.0 {
            0 => Rgba8::RED,
            1 => Rgba8::GREEN,
            _ => Rgba8::YELLOW,
        };
        Self { color, line_width }
    }
}

/// Canvas drawing primitive, coordinates already in canvas pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Clear the whole canvas.
    Clear {
        /// Canvas width.
        width: f64,
        /// Canvas height.
        height: f64,
    },
    /// Set stroke/fill style for following commands.
    SetStyle {
        /// Style to apply.
        style: OverlayStyle,
    },
    /// Begin a new subpath.
    MoveTo {
        /// Target point.
        to: Point,
    },
    /// Straight segment to a point.
    LineTo {
        /// Target point.
        to: Point,
    },
    /// Close the current subpath.
    ClosePath,
    /// Stroke the current path.
    Stroke,
}

/// Clear command for a canvas, or `None` if the canvas has no area.
pub fn clear_canvas(canvas: Size) -> Option<DrawCommand> {
    let valid = canvas.width.is_finite()
        && canvas.height.is_finite()
        && canvas.width > 0.0
        && canvas.height > 0.0;
    valid.then_some(DrawCommand::Clear {
        width: canvas.width,
        height: canvas.height,
    })
}

/// Draw commands outlining `quad` over the displayed video.
///
/// The canvas is cleared first. When the viewport is degenerate, or the detector matrix or
/// corners map to a non-finite point, only the clear is emitted.
pub fn quad_overlay(
    quad: &Quad,
    geometry: &ViewportGeometry,
    line_width: f64,
) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(8);
    out.extend(clear_canvas(geometry.canvas_size()));

    let Some(transform) = DrawTransform::compute(geometry, &quad.transform_matrix) else {
        tracing::debug!(?geometry, "degenerate viewport, skipping overlay");
        return out;
    };

    let affine = transform.to_affine();
    let [tl, tr, br, bl] = quad.corners().map(|p| affine * p);
    if [tl, tr, br, bl].iter().any(|p| !p.is_finite()) {
        tracing::debug!(quad = ?quad, "non-finite overlay corner, skipping overlay");
        return out;
    }

    out.push(DrawCommand::SetStyle {
        style: OverlayStyle::for_status(quad.detection_status, line_width),
    });
    out.push(DrawCommand::MoveTo { to: tl });
    out.push(DrawCommand::LineTo { to: tr });
    out.push(DrawCommand::LineTo { to: br });
    out.push(DrawCommand::LineTo { to: bl });
    out.push(DrawCommand::ClosePath);
    out.push(DrawCommand::Stroke);
    out
}

/// Rebuild the stroked outline described by `commands`.
pub fn overlay_path(commands: &[DrawCommand]) -> BezPath {
    let mut path = BezPath::new();
    for cmd in commands {
        match cmd {
            DrawCommand::MoveTo { to } => path.move_to(*to),
            DrawCommand::LineTo { to } => path.line_to(*to),
            DrawCommand::ClosePath => path.close_path(),
            DrawCommand::Clear { .. } | DrawCommand::SetStyle { .. } | DrawCommand::Stroke => {}
        }
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/draw.rs"]
mod tests;
