use crate::feedback::stability::StabilityLevel;
use crate::feedback::status::DetectionStatus;
use crate::foundation::error::{ScanGuideError, ScanGuideResult};

/// Placeholder replaced by the side name in multi-side templates.
pub const SIDE_PLACEHOLDER: &str = "{side}";

/// Document side being scanned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanSide {
    /// Front side (or the only side).
    #[default]
    Front,
    /// Back side, after the front was captured.
    Back,
}

impl ScanSide {
    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

/// User-facing guidance wording.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuidanceMessages {
    /// Nothing detected yet.
    pub scanning: String,
    /// Document found.
    pub detection_successful: String,
    /// Camera tilted too far.
    pub adjust_angle: String,
    /// Document too small in frame.
    pub move_closer: String,
    /// Document too large, clipped, or touching the frame edge.
    pub move_farther: String,
    /// Positive detection, streak just started.
    pub searching: String,
    /// Positive detection held for a few frames.
    pub stabilizing: String,
    /// Positive detection held long enough to read.
    pub processing: String,
    /// Engine lost the document.
    pub position_document: String,
    /// Single-side scan produced a result.
    pub reading_data: String,
    /// Front side captured in a multi-side scan.
    pub flip_to_back: String,
    /// Scan ran past the host's deadline.
    pub timeout: String,
    /// Multi-side positive detection; `{side}` is replaced.
    pub side_hold_steady: String,
    /// Multi-side lost document; `{side}` is replaced.
    pub side_position: String,
    /// Multi-side positive detection held long enough to read; `{side}` is replaced.
    pub side_processing: String,
}

impl Default for GuidanceMessages {
    fn default() -> Self {
        Self {
            scanning: "Scanning...".to_string(),
            detection_successful: "Detection successful".to_string(),
            adjust_angle: "Adjust the angle".to_string(),
            move_closer: "Move document closer".to_string(),
            move_farther: "Move document farther".to_string(),
            searching: "Scanning document...".to_string(),
            stabilizing: "Document detected - hold steady".to_string(),
            processing: "Perfect! Processing document...".to_string(),
            position_document: "Position document in frame".to_string(),
            reading_data: "Reading data...".to_string(),
            flip_to_back: "Now scan the back side".to_string(),
            timeout: "Scan taking too long - processing now...".to_string(),
            side_hold_steady: "Scanning {side} side - hold steady".to_string(),
            side_position: "Position {side} side in frame".to_string(),
            side_processing: "Perfect! Processing {side} side...".to_string(),
        }
    }
}

impl GuidanceMessages {
    /// Guidance for a classified frame.
    pub fn for_status(&self, status: DetectionStatus) -> &str {
        match status {
            DetectionStatus::Failed => &self.scanning,
            DetectionStatus::Success | DetectionStatus::FallbackSuccess => {
                &self.detection_successful
            }
            DetectionStatus::CameraAngleTooSteep => &self.adjust_angle,
            DetectionStatus::CameraTooFar => &self.move_closer,
            DetectionStatus::CameraTooClose
            | DetectionStatus::DocumentTooCloseToEdge
            | DetectionStatus::DocumentPartiallyVisible => &self.move_farther,
        }
    }

    /// Guidance for a positive-detection streak.
    pub fn for_stability(&self, level: StabilityLevel) -> &str {
        match level {
            StabilityLevel::Searching => &self.searching,
            StabilityLevel::Stabilizing => &self.stabilizing,
            StabilityLevel::Processing => &self.processing,
        }
    }

    /// Multi-side "hold steady" text for `side`.
    pub fn hold_steady_for(&self, side: ScanSide) -> String {
        self.side_hold_steady.replace(SIDE_PLACEHOLDER, side.name())
    }

    /// Multi-side streak guidance: "hold steady" until the streak reaches processing.
    pub fn side_stability_for(&self, level: StabilityLevel, side: ScanSide) -> String {
        let template = match level {
            StabilityLevel::Searching | StabilityLevel::Stabilizing => &self.side_hold_steady,
            StabilityLevel::Processing => &self.side_processing,
        };
        template.replace(SIDE_PLACEHOLDER, side.name())
    }

    /// Multi-side "position" text for `side`.
    pub fn position_for(&self, side: ScanSide) -> String {
        self.side_position.replace(SIDE_PLACEHOLDER, side.name())
    }

    /// Reject empty messages.
    pub fn validate(&self) -> ScanGuideResult<()> {
        let fields = [
            ("scanning", &self.scanning),
            ("detection_successful", &self.detection_successful),
            ("adjust_angle", &self.adjust_angle),
            ("move_closer", &self.move_closer),
            ("move_farther", &self.move_farther),
            ("searching", &self.searching),
            ("stabilizing", &self.stabilizing),
            ("processing", &self.processing),
            ("position_document", &self.position_document),
            ("reading_data", &self.reading_data),
            ("flip_to_back", &self.flip_to_back),
            ("timeout", &self.timeout),
            ("side_hold_steady", &self.side_hold_steady),
            ("side_position", &self.side_position),
            ("side_processing", &self.side_processing),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ScanGuideError::validation(format!(
                    "message '{name}' must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feedback/messages.rs"]
mod tests;
